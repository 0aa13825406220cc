//! Raw symmetric encryption/decryption command.
//!
//! The whole input file goes through one context in a single transform, so
//! its length must be a multiple of the cipher's block size. No padding,
//! no header: output length equals input length.

use std::fs;

use log::info;
use rawcipher_crypto::{CipherContext, CipherError, Direction};

pub fn run(
    cipher: &str,
    decrypt: bool,
    input: &str,
    output: &str,
    key_hex: &str,
    iv_hex: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let direction = if decrypt {
        Direction::Decrypt
    } else {
        Direction::Encrypt
    };
    info!("{direction} {input} -> {output} with {cipher}");

    let key = decode_hex("key", key_hex)?;
    let iv = decode_hex("iv", iv_hex)?;
    let mut ctx = CipherContext::new(cipher, &key, &iv, direction)?;

    let mut data = fs::read(input)?;
    ctx.transform_in_place(&mut data)?;

    fs::write(output, &data)?;
    eprintln!("Wrote {} bytes to {output}", data.len());
    Ok(())
}

fn decode_hex(what: &str, s: &str) -> Result<Vec<u8>, CipherError> {
    hex::decode(s.trim())
        .map_err(|e| CipherError::InvalidArguments(format!("{what} is not valid hex: {e}")))
}
