//! Stateful modes of operation for raw transforms.
//!
//! Every mode keeps its chaining state (CBC chain value, CTR counter, CFB/OFB
//! feedback register) across calls, so transforming `A` then `B` gives the
//! same bytes as transforming `A || B` once. No mode pads or buffers input.
//! Each operates on top of a keyed [`BlockCipher`](crate::provider::BlockCipher).

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;

use rawcipher_types::{CipherError, Direction, ModeId};

use crate::provider::{BlockCipher, ModeState};

/// Largest block size any backend reports.
pub const MAX_BLOCK_SIZE: usize = 16;

fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}

/// Copy `iv` into a fixed register, checking it is exactly one block long.
fn load_iv(iv: &[u8], block_size: usize) -> Result<[u8; MAX_BLOCK_SIZE], CipherError> {
    if block_size == 0 || block_size > MAX_BLOCK_SIZE {
        return Err(CipherError::InvalidArguments(format!(
            "unsupported block size {block_size}"
        )));
    }
    if iv.len() != block_size {
        return Err(CipherError::InvalidIvLength {
            expected: block_size,
            got: iv.len(),
        });
    }
    let mut reg = [0u8; MAX_BLOCK_SIZE];
    reg[..block_size].copy_from_slice(iv);
    Ok(reg)
}

/// Bind `cipher` to a mode, IV and direction.
pub fn new_mode(
    mode: ModeId,
    cipher: Box<dyn BlockCipher>,
    iv: &[u8],
    direction: Direction,
) -> Result<Box<dyn ModeState>, CipherError> {
    Ok(match mode {
        ModeId::Ecb => Box::new(ecb::Ecb::new(cipher, iv, direction)?),
        ModeId::Cbc => Box::new(cbc::Cbc::new(cipher, iv, direction)?),
        ModeId::Ctr => Box::new(ctr::Ctr::new(cipher, iv)?),
        ModeId::Cfb => Box::new(cfb::Cfb::new(cipher, iv, direction)?),
        ModeId::Ofb => Box::new(ofb::Ofb::new(cipher, iv)?),
    })
}
