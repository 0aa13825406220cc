//! CTR (Counter) mode of operation.
//!
//! The whole IV is a big-endian counter incremented once per block. Keystream
//! position survives across calls, so inputs need not be block-aligned.

use rawcipher_types::CipherError;
use zeroize::Zeroize;

use super::{load_iv, MAX_BLOCK_SIZE};
use crate::provider::{BlockCipher, ModeState};

/// Increment a big-endian counter by 1.
fn increment_counter(counter: &mut [u8]) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

/// CTR state. Encryption and decryption are the same operation.
pub struct Ctr {
    cipher: Box<dyn BlockCipher>,
    counter: [u8; MAX_BLOCK_SIZE],
    keystream: [u8; MAX_BLOCK_SIZE],
    /// Next unused keystream byte; `block_size` means exhausted.
    pos: usize,
}

impl Drop for Ctr {
    fn drop(&mut self) {
        self.counter.zeroize();
        self.keystream.zeroize();
    }
}

impl Ctr {
    pub fn new(cipher: Box<dyn BlockCipher>, iv: &[u8]) -> Result<Self, CipherError> {
        let bs = cipher.block_size();
        let counter = load_iv(iv, bs)?;
        Ok(Ctr {
            cipher,
            counter,
            keystream: [0u8; MAX_BLOCK_SIZE],
            pos: bs,
        })
    }

    fn refill(&mut self, bs: usize) -> Result<(), CipherError> {
        self.keystream[..bs].copy_from_slice(&self.counter[..bs]);
        self.cipher.encrypt_block(&mut self.keystream[..bs])?;
        increment_counter(&mut self.counter[..bs]);
        self.pos = 0;
        Ok(())
    }
}

impl ModeState for Ctr {
    fn update(&mut self, buf: &mut [u8]) -> Result<(), CipherError> {
        let bs = self.cipher.block_size();
        for b in buf.iter_mut() {
            if self.pos == bs {
                self.refill(bs)?;
            }
            *b ^= self.keystream[self.pos];
            self.pos += 1;
        }
        Ok(())
    }
}
