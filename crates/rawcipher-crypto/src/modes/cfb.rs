//! CFB (Cipher Feedback) mode of operation.
//!
//! Full-block feedback (CFB-128 for 16-byte ciphers, NIST SP 800-38A §6.3),
//! byte-granular across calls.

use rawcipher_types::{CipherError, Direction};
use zeroize::Zeroize;

use super::{load_iv, MAX_BLOCK_SIZE};
use crate::provider::{BlockCipher, ModeState};

pub struct Cfb {
    cipher: Box<dyn BlockCipher>,
    direction: Direction,
    /// Holds E(feedback) while a block is in progress; each consumed byte is
    /// replaced by the ciphertext byte so the next block sees the feedback.
    register: [u8; MAX_BLOCK_SIZE],
    pos: usize,
}

impl Drop for Cfb {
    fn drop(&mut self) {
        self.register.zeroize();
    }
}

impl Cfb {
    pub fn new(
        cipher: Box<dyn BlockCipher>,
        iv: &[u8],
        direction: Direction,
    ) -> Result<Self, CipherError> {
        let bs = cipher.block_size();
        let register = load_iv(iv, bs)?;
        Ok(Cfb {
            cipher,
            direction,
            register,
            pos: bs,
        })
    }
}

impl ModeState for Cfb {
    fn update(&mut self, buf: &mut [u8]) -> Result<(), CipherError> {
        let bs = self.cipher.block_size();
        for b in buf.iter_mut() {
            if self.pos == bs {
                self.cipher.encrypt_block(&mut self.register[..bs])?;
                self.pos = 0;
            }
            let ks = self.register[self.pos];
            let ct = match self.direction {
                Direction::Encrypt => {
                    *b ^= ks;
                    *b
                }
                Direction::Decrypt => {
                    let c = *b;
                    *b ^= ks;
                    c
                }
            };
            self.register[self.pos] = ct;
            self.pos += 1;
        }
        Ok(())
    }
}
