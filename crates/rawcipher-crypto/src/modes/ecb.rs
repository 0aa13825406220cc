//! ECB (Electronic Codebook) mode of operation.
//!
//! **Security warning**: ECB mode does not provide semantic security and
//! should generally not be used. It is provided for completeness and
//! specific low-level use cases only.

use rawcipher_types::{CipherError, Direction};

use crate::provider::{BlockCipher, ModeState};

/// ECB state: just the keyed cipher and a direction. Calls are independent.
pub struct Ecb {
    cipher: Box<dyn BlockCipher>,
    direction: Direction,
}

impl Ecb {
    /// ECB takes no IV; `iv` must be empty.
    pub fn new(
        cipher: Box<dyn BlockCipher>,
        iv: &[u8],
        direction: Direction,
    ) -> Result<Self, CipherError> {
        if !iv.is_empty() {
            return Err(CipherError::InvalidIvLength {
                expected: 0,
                got: iv.len(),
            });
        }
        Ok(Ecb { cipher, direction })
    }
}

impl ModeState for Ecb {
    fn update(&mut self, buf: &mut [u8]) -> Result<(), CipherError> {
        let bs = self.cipher.block_size();
        if buf.len() % bs != 0 {
            return Err(CipherError::UnalignedInput {
                len: buf.len(),
                block_size: bs,
            });
        }
        for block in buf.chunks_exact_mut(bs) {
            match self.direction {
                Direction::Encrypt => self.cipher.encrypt_block(block)?,
                Direction::Decrypt => self.cipher.decrypt_block(block)?,
            }
        }
        Ok(())
    }
}
