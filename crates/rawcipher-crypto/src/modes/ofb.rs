//! OFB (Output Feedback) mode of operation (symmetric operation).

use rawcipher_types::CipherError;
use zeroize::Zeroize;

use super::{load_iv, MAX_BLOCK_SIZE};
use crate::provider::{BlockCipher, ModeState};

pub struct Ofb {
    cipher: Box<dyn BlockCipher>,
    /// Output register: IV, then E(register) after each block.
    register: [u8; MAX_BLOCK_SIZE],
    pos: usize,
}

impl Drop for Ofb {
    fn drop(&mut self) {
        self.register.zeroize();
    }
}

impl Ofb {
    pub fn new(cipher: Box<dyn BlockCipher>, iv: &[u8]) -> Result<Self, CipherError> {
        let bs = cipher.block_size();
        let register = load_iv(iv, bs)?;
        Ok(Ofb {
            cipher,
            register,
            pos: bs,
        })
    }
}

impl ModeState for Ofb {
    fn update(&mut self, buf: &mut [u8]) -> Result<(), CipherError> {
        let bs = self.cipher.block_size();
        for b in buf.iter_mut() {
            if self.pos == bs {
                self.cipher.encrypt_block(&mut self.register[..bs])?;
                self.pos = 0;
            }
            *b ^= self.register[self.pos];
            self.pos += 1;
        }
        Ok(())
    }
}
