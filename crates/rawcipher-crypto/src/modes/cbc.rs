//! CBC (Cipher Block Chaining) mode of operation, without padding.

use rawcipher_types::{CipherError, Direction};
use zeroize::Zeroize;

use super::{load_iv, xor_in_place, MAX_BLOCK_SIZE};
use crate::provider::{BlockCipher, ModeState};

/// CBC state. `chain` holds the previous ciphertext block (the IV before
/// the first call).
pub struct Cbc {
    cipher: Box<dyn BlockCipher>,
    direction: Direction,
    chain: [u8; MAX_BLOCK_SIZE],
}

impl Drop for Cbc {
    fn drop(&mut self) {
        self.chain.zeroize();
    }
}

impl Cbc {
    pub fn new(
        cipher: Box<dyn BlockCipher>,
        iv: &[u8],
        direction: Direction,
    ) -> Result<Self, CipherError> {
        let chain = load_iv(iv, cipher.block_size())?;
        Ok(Cbc {
            cipher,
            direction,
            chain,
        })
    }

    fn encrypt(&mut self, buf: &mut [u8], bs: usize) -> Result<(), CipherError> {
        for block in buf.chunks_exact_mut(bs) {
            xor_in_place(block, &self.chain[..bs]);
            self.cipher.encrypt_block(block)?;
            self.chain[..bs].copy_from_slice(block);
        }
        Ok(())
    }

    fn decrypt(&mut self, buf: &mut [u8], bs: usize) -> Result<(), CipherError> {
        let mut ct_copy = [0u8; MAX_BLOCK_SIZE];
        for block in buf.chunks_exact_mut(bs) {
            ct_copy[..bs].copy_from_slice(block);
            self.cipher.decrypt_block(block)?;
            xor_in_place(block, &self.chain[..bs]);
            self.chain[..bs].copy_from_slice(&ct_copy[..bs]);
        }
        ct_copy.zeroize();
        Ok(())
    }
}

impl ModeState for Cbc {
    fn update(&mut self, buf: &mut [u8]) -> Result<(), CipherError> {
        let bs = self.cipher.block_size();
        if buf.len() % bs != 0 {
            return Err(CipherError::UnalignedInput {
                len: buf.len(),
                block_size: bs,
            });
        }
        match self.direction {
            Direction::Encrypt => self.encrypt(buf, bs),
            Direction::Decrypt => self.decrypt(buf, bs),
        }
    }
}
