//! Raw cipher contexts.
//!
//! A [`CipherContext`] is built once from an algorithm name, key, IV and
//! direction, then applied to any number of equal-length buffer pairs. There
//! is no padding and no buffering: every input must be a multiple of the
//! algorithm's block size, and chaining state carries across calls.
//!
//! ```ignore
//! let mut enc = rawcipher_crypto::create_cipher("aes-128-cbc", &key, &iv)?;
//! let mut ct = [0u8; 32];
//! enc.transform(&mut ct, &pt)?;
//! ```

use std::fmt;

use log::{debug, trace};
use rawcipher_types::{CipherError, Direction};

use crate::backend;
use crate::modes;
use crate::provider::ModeState;
use crate::resolver::{resolve, CipherDescriptor};

/// A keyed, IV'd cipher bound to one direction.
///
/// The backend state is owned exclusively and wiped when the context drops.
/// `transform` takes `&mut self`: sharing one context between threads needs
/// external locking.
pub struct CipherContext {
    descriptor: &'static CipherDescriptor,
    direction: Direction,
    state: Box<dyn ModeState>,
}

impl CipherContext {
    /// Resolve `name`, validate the key and IV lengths, and initialize the
    /// backend state.
    ///
    /// Checks run in order and stop at the first failure: unknown name, key
    /// length, IV length. No backend state is created on failure.
    pub fn new(
        name: &str,
        key: &[u8],
        iv: &[u8],
        direction: Direction,
    ) -> Result<Self, CipherError> {
        let descriptor = resolve(name)?;
        if key.len() != descriptor.key_len {
            return Err(CipherError::InvalidKeyLength {
                expected: descriptor.key_len,
                got: key.len(),
            });
        }
        if iv.len() != descriptor.iv_len {
            return Err(CipherError::InvalidIvLength {
                expected: descriptor.iv_len,
                got: iv.len(),
            });
        }

        // Inputs are validated; anything the backend still rejects is an
        // initialization failure, not a caller error.
        let state = backend::new_block_cipher(descriptor.cipher, key)
            .and_then(|cipher| modes::new_mode(descriptor.mode, cipher, iv, direction))
            .map_err(|e| {
                if matches!(e, CipherError::BackendInit(_)) {
                    e
                } else {
                    CipherError::BackendInit(e.to_string())
                }
            })?;

        debug!("{} context ready for {}", direction, descriptor.name);
        Ok(CipherContext {
            descriptor,
            direction,
            state,
        })
    }

    /// Encrypting context.
    pub fn encryptor(name: &str, key: &[u8], iv: &[u8]) -> Result<Self, CipherError> {
        Self::new(name, key, iv, Direction::Encrypt)
    }

    /// Decrypting context.
    pub fn decryptor(name: &str, key: &[u8], iv: &[u8]) -> Result<Self, CipherError> {
        Self::new(name, key, iv, Direction::Decrypt)
    }

    /// Transform `input` into `output`.
    ///
    /// `input.len()` must be a multiple of [`block_size`](Self::block_size)
    /// (checked first) and `output.len()` must equal it. On error nothing is
    /// written and the chaining state is unchanged.
    pub fn transform(&mut self, output: &mut [u8], input: &[u8]) -> Result<(), CipherError> {
        self.check_aligned(input.len())?;
        if output.len() != input.len() {
            return Err(CipherError::LengthMismatch {
                output: output.len(),
                input: input.len(),
            });
        }
        trace!(
            "{} {} bytes with {}",
            self.direction,
            input.len(),
            self.descriptor.name
        );
        output.copy_from_slice(input);
        self.state.update(output)
    }

    /// Transform `buf` in place. Same alignment rule as [`transform`](Self::transform).
    pub fn transform_in_place(&mut self, buf: &mut [u8]) -> Result<(), CipherError> {
        self.check_aligned(buf.len())?;
        trace!(
            "{} {} bytes in place with {}",
            self.direction,
            buf.len(),
            self.descriptor.name
        );
        self.state.update(buf)
    }

    fn check_aligned(&self, len: usize) -> Result<(), CipherError> {
        let block_size = self.descriptor.block_size;
        if len % block_size != 0 {
            return Err(CipherError::UnalignedInput { len, block_size });
        }
        Ok(())
    }

    pub fn algorithm(&self) -> &'static CipherDescriptor {
        self.descriptor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn block_size(&self) -> usize {
        self.descriptor.block_size
    }

    pub fn key_len(&self) -> usize {
        self.descriptor.key_len
    }

    pub fn iv_len(&self) -> usize {
        self.descriptor.iv_len
    }
}

impl fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherContext")
            .field("algorithm", &self.descriptor.name)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

impl Drop for CipherContext {
    fn drop(&mut self) {
        trace!(
            "releasing {} context for {}",
            self.direction,
            self.descriptor.name
        );
    }
}

/// Create an encrypting context (`createCipher`).
pub fn create_cipher(name: &str, key: &[u8], iv: &[u8]) -> Result<CipherContext, CipherError> {
    CipherContext::encryptor(name, key, iv)
}

/// Create a decrypting context (`createDecipher`).
pub fn create_decipher(name: &str, key: &[u8], iv: &[u8]) -> Result<CipherContext, CipherError> {
    CipherContext::decryptor(name, key, iv)
}
