//! Trait-based provider mechanism for raw cipher backends.
//!
//! A [`BlockCipher`] is a keyed single-block primitive; a [`ModeState`] is the
//! mutable chaining state a mode of operation keeps on top of one. Contexts
//! only ever talk to these traits.

use rawcipher_types::CipherError;

/// A keyed block cipher (e.g., AES, SM4, 3DES).
pub trait BlockCipher: Send + Sync {
    /// Block size in bytes.
    fn block_size(&self) -> usize;

    /// Encrypt a single block in-place.
    fn encrypt_block(&self, block: &mut [u8]) -> Result<(), CipherError>;

    /// Decrypt a single block in-place.
    fn decrypt_block(&self, block: &mut [u8]) -> Result<(), CipherError>;
}

/// Mutable state of a mode of operation bound to one key, IV and direction.
pub trait ModeState: Send {
    /// Transform `buf` in place, advancing the chaining state.
    ///
    /// Callers validate alignment against the mode's reported block size;
    /// block modes still reject unaligned buffers.
    fn update(&mut self, buf: &mut [u8]) -> Result<(), CipherError>;
}
