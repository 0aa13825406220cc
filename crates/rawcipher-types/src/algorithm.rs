use std::fmt;

/// Underlying block cipher identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockAlgId {
    Aes128,
    Aes192,
    Aes256,
    Sm4,
    /// Three-key triple DES (EDE).
    TdesEde3,
}

impl BlockAlgId {
    /// Key size in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            BlockAlgId::Aes128 | BlockAlgId::Sm4 => 16,
            BlockAlgId::Aes192 | BlockAlgId::TdesEde3 => 24,
            BlockAlgId::Aes256 => 32,
        }
    }

    /// Block size in bytes.
    pub const fn block_len(self) -> usize {
        match self {
            BlockAlgId::TdesEde3 => 8,
            _ => 16,
        }
    }
}

/// Modes of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeId {
    Ecb,
    Cbc,
    /// Big-endian full-block counter.
    Ctr,
    /// Full-block feedback (CFB-128 for 16-byte ciphers).
    Cfb,
    Ofb,
}

impl ModeId {
    /// Whether the mode turns the block cipher into a byte-granular stream.
    ///
    /// Stream-like modes report a block size of 1.
    pub const fn is_stream(self) -> bool {
        matches!(self, ModeId::Ctr | ModeId::Cfb | ModeId::Ofb)
    }

    /// Whether the mode takes an IV.
    pub const fn needs_iv(self) -> bool {
        !matches!(self, ModeId::Ecb)
    }
}

/// Cipher direction, fixed when a context is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    pub fn is_encrypt(self) -> bool {
        self == Direction::Encrypt
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}
