//! Cipher name lookup.
//!
//! Names follow the OpenSSL convention (`aes-256-cbc`, `sm4-ctr`,
//! `des-ede3-cbc`) and match ASCII case-insensitively.

use rawcipher_types::{BlockAlgId, CipherError, ModeId};

/// Static description of a resolvable cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherDescriptor {
    pub name: &'static str,
    pub cipher: BlockAlgId,
    pub mode: ModeId,
    /// Required key length in bytes.
    pub key_len: usize,
    /// Required IV length in bytes (0 for ECB).
    pub iv_len: usize,
    /// Transform granularity in bytes; 1 for CTR, CFB and OFB.
    pub block_size: usize,
}

impl CipherDescriptor {
    const fn new(name: &'static str, cipher: BlockAlgId, mode: ModeId) -> Self {
        CipherDescriptor {
            name,
            cipher,
            mode,
            key_len: cipher.key_len(),
            iv_len: if mode.needs_iv() { cipher.block_len() } else { 0 },
            block_size: if mode.is_stream() { 1 } else { cipher.block_len() },
        }
    }
}

static CIPHERS: [CipherDescriptor; 22] = [
    CipherDescriptor::new("aes-128-ecb", BlockAlgId::Aes128, ModeId::Ecb),
    CipherDescriptor::new("aes-192-ecb", BlockAlgId::Aes192, ModeId::Ecb),
    CipherDescriptor::new("aes-256-ecb", BlockAlgId::Aes256, ModeId::Ecb),
    CipherDescriptor::new("aes-128-cbc", BlockAlgId::Aes128, ModeId::Cbc),
    CipherDescriptor::new("aes-192-cbc", BlockAlgId::Aes192, ModeId::Cbc),
    CipherDescriptor::new("aes-256-cbc", BlockAlgId::Aes256, ModeId::Cbc),
    CipherDescriptor::new("aes-128-ctr", BlockAlgId::Aes128, ModeId::Ctr),
    CipherDescriptor::new("aes-192-ctr", BlockAlgId::Aes192, ModeId::Ctr),
    CipherDescriptor::new("aes-256-ctr", BlockAlgId::Aes256, ModeId::Ctr),
    CipherDescriptor::new("aes-128-cfb", BlockAlgId::Aes128, ModeId::Cfb),
    CipherDescriptor::new("aes-192-cfb", BlockAlgId::Aes192, ModeId::Cfb),
    CipherDescriptor::new("aes-256-cfb", BlockAlgId::Aes256, ModeId::Cfb),
    CipherDescriptor::new("aes-128-ofb", BlockAlgId::Aes128, ModeId::Ofb),
    CipherDescriptor::new("aes-192-ofb", BlockAlgId::Aes192, ModeId::Ofb),
    CipherDescriptor::new("aes-256-ofb", BlockAlgId::Aes256, ModeId::Ofb),
    CipherDescriptor::new("sm4-ecb", BlockAlgId::Sm4, ModeId::Ecb),
    CipherDescriptor::new("sm4-cbc", BlockAlgId::Sm4, ModeId::Cbc),
    CipherDescriptor::new("sm4-ctr", BlockAlgId::Sm4, ModeId::Ctr),
    CipherDescriptor::new("sm4-cfb", BlockAlgId::Sm4, ModeId::Cfb),
    CipherDescriptor::new("sm4-ofb", BlockAlgId::Sm4, ModeId::Ofb),
    CipherDescriptor::new("des-ede3-ecb", BlockAlgId::TdesEde3, ModeId::Ecb),
    CipherDescriptor::new("des-ede3-cbc", BlockAlgId::TdesEde3, ModeId::Cbc),
];

// (alias, canonical name)
static ALIASES: [(&str, &str); 6] = [
    ("aes128", "aes-128-cbc"),
    ("aes192", "aes-192-cbc"),
    ("aes256", "aes-256-cbc"),
    ("sm4", "sm4-cbc"),
    ("des-ede3", "des-ede3-ecb"),
    ("des3", "des-ede3-cbc"),
];

/// Look up a cipher by name.
///
/// Fails with [`CipherError::UnknownAlgorithm`] carrying the name as given
/// when nothing matches or the backend was not compiled in.
pub fn resolve(name: &str) -> Result<&'static CipherDescriptor, CipherError> {
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map_or(name, |(_, target)| *target);

    supported_ciphers()
        .find(|d| d.name.eq_ignore_ascii_case(canonical))
        .ok_or_else(|| CipherError::UnknownAlgorithm(name.to_string()))
}

/// All ciphers whose backend is available, in table order.
pub fn supported_ciphers() -> impl Iterator<Item = &'static CipherDescriptor> {
    CIPHERS
        .iter()
        .filter(|d| crate::backend::is_available(d.cipher))
}
