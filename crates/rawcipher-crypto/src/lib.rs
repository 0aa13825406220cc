#![forbid(unsafe_code)]
#![doc = "Raw symmetric cipher contexts: keyed, IV'd, padding-free block transforms."]

// Core traits
pub mod provider;

// Block cipher backends
pub mod backend;

// Modes of operation
pub mod modes;

// Name lookup and contexts
pub mod context;
pub mod resolver;

pub use context::{create_cipher, create_decipher, CipherContext};
pub use rawcipher_types::{BlockAlgId, CipherError, Direction, ModeId};
pub use resolver::{resolve, supported_ciphers, CipherDescriptor};
