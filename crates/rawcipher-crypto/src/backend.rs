//! Block cipher primitives backed by the RustCrypto implementations.
//!
//! Key schedules are wiped on drop through the backends' `zeroize` features.

use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, BlockEncrypt, BlockSizeUser, KeyInit};
use rawcipher_types::{BlockAlgId, CipherError};

use crate::provider::BlockCipher;

/// Adapter from a RustCrypto block cipher to [`BlockCipher`].
struct Primitive<C>(C);

impl<C> Primitive<C> {
    fn check_len(len: usize, block_size: usize) -> Result<(), CipherError> {
        if len != block_size {
            return Err(CipherError::InvalidArguments(format!(
                "block must be {block_size} bytes, got {len}"
            )));
        }
        Ok(())
    }
}

impl<C> BlockCipher for Primitive<C>
where
    C: BlockEncrypt + BlockDecrypt + Send + Sync,
{
    fn block_size(&self) -> usize {
        <C as BlockSizeUser>::block_size()
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<(), CipherError> {
        Self::check_len(block.len(), self.block_size())?;
        BlockEncrypt::encrypt_block(&self.0, GenericArray::from_mut_slice(block));
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<(), CipherError> {
        Self::check_len(block.len(), self.block_size())?;
        BlockDecrypt::decrypt_block(&self.0, GenericArray::from_mut_slice(block));
        Ok(())
    }
}

fn keyed<C>(key: &[u8]) -> Result<Box<dyn BlockCipher>, CipherError>
where
    C: KeyInit + BlockEncrypt + BlockDecrypt + Send + Sync + 'static,
{
    let inner = C::new_from_slice(key).map_err(|_| {
        CipherError::BackendInit(format!("key schedule rejected a {}-byte key", key.len()))
    })?;
    Ok(Box::new(Primitive(inner)))
}

/// Whether the backend for `alg` was compiled in.
pub fn is_available(alg: BlockAlgId) -> bool {
    match alg {
        BlockAlgId::Aes128 | BlockAlgId::Aes192 | BlockAlgId::Aes256 => cfg!(feature = "aes"),
        BlockAlgId::Sm4 => cfg!(feature = "sm4"),
        BlockAlgId::TdesEde3 => cfg!(feature = "tdes"),
    }
}

/// Run the key schedule for `alg` and return the keyed primitive.
#[allow(unreachable_patterns)]
pub fn new_block_cipher(alg: BlockAlgId, key: &[u8]) -> Result<Box<dyn BlockCipher>, CipherError> {
    match alg {
        #[cfg(feature = "aes")]
        BlockAlgId::Aes128 => keyed::<aes::Aes128>(key),
        #[cfg(feature = "aes")]
        BlockAlgId::Aes192 => keyed::<aes::Aes192>(key),
        #[cfg(feature = "aes")]
        BlockAlgId::Aes256 => keyed::<aes::Aes256>(key),
        #[cfg(feature = "sm4")]
        BlockAlgId::Sm4 => keyed::<sm4::Sm4>(key),
        #[cfg(feature = "tdes")]
        BlockAlgId::TdesEde3 => keyed::<des::TdesEde3>(key),
        _ => Err(CipherError::BackendInit(format!(
            "{alg:?} backend not compiled in"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::test_util::{hex, hex_to_bytes};

    // FIPS 197 C.1
    #[test]
    fn test_aes128_block() {
        let key = hex_to_bytes("000102030405060708090a0b0c0d0e0f");
        let cipher = new_block_cipher(BlockAlgId::Aes128, &key).unwrap();
        assert_eq!(cipher.block_size(), 16);

        let mut block = hex_to_bytes("00112233445566778899aabbccddeeff");
        cipher.encrypt_block(&mut block).unwrap();
        assert_eq!(hex(&block), "69c4e0d86a7b0430d8cdb78070b4c55a");
        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(hex(&block), "00112233445566778899aabbccddeeff");
    }

    // GB/T 32907-2016 example 1
    #[test]
    fn test_sm4_block() {
        let key = hex_to_bytes("0123456789abcdeffedcba9876543210");
        let cipher = new_block_cipher(BlockAlgId::Sm4, &key).unwrap();

        let mut block = key.clone();
        cipher.encrypt_block(&mut block).unwrap();
        assert_eq!(hex(&block), "681edf34d206965e86b3e94f536e4246");
        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(block, key);
    }

    #[test]
    fn test_tdes_block_roundtrip() {
        let key: Vec<u8> = (1..=24).collect();
        let cipher = new_block_cipher(BlockAlgId::TdesEde3, &key).unwrap();
        assert_eq!(cipher.block_size(), 8);

        let mut block = *b"8 bytes!";
        cipher.encrypt_block(&mut block).unwrap();
        assert_ne!(&block, b"8 bytes!");
        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(&block, b"8 bytes!");
    }

    #[test]
    fn test_wrong_block_length() {
        let cipher = new_block_cipher(BlockAlgId::Aes256, &[0u8; 32]).unwrap();
        let mut short = [0u8; 15];
        assert!(matches!(
            cipher.encrypt_block(&mut short),
            Err(CipherError::InvalidArguments(_))
        ));
        let mut long = [0u8; 17];
        assert!(cipher.decrypt_block(&mut long).is_err());
    }

    #[test]
    fn test_rejected_key_is_backend_failure() {
        assert!(matches!(
            new_block_cipher(BlockAlgId::Aes128, &[0u8; 15]),
            Err(CipherError::BackendInit(_))
        ));
    }
}
