//! Block cipher backend seam.
//!
//! The format needs two raw capabilities: AES-256-CBC with PKCS#7 padding
//! for versions 1 through 3, and raw ECB block encryption to build the
//! version-0 counter keystream. The cipher engine depends only on the
//! [`BlockCipherBackend`] trait; a RustCrypto implementation is compiled in
//! behind the default `rustcrypto` feature.

use crate::error::CryptoError;
use crate::types::{AES_BLOCK_LENGTH, AES_KEY_LENGTH};

/// Raw AES-256 operations the cipher engine requires.
pub trait BlockCipherBackend {
    /// Encrypt `data` in place as independent ECB blocks.
    ///
    /// `data.len()` must be a multiple of the block length.
    fn ecb_encrypt_blocks(&self, key: &[u8; AES_KEY_LENGTH], data: &mut [u8]);

    /// CBC-encrypt `plaintext`, applying PKCS#7 padding.
    fn cbc_encrypt(
        &self,
        key: &[u8; AES_KEY_LENGTH],
        iv: &[u8; AES_BLOCK_LENGTH],
        plaintext: &[u8],
    ) -> Vec<u8>;

    /// CBC-decrypt `ciphertext` and strip PKCS#7 padding.
    ///
    /// `ciphertext` must be a non-empty multiple of the block length; the
    /// caller validates that before dispatching here.
    fn cbc_decrypt(
        &self,
        key: &[u8; AES_KEY_LENGTH],
        iv: &[u8; AES_BLOCK_LENGTH],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError>;
}

/// The backend compiled into this build.
///
/// Fails with [`CryptoError::UnavailableCryptoBackend`] when the crate was
/// built with no backend feature enabled.
pub fn default_backend() -> Result<Box<dyn BlockCipherBackend>, CryptoError> {
    #[cfg(feature = "rustcrypto")]
    {
        Ok(Box::new(RustCryptoBackend))
    }
    #[cfg(not(feature = "rustcrypto"))]
    {
        Err(CryptoError::UnavailableCryptoBackend)
    }
}

#[cfg(feature = "rustcrypto")]
pub use rustcrypto::RustCryptoBackend;

#[cfg(feature = "rustcrypto")]
mod rustcrypto {
    use aes::cipher::block_padding::Pkcs7;
    use aes::cipher::generic_array::GenericArray;
    use aes::cipher::{BlockDecryptMut, BlockEncrypt, BlockEncryptMut, KeyInit, KeyIvInit};
    use aes::Aes256;

    use super::BlockCipherBackend;
    use crate::error::CryptoError;
    use crate::types::{AES_BLOCK_LENGTH, AES_KEY_LENGTH};

    type Aes256CbcEnc = cbc::Encryptor<Aes256>;
    type Aes256CbcDec = cbc::Decryptor<Aes256>;

    /// Backend over the pure-Rust `aes` and `cbc` crates.
    pub struct RustCryptoBackend;

    impl BlockCipherBackend for RustCryptoBackend {
        fn ecb_encrypt_blocks(&self, key: &[u8; AES_KEY_LENGTH], data: &mut [u8]) {
            debug_assert_eq!(data.len() % AES_BLOCK_LENGTH, 0);
            let cipher = Aes256::new(key.into());
            for block in data.chunks_exact_mut(AES_BLOCK_LENGTH) {
                cipher.encrypt_block(GenericArray::from_mut_slice(block));
            }
        }

        fn cbc_encrypt(
            &self,
            key: &[u8; AES_KEY_LENGTH],
            iv: &[u8; AES_BLOCK_LENGTH],
            plaintext: &[u8],
        ) -> Vec<u8> {
            Aes256CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
        }

        fn cbc_decrypt(
            &self,
            key: &[u8; AES_KEY_LENGTH],
            iv: &[u8; AES_BLOCK_LENGTH],
            ciphertext: &[u8],
        ) -> Result<Vec<u8>, CryptoError> {
            Aes256CbcDec::new(key.into(), iv.into())
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(|_| CryptoError::InvalidPadding)
        }
    }
}
