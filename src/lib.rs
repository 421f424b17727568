//! Primitives for the RNCryptor data format, versions 0 through 3:
//! schema resolution, PBKDF2 key stretching with the legacy multibyte
//! password truncation, AES-256 in CBC and the historical little-endian
//! counter mode, and versioned HMAC tags.
//!
//! Message framing (salt and IV generation, header assembly and parsing,
//! accept/reject policy) belongs to the caller; this crate only transforms
//! the byte buffers it is handed.

pub mod backend;
pub mod cipher;
pub mod error;
pub mod kdf;
pub mod mac;
pub mod schema;
pub mod types;

pub use backend::{default_backend, BlockCipherBackend};
#[cfg(feature = "rustcrypto")]
pub use backend::RustCryptoBackend;
pub use cipher::{aes_ctr_little_endian_crypt, decrypt, encrypt};
pub use error::CryptoError;
pub use kdf::derive_key;
pub use mac::{compute_tag, verify_tag};
pub use schema::{resolve_schema, DEFAULT_SCHEMA_VERSION};
pub use types::{
    BlockMode, CipherAlgorithm, HmacAlgorithm, KdfParams, MacParams, MessageFields, SchemaParams,
    AES_BLOCK_LENGTH, AES_KEY_LENGTH, IV_LENGTH, PBKDF2_ITERATIONS, SALT_LENGTH, TAG_LENGTH,
};
