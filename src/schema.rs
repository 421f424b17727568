//! Version table for the data format.
//!
//! | version | mode | MAC covers header | MAC | zero-pads tag | truncates password |
//! |---------|------|-------------------|-----|---------------|--------------------|
//! | 0 | CTR (little-endian) | no  | HMAC-SHA1   | yes | yes |
//! | 1 | CBC                 | no  | HMAC-SHA256 | no  | yes |
//! | 2 | CBC                 | yes | HMAC-SHA256 | no  | yes |
//! | 3 | CBC                 | yes | HMAC-SHA256 | no  | no  |
//!
//! All versions share AES-256, 8-byte salts, a one-block IV, a 32-byte tag
//! field, and PBKDF2-SHA1 at 10000 iterations.

use crate::error::CryptoError;
use crate::types::{
    BlockMode, CipherAlgorithm, HmacAlgorithm, KdfParams, MacParams, SchemaParams, AES_KEY_LENGTH,
    IV_LENGTH, PBKDF2_ITERATIONS, SALT_LENGTH, TAG_LENGTH,
};

/// Version new messages are written with.
pub const DEFAULT_SCHEMA_VERSION: u8 = 3;

/// Resolve a wire format version into its parameter record.
///
/// Resolution is pure: a supported version always yields an identical
/// record, and anything outside 0 through 3 fails with
/// [`CryptoError::UnsupportedSchemaVersion`].
pub fn resolve_schema(version: u8) -> Result<SchemaParams, CryptoError> {
    // The KDF has never varied between versions; each record still carries
    // its own copy so versions can diverge independently.
    let kdf = KdfParams {
        prf: HmacAlgorithm::Sha1,
        iterations: PBKDF2_ITERATIONS,
        derived_key_length: AES_KEY_LENGTH,
    };

    match version {
        0 => Ok(SchemaParams {
            version,
            options: 0,
            cipher_algorithm: CipherAlgorithm::Aes256,
            block_mode: BlockMode::CtrLittleEndian,
            salt_length: SALT_LENGTH,
            iv_length: IV_LENGTH,
            kdf,
            mac: MacParams {
                algorithm: HmacAlgorithm::Sha1,
                output_length: TAG_LENGTH,
                includes_header: false,
                zero_pads_output: true,
            },
            truncates_multibyte_password: true,
        }),
        1 => Ok(SchemaParams {
            version,
            options: 1,
            cipher_algorithm: CipherAlgorithm::Aes256,
            block_mode: BlockMode::Cbc,
            salt_length: SALT_LENGTH,
            iv_length: IV_LENGTH,
            kdf,
            mac: MacParams {
                algorithm: HmacAlgorithm::Sha256,
                output_length: TAG_LENGTH,
                includes_header: false,
                zero_pads_output: false,
            },
            truncates_multibyte_password: true,
        }),
        2 => Ok(SchemaParams {
            version,
            options: 1,
            cipher_algorithm: CipherAlgorithm::Aes256,
            block_mode: BlockMode::Cbc,
            salt_length: SALT_LENGTH,
            iv_length: IV_LENGTH,
            kdf,
            mac: MacParams {
                algorithm: HmacAlgorithm::Sha256,
                output_length: TAG_LENGTH,
                includes_header: true,
                zero_pads_output: false,
            },
            truncates_multibyte_password: true,
        }),
        3 => Ok(SchemaParams {
            version,
            options: 1,
            cipher_algorithm: CipherAlgorithm::Aes256,
            block_mode: BlockMode::Cbc,
            salt_length: SALT_LENGTH,
            iv_length: IV_LENGTH,
            kdf,
            mac: MacParams {
                algorithm: HmacAlgorithm::Sha256,
                output_length: TAG_LENGTH,
                includes_header: true,
                zero_pads_output: false,
            },
            truncates_multibyte_password: false,
        }),
        v => Err(CryptoError::UnsupportedSchemaVersion(v)),
    }
}
