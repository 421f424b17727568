//! Password key stretching.
//!
//! PBKDF2 with the PRF, iteration count, and output length the schema
//! record carries. Encryption and HMAC keys are stretched the same way,
//! each from its own salt.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use sha2::Sha256;

use crate::types::{HmacAlgorithm, KdfParams, SchemaParams};

/// Stretch a password and salt into key bytes.
///
/// When `params.truncates_multibyte_password` is set (versions 0 through 2),
/// the password is first cut to as many bytes as it has characters. Legacy
/// writers mixed a character count into a byte-wise substring; messages in
/// the wild were produced that way, so the behavior is preserved for
/// compatibility rather than fixed. Version 3 stretches the full password
/// bytes. ASCII passwords are identical either way.
///
/// Deterministic: identical inputs always yield the identical key.
pub fn derive_key(password: &str, salt: &[u8], params: &SchemaParams) -> Vec<u8> {
    let bytes = password.as_bytes();
    let password_bytes = if params.truncates_multibyte_password {
        // Every character is at least one byte, so the slice is in bounds.
        &bytes[..password.chars().count()]
    } else {
        bytes
    };
    stretch(password_bytes, salt, &params.kdf)
}

fn stretch(password: &[u8], salt: &[u8], kdf: &KdfParams) -> Vec<u8> {
    let mut key = vec![0u8; kdf.derived_key_length];
    match kdf.prf {
        HmacAlgorithm::Sha1 => pbkdf2_hmac::<Sha1>(password, salt, kdf.iterations, &mut key),
        HmacAlgorithm::Sha256 => pbkdf2_hmac::<Sha256>(password, salt, kdf.iterations, &mut key),
    }
    key
}
