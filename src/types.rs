//! Parameter records and shared constants for the data format.
//!
//! A [`SchemaParams`] record captures everything that varies between wire
//! format versions. The rest of the crate consults the record; nothing else
//! branches on the version integer.

/// AES-256 key length in bytes.
pub const AES_KEY_LENGTH: usize = 32;

/// AES block length in bytes.
pub const AES_BLOCK_LENGTH: usize = 16;

/// Length in bytes of the encryption salt and of the HMAC salt.
pub const SALT_LENGTH: usize = 8;

/// IV length in bytes; one cipher block in every version.
pub const IV_LENGTH: usize = AES_BLOCK_LENGTH;

/// Width in bytes of the tag field in an encoded message, all versions.
pub const TAG_LENGTH: usize = 32;

/// PBKDF2 iteration count shared by every version to date.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

/// Block cipher selected by a schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherAlgorithm {
    Aes256,
}

impl CipherAlgorithm {
    /// Key length in bytes.
    pub fn key_length(&self) -> usize {
        match self {
            CipherAlgorithm::Aes256 => AES_KEY_LENGTH,
        }
    }

    /// Block length in bytes.
    pub fn block_length(&self) -> usize {
        match self {
            CipherAlgorithm::Aes256 => AES_BLOCK_LENGTH,
        }
    }
}

/// Chaining mode selected by a schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMode {
    /// CBC with PKCS#7 padding (versions 1 through 3).
    Cbc,
    /// The version-0 counter mode; see
    /// [`aes_ctr_little_endian_crypt`](crate::cipher::aes_ctr_little_endian_crypt).
    CtrLittleEndian,
}

/// Keyed-hash choices, used both as the PBKDF2 PRF and for tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacAlgorithm {
    Sha1,
    Sha256,
}

impl HmacAlgorithm {
    /// Native digest length in bytes.
    pub fn output_length(&self) -> usize {
        match self {
            HmacAlgorithm::Sha1 => 20,
            HmacAlgorithm::Sha256 => 32,
        }
    }
}

/// Key-stretching parameters for one schema version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdfParams {
    /// PRF driving PBKDF2.
    pub prf: HmacAlgorithm,
    /// Iteration count.
    pub iterations: u32,
    /// Derived key length in bytes.
    pub derived_key_length: usize,
}

/// Tag construction parameters for one schema version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacParams {
    /// Keyed-hash algorithm for the tag.
    pub algorithm: HmacAlgorithm,
    /// Width in bytes of the tag field in the encoded message.
    pub output_length: usize,
    /// Whether the tag covers the header fields in addition to the ciphertext.
    pub includes_header: bool,
    /// Whether a native tag shorter than `output_length` is right-padded
    /// with zero bytes to fill the field.
    pub zero_pads_output: bool,
}

/// Complete parameter record for one wire format version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaParams {
    /// Version this record describes.
    pub version: u8,
    /// Options byte written into the header of password-based messages.
    pub options: u8,
    /// Block cipher.
    pub cipher_algorithm: CipherAlgorithm,
    /// Chaining mode.
    pub block_mode: BlockMode,
    /// Salt length in bytes, for the encryption and HMAC salts alike.
    pub salt_length: usize,
    /// IV length in bytes.
    pub iv_length: usize,
    /// Key-stretching parameters.
    pub kdf: KdfParams,
    /// Tag construction parameters.
    pub mac: MacParams,
    /// Versions 0 through 2 stretch only the first character-count bytes of
    /// the password; see [`derive_key`](crate::kdf::derive_key).
    pub truncates_multibyte_password: bool,
}

/// Message fields the authentication tag can cover, in wire order.
///
/// Salts are present only in password-based messages; callers pass whatever
/// their header carries.
#[derive(Debug, Clone)]
pub struct MessageFields<'a> {
    /// Version byte from the header.
    pub version: u8,
    /// Options byte from the header.
    pub options: u8,
    /// Salt the encryption key was derived with, if any.
    pub encryption_salt: Option<&'a [u8]>,
    /// Salt the HMAC key was derived with, if any.
    pub hmac_salt: Option<&'a [u8]>,
    /// Initialization vector from the header.
    pub iv: &'a [u8],
    /// Encrypted payload.
    pub ciphertext: &'a [u8],
}
