use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(u8),

    #[error("Invalid cipher parameters: expected {expected}-byte {parameter}, got {got} bytes")]
    InvalidCipherParameters {
        parameter: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Invalid ciphertext length: {0} bytes is not a positive multiple of the block length")]
    InvalidCiphertextLength(usize),

    #[error("Invalid block padding")]
    InvalidPadding,

    #[error("No block cipher backend compiled into this build")]
    UnavailableCryptoBackend,
}
