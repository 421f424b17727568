//! Cipher engine: CBC for versions 1 through 3 and the legacy
//! little-endian counter mode of version 0.

use zeroize::Zeroize;

use crate::backend::{default_backend, BlockCipherBackend};
use crate::error::CryptoError;
use crate::types::{BlockMode, SchemaParams, AES_BLOCK_LENGTH, AES_KEY_LENGTH};

/// Encrypt `plaintext` under the mode the schema record selects.
///
/// CBC output is padded to whole blocks with PKCS#7; counter-mode output
/// has exactly the payload length. The key must match the record's cipher
/// key length and the IV its IV length.
pub fn encrypt(
    key: &[u8],
    plaintext: &[u8],
    params: &SchemaParams,
    iv: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let (key, iv) = cipher_inputs(key, iv, params)?;
    let backend = default_backend()?;
    match params.block_mode {
        BlockMode::Cbc => Ok(backend.cbc_encrypt(&key, &iv, plaintext)),
        BlockMode::CtrLittleEndian => Ok(ctr_le_crypt(backend.as_ref(), &key, &iv, plaintext)),
    }
}

/// Decrypt `ciphertext` under the mode the schema record selects.
///
/// CBC ciphertext must be a non-empty multiple of the block length and
/// carry valid padding; counter-mode ciphertext of any length decrypts to
/// a payload of the same length.
pub fn decrypt(
    key: &[u8],
    ciphertext: &[u8],
    params: &SchemaParams,
    iv: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let (key, iv) = cipher_inputs(key, iv, params)?;
    let backend = default_backend()?;
    match params.block_mode {
        BlockMode::Cbc => {
            let block = params.cipher_algorithm.block_length();
            if ciphertext.is_empty() || ciphertext.len() % block != 0 {
                return Err(CryptoError::InvalidCiphertextLength(ciphertext.len()));
            }
            backend.cbc_decrypt(&key, &iv, ciphertext)
        }
        BlockMode::CtrLittleEndian => Ok(ctr_le_crypt(backend.as_ref(), &key, &iv, ciphertext)),
    }
}

/// AES-CTR as the version-0 writers ran it.
///
/// The counter starts at the IV and, after each keystream block, only its
/// first byte is incremented, wrapping 0xFF to 0x00 with no carry into the
/// neighboring bytes. That matches what CommonCrypto produced for these
/// messages, so a standards big-endian full-width increment must not be
/// substituted. XOR against the ECB-encrypted counter stream is its own
/// inverse, so one call serves for both encryption and decryption.
///
/// # Arguments
/// * `key` - 32-byte AES key
/// * `payload` - plaintext or ciphertext of any length
/// * `iv` - 16-byte initial counter block
pub fn aes_ctr_little_endian_crypt(
    key: &[u8],
    payload: &[u8],
    iv: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if key.len() != AES_KEY_LENGTH {
        return Err(CryptoError::InvalidCipherParameters {
            parameter: "key",
            expected: AES_KEY_LENGTH,
            got: key.len(),
        });
    }
    if iv.len() != AES_BLOCK_LENGTH {
        return Err(CryptoError::InvalidCipherParameters {
            parameter: "IV",
            expected: AES_BLOCK_LENGTH,
            got: iv.len(),
        });
    }
    // Lengths validated above, so the conversions cannot fail
    let key: [u8; AES_KEY_LENGTH] =
        key.try_into().map_err(|_| CryptoError::InvalidCipherParameters {
            parameter: "key",
            expected: AES_KEY_LENGTH,
            got: key.len(),
        })?;
    let iv: [u8; AES_BLOCK_LENGTH] =
        iv.try_into().map_err(|_| CryptoError::InvalidCipherParameters {
            parameter: "IV",
            expected: AES_BLOCK_LENGTH,
            got: iv.len(),
        })?;
    let backend = default_backend()?;
    Ok(ctr_le_crypt(backend.as_ref(), &key, &iv, payload))
}

fn ctr_le_crypt(
    backend: &dyn BlockCipherBackend,
    key: &[u8; AES_KEY_LENGTH],
    iv: &[u8; AES_BLOCK_LENGTH],
    payload: &[u8],
) -> Vec<u8> {
    let num_blocks = payload.len().div_ceil(AES_BLOCK_LENGTH);
    let mut keystream = counter_stream(iv, num_blocks);
    backend.ecb_encrypt_blocks(key, &mut keystream);
    let out = payload
        .iter()
        .zip(keystream.iter())
        .map(|(p, k)| p ^ k)
        .collect();
    keystream.zeroize();
    out
}

/// `num_blocks` counter blocks: copies of the IV in which only byte 0
/// advances, wrapping without carry.
fn counter_stream(iv: &[u8; AES_BLOCK_LENGTH], num_blocks: usize) -> Vec<u8> {
    let mut stream = Vec::with_capacity(num_blocks * AES_BLOCK_LENGTH);
    let mut counter = *iv;
    for _ in 0..num_blocks {
        stream.extend_from_slice(&counter);
        counter[0] = counter[0].wrapping_add(1);
    }
    stream
}

fn cipher_inputs(
    key: &[u8],
    iv: &[u8],
    params: &SchemaParams,
) -> Result<([u8; AES_KEY_LENGTH], [u8; AES_BLOCK_LENGTH]), CryptoError> {
    let expected_key = params.cipher_algorithm.key_length();
    if key.len() != expected_key {
        return Err(CryptoError::InvalidCipherParameters {
            parameter: "key",
            expected: expected_key,
            got: key.len(),
        });
    }
    if iv.len() != params.iv_length {
        return Err(CryptoError::InvalidCipherParameters {
            parameter: "IV",
            expected: params.iv_length,
            got: iv.len(),
        });
    }
    // Lengths validated above, so the conversions cannot fail
    let key = key.try_into().map_err(|_| CryptoError::InvalidCipherParameters {
        parameter: "key",
        expected: AES_KEY_LENGTH,
        got: key.len(),
    })?;
    let iv = iv.try_into().map_err(|_| CryptoError::InvalidCipherParameters {
        parameter: "IV",
        expected: AES_BLOCK_LENGTH,
        got: iv.len(),
    })?;
    Ok((key, iv))
}
