//! Versioned HMAC tags over message fields.
//!
//! Versions 0 and 1 authenticate the ciphertext alone; versions 2 and 3
//! cover the header fields followed by the ciphertext. Version 0 tags are
//! HMAC-SHA1 right-padded with zero bytes to the 32-byte field the format
//! reserves.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::types::{HmacAlgorithm, MessageFields, SchemaParams};

/// Compute the authentication tag for a message.
///
/// The same construction yields the stored tag at encryption time and the
/// expected tag at decryption time. The MAC key may be a stretched password
/// key or a caller-provided key of any length.
pub fn compute_tag(fields: &MessageFields<'_>, mac_key: &[u8], params: &SchemaParams) -> Vec<u8> {
    let message = tag_message(fields, params);
    let mut tag = hmac_digest(params.mac.algorithm, mac_key, &message);
    // Pad only; a native tag longer than the field is never cut down.
    if params.mac.zero_pads_output && tag.len() < params.mac.output_length {
        tag.resize(params.mac.output_length, 0);
    }
    tag
}

/// Recompute the tag and compare it to `expected` in constant time.
///
/// Returns `false` for any mismatch, including a length mismatch. A failed
/// comparison is an outcome, not an error.
pub fn verify_tag(
    fields: &MessageFields<'_>,
    mac_key: &[u8],
    params: &SchemaParams,
    expected: &[u8],
) -> bool {
    let tag = compute_tag(fields, mac_key, params);
    tag.ct_eq(expected).into()
}

/// Authenticated bytes in wire order: version and options bytes, salts when
/// present, and the IV when the header is covered, then the ciphertext.
fn tag_message(fields: &MessageFields<'_>, params: &SchemaParams) -> Vec<u8> {
    let mut message = Vec::with_capacity(
        2 + 2 * params.salt_length + params.iv_length + fields.ciphertext.len(),
    );
    if params.mac.includes_header {
        message.push(fields.version);
        message.push(fields.options);
        if let Some(salt) = fields.encryption_salt {
            message.extend_from_slice(salt);
        }
        if let Some(salt) = fields.hmac_salt {
            message.extend_from_slice(salt);
        }
        message.extend_from_slice(fields.iv);
    }
    message.extend_from_slice(fields.ciphertext);
    message
}

fn hmac_digest(algorithm: HmacAlgorithm, key: &[u8], message: &[u8]) -> Vec<u8> {
    // HMAC accepts keys of any length
    match algorithm {
        HmacAlgorithm::Sha1 => {
            let mut mac =
                Hmac::<Sha1>::new_from_slice(key).expect("HMAC accepts any key length");
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
        HmacAlgorithm::Sha256 => {
            let mut mac =
                Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts any key length");
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
    }
}
