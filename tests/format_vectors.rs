//! End-to-end vectors over the public API: fixed salts, IV, and password,
//! checked byte for byte at every stage.

#![cfg(feature = "rustcrypto")]

use rncryptor_core::{
    compute_tag, decrypt, derive_key, encrypt, resolve_schema, verify_tag, MessageFields,
};

const PASSWORD: &str = "correct horse";
const PLAINTEXT: &[u8] = b"attack at dawn";

const ENCRYPTION_SALT: &str = "0001020304050607";
const HMAC_SALT: &str = "08090a0b0c0d0e0f";
const IV: &str = "101112131415161718191a1b1c1d1e1f";

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

#[test]
fn version_3_golden_scenario() {
    let params = resolve_schema(3).unwrap();
    let encryption_salt = unhex(ENCRYPTION_SALT);
    let hmac_salt = unhex(HMAC_SALT);
    let iv = unhex(IV);

    let encryption_key = derive_key(PASSWORD, &encryption_salt, &params);
    let mac_key = derive_key(PASSWORD, &hmac_salt, &params);
    assert_eq!(
        hex::encode(&encryption_key),
        "2ab1869f16381fbb51cead5ab920542aba2f08d0aea283816b3e56b6f68ddfba"
    );
    assert_eq!(
        hex::encode(&mac_key),
        "c330f728f49e57576da8b9022ae0839684dac4c56e3790829a1bb9a96f42b3c0"
    );

    let ciphertext = encrypt(&encryption_key, PLAINTEXT, &params, &iv).unwrap();
    assert_eq!(hex::encode(&ciphertext), "afe78fe99f558928c12ba6b6e3f6faa7");

    let fields = MessageFields {
        version: 3,
        options: params.options,
        encryption_salt: Some(&encryption_salt),
        hmac_salt: Some(&hmac_salt),
        iv: &iv,
        ciphertext: &ciphertext,
    };
    let tag = compute_tag(&fields, &mac_key, &params);
    assert_eq!(
        hex::encode(&tag),
        "2e927f4c3a2868dfd6d19030f6bf9132a537b1eb96ef8283202ac5304ae763ac"
    );
    assert!(verify_tag(&fields, &mac_key, &params, &tag));

    let decrypted = decrypt(&encryption_key, &ciphertext, &params, &iv).unwrap();
    assert_eq!(decrypted, PLAINTEXT);
}

#[test]
fn version_0_golden_scenario() {
    let params = resolve_schema(0).unwrap();
    let encryption_salt = unhex(ENCRYPTION_SALT);
    let hmac_salt = unhex(HMAC_SALT);
    let iv = unhex(IV);

    // ASCII password, so the legacy truncation changes nothing and the
    // stretched keys match the version-3 scenario.
    let encryption_key = derive_key(PASSWORD, &encryption_salt, &params);
    let mac_key = derive_key(PASSWORD, &hmac_salt, &params);
    assert_eq!(
        hex::encode(&encryption_key),
        "2ab1869f16381fbb51cead5ab920542aba2f08d0aea283816b3e56b6f68ddfba"
    );

    let ciphertext = encrypt(&encryption_key, PLAINTEXT, &params, &iv).unwrap();
    assert_eq!(ciphertext.len(), PLAINTEXT.len());
    assert_eq!(hex::encode(&ciphertext), "e215ba77ed798d58301296679202");

    let fields = MessageFields {
        version: 0,
        options: params.options,
        encryption_salt: Some(&encryption_salt),
        hmac_salt: Some(&hmac_salt),
        iv: &iv,
        ciphertext: &ciphertext,
    };
    let tag = compute_tag(&fields, &mac_key, &params);
    assert_eq!(
        hex::encode(&tag),
        "3711d117b7839a5d228f7735a759dccbf8099d62000000000000000000000000"
    );
    assert!(verify_tag(&fields, &mac_key, &params, &tag));

    let decrypted = decrypt(&encryption_key, &ciphertext, &params, &iv).unwrap();
    assert_eq!(decrypted, PLAINTEXT);
}

#[test]
fn version_2_reads_version_3_ciphertext_for_ascii_passwords() {
    // Versions 2 and 3 differ only in the password truncation rule, which
    // is a no-op for ASCII, so the cipher layers interoperate.
    let v2 = resolve_schema(2).unwrap();
    let v3 = resolve_schema(3).unwrap();
    let encryption_salt = unhex(ENCRYPTION_SALT);
    let iv = unhex(IV);

    let key_v2 = derive_key(PASSWORD, &encryption_salt, &v2);
    let key_v3 = derive_key(PASSWORD, &encryption_salt, &v3);
    assert_eq!(key_v2, key_v3);

    let ciphertext = unhex("afe78fe99f558928c12ba6b6e3f6faa7");
    assert_eq!(decrypt(&key_v2, &ciphertext, &v2, &iv).unwrap(), PLAINTEXT);
}

#[test]
fn version_0_tag_ignores_header_fields() {
    let params = resolve_schema(0).unwrap();
    let mac_key = derive_key(PASSWORD, &unhex(HMAC_SALT), &params);
    let ciphertext = unhex("e215ba77ed798d58301296679202");

    let with_header = MessageFields {
        version: 0,
        options: 0,
        encryption_salt: Some(&[0xaa; 8]),
        hmac_salt: Some(&[0xbb; 8]),
        iv: &[0xcc; 16],
        ciphertext: &ciphertext,
    };
    let tag = compute_tag(&with_header, &mac_key, &params);
    assert_eq!(
        hex::encode(tag),
        "3711d117b7839a5d228f7735a759dccbf8099d62000000000000000000000000"
    );
}

#[test]
fn tampered_ciphertext_fails_verification() {
    let params = resolve_schema(3).unwrap();
    let encryption_salt = unhex(ENCRYPTION_SALT);
    let hmac_salt = unhex(HMAC_SALT);
    let iv = unhex(IV);
    let mac_key = derive_key(PASSWORD, &hmac_salt, &params);

    let mut ciphertext = unhex("afe78fe99f558928c12ba6b6e3f6faa7");
    let tag = unhex("2e927f4c3a2868dfd6d19030f6bf9132a537b1eb96ef8283202ac5304ae763ac");
    ciphertext[0] ^= 0x01;

    let fields = MessageFields {
        version: 3,
        options: params.options,
        encryption_salt: Some(&encryption_salt),
        hmac_salt: Some(&hmac_salt),
        iv: &iv,
        ciphertext: &ciphertext,
    };
    assert!(!verify_tag(&fields, &mac_key, &params, &tag));
}
