//! Shared fixtures for integration tests.
//!
//! Builds minimal certificate-shaped DER buffers around a known key and wraps
//! them in PEM, so tests can compare both input forms byte for byte.

#![allow(dead_code)]

use base64::Engine;

/// id-Ed25519 OBJECT IDENTIFIER
pub const ED25519_OID: [u8; 5] = [0x06, 0x03, 0x2b, 0x65, 0x70];

/// Deterministic, non-trivial 32-byte key.
pub fn test_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    for (i, b) in key.iter_mut().enumerate() {
        *b = 0xa0 ^ (i as u8).wrapping_mul(13);
    }
    key
}

/// `... 06 03 2B 65 70 ... 03 21 00 <key> ...` with filler on both sides.
pub fn synthetic_der(key: &[u8; 32]) -> Vec<u8> {
    // tbsCertificate-ish prefix: SEQUENCE headers, version, small serial
    let mut der = vec![0x30, 0x81, 0x90, 0x30, 0x7e, 0xa0, 0x03, 0x02, 0x01, 0x02, 0x02, 0x01, 0x07];
    // subjectPublicKeyInfo
    der.extend_from_slice(&[0x30, 0x2a, 0x30, 0x05]);
    der.extend_from_slice(&ED25519_OID);
    der.extend_from_slice(&[0x03, 0x21, 0x00]);
    der.extend_from_slice(key);
    // trailing signature-ish bytes
    der.extend_from_slice(&[0x30, 0x05, 0x06, 0x03, 0x55, 0x1d, 0x0e]);
    der
}

/// PEM envelope around `der`, 64 base64 characters per line.
pub fn to_pem(der: &[u8]) -> Vec<u8> {
    let body = base64::engine::general_purpose::STANDARD.encode(der);
    let mut pem = String::from("-----BEGIN CERTIFICATE-----\n");
    for chunk in body.as_bytes().chunks(64) {
        pem.push_str(std::str::from_utf8(chunk).expect("base64 is ASCII"));
        pem.push('\n');
    }
    pem.push_str("-----END CERTIFICATE-----\n");
    pem.into_bytes()
}

/// Expected blob: `00 00 00 0B "ssh-ed25519" 00 00 00 20 <key>`.
pub fn expected_blob(key: &[u8; 32]) -> Vec<u8> {
    let mut blob = vec![0x00, 0x00, 0x00, 0x0b];
    blob.extend_from_slice(b"ssh-ed25519");
    blob.extend_from_slice(&[0x00, 0x00, 0x00, 0x20]);
    blob.extend_from_slice(key);
    blob
}
