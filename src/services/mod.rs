//! Stateless services making up the conversion.
//!
//! - `envelope`: PEM unwrapping to DER bytes
//! - `locator`: byte-level search for the Ed25519 key inside the DER
//! - `encoder`: OpenSSH blob and authorized-key line encoding (and parsing)
//! - `fingerprint`: SHA256 fingerprint of the encoded blob

pub mod encoder;
pub mod envelope;
pub mod fingerprint;
pub mod locator;
