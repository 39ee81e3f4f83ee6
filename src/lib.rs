//! Ed25519 SSH Key Extractor Library
//!
//! Pulls the raw Ed25519 public key out of an X.509 certificate (PEM or DER)
//! by scanning the encoded bytes, and re-encodes it as an OpenSSH
//! authorized-key line.

pub mod domain;
pub mod infra;
pub mod pipelines;
pub mod services;

use std::path::Path;

pub use domain::{AuthorizedKeyLine, Ed25519PublicKey};
pub use infra::config::{ConfigManager, ExtractConfiguration};
pub use infra::error::{ExtractError, ExtractResult};
pub use pipelines::convert::{ConversionOutcome, ConvertWorkflow};
pub use services::encoder::{decode_blob, encode_authorized_key, encode_blob, parse_authorized_key};
pub use services::envelope::{normalize, InputFormat};
pub use services::fingerprint::sha256_fingerprint;
pub use services::locator::{extract_public_key, KeyLocation, KeyLocator, MatchPath};

/// Convert a certificate file to an OpenSSH public key file with default settings.
pub fn convert_certificate_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
) -> ExtractResult<AuthorizedKeyLine> {
    let outcome = ConvertWorkflow::default().run(input_path, output_path, false)?;
    Ok(outcome.line)
}

/// Produce the authorized-key line for in-memory certificate bytes.
pub fn certificate_to_authorized_key(raw: &[u8], comment: &str) -> ExtractResult<AuthorizedKeyLine> {
    let der = normalize(raw)?;
    let key = extract_public_key(&der)?;
    Ok(encode_authorized_key(&key, comment))
}
