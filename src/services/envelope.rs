//! Envelope normalizer.
//!
//! Turns whatever the user handed us into the binary certificate bytes: a
//! PEM `CERTIFICATE` block is unwrapped and base64-decoded, anything else is
//! passed through untouched as DER.

use base64::Engine;

use crate::domain::constants::{PEM_CERTIFICATE_FOOTER, PEM_CERTIFICATE_HEADER};
use crate::infra::error::ExtractResult;
use crate::services::locator::find_subsequence;

/// Detected input representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Pem,
    Der,
}

/// Return the binary payload for `raw`, decoding the first PEM certificate
/// block when one is present.
pub fn normalize(raw: &[u8]) -> ExtractResult<Vec<u8>> {
    let (_, payload) = normalize_with_format(raw)?;
    Ok(payload)
}

/// Like [`normalize`], also reporting which representation was found.
pub fn normalize_with_format(raw: &[u8]) -> ExtractResult<(InputFormat, Vec<u8>)> {
    match pem_body(raw) {
        Some(body) => {
            let encoded: Vec<u8> = body
                .iter()
                .copied()
                .filter(|b| !b.is_ascii_whitespace())
                .collect();
            log::debug!("PEM envelope found, {} base64 characters", encoded.len());
            let der = base64::engine::general_purpose::STANDARD.decode(encoded)?;
            Ok((InputFormat::Pem, der))
        }
        None => {
            log::debug!("No PEM envelope, treating {} bytes as DER", raw.len());
            Ok((InputFormat::Der, raw.to_vec()))
        }
    }
}

/// Bytes of the lines strictly between the header line and the footer line
/// of the first complete certificate block.
///
/// Split by hand rather than with a PEM crate: text sharing the header or
/// footer line is dropped, and a header without a footer means DER input.
fn pem_body(raw: &[u8]) -> Option<Vec<u8>> {
    let start = find_subsequence(raw, PEM_CERTIFICATE_HEADER, 0)?;
    let footer = find_subsequence(raw, PEM_CERTIFICATE_FOOTER, start + PEM_CERTIFICATE_HEADER.len())?;
    let block = &raw[start..footer + PEM_CERTIFICATE_FOOTER.len()];

    let lines: Vec<&[u8]> = block.split(|&b| b == b'\n').collect();
    if lines.len() < 2 {
        return Some(Vec::new());
    }
    Some(lines[1..lines.len() - 1].concat())
}
