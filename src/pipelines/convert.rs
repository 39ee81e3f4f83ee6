//! `ConvertWorkflow`: certificate file in, OpenSSH public key file out.
//!
//! Straight-line: read → normalize envelope → locate key → encode line →
//! write once. Nothing touches the output path until the line exists.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    domain::{AuthorizedKeyLine, Ed25519PublicKey},
    infra::config::ExtractConfiguration,
    infra::error::{ExtractError, ExtractResult},
    services::{
        encoder,
        envelope::{self, InputFormat},
        fingerprint,
        locator::{KeyLocation, KeyLocator},
    },
};

/// Everything learned while converting one certificate.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub format: InputFormat,
    pub key: Ed25519PublicKey,
    pub location: KeyLocation,
    pub line: AuthorizedKeyLine,
    pub fingerprint: String,
    /// Where the line was written; `None` for dry runs.
    pub written_to: Option<PathBuf>,
}

/// Orchestrates the conversion of one certificate.
pub struct ConvertWorkflow {
    locator: KeyLocator,
    comment: String,
}

impl Default for ConvertWorkflow {
    fn default() -> Self {
        Self::from_config(&ExtractConfiguration::default())
    }
}

impl ConvertWorkflow {
    #[must_use]
    pub fn from_config(config: &ExtractConfiguration) -> Self {
        Self {
            locator: KeyLocator::new(config.fallback_window),
            comment: config.comment.clone(),
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Convert in-memory certificate bytes (PEM or DER) without touching disk.
    pub fn convert_bytes(&self, raw: &[u8]) -> ExtractResult<ConversionOutcome> {
        let (format, der) = envelope::normalize_with_format(raw)?;
        let (key, location) = self.locator.extract_with_location(&der)?;

        let line = encoder::encode_authorized_key(&key, &self.comment);
        let fingerprint = fingerprint::sha256_fingerprint(&encoder::encode_blob(&key));
        log::info!("Extracted Ed25519 key {fingerprint} from {format:?} input");

        Ok(ConversionOutcome {
            format,
            key,
            location,
            line,
            fingerprint,
            written_to: None,
        })
    }

    /// Read `input`, convert it and, unless `dry_run`, write the line to `output`.
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
        dry_run: bool,
    ) -> ExtractResult<ConversionOutcome> {
        let input = input.as_ref();
        let output = output.as_ref();

        let raw = fs::read(input).map_err(|e| {
            ExtractError::Io(format!("Failed to read {}: {e}", input.display()))
        })?;
        log::debug!("Read {} bytes from {}", raw.len(), input.display());

        let mut outcome = self.convert_bytes(&raw)?;

        if dry_run {
            log::info!("Dry run, not writing {}", output.display());
            return Ok(outcome);
        }

        fs::write(output, outcome.line.to_file_contents()).map_err(|e| {
            ExtractError::Io(format!("Failed to write {}: {e}", output.display()))
        })?;
        log::info!("Wrote OpenSSH public key to {}", output.display());

        outcome.written_to = Some(output.to_path_buf());
        Ok(outcome)
    }
}
