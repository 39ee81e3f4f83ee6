//! Error types for certificate key extraction.
//! Every variant is terminal; nothing in the tool is retried.

use thiserror::Error;

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Error types for extraction operations
#[derive(Error, Debug, miette::Diagnostic)]
pub enum ExtractError {
    #[error("Usage error: {0}")]
    #[diagnostic(help("usage: ed25519-ssh-extract <cert.pem or cert.der> [out.pub]"))]
    Usage(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Length error: extracted public key length is {actual} bytes (expected 32)")]
    Length { actual: usize },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ExtractError {
    /// Process exit status for this error: 2 for usage mistakes, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            ExtractError::Usage(_) => 2,
            _ => 1,
        }
    }
}

impl From<base64::DecodeError> for ExtractError {
    fn from(error: base64::DecodeError) -> Self {
        ExtractError::Decode(error.to_string())
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(error: std::io::Error) -> Self {
        ExtractError::Io(error.to_string())
    }
}
