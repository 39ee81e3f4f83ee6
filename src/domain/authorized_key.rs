use std::fmt;

use super::Ed25519PublicKey;
use crate::infra::error::ExtractResult;
use crate::services::encoder;

/// One line of an OpenSSH `authorized_keys` / `.pub` file:
/// `<key-type> <base64-blob> <comment>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorizedKeyLine {
    key_type: String,
    blob_base64: String,
    comment: String,
}

impl AuthorizedKeyLine {
    #[must_use]
    pub fn new(
        key_type: impl Into<String>,
        blob_base64: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            key_type: key_type.into(),
            blob_base64: blob_base64.into(),
            comment: comment.into(),
        }
    }

    #[must_use]
    pub fn key_type(&self) -> &str {
        &self.key_type
    }

    #[must_use]
    pub fn blob_base64(&self) -> &str {
        &self.blob_base64
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Parse an `ssh-ed25519` line, returning it together with the decoded key.
    pub fn parse(line: &str) -> ExtractResult<(Self, Ed25519PublicKey)> {
        encoder::parse_authorized_key(line)
    }

    /// The line as written to disk, newline-terminated.
    #[must_use]
    pub fn to_file_contents(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for AuthorizedKeyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key_type, self.blob_base64)?;
        // No comment means no trailing separator, as ssh-keygen writes it
        if !self.comment.is_empty() {
            write!(f, " {}", self.comment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_fields_with_single_spaces() {
        let line = AuthorizedKeyLine::new("ssh-ed25519", "AAAA", "CN=SSH key");
        assert_eq!(line.to_string(), "ssh-ed25519 AAAA CN=SSH key");
        assert_eq!(line.to_file_contents(), "ssh-ed25519 AAAA CN=SSH key\n");
    }

    #[test]
    fn parse_recovers_line_and_key() {
        let key = Ed25519PublicKey::from_bytes([0x11; 32]);
        let line = encoder::encode_authorized_key(&key, "CN=SSH key");

        let (parsed, parsed_key) = AuthorizedKeyLine::parse(&line.to_file_contents()).unwrap();
        assert_eq!(parsed, line);
        assert_eq!(parsed_key, key);
        assert!(AuthorizedKeyLine::parse("ssh-ed25519 not*base64").is_err());
    }

    #[test]
    fn empty_comment_is_omitted() {
        let line = AuthorizedKeyLine::new("ssh-ed25519", "AAAA", "");
        assert_eq!(line.to_string(), "ssh-ed25519 AAAA");
    }
}
