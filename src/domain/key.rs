use std::fmt;

use super::constants::ED25519_PUBLIC_KEY_LENGTH;
use crate::infra::error::{ExtractError, ExtractResult};

/// Raw Ed25519 public key material lifted out of a certificate.
///
/// Invariant: always exactly 32 bytes.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Ed25519PublicKey {
    bytes: [u8; ED25519_PUBLIC_KEY_LENGTH],
}

impl Ed25519PublicKey {
    /// Wrap a slice, failing with [`ExtractError::Length`] unless it holds exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> ExtractResult<Self> {
        let bytes: [u8; ED25519_PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| ExtractError::Length {
                actual: bytes.len(),
            })?;
        Ok(Self { bytes })
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; ED25519_PUBLIC_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; ED25519_PUBLIC_KEY_LENGTH] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519PublicKey(")?;
        for b in &self.bytes[..4] {
            write!(f, "{b:02x}")?;
        }
        write!(f, "..)")
    }
}
