//! Algorithm-tagged key locator.
//!
//! Finds the Ed25519 subjectPublicKey inside DER certificate bytes without
//! decoding the ASN.1 structure. The scan anchors on the first id-Ed25519
//! OBJECT IDENTIFIER and then takes the first BIT STRING after it:
//!
//! 1. exact match on the `03 21` header of a 33-byte BIT STRING anywhere
//!    after the OID;
//! 2. failing that, a tolerant byte-by-byte scan of a bounded window after
//!    the OID accepting any `03 LL` header with `LL >= 0x21`.
//!
//! The byte after the header is the unused-bits count and the following 32
//! bytes are the key.

use crate::domain::constants::{
    ASN1_BIT_STRING_TAG, DEFAULT_FALLBACK_WINDOW, ED25519_BIT_STRING_LENGTH, ED25519_OID_DER,
    ED25519_PUBLIC_KEY_LENGTH,
};
use crate::domain::Ed25519PublicKey;
use crate::infra::error::{ExtractError, ExtractResult};

/// Which search path produced the BIT STRING candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPath {
    /// Exact `03 21` header match.
    Exact,
    /// Tolerant scan of the bounded window.
    Fallback,
}

/// Byte offsets of the structures found in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLocation {
    /// Offset of the first byte of the Ed25519 OID (its `06` tag).
    pub oid_offset: usize,
    /// Offset of the BIT STRING tag byte.
    pub bit_string_offset: usize,
    /// Declared BIT STRING length.
    pub declared_length: u8,
    /// Unused-bits byte; zero for every well-formed key.
    pub unused_bits: u8,
    pub path: MatchPath,
}

/// Scanner over DER certificate bytes.
#[derive(Debug, Clone, Copy)]
pub struct KeyLocator {
    fallback_window: usize,
}

impl Default for KeyLocator {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_WINDOW)
    }
}

impl KeyLocator {
    #[must_use]
    pub fn new(fallback_window: usize) -> Self {
        Self { fallback_window }
    }

    #[must_use]
    pub fn fallback_window(&self) -> usize {
        self.fallback_window
    }

    /// Extract the 32-byte Ed25519 public key from `der`.
    pub fn extract(&self, der: &[u8]) -> ExtractResult<Ed25519PublicKey> {
        self.extract_with_location(der).map(|(key, _)| key)
    }

    /// Extract the key and report where it was found.
    pub fn extract_with_location(
        &self,
        der: &[u8],
    ) -> ExtractResult<(Ed25519PublicKey, KeyLocation)> {
        let oid_offset = find_subsequence(der, &ED25519_OID_DER, 0).ok_or_else(|| {
            ExtractError::NotFound(
                "algorithm identifier absent: Ed25519 OID (1.3.101.112) not found in certificate"
                    .to_string(),
            )
        })?;
        log::debug!("Ed25519 OID found at offset {oid_offset}");

        let search_from = oid_offset + ED25519_OID_DER.len();
        let (bit_string_offset, path) = match find_subsequence(
            der,
            &[ASN1_BIT_STRING_TAG, ED25519_BIT_STRING_LENGTH],
            search_from,
        ) {
            Some(offset) => (offset, MatchPath::Exact),
            None => {
                log::debug!(
                    "No exact BIT STRING header, scanning {} bytes after the OID",
                    self.fallback_window
                );
                let offset = self.scan_window(der, search_from).ok_or_else(|| {
                    ExtractError::NotFound(
                        "bit string not located: no subjectPublicKey BIT STRING after the Ed25519 OID"
                            .to_string(),
                    )
                })?;
                (offset, MatchPath::Fallback)
            }
        };
        let declared_length = der[bit_string_offset + 1];

        // Tag and length are present; the unused-bits byte may not be.
        let payload_start = bit_string_offset + 2;
        let Some(&unused_bits) = der.get(payload_start) else {
            return Err(ExtractError::Length { actual: 0 });
        };
        if unused_bits != 0 {
            log::warn!(
                "BIT STRING at offset {bit_string_offset} declares {unused_bits} unused bits; \
                 accepting key bytes anyway"
            );
        }

        let key_start = payload_start + 1;
        let key_end = (key_start + ED25519_PUBLIC_KEY_LENGTH).min(der.len());
        let key = Ed25519PublicKey::from_slice(&der[key_start.min(key_end)..key_end])?;

        let location = KeyLocation {
            oid_offset,
            bit_string_offset,
            declared_length,
            unused_bits,
            path,
        };
        log::debug!("Key located: {location:?}");
        Ok((key, location))
    }

    /// First offset in `[start, start + window)` holding a BIT STRING tag
    /// followed by a length of at least 33.
    fn scan_window(&self, der: &[u8], start: usize) -> Option<usize> {
        let end = start.saturating_add(self.fallback_window).min(der.len());
        (start..end).find(|&i| {
            der[i] == ASN1_BIT_STRING_TAG
                && der
                    .get(i + 1)
                    .is_some_and(|&len| len >= ED25519_BIT_STRING_LENGTH)
        })
    }
}

/// Extract the Ed25519 public key with the default fallback window.
pub fn extract_public_key(der: &[u8]) -> ExtractResult<Ed25519PublicKey> {
    KeyLocator::default().extract(der)
}

/// Offset of the first occurrence of `needle` in `haystack` at or after `from`.
pub(crate) fn find_subsequence(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}
