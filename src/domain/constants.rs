//! Centralized constants for the DER bytes, PEM markers and OpenSSH names
//! the extractor scans for or emits.
//! Keep this intentionally small; only literals shared across services live here.

// === ASN.1 DER Constants ===

/// ASN.1 BIT STRING tag
pub const ASN1_BIT_STRING_TAG: u8 = 0x03;

/// id-Ed25519 (1.3.101.112) as a complete DER OBJECT IDENTIFIER (tag + length + value)
pub const ED25519_OID_DER: [u8; 5] = [0x06, 0x03, 0x2b, 0x65, 0x70];

/// Declared length of an Ed25519 subjectPublicKey BIT STRING (unused-bits byte + key)
pub const ED25519_BIT_STRING_LENGTH: u8 = 0x21;

/// Raw Ed25519 public key length in bytes
pub const ED25519_PUBLIC_KEY_LENGTH: usize = 32;

/// Default size of the tolerant fallback scan window following the OID, in bytes.
///
/// Not derived from any structural bound; certificates with unusual padding
/// between the algorithm identifier and the key may need a larger window.
pub const DEFAULT_FALLBACK_WINDOW: usize = 300;

// === PEM Envelope Constants ===

/// Opening delimiter of a PEM certificate block
pub const PEM_CERTIFICATE_HEADER: &[u8] = b"-----BEGIN CERTIFICATE-----";

/// Closing delimiter of a PEM certificate block
pub const PEM_CERTIFICATE_FOOTER: &[u8] = b"-----END CERTIFICATE-----";

// === OpenSSH Constants ===

/// OpenSSH key type name for Ed25519 keys
pub const SSH_ED25519_KEY_TYPE: &str = "ssh-ed25519";

/// Comment appended to the authorized-key line unless configured otherwise
pub const DEFAULT_KEY_COMMENT: &str = "CN=SSH key";

/// Output file name used when no output path is given
pub const DEFAULT_OUTPUT_FILE: &str = "primary_ed_94_ssh.pub";
