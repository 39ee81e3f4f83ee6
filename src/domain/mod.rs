//! Domain types for the certificate-to-OpenSSH conversion.
//!
//! Provides:
//! - DER, PEM and OpenSSH literals the services scan for or emit
//! - `Ed25519PublicKey`, the 32-byte key material with its length invariant
//! - `AuthorizedKeyLine`, the single-line OpenSSH output value

pub mod authorized_key;
pub mod constants;
pub mod key;

pub use authorized_key::AuthorizedKeyLine;
pub use key::Ed25519PublicKey;
