//! Key fingerprints in the format `ssh-keygen -l` prints.

use base64::Engine;
use sha2::{Digest, Sha256};

/// `SHA256:<unpadded base64 digest>` of a public key blob.
#[must_use]
pub fn sha256_fingerprint(blob: &[u8]) -> String {
    let digest = Sha256::digest(blob);
    format!(
        "SHA256:{}",
        base64::engine::general_purpose::STANDARD_NO_PAD.encode(digest)
    )
}
