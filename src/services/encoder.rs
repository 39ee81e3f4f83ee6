//! OpenSSH public key blob encoding.
//!
//! The blob is the SSH wire encoding of the public key: each field is a
//! 4-byte big-endian length followed by that many bytes. For Ed25519 the
//! fields are the key type name and the 32 key bytes.

use base64::Engine;

use crate::domain::constants::{ED25519_PUBLIC_KEY_LENGTH, SSH_ED25519_KEY_TYPE};
use crate::domain::{AuthorizedKeyLine, Ed25519PublicKey};
use crate::infra::error::{ExtractError, ExtractResult};

/// Binary `ssh-ed25519` public key blob.
#[must_use]
pub fn encode_blob(key: &Ed25519PublicKey) -> Vec<u8> {
    let type_name = SSH_ED25519_KEY_TYPE.as_bytes();
    let mut blob = Vec::with_capacity(8 + type_name.len() + ED25519_PUBLIC_KEY_LENGTH);
    put_string(&mut blob, type_name);
    put_string(&mut blob, key.as_bytes());
    blob
}

/// Authorized-key line for `key` with the given comment.
#[must_use]
pub fn encode_authorized_key(key: &Ed25519PublicKey, comment: &str) -> AuthorizedKeyLine {
    let blob = base64::engine::general_purpose::STANDARD.encode(encode_blob(key));
    AuthorizedKeyLine::new(SSH_ED25519_KEY_TYPE, blob, comment)
}

/// Split a blob back into its key type name and key bytes.
pub fn decode_blob(blob: &[u8]) -> ExtractResult<(String, Vec<u8>)> {
    let mut rest = blob;
    let type_name = take_string(&mut rest)?;
    let key = take_string(&mut rest)?;
    if !rest.is_empty() {
        return Err(ExtractError::Decode(format!(
            "{} trailing bytes after public key blob",
            rest.len()
        )));
    }
    let type_name = String::from_utf8(type_name.to_vec())
        .map_err(|_| ExtractError::Decode("key type name is not UTF-8".to_string()))?;
    Ok((type_name, key.to_vec()))
}

/// Parse an `ssh-ed25519` authorized-key line and recover its key.
pub fn parse_authorized_key(line: &str) -> ExtractResult<(AuthorizedKeyLine, Ed25519PublicKey)> {
    let mut fields = line.trim_end_matches(['\r', '\n']).splitn(3, ' ');
    let (Some(key_type), Some(blob_base64)) = (fields.next(), fields.next()) else {
        return Err(ExtractError::Decode(
            "authorized key line needs a key type and a base64 blob".to_string(),
        ));
    };
    let comment = fields.next().unwrap_or("");

    let blob = base64::engine::general_purpose::STANDARD.decode(blob_base64)?;
    let (blob_type, key_bytes) = decode_blob(&blob)?;
    if blob_type != key_type || blob_type != SSH_ED25519_KEY_TYPE {
        return Err(ExtractError::Decode(format!(
            "unsupported key type {key_type:?} (blob says {blob_type:?})"
        )));
    }
    let key = Ed25519PublicKey::from_slice(&key_bytes)?;

    Ok((AuthorizedKeyLine::new(key_type, blob_base64, comment), key))
}

fn put_string(out: &mut Vec<u8>, data: &[u8]) {
    // Ed25519 fields are far below u32::MAX
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(data);
}

fn take_string<'a>(rest: &mut &'a [u8]) -> ExtractResult<&'a [u8]> {
    let Some((len, tail)) = rest.split_first_chunk::<4>() else {
        return Err(ExtractError::Decode(
            "truncated length prefix in public key blob".to_string(),
        ));
    };
    let len = u32::from_be_bytes(*len) as usize;
    if tail.len() < len {
        return Err(ExtractError::Decode(format!(
            "public key blob field declares {len} bytes, {} available",
            tail.len()
        )));
    }
    let (field, tail) = tail.split_at(len);
    *rest = tail;
    Ok(field)
}
