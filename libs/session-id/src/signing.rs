//! Byte layout and HMAC tagging of session IDs.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::SessionIdError;

type HmacSha256 = Hmac<Sha256>;

/// Length of the random portion of a session ID, in bytes.
pub const ID_LENGTH: usize = 32;

/// Length of the HMAC tag, in bytes. Equals the SHA-256 output size.
pub const TAG_LENGTH: usize = 32;

/// Full decoded length of a signed session ID (random bytes plus tag).
pub const SIGNED_LENGTH: usize = ID_LENGTH + TAG_LENGTH;

/// Computes `HMAC-SHA256(key, id_bytes)`.
pub(crate) fn compute_tag(id_bytes: &[u8], key: &[u8]) -> Result<[u8; TAG_LENGTH], SessionIdError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| SessionIdError::InvalidKey)?;
    mac.update(id_bytes);

    let mut tag = [0u8; TAG_LENGTH];
    tag.copy_from_slice(&mac.finalize().into_bytes());
    Ok(tag)
}

/// Checks `tag` against the expected tag for `id_bytes`.
///
/// The comparison runs in constant time with respect to the tag contents.
pub(crate) fn verify_tag(id_bytes: &[u8], tag: &[u8], key: &[u8]) -> Result<(), SessionIdError> {
    let expected = compute_tag(id_bytes, key)?;

    if bool::from(expected.as_slice().ct_eq(tag)) {
        Ok(())
    } else {
        Err(SessionIdError::InvalidSignature)
    }
}
