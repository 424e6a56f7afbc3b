//! Owned signing key with redacted debug output.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::SessionIdError;

/// An owned HMAC signing key.
///
/// Holding the key in this type is optional: every operation accepts any
/// `AsRef<[u8]>` key. `SigningKey` adds a non-empty guarantee, keeps the
/// bytes out of `Debug` output, and wipes them on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Creates a key from raw bytes. Empty keys are rejected.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, SessionIdError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(SessionIdError::InvalidKey);
        }
        Ok(Self(bytes))
    }

    /// Returns the key length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; empty keys cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for SigningKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(SigningKey::new("").unwrap_err(), SessionIdError::InvalidKey);
        assert_eq!(
            SigningKey::new(Vec::new()).unwrap_err(),
            SessionIdError::InvalidKey
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = SigningKey::new("hunter2").unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_as_ref_is_raw_bytes() {
        let key = SigningKey::new("secret").unwrap();
        assert_eq!(key.as_ref(), b"secret");
        assert_eq!(key.len(), 6);
        assert!(!key.is_empty());
    }
}
