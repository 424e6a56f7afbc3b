//! The signed session ID value type.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use rand::{rngs::OsRng, TryCryptoRng};

use crate::signing::{compute_tag, verify_tag, ID_LENGTH, SIGNED_LENGTH};
use crate::SessionIdError;

/// Length of an encoded session ID string (padded base64 of `SIGNED_LENGTH` bytes).
pub const ENCODED_LENGTH: usize = SIGNED_LENGTH.div_ceil(3) * 4;

/// A digitally-signed session ID.
///
/// The only ways to obtain a valid value are [`SessionId::generate`] and
/// [`SessionId::validate`]. Everything else sees [`SessionId::INVALID`].
/// Equality, ordering and hashing are by string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// The sentinel value returned in place of an ID on any failure.
    pub const INVALID: SessionId = SessionId(String::new());

    /// Creates a new session ID signed with `signing_key`, using the OS random source.
    pub fn generate<K>(signing_key: &K) -> Result<Self, SessionIdError>
    where
        K: AsRef<[u8]> + ?Sized,
    {
        Self::generate_with(signing_key, &mut OsRng)
    }

    /// Creates a new session ID signed with `signing_key`, drawing from `rng`.
    ///
    /// An empty key fails with [`SessionIdError::InvalidKey`] before `rng` is
    /// touched. A failing `rng` yields [`SessionIdError::RandomnessUnavailable`];
    /// the draw is not retried.
    pub fn generate_with<K, R>(signing_key: &K, rng: &mut R) -> Result<Self, SessionIdError>
    where
        K: AsRef<[u8]> + ?Sized,
        R: TryCryptoRng + ?Sized,
    {
        let key = signing_key.as_ref();
        if key.is_empty() {
            return Err(SessionIdError::InvalidKey);
        }

        let mut signed = [0u8; SIGNED_LENGTH];
        let (id_bytes, tag_bytes) = signed.split_at_mut(ID_LENGTH);

        rng.try_fill_bytes(id_bytes).map_err(|e| {
            tracing::error!(reason = %e, "secure random source failed while generating session ID");
            SessionIdError::RandomnessUnavailable {
                reason: e.to_string(),
            }
        })?;

        tag_bytes.copy_from_slice(&compute_tag(id_bytes, key)?);

        Ok(Self(URL_SAFE.encode(signed)))
    }

    /// Validates `candidate` against `signing_key`.
    ///
    /// On success the candidate string is returned unchanged as a `SessionId`.
    pub fn validate<K>(candidate: &str, signing_key: &K) -> Result<Self, SessionIdError>
    where
        K: AsRef<[u8]> + ?Sized,
    {
        Self::check(candidate, signing_key.as_ref())
            .map(|()| Self(candidate.to_string()))
            .inspect_err(|e| tracing::debug!(kind = e.kind(), "rejected session ID"))
    }

    fn check(candidate: &str, key: &[u8]) -> Result<(), SessionIdError> {
        if key.is_empty() {
            return Err(SessionIdError::InvalidKey);
        }

        let decoded = URL_SAFE
            .decode(candidate)
            .map_err(|_| SessionIdError::MalformedIdentifier)?;

        if decoded.len() != SIGNED_LENGTH {
            return Err(SessionIdError::MalformedIdentifier);
        }

        let (id_bytes, tag) = decoded.split_at(ID_LENGTH);
        verify_tag(id_bytes, tag, key)
    }

    /// Returns the encoded string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true unless this is [`SessionId::INVALID`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

impl serde::Serialize for SessionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
