//! Error types for session ID generation and validation.

use thiserror::Error;

/// Errors that can occur when generating or validating session IDs.
///
/// Messages never contain the signing key, the candidate string, or any of
/// the random bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionIdError {
    /// The signing key is empty.
    #[error("signing key cannot be empty")]
    InvalidKey,

    /// The secure random source could not fill the ID buffer.
    #[error("secure randomness unavailable: {reason}")]
    RandomnessUnavailable { reason: String },

    /// The candidate is not a well-formed session ID (bad encoding or length).
    #[error("malformed session ID")]
    MalformedIdentifier,

    /// The candidate decoded cleanly but its tag does not verify.
    #[error("invalid session ID signature")]
    InvalidSignature,
}

impl SessionIdError {
    /// Returns a stable, machine-readable code for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionIdError::InvalidKey => "invalid_key",
            SessionIdError::RandomnessUnavailable { .. } => "randomness_unavailable",
            SessionIdError::MalformedIdentifier => "malformed_identifier",
            SessionIdError::InvalidSignature => "invalid_signature",
        }
    }

    /// Returns true if the caller should treat the request as "not authenticated".
    ///
    /// Both malformed and forged candidates land here; callers should not
    /// reveal which one occurred to the client.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            SessionIdError::MalformedIdentifier | SessionIdError::InvalidSignature
        )
    }

    /// Returns true if this error points at the deployment rather than the client.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SessionIdError::InvalidKey | SessionIdError::RandomnessUnavailable { .. }
        )
    }
}
