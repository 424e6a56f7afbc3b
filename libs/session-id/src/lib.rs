//! # gw-session-id
//!
//! Signed, stateless session identifiers for the gateway.
//!
//! ## Design Principles
//!
//! - Identifiers are opaque values; callers only compare and render them
//! - Tampering is detected without a lookup table: the identifier carries its
//!   own HMAC tag
//! - The signing key is passed per call and never retained
//! - Every failure is a typed error; nothing panics on hostile input
//!
//! ## Identifier Format
//!
//! An identifier is the URL-safe base64 (padded) encoding of:
//!
//! ```text
//! +-----------------------------+----------------------------------+
//! |  32 crypto-random bytes     |  HMAC-SHA256(key, random bytes)  |
//! +-----------------------------+----------------------------------+
//! ```
//!
//! That is 64 decoded bytes, always rendered as 88 characters.
//!
//! ## Example
//!
//! ```
//! use gw_session_id::{SessionId, SessionIdError};
//!
//! let id = SessionId::generate("secret")?;
//! let same = SessionId::validate(id.as_str(), "secret")?;
//! assert_eq!(id, same);
//!
//! let forged = SessionId::validate(id.as_str(), "wrong");
//! assert_eq!(forged, Err(SessionIdError::InvalidSignature));
//! # Ok::<(), SessionIdError>(())
//! ```

mod error;
mod key;
mod session_id;
mod signing;

pub use error::SessionIdError;
pub use key::SigningKey;
pub use session_id::{SessionId, ENCODED_LENGTH};
pub use signing::{ID_LENGTH, SIGNED_LENGTH, TAG_LENGTH};
