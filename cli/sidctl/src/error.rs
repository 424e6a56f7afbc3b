//! Error display for the CLI.

use colored::Colorize;
use gw_session_id::SessionIdError;

use crate::config::ConfigError;

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", format!("Hint: {}", hint).yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(e) = err.downcast_ref::<SessionIdError>() {
        return match e {
            SessionIdError::InvalidKey => Some("The signing key must not be empty."),
            SessionIdError::RandomnessUnavailable { .. } => {
                Some("The OS random source failed. Check the host before retrying.")
            }
            SessionIdError::MalformedIdentifier => {
                Some("Session IDs are 88-character URL-safe base64 strings. Try `sidctl inspect`.")
            }
            SessionIdError::InvalidSignature => {
                Some("The ID was not minted with this key, or it was altered in transit.")
            }
        };
    }

    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::MissingSigningKey) => {
            Some("Export SIDCTL_SIGNING_KEY or point SIDCTL_SIGNING_KEY_FILE at the key.")
        }
        Some(ConfigError::KeyFile { .. }) => Some("Check the key file path and its permissions."),
        Some(ConfigError::InvalidSigningKey(_)) => Some("The signing key must not be empty."),
        None => None,
    }
}
