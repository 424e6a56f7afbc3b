//! Configuration loaded from the environment.
//!
//! Handles:
//! - Signing key, inline or from a file
//! - Fallback log filter

use std::fs;
use std::path::{Path, PathBuf};

use gw_session_id::{SessionIdError, SigningKey};
use thiserror::Error;
use zeroize::Zeroizing;

/// Signing key as raw text.
pub const SIGNING_KEY_ENV: &str = "SIDCTL_SIGNING_KEY";

/// Path to a file holding the signing key.
pub const SIGNING_KEY_FILE_ENV: &str = "SIDCTL_SIGNING_KEY_FILE";

/// Log filter used when `RUST_LOG` is unset.
pub const LOG_LEVEL_ENV: &str = "SIDCTL_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no signing key configured (set SIDCTL_SIGNING_KEY or SIDCTL_SIGNING_KEY_FILE, or pass --key-file)")]
    MissingSigningKey,

    #[error("failed to read signing key file {path:?}")]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid signing key: {0}")]
    InvalidSigningKey(#[from] SessionIdError),
}

/// Where the signing key comes from. Nothing is read until the key is needed.
#[derive(Clone)]
pub enum KeySource {
    File(PathBuf),
    Inline(Zeroizing<String>),
}

impl KeySource {
    fn load(&self) -> Result<SigningKey, ConfigError> {
        match self {
            KeySource::File(path) => read_key_file(path),
            KeySource::Inline(raw) => Ok(SigningKey::new(raw.as_bytes())?),
        }
    }
}

impl std::fmt::Debug for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeySource::File(path) => f.debug_tuple("File").field(path).finish(),
            KeySource::Inline(_) => f.write_str("Inline([REDACTED])"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub key_source: Option<KeySource>,
    pub log_level: String,
}

impl Config {
    pub fn from_env(key_file: Option<&Path>) -> Self {
        Self::from_lookup(key_file, |name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    ///
    /// `key_file` takes precedence over both key variables, and the file
    /// variable takes precedence over the inline one.
    pub fn from_lookup<F>(key_file: Option<&Path>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let key_source = key_file
            .map(|path| KeySource::File(path.to_path_buf()))
            .or_else(|| lookup(SIGNING_KEY_FILE_ENV).map(|path| KeySource::File(path.into())))
            .or_else(|| {
                lookup(SIGNING_KEY_ENV).map(|raw| KeySource::Inline(Zeroizing::new(raw)))
            });

        let log_level = lookup(LOG_LEVEL_ENV).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            key_source,
            log_level,
        }
    }

    /// Loads the signing key from its configured source.
    pub fn require_signing_key(&self) -> Result<SigningKey, ConfigError> {
        self.key_source
            .as_ref()
            .ok_or(ConfigError::MissingSigningKey)?
            .load()
    }
}

fn read_key_file(path: &Path) -> Result<SigningKey, ConfigError> {
    let raw = fs::read(path).map_err(|source| ConfigError::KeyFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut contents = Zeroizing::new(raw);

    // Editors leave a trailing newline
    while matches!(contents.last(), Some(b'\n' | b'\r')) {
        contents.pop();
    }

    Ok(SigningKey::new(contents.as_slice())?)
}
