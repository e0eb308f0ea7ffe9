//! Error types for the vocabulary store and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by store mutations and persistence.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Writing the backing file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path of the backing file.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the store failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("name must not be empty")]
    EmptyName,

    #[error("word must not be empty")]
    EmptyWord,

    #[error("unknown user '{0}'")]
    UnknownUser(String),

    #[error("'{user}' has no child named '{child}'")]
    UnknownChild { user: String, child: String },

    #[error("word index {index} is out of range ({len} words)")]
    WordIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_child(user: impl Into<String>, child: impl Into<String>) -> Self {
        Self::UnknownChild {
            user: user.into(),
            child: child.into(),
        }
    }

    /// True for failures caused by the caller pointing at data that does not exist.
    #[must_use]
    pub fn is_missing_reference(&self) -> bool {
        matches!(
            self,
            Self::UnknownUser(_) | Self::UnknownChild { .. } | Self::WordIndexOutOfRange { .. }
        )
    }
}

/// Failure to read `firstwords.toml` or the `FIRSTWORDS_*` environment.
#[derive(Error, Debug)]
#[error("failed to load configuration: {0}")]
pub struct ConfigError(#[from] Box<figment::Error>);

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}
