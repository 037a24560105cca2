use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A product record failed validation.
    #[error("invalid product record: {0}")]
    Validation(#[from] DomainError),

    /// The catalog endpoint was unreachable, timed out, or answered with an
    /// error status.
    #[error("network error: {0}")]
    Network(String),

    /// The catalog answered with a payload of unexpected shape.
    #[error("unexpected catalog payload: {0}")]
    RemoteFormat(String),

    /// Reading, writing or decoding the snapshot file failed.
    #[error("snapshot persistence failed for {}: {reason}", path.display())]
    Persistence { path: PathBuf, reason: String },

    #[error("telegram error: {0}")]
    Telegram(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn persistence(path: &Path, reason: impl std::fmt::Display) -> Self {
        Error::Persistence {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Short machine-friendly label used in log fields and status output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::Validation(_) => "validation",
            Error::Network(_) => "network",
            Error::RemoteFormat(_) => "remote_format",
            Error::Persistence { .. } => "persistence",
            Error::Telegram(_) => "telegram",
        }
    }
}
