//! Error types for the propgate property interception system.

use std::path::PathBuf;
use thiserror::Error;

/// Application manifest errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Malformed manifest {path:?}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("Manifest I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Settings-layer errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Malformed project file {path:?}: {message}")]
    ProjectFile { path: PathBuf, message: String },

    #[error("Manifest error: {0}")]
    ManifestError(#[from] ManifestError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for SettingsError {
    fn from(err: config::ConfigError) -> Self {
        SettingsError::ConfigError(err.to_string())
    }
}
