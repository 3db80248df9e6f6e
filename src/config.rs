//! Configuration System
//!
//! Layered configuration for the propgate CLI and library consumers.
//! Defaults are merged with a global user config file, then per-project
//! config files, with runtime validation before use.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PropgateConfig {
    /// Project and manifest file names
    #[serde(default)]
    pub files: FilesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// File name configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Name of the project file inside the project root
    #[serde(default = "default_project_file")]
    pub project_file: String,

    /// Name of the application manifest file inside the project root
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,
}

fn default_project_file() -> String {
    "project.toml".to_string()
}

fn default_manifest_file() -> String {
    "App.toml".to_string()
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            project_file: default_project_file(),
            manifest_file: default_manifest_file(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Files(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Files(msg) => write!(f, "Files: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl FilesConfig {
    /// Validate file name configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.project_file.is_empty() {
            return Err("Project file name cannot be empty".to_string());
        }
        if self.manifest_file.is_empty() {
            return Err("Manifest file name cannot be empty".to_string());
        }
        if self.project_file == self.manifest_file {
            return Err("Project file and manifest file must differ".to_string());
        }

        Ok(())
    }
}

impl PropgateConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.files.validate() {
            errors.push(ValidationError::Files(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
