//! Project file storage.
//!
//! Loads the whole project file into memory, exposes the `[properties]`
//! table for lookup and mutation, and saves atomically (write to .tmp,
//! then rename) preserving unrelated tables. A missing file is an empty
//! store, not an error; the file is created on first save.

use crate::error::SettingsError;
use crate::properties::PropertyLookup;
use std::path::{Path, PathBuf};
use tracing::debug;

const PROPERTIES_TABLE: &str = "properties";

/// In-memory view of one project file.
#[derive(Debug)]
pub struct ProjectStore {
    path: PathBuf,
    doc: toml::Table,
}

impl ProjectStore {
    /// Load the project file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        let doc = match std::fs::read_to_string(&path) {
            Ok(content) => {
                content
                    .parse::<toml::Table>()
                    .map_err(|e| SettingsError::ProjectFile {
                        path: path.clone(),
                        message: e.to_string(),
                    })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml::Table::new(),
            Err(e) => return Err(SettingsError::IoError(e)),
        };

        Ok(Self { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn properties_table(&self) -> Option<&toml::Table> {
        self.doc.get(PROPERTIES_TABLE).and_then(|v| v.as_table())
    }

    /// All stored properties with string values, in file order.
    pub fn properties(&self) -> Vec<(String, String)> {
        self.properties_table()
            .map(|table| {
                table
                    .iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Set a property value in memory. Call [`ProjectStore::save`] to persist.
    pub fn set_property(&mut self, name: &str, value: &str) {
        let entry = self
            .doc
            .entry(PROPERTIES_TABLE.to_string())
            .or_insert_with(|| toml::Value::Table(toml::Table::new()));
        if let Some(table) = entry.as_table_mut() {
            table.insert(name.to_string(), toml::Value::String(value.to_string()));
        }
    }

    /// Persist the current state atomically.
    pub fn save(&self) -> Result<(), SettingsError> {
        let serialized =
            toml::to_string_pretty(&self.doc).map_err(|e| SettingsError::ProjectFile {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, serialized)?;
        std::fs::rename(&tmp_path, &self.path)?;
        debug!(path = %self.path.display(), "project file persisted");
        Ok(())
    }
}

impl PropertyLookup for ProjectStore {
    fn property(&self, name: &str) -> Option<&str> {
        self.properties_table()
            .and_then(|t| t.get(name))
            .and_then(|v| v.as_str())
    }
}
