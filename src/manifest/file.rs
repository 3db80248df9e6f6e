//! TOML application manifest file.
//!
//! Settings live in an `[application]` table:
//!
//! ```toml
//! [application]
//! startup_entry_point = "Alpha.xaml"
//! shutdown_behavior = "OnLastWindowClose"
//! ```
//!
//! Reads treat a missing file or key as absent. Writes go through a
//! read-modify-write cycle that preserves unrelated content; the cycle is
//! serialized per instance and persisted atomically (write to .tmp, then
//! rename).

use crate::error::ManifestError;
use crate::manifest::ManifestAccessor;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

const APPLICATION_TABLE: &str = "application";
const STARTUP_ENTRY_POINT_KEY: &str = "startup_entry_point";
const SHUTDOWN_BEHAVIOR_KEY: &str = "shutdown_behavior";

/// File-backed manifest accessor.
pub struct TomlManifestFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TomlManifestFile {
    /// Create an accessor for the manifest at `path`. No I/O happens until
    /// the first operation; the file may not exist yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Option<toml::Table>, ManifestError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let table =
                    content
                        .parse::<toml::Table>()
                        .map_err(|e| ManifestError::Malformed {
                            path: self.path.clone(),
                            message: e.to_string(),
                        })?;
                Ok(Some(table))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ManifestError::IoError(e)),
        }
    }

    async fn read_key(&self, key: &str) -> Result<Option<String>, ManifestError> {
        let Some(doc) = self.load().await? else {
            return Ok(None);
        };

        Ok(doc
            .get(APPLICATION_TABLE)
            .and_then(|v| v.as_table())
            .and_then(|t| t.get(key))
            .and_then(|v| v.as_str())
            .map(str::to_string))
    }

    async fn write_key(&self, key: &str, value: &str) -> Result<(), ManifestError> {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.load().await?.unwrap_or_default();
        let entry = doc
            .entry(APPLICATION_TABLE.to_string())
            .or_insert_with(|| toml::Value::Table(toml::Table::new()));
        let Some(table) = entry.as_table_mut() else {
            return Err(ManifestError::Malformed {
                path: self.path.clone(),
                message: format!("`{}` is not a table", APPLICATION_TABLE),
            });
        };
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        self.persist(&doc).await
    }

    /// Atomic persist: serialize to a sibling .tmp file, then rename over
    /// the target.
    async fn persist(&self, doc: &toml::Table) -> Result<(), ManifestError> {
        let serialized = toml::to_string_pretty(doc).map_err(|e| ManifestError::Malformed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp_path = self.path.with_extension("tmp");
        tokio::fs::write(&tmp_path, serialized).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        debug!(path = %self.path.display(), "manifest persisted");
        Ok(())
    }
}

#[async_trait]
impl ManifestAccessor for TomlManifestFile {
    async fn startup_entry_point(&self) -> Result<Option<String>, ManifestError> {
        self.read_key(STARTUP_ENTRY_POINT_KEY).await
    }

    async fn set_startup_entry_point(&self, value: &str) -> Result<(), ManifestError> {
        self.write_key(STARTUP_ENTRY_POINT_KEY, value).await
    }

    async fn shutdown_behavior(&self) -> Result<Option<String>, ManifestError> {
        self.read_key(SHUTDOWN_BEHAVIOR_KEY).await
    }

    async fn set_shutdown_behavior(&self, value: &str) -> Result<(), ManifestError> {
        self.write_key(SHUTDOWN_BEHAVIOR_KEY, value).await
    }
}
