//! Application Manifest Access
//!
//! The application manifest is a per-project settings file that owns the
//! startup entry point and shutdown behavior of windowed applications.
//! Access goes through a four-operation capability so any collaborator
//! satisfying the contract is substitutable, including recording test
//! doubles. Storage format and I/O belong to the implementation; callers
//! see opaque string values.

use crate::error::ManifestError;
use async_trait::async_trait;

pub mod file;

pub use file::TomlManifestFile;

/// Capability for reading and writing application manifest values.
///
/// The four operations are independently invokable; absent values are
/// `Ok(None)`, never errors. Cross-call ordering and mutual exclusion on
/// the underlying storage are the implementation's responsibility.
#[async_trait]
pub trait ManifestAccessor: Send + Sync {
    /// Startup entry point recorded in the manifest, if any.
    async fn startup_entry_point(&self) -> Result<Option<String>, ManifestError>;

    /// Record a new startup entry point.
    async fn set_startup_entry_point(&self, value: &str) -> Result<(), ManifestError>;

    /// Shutdown behavior recorded in the manifest, if any.
    async fn shutdown_behavior(&self) -> Result<Option<String>, ManifestError>;

    /// Record a new shutdown behavior.
    async fn set_shutdown_behavior(&self, value: &str) -> Result<(), ManifestError>;
}
