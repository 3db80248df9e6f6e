//! Property Value Interception
//!
//! Seam between callers of project properties and providers that override
//! where individual property values live. A provider declares the property
//! names it handles; for those names it is consulted on every get and set
//! and may either supply/consume the value or decline, in which case the
//! caller resolves the value through the standard project file path.

use crate::error::SettingsError;
use crate::properties::PropertyLookup;
use async_trait::async_trait;

pub mod gating;
pub mod windowed_app;

pub use windowed_app::WindowedAppValueProvider;

/// A provider that intercepts reads and writes of selected properties.
///
/// Implementations are stateless between calls apart from their injected
/// collaborators; every invocation receives a fresh property snapshot.
#[async_trait]
pub trait InterceptingValueProvider: Send + Sync {
    /// Property names this provider intercepts. Names are exact,
    /// case-sensitive matches.
    fn property_names(&self) -> &'static [&'static str];

    /// Called when a caller reads `property_name`.
    ///
    /// `unevaluated_value` is the raw value as currently stored in the
    /// project file (empty when absent). Returns `Some` with the effective
    /// value to use instead, or `None` to fall back to standard resolution.
    async fn on_get_value(
        &self,
        property_name: &str,
        unevaluated_value: &str,
        properties: &dyn PropertyLookup,
    ) -> Result<Option<String>, SettingsError>;

    /// Called when a caller assigns `new_value` to `property_name`.
    ///
    /// Returns `Some` with the value the caller should persist through the
    /// standard storage path, or `None` when the write is fully handled
    /// here and nothing must be persisted to the project file.
    async fn on_set_value(
        &self,
        property_name: &str,
        new_value: &str,
        properties: &dyn PropertyLookup,
    ) -> Result<Option<String>, SettingsError>;
}
