//! Windowed-application value provider.
//!
//! `StartupEntryPoint` and `ShutdownBehavior` live in the per-project
//! application manifest when a project builds a windowed executable with
//! the windowed-UI feature enabled. This provider evaluates that gate
//! fresh on every call and dispatches the read or write to the manifest
//! accessor; in every other case it declines and the standard project
//! file path applies.

use crate::error::SettingsError;
use crate::intercept::gating::delegation_applies;
use crate::intercept::InterceptingValueProvider;
use crate::manifest::ManifestAccessor;
use crate::properties::{
    PropertyLookup, FEATURE_ENABLED_PROPERTY, OUTPUT_KIND_PROPERTY, SHUTDOWN_BEHAVIOR_PROPERTY,
    STARTUP_ENTRY_POINT_PROPERTY,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Conditional dispatcher for the two windowed-application properties.
///
/// Holds only the accessor handle; no state persists between calls and no
/// I/O happens at construction.
pub struct WindowedAppValueProvider {
    manifest: Arc<dyn ManifestAccessor>,
}

impl WindowedAppValueProvider {
    pub fn new(manifest: Arc<dyn ManifestAccessor>) -> Self {
        Self { manifest }
    }

    fn gated(&self, properties: &dyn PropertyLookup) -> bool {
        delegation_applies(
            properties.property(FEATURE_ENABLED_PROPERTY),
            properties.property(OUTPUT_KIND_PROPERTY),
        )
    }
}

#[async_trait]
impl InterceptingValueProvider for WindowedAppValueProvider {
    fn property_names(&self) -> &'static [&'static str] {
        &[STARTUP_ENTRY_POINT_PROPERTY, SHUTDOWN_BEHAVIOR_PROPERTY]
    }

    async fn on_get_value(
        &self,
        property_name: &str,
        _unevaluated_value: &str,
        properties: &dyn PropertyLookup,
    ) -> Result<Option<String>, SettingsError> {
        if !self.gated(properties) {
            return Ok(None);
        }

        match property_name {
            STARTUP_ENTRY_POINT_PROPERTY => {
                debug!(property = property_name, "reading from application manifest");
                Ok(self.manifest.startup_entry_point().await?)
            }
            SHUTDOWN_BEHAVIOR_PROPERTY => {
                debug!(property = property_name, "reading from application manifest");
                Ok(self.manifest.shutdown_behavior().await?)
            }
            _ => Ok(None),
        }
    }

    async fn on_set_value(
        &self,
        property_name: &str,
        new_value: &str,
        properties: &dyn PropertyLookup,
    ) -> Result<Option<String>, SettingsError> {
        if self.gated(properties) {
            match property_name {
                STARTUP_ENTRY_POINT_PROPERTY => {
                    debug!(property = property_name, "writing to application manifest");
                    self.manifest.set_startup_entry_point(new_value).await?;
                }
                SHUTDOWN_BEHAVIOR_PROPERTY => {
                    debug!(property = property_name, "writing to application manifest");
                    self.manifest.set_shutdown_behavior(new_value).await?;
                }
                _ => {}
            }
        }

        Ok(None)
    }
}
