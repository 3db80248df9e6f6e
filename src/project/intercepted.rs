//! Intercepted project properties.
//!
//! Composition of the project store and registered value providers. For a
//! property name with a registered provider, every get and set consults
//! the provider with the store as the live snapshot; a declined call
//! (`None`) falls through to the store. Unrecognized names never reach a
//! provider.

use crate::error::SettingsError;
use crate::intercept::InterceptingValueProvider;
use crate::project::store::ProjectStore;
use crate::properties::PropertyLookup;
use std::collections::HashMap;
use std::sync::Arc;

/// A property value resolved through the interception layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProperty {
    /// Raw value stored in the project file, if any.
    pub stored: Option<String>,
    /// Effective value after interception.
    pub effective: Option<String>,
    /// True when a provider supplied the effective value.
    pub from_provider: bool,
}

/// Project properties with provider interception.
pub struct InterceptedProperties {
    store: ProjectStore,
    providers: HashMap<&'static str, Arc<dyn InterceptingValueProvider>>,
}

impl InterceptedProperties {
    pub fn new(store: ProjectStore) -> Self {
        Self {
            store,
            providers: HashMap::new(),
        }
    }

    /// Register a provider for every property name it declares.
    pub fn with_provider(mut self, provider: Arc<dyn InterceptingValueProvider>) -> Self {
        for name in provider.property_names() {
            self.providers.insert(name, provider.clone());
        }
        self
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Property names with a registered provider.
    pub fn provider_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.providers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Resolve a property: stored value, effective value, and origin.
    pub async fn resolve(&self, name: &str) -> Result<ResolvedProperty, SettingsError> {
        let stored = self.store.property(name).map(str::to_string);

        if let Some(provider) = self.providers.get(name) {
            let unevaluated = stored.as_deref().unwrap_or("");
            if let Some(value) = provider.on_get_value(name, unevaluated, &self.store).await? {
                return Ok(ResolvedProperty {
                    stored,
                    effective: Some(value),
                    from_provider: true,
                });
            }
        }

        Ok(ResolvedProperty {
            effective: stored.clone(),
            stored,
            from_provider: false,
        })
    }

    /// Effective value of a property.
    pub async fn get_value(&self, name: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.resolve(name).await?.effective)
    }

    /// Assign a property value.
    ///
    /// A registered provider is consulted first: `Some` means the returned
    /// value goes to the project file, `None` means the write is already
    /// handled and nothing is persisted here. Names without a provider go
    /// straight to the project file.
    pub async fn set_value(&mut self, name: &str, value: &str) -> Result<(), SettingsError> {
        let provider = self.providers.get(name).cloned();

        if let Some(provider) = provider {
            if let Some(passthrough) = provider.on_set_value(name, value, &self.store).await? {
                self.store.set_property(name, &passthrough);
                self.store.save()?;
            }
            return Ok(());
        }

        self.store.set_property(name, value);
        self.store.save()
    }
}
