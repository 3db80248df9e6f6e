//! CLI route: run context wiring the settings stack. Dispatches commands to
//! domain services and presentation.

use crate::cli::output;
use crate::cli::parse::Commands;
use crate::config::{ConfigLoader, PropgateConfig};
use crate::error::SettingsError;
use crate::intercept::WindowedAppValueProvider;
use crate::manifest::TomlManifestFile;
use crate::project::{InterceptedProperties, ProjectStore};
use std::path::PathBuf;
use std::sync::Arc;

/// One row of `propgate show` output.
pub struct PropertyRow {
    pub name: String,
    pub stored: Option<String>,
    pub effective: Option<String>,
    pub from_manifest: bool,
}

/// Execution context for CLI commands.
pub struct RunContext {
    project_root: PathBuf,
    config: PropgateConfig,
}

impl RunContext {
    pub fn new(project_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, SettingsError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&project_root)?,
        };

        if let Err(errors) = config.validate() {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(SettingsError::ConfigError(joined));
        }

        Ok(Self {
            project_root,
            config,
        })
    }

    /// Assemble store, manifest accessor, and providers for this project.
    fn build_properties(&self) -> Result<InterceptedProperties, SettingsError> {
        let store = ProjectStore::load(self.project_root.join(&self.config.files.project_file))?;
        let manifest = Arc::new(TomlManifestFile::new(
            self.project_root.join(&self.config.files.manifest_file),
        ));
        let provider = Arc::new(WindowedAppValueProvider::new(manifest));

        Ok(InterceptedProperties::new(store).with_provider(provider))
    }

    pub async fn execute(&self, command: &Commands) -> Result<String, SettingsError> {
        match command {
            Commands::Get { name } => {
                let properties = self.build_properties()?;
                Ok(properties.get_value(name).await?.unwrap_or_default())
            }
            Commands::Set { name, value } => {
                let mut properties = self.build_properties()?;
                properties.set_value(name, value).await?;
                Ok(format!("{} = {}", name, value))
            }
            Commands::Show { format } => {
                let properties = self.build_properties()?;
                let rows = collect_rows(&properties).await?;
                output::format_show(&rows, format)
            }
        }
    }
}

/// Rows for `show`: every stored property plus every intercepted name.
async fn collect_rows(
    properties: &InterceptedProperties,
) -> Result<Vec<PropertyRow>, SettingsError> {
    let mut names: Vec<String> = properties
        .store()
        .properties()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    for name in properties.provider_names() {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names.sort();

    let mut rows = Vec::with_capacity(names.len());
    for name in names {
        let resolved = properties.resolve(&name).await?;
        rows.push(PropertyRow {
            name,
            stored: resolved.stored,
            effective: resolved.effective,
            from_manifest: resolved.from_provider,
        });
    }

    Ok(rows)
}
