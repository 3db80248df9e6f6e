//! Configuration loading facade.

use crate::config::merge::merge_policy;
use crate::config::sources::{global_file, workspace_file};
use crate::config::PropgateConfig;
use crate::error::SettingsError;
use config::File;
use std::path::Path;

/// Loads [`PropgateConfig`] from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a project root.
    /// Precedence: defaults, then the global user file, then project files.
    pub fn load(project_root: &Path) -> Result<PropgateConfig, SettingsError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, project_root)?;

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from an explicit file, skipping the layered sources.
    pub fn load_from_file(path: &Path) -> Result<PropgateConfig, SettingsError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()));

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
