//! ConfigLoader: layers defaults, files, and environment into a CounselConfig.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::CounselConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `config/config.toml`, workspace `config/{COUNSEL_ENV}.toml`, environment.
    pub fn load(workspace_root: &Path) -> Result<CounselConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Load a single explicit file over the defaults.
    pub fn load_from_file(path: &Path) -> Result<CounselConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
