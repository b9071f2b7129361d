//! Configuration file discovery and loading.
//!
//! Without `--config`, the loader looks in the working directory for:
//! 1. `.biorecipe/config.yml`
//! 2. `.biorecipe/config.local.yml` (merged on top, usually untracked)
//!
//! Neither file is required; a missing config means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::config::merger::merge_configs;
use crate::config::schema::ProvisionConfig;
use crate::config::validator::validate;
use crate::error::{RecipeError, Result};

/// Directory holding configuration files.
pub const CONFIG_DIR: &str = ".biorecipe";

/// Config files found for a working directory, in merge order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// `.biorecipe/config.yml`
    pub project: Option<PathBuf>,

    /// `.biorecipe/config.local.yml`
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files under `root`.
    pub fn discover(root: &Path) -> Self {
        let dir = root.join(CONFIG_DIR);
        Self {
            project: existing(dir.join("config.yml")),
            project_local: existing(dir.join("config.local.yml")),
        }
    }

    /// Existing paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Load one config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ProvisionConfig> {
    let value = load_config_value(path)?;
    from_value(value, path)
}

/// Parse YAML content into a config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProvisionConfig> {
    let value = parse_value(content, source_path)?;
    from_value(value, source_path)
}

/// Load a config file as a raw YAML value, for merging.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RecipeError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RecipeError::Io(e)
        }
    })?;

    parse_value(&content, path)
}

fn parse_value(content: &str, path: &Path) -> Result<Value> {
    let value: Value =
        serde_yaml::from_str(content).map_err(|e| RecipeError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // An empty file parses as null; treat it like an empty mapping.
    Ok(if value.is_null() {
        Value::Mapping(Default::default())
    } else {
        value
    })
}

fn from_value(value: Value, path: &Path) -> Result<ProvisionConfig> {
    serde_yaml::from_value(value).map_err(|e| RecipeError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and validate the configuration for a run.
///
/// An explicit `config_override` must exist and is loaded on its own.
/// Otherwise the discovered files under `root` are merged, falling back
/// to defaults when there are none.
pub fn load_config(root: &Path, config_override: Option<&Path>) -> Result<ProvisionConfig> {
    let config = match config_override {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => {
            let paths = ConfigPaths::discover(root);
            let existing = paths.all_existing();
            if existing.is_empty() {
                tracing::debug!("No config under {}, using defaults", root.display());
                ProvisionConfig::default()
            } else {
                let mut layers = Vec::with_capacity(existing.len());
                for path in &existing {
                    tracing::debug!("Loading config layer {}", path.display());
                    layers.push(load_config_value(path)?);
                }
                from_value(merge_configs(&layers), existing[0])?
            }
        }
    };

    validate(&config)?;
    Ok(config)
}
