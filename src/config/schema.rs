//! Configuration file schema.
//!
//! ```yaml
//! host:
//!   address: bio.example.org
//!   user: ubuntu
//!   port: 22
//!   identity_file: /home/me/.ssh/id_ed25519
//! paths:
//!   system_install: /usr/local
//!   work_dir: /tmp/biorecipe
//! use_sudo: true
//! recipes:
//!   emboss:
//!     version: 6.6.0
//!     url: ftp://mirror.example.org/EMBOSS-{version}.tar.gz
//!     guard: embossversion
//!     procedure:
//!       kind: configure_make
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

use crate::recipe::Procedure;

/// Root of `.biorecipe/config.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisionConfig {
    /// Target host; absent means one must come from the command line.
    pub host: Option<HostConfig>,

    /// Install layout on the target.
    pub paths: InstallPaths,

    /// Run privileged steps through `sudo`.
    pub use_sudo: bool,

    /// Extra recipes, or overrides of built-in ones.
    pub recipes: BTreeMap<String, RecipeConfig>,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            host: None,
            paths: InstallPaths::default(),
            use_sudo: true,
            recipes: BTreeMap::new(),
        }
    }
}

/// SSH connection details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Hostname or IP address.
    pub address: String,

    /// Login user.
    #[serde(default)]
    pub user: Option<String>,

    /// SSH port.
    #[serde(default)]
    pub port: Option<u16>,

    /// Private key file.
    #[serde(default)]
    pub identity_file: Option<PathBuf>,
}

/// Where things go on the target host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallPaths {
    /// Install prefix; binaries land in `<system_install>/bin`.
    pub system_install: String,

    /// Scratch directory for downloads and builds.
    pub work_dir: String,
}

impl Default for InstallPaths {
    fn default() -> Self {
        Self {
            system_install: "/usr/local".to_string(),
            work_dir: "/tmp/biorecipe".to_string(),
        }
    }
}

/// A recipe declared in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeConfig {
    /// One-line description.
    #[serde(default)]
    pub description: Option<String>,

    /// Version to install. Unquoted numbers such as `1.19` are accepted.
    #[serde(deserialize_with = "deserialize_version")]
    pub version: String,

    /// Archive URL template.
    pub url: String,

    /// Executable proving the recipe is installed.
    pub guard: String,

    /// Unpacked directory name, when not derivable from the archive name.
    #[serde(default)]
    pub unpack_dir: Option<String>,

    /// Build or relocation step.
    pub procedure: Procedure,
}

/// YAML reads `version: 1.19` as a float; take it back as written.
///
/// Trailing zeros after the first decimal (`1.10`) are lost by the YAML
/// parser and need quoting.
fn deserialize_version<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(version) => Ok(version),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(de::Error::custom(format!(
            "version must be a string or a number, got {:?}",
            other
        ))),
    }
}
