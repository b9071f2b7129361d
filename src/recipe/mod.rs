//! Recipe definitions.
//!
//! A [`Recipe`] names one tool, the version to install, where to fetch it,
//! which executable proves it is already installed, and the [`Procedure`]
//! that turns the unpacked archive into an installed program.
//!
//! # Example
//!
//! ```
//! use biorecipe::recipe::RecipeBook;
//!
//! let book = RecipeBook::builtin();
//! let emboss = book.get("emboss").unwrap();
//! assert_eq!(emboss.guard, "embossversion");
//! assert_eq!(
//!     emboss.resolved_url().unwrap(),
//!     "ftp://emboss.open-bio.org/pub/EMBOSS/EMBOSS-6.3.1.tar.gz"
//! );
//! ```

pub mod book;
pub mod builtin;
pub mod template;

pub use book::RecipeBook;
pub use builtin::builtin_recipes;
pub use template::{resolve_template, unresolved_placeholders};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How an unpacked archive becomes an installed program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Procedure {
    /// `./configure --prefix=<system_install>`, `make`, `make install`.
    ConfigureMake {
        #[serde(default)]
        configure_args: Vec<String>,
    },

    /// Relocate the jars and install a patched launcher script.
    JavaLauncher {
        /// Directory name under `share/java`, suffixed with the version.
        package: String,
        /// Jar the launcher refers to.
        jar: String,
        /// Launcher script shipped in the archive.
        launcher: String,
    },
}

impl Procedure {
    /// Short label for listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigureMake { .. } => "configure_make",
            Self::JavaLauncher { .. } => "java_launcher",
        }
    }
}

/// A named install procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    /// Recipe name used on the command line.
    pub name: String,

    /// One-line description.
    pub description: String,

    /// Version to install.
    pub version: String,

    /// Archive URL; may contain `{version}` (or `{v}`).
    pub url: String,

    /// Executable whose presence on PATH means "already installed".
    pub guard: String,

    /// Directory the archive unpacks into, when it differs from the archive
    /// name without its extension. May contain `{version}`.
    pub unpack_dir: Option<String>,

    /// Build or relocation step.
    pub procedure: Procedure,
}

impl Recipe {
    /// The archive URL with the version substituted.
    pub fn resolved_url(&self) -> Result<String> {
        resolve_template(&self.url, &self.version)
    }

    /// The unpack directory override with the version substituted.
    pub fn resolved_unpack_dir(&self) -> Result<Option<String>> {
        self.unpack_dir
            .as_deref()
            .map(|dir| resolve_template(dir, &self.version))
            .transpose()
    }
}
