//! Biorecipe - idempotent installer recipes for bioinformatics tools.
//!
//! Each recipe installs one tool on a target host over a remote shell, and
//! only when the tool's executable is not already on the target's PATH.
//! Running the same recipes twice leaves the host unchanged the second time.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`guard`] - Presence checks that make recipes idempotent
//! - [`install`] - Download, unpack, build, and Java launcher installs
//! - [`recipe`] - Recipe definitions and the built-in recipe book
//! - [`remote`] - Sessions to the target host and the environment context
//! - [`runner`] - Running recipes in order and reporting outcomes
//! - [`shell`] - Local process execution and quoting
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use biorecipe::config::InstallPaths;
//! use biorecipe::recipe::RecipeBook;
//! use biorecipe::remote::{MockSession, RemoteEnv};
//! use biorecipe::runner::{Provisioner, RecipeStatus};
//!
//! let host = MockSession::new();
//! host.mark_installed("embossversion");
//! let env = RemoteEnv::new(Box::new(host.clone()), InstallPaths::default(), true);
//!
//! let book = RecipeBook::builtin();
//! let status = Provisioner::new(&env).install(book.get("emboss").unwrap()).unwrap();
//! assert!(matches!(status, RecipeStatus::Skipped { .. }));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod guard;
pub mod install;
pub mod recipe;
pub mod remote;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{RecipeError, Result};
