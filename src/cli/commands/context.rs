//! Config loading and target selection shared by commands.

use std::path::PathBuf;

use crate::cli::args::{Cli, TargetArgs};
use crate::config::{load_config, ProvisionConfig};
use crate::error::{RecipeError, Result};
use crate::recipe::{Recipe, RecipeBook};
use crate::remote::{DryRunSession, LocalSession, RemoteEnv, Session, SshSession};
use crate::shell::is_elevated;

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Directory config discovery starts from.
    pub root: PathBuf,

    /// Explicit `--config` path.
    pub config_path: Option<PathBuf>,

    /// Host selection flags.
    pub target: TargetArgs,
}

impl CommandContext {
    /// Build the context from parsed arguments.
    pub fn from_cli(cli: &Cli, root: PathBuf) -> Self {
        Self {
            root,
            config_path: cli.config.clone(),
            target: cli.target.clone(),
        }
    }

    /// Load and validate configuration.
    pub fn load_config(&self) -> Result<ProvisionConfig> {
        load_config(&self.root, self.config_path.as_deref())
    }

    /// Built-in recipes plus those from config.
    pub fn recipe_book(&self, config: &ProvisionConfig) -> RecipeBook {
        RecipeBook::from_config(config)
    }

    /// Resolve requested names; an empty list means every recipe.
    pub fn select_recipes(&self, book: &RecipeBook, names: &[String]) -> Result<Vec<Recipe>> {
        if names.is_empty() {
            return Ok(book.all().into_iter().cloned().collect());
        }
        book.select(names)
    }

    /// Open the environment the command line and config point at.
    ///
    /// Flags win over the config file. With `dry_run`, commands are
    /// recorded against the same target description but never executed.
    pub fn connect(&self, config: &ProvisionConfig, dry_run: bool) -> Result<RemoteEnv> {
        let session: Box<dyn Session> = if self.target.local {
            Box::new(LocalSession::new())
        } else {
            Box::new(self.ssh_session(config)?)
        };

        let mut use_sudo = config.use_sudo && !self.target.no_sudo;
        if self.target.local && is_elevated() {
            use_sudo = false;
        }

        let session: Box<dyn Session> = if dry_run {
            Box::new(DryRunSession::new(session.describe()))
        } else {
            session
        };

        tracing::debug!(host = %session.describe(), use_sudo, "connecting");
        Ok(RemoteEnv::new(session, config.paths.clone(), use_sudo))
    }

    fn ssh_session(&self, config: &ProvisionConfig) -> Result<SshSession> {
        let mut session = match (&self.target.host, &config.host) {
            (Some(host), _) => SshSession::new(host.clone()),
            (None, Some(host)) => SshSession::from_config(host),
            (None, None) => {
                return Err(RecipeError::ConfigValidationError {
                    message: "No target host: pass --host, --local, or set host.address in .biorecipe/config.yml".to_string(),
                })
            }
        };

        // Flags override the config host block field by field.
        if self.target.host.is_some() {
            if let Some(host) = &config.host {
                if let Some(user) = &host.user {
                    session = session.with_user(user.clone());
                }
                if let Some(port) = host.port {
                    session = session.with_port(port);
                }
                if let Some(identity) = &host.identity_file {
                    session = session.with_identity_file(identity.clone());
                }
            }
        }
        if let Some(user) = &self.target.user {
            session = session.with_user(user.clone());
        }
        if let Some(port) = self.target.port {
            session = session.with_port(port);
        }
        if let Some(identity) = &self.target.identity {
            session = session.with_identity_file(identity.clone());
        }

        Ok(session)
    }
}
