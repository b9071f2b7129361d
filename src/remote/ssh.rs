//! Session over the system `ssh` client.

use std::path::PathBuf;

use crate::config::HostConfig;
use crate::error::{RecipeError, Result};
use crate::shell::{execute_program, CommandOptions, CommandResult};

use super::Session;

/// Exit code `ssh` uses for its own failures (connection, auth).
const SSH_ERROR_EXIT: i32 = 255;

/// Runs commands on a remote host through the local `ssh` binary.
///
/// Batch mode is always on: a recipe run must never stop at a password or
/// host-key prompt.
#[derive(Debug, Clone)]
pub struct SshSession {
    host: String,
    user: Option<String>,
    port: Option<u16>,
    identity_file: Option<PathBuf>,
    program: String,
}

impl SshSession {
    /// Create a session for `host` with default user, port and key.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: None,
            port: None,
            identity_file: None,
            program: "ssh".to_string(),
        }
    }

    /// Build a session from the `host:` block of the config.
    pub fn from_config(host: &HostConfig) -> Self {
        Self {
            host: host.address.clone(),
            user: host.user.clone(),
            port: host.port,
            identity_file: host.identity_file.clone(),
            program: "ssh".to_string(),
        }
    }

    /// Set the login user.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the private key file.
    pub fn with_identity_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.identity_file = Some(path.into());
        self
    }

    /// Use a different ssh binary.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// `user@host`, or just `host` when no user is set.
    pub fn destination(&self) -> String {
        match &self.user {
            Some(user) => format!("{}@{}", user, self.host),
            None => self.host.clone(),
        }
    }

    /// Arguments passed to `ssh` to run `command` remotely.
    ///
    /// The command goes over as a single argument; the remote login shell
    /// parses it.
    pub fn ssh_args(&self, command: &str) -> Vec<String> {
        let mut args = vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            "ConnectTimeout=30".to_string(),
        ];
        if let Some(port) = self.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }
        if let Some(identity) = &self.identity_file {
            args.push("-i".to_string());
            args.push(identity.display().to_string());
        }
        args.push(self.destination());
        args.push("--".to_string());
        args.push(command.to_string());
        args
    }
}

impl Session for SshSession {
    fn exec(&self, command: &str) -> Result<CommandResult> {
        let args = self.ssh_args(command);
        let result = execute_program(&self.program, &args, &CommandOptions::captured())?;

        if result.exit_code == Some(SSH_ERROR_EXIT) {
            return Err(RecipeError::SessionFailed {
                target: self.describe(),
                message: result.stderr.trim().to_string(),
            });
        }

        Ok(result)
    }

    fn describe(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.destination(), port),
            None => self.destination(),
        }
    }
}
