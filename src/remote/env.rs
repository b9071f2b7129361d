//! The environment context handed to every recipe.

use crate::config::InstallPaths;
use crate::error::Result;
use crate::shell::{quote, CommandResult};

use super::Session;

/// A session plus the install layout and privilege policy of the target.
pub struct RemoteEnv {
    session: Box<dyn Session>,
    paths: InstallPaths,
    use_sudo: bool,
}

impl RemoteEnv {
    /// Create an environment context.
    pub fn new(session: Box<dyn Session>, paths: InstallPaths, use_sudo: bool) -> Self {
        Self {
            session,
            paths,
            use_sudo,
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &dyn Session {
        self.session.as_ref()
    }

    /// Install layout on the target.
    pub fn paths(&self) -> &InstallPaths {
        &self.paths
    }

    /// Whether privileged commands go through `sudo`.
    pub fn uses_sudo(&self) -> bool {
        self.use_sudo
    }

    /// `<system_install>/bin`.
    pub fn bin_dir(&self) -> String {
        join_path(&self.paths.system_install, "bin")
    }

    /// Run a command and return its result whatever the exit code.
    pub fn query(&self, command: &str) -> Result<CommandResult> {
        tracing::debug!(host = %self.session.describe(), "query: {}", command);
        self.session.exec(command)
    }

    /// Run a command; a non-zero exit is an error.
    pub fn run(&self, command: &str) -> Result<CommandResult> {
        tracing::debug!(host = %self.session.describe(), "run: {}", command);
        self.session.exec(command)?.into_checked(command)
    }

    /// Run a command inside `dir`.
    pub fn run_in(&self, dir: &str, command: &str) -> Result<CommandResult> {
        self.run(&format!("cd {} && {}", quote(dir), command))
    }

    /// Run a command with elevated privileges when the policy asks for it.
    ///
    /// `sudo -n` never prompts: a host without passwordless sudo fails the
    /// command instead of hanging the run.
    pub fn safe_sudo(&self, command: &str) -> Result<CommandResult> {
        self.run(&self.privileged(command))
    }

    /// [`safe_sudo`](Self::safe_sudo) inside `dir`.
    pub fn safe_sudo_in(&self, dir: &str, command: &str) -> Result<CommandResult> {
        self.run_in(dir, &self.privileged(command))
    }

    /// Replace every literal occurrence of `before` with `after` in `file`.
    ///
    /// Edits in place and leaves a `.bak` copy next to the file.
    pub fn sed_in_place(
        &self,
        dir: &str,
        file: &str,
        before: &str,
        after: &str,
    ) -> Result<CommandResult> {
        let expr = format!(
            "s/{}/{}/g",
            escape_sed_pattern(before),
            escape_sed_replacement(after)
        );
        self.run_in(
            dir,
            &format!("sed -i.bak -r -e {} {}", quote(&expr), quote(file)),
        )
    }

    fn privileged(&self, command: &str) -> String {
        if self.use_sudo {
            format!("sudo -n {}", command)
        } else {
            command.to_string()
        }
    }
}

/// Join remote path segments with exactly one `/` between them.
pub fn join_path(base: &str, child: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        child.trim_start_matches('/')
    )
}

/// Escape a literal string for use as a sed extended regex.
fn escape_sed_pattern(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    for c in literal.chars() {
        if matches!(
            c,
            '\\' | '^' | '$' | '.' | '*' | '[' | ']' | '+' | '?' | '(' | ')' | '{' | '}' | '|' | '/'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape a literal string for the replacement half of `s///`.
fn escape_sed_replacement(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    for c in literal.chars() {
        if matches!(c, '\\' | '&' | '/') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
