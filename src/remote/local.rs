//! Session that runs commands on this machine.

use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult};

use super::Session;

/// Provisions the local host through `/bin/sh`.
#[derive(Debug, Clone, Default)]
pub struct LocalSession;

impl LocalSession {
    /// Create a local session.
    pub fn new() -> Self {
        Self
    }
}

impl Session for LocalSession {
    fn exec(&self, command: &str) -> Result<CommandResult> {
        execute(command, &CommandOptions::captured())
    }

    fn describe(&self) -> String {
        "localhost".to_string()
    }
}
