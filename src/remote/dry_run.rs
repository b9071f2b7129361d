//! Session that prints the plan instead of touching the host.

use std::cell::RefCell;
use std::time::Duration;

use crate::error::Result;
use crate::shell::CommandResult;

use super::Session;

/// Records commands without executing them.
///
/// Every command reports success except presence queries (`which ...`,
/// `test -x ...`), which report the executable as absent so that a dry run walks through
/// the full install procedure of every recipe.
#[derive(Debug)]
pub struct DryRunSession {
    target: String,
    commands: RefCell<Vec<String>>,
}

impl DryRunSession {
    /// Create a dry-run session labelled with the host it stands in for.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            commands: RefCell::new(Vec::new()),
        }
    }

    /// Commands recorded and not yet taken.
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

fn is_presence_query(command: &str) -> bool {
    command.starts_with("which ") || command.starts_with("test -x ")
}

impl Session for DryRunSession {
    fn exec(&self, command: &str) -> Result<CommandResult> {
        tracing::debug!("[dry-run] {}", command);
        self.commands.borrow_mut().push(command.to_string());

        if is_presence_query(command) {
            return Ok(CommandResult::failure(
                Some(1),
                String::new(),
                String::new(),
                Duration::ZERO,
            ));
        }
        Ok(CommandResult::success(
            String::new(),
            String::new(),
            Duration::ZERO,
        ))
    }

    fn describe(&self) -> String {
        format!("{} (dry run)", self.target)
    }

    fn is_dry_run(&self) -> bool {
        true
    }

    fn take_plan(&self) -> Vec<String> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }
}
