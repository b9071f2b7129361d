//! Install command implementation.
//!
//! The `biorecipe install` command runs the named recipes (or all of them)
//! against the target, skipping any whose executable is already present.

use crate::cli::args::InstallArgs;
use crate::error::{RecipeError, Result};
use crate::runner::Provisioner;
use crate::ui::{format_duration, UserInterface};

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    context: CommandContext,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(context: CommandContext, args: InstallArgs) -> Self {
        Self { context, args }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.recipes.is_empty() && !self.args.all {
            return Err(RecipeError::ConfigValidationError {
                message: "Name at least one recipe, or pass --all".to_string(),
            });
        }

        let config = self.context.load_config()?;
        let book = self.context.recipe_book(&config);
        let recipes = self.context.select_recipes(&book, &self.args.recipes)?;
        let env = self.context.connect(&config, self.args.dry_run)?;

        ui.show_header(&env.session().describe());
        if self.args.dry_run {
            ui.message("Running in dry-run mode; nothing will be changed");
        }

        let report = Provisioner::new(&env).run(&recipes, ui)?;

        if self.args.dry_run {
            ui.success(&format!("{} recipe(s) planned", report.planned()));
        } else {
            ui.success(&format!(
                "{} installed, {} already present ({})",
                report.installed(),
                report.skipped(),
                format_duration(report.total_duration())
            ));
        }
        Ok(CommandResult::success())
    }
}
