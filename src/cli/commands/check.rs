//! Check command implementation.
//!
//! The `biorecipe check` command reports, for each recipe, whether its
//! guarded executable is already on the target. It never installs.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::guard::GuardStatus;
use crate::runner::Provisioner;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    context: CommandContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: CommandContext, args: CheckArgs) -> Self {
        Self { context, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        let book = self.context.recipe_book(&config);
        let recipes = self.context.select_recipes(&book, &self.args.recipes)?;
        let env = self.context.connect(&config, false)?;

        ui.show_header(&env.session().describe());

        let checks = Provisioner::new(&env).check(&recipes)?;
        let mut missing = 0;
        for check in &checks {
            match &check.status {
                GuardStatus::Present { path } => ui.success(&format!(
                    "{} {} installed ({})",
                    check.name, check.version, path
                )),
                GuardStatus::Absent => {
                    missing += 1;
                    ui.warning(&format!(
                        "{} {} not installed ({} not on PATH)",
                        check.name, check.version, check.guard
                    ));
                }
            }
        }

        ui.message(&format!(
            "{} of {} recipes installed",
            checks.len() - missing,
            checks.len()
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::TargetArgs;
    use crate::error::RecipeError;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn context(root: &std::path::Path, target: TargetArgs) -> CommandContext {
        CommandContext {
            root: root.to_path_buf(),
            config_path: None,
            target,
        }
    }

    #[test]
    fn unknown_recipe_is_rejected_before_connecting() {
        let temp = TempDir::new().unwrap();
        let args = CheckArgs {
            recipes: vec!["blast".to_string()],
        };
        let err = CheckCommand::new(context(temp.path(), TargetArgs::default()), args)
            .execute(&mut MockUI::new())
            .unwrap_err();
        assert!(matches!(err, RecipeError::UnknownRecipe { .. }));
    }

    #[test]
    fn missing_host_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        let err = CheckCommand::new(
            context(temp.path(), TargetArgs::default()),
            CheckArgs::default(),
        )
        .execute(&mut MockUI::new())
        .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn local_check_reports_each_recipe() {
        let temp = TempDir::new().unwrap();
        let target = TargetArgs {
            local: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = CheckCommand::new(context(temp.path(), target), CheckArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), ["localhost"]);
        assert_eq!(ui.successes().len() + ui.warnings().len(), 2);
        assert!(ui.has_message("recipes installed"));
    }
}
