//! List command implementation.
//!
//! The `biorecipe list` command shows the recipes available to a run.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::recipe::Recipe;
use crate::ui::{should_use_colors, RecipeTheme, UserInterface};

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    context: CommandContext,
    args: ListArgs,
}

/// One row of `list --json`.
#[derive(Debug, Serialize)]
struct RecipeEntry<'a> {
    name: &'a str,
    version: &'a str,
    guard: &'a str,
    procedure: &'static str,
    url: String,
    description: &'a str,
}

impl<'a> RecipeEntry<'a> {
    fn from_recipe(recipe: &'a Recipe) -> Result<Self> {
        Ok(Self {
            name: &recipe.name,
            version: &recipe.version,
            guard: &recipe.guard,
            procedure: recipe.procedure.kind(),
            url: recipe.resolved_url()?,
            description: &recipe.description,
        })
    }
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(context: CommandContext, args: ListArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        let book = self.context.recipe_book(&config);

        let entries = book
            .all()
            .into_iter()
            .map(RecipeEntry::from_recipe)
            .collect::<Result<Vec<_>>>()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            RecipeTheme::new()
        } else {
            RecipeTheme::plain()
        };
        ui.message(&format!("  {}", theme.highlight.apply_to("Recipes:")));
        for entry in &entries {
            ui.message(&format!(
                "    {} {} {}",
                theme.highlight.apply_to(entry.name),
                entry.version,
                theme
                    .dim
                    .apply_to(format!("({}, guard: {})", entry.procedure, entry.guard)),
            ));
            if !entry.description.is_empty() {
                ui.message(&format!("      {}", theme.dim.apply_to(entry.description)));
            }
        }

        Ok(CommandResult::success())
    }
}
