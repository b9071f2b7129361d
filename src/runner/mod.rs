//! Recipe execution: check presence, then install.
//!
//! [`Provisioner`] walks recipes in the order given. For each one it asks
//! the presence guard, skips the recipe if its executable is already on
//! PATH, and otherwise runs the install procedure and asks the guard again
//! to confirm the executable arrived. The first failure ends the run.

pub mod report;

pub use report::{RecipeCheck, RecipeOutcome, RecipeStatus, RunReport};

use std::time::Instant;

use crate::error::{RecipeError, Result};
use crate::guard::{GuardStatus, PresenceGuard};
use crate::install::get_install;
use crate::recipe::Recipe;
use crate::remote::RemoteEnv;
use crate::ui::{format_duration, UserInterface};

/// Runs recipes against one environment.
pub struct Provisioner<'a> {
    env: &'a RemoteEnv,
}

impl<'a> Provisioner<'a> {
    /// Create a provisioner for `env`.
    pub fn new(env: &'a RemoteEnv) -> Self {
        Self { env }
    }

    /// Query the guard of every recipe without installing anything.
    pub fn check(&self, recipes: &[Recipe]) -> Result<Vec<RecipeCheck>> {
        recipes
            .iter()
            .map(|recipe| {
                let status = PresenceGuard::new(&recipe.guard).check(self.env)?;
                Ok(RecipeCheck {
                    name: recipe.name.clone(),
                    version: recipe.version.clone(),
                    guard: recipe.guard.clone(),
                    status,
                })
            })
            .collect()
    }

    /// Install `recipe` unless its guard finds it.
    pub fn install(&self, recipe: &Recipe) -> Result<RecipeStatus> {
        let guard = PresenceGuard::new(&recipe.guard);

        if let GuardStatus::Present { path } = guard.check(self.env)? {
            tracing::info!("{} already installed ({})", recipe.name, path);
            return Ok(RecipeStatus::Skipped { path });
        }

        get_install(self.env, recipe)?;

        if self.env.session().is_dry_run() {
            return Ok(RecipeStatus::Planned);
        }

        match guard.check(self.env)? {
            GuardStatus::Present { path } => {
                tracing::info!("{} {} installed at {}", recipe.name, recipe.version, path);
                Ok(RecipeStatus::Installed)
            }
            GuardStatus::Absent => Err(RecipeError::NotInstalled {
                recipe: recipe.name.clone(),
                executable: recipe.guard.clone(),
            }),
        }
    }

    /// Install every recipe in order, reporting progress through `ui`.
    ///
    /// Stops at the first failing recipe and returns its error; recipes
    /// after it are not attempted. On a dry run each planned recipe is
    /// followed by the commands it would have run.
    pub fn run(&self, recipes: &[Recipe], ui: &mut dyn UserInterface) -> Result<RunReport> {
        let mut report = RunReport::default();

        for recipe in recipes {
            let label = format!("{} {}", recipe.name, recipe.version);
            let mut spinner = ui.start_spinner(&format!("{}...", label));
            let start = Instant::now();

            let status = match self.install(recipe) {
                Ok(status) => status,
                Err(e) => {
                    spinner.finish_error(&format!("{} failed", label));
                    tracing::warn!(
                        "Aborting after {} of {} recipes: {}",
                        report.outcomes.len(),
                        recipes.len(),
                        e
                    );
                    return Err(e);
                }
            };
            let duration = start.elapsed();

            match &status {
                RecipeStatus::Skipped { path } => {
                    spinner.finish_skipped(&format!("{} already installed ({})", label, path))
                }
                RecipeStatus::Installed => spinner.finish_success(&format!(
                    "{} installed in {}",
                    label,
                    format_duration(duration)
                )),
                RecipeStatus::Planned => {
                    spinner.finish_success(&format!("{} planned", label));
                    for command in self.env.session().take_plan() {
                        ui.message(&format!("    $ {}", command));
                    }
                }
            }

            report.outcomes.push(RecipeOutcome {
                name: recipe.name.clone(),
                version: recipe.version.clone(),
                status,
                duration,
            });
        }

        Ok(report)
    }
}
