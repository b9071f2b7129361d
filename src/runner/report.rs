//! Results of a provisioning run.

use std::time::Duration;

use crate::guard::GuardStatus;

/// What happened to one recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeStatus {
    /// The guard found the executable; nothing ran.
    Skipped { path: String },
    /// The install procedure ran and the executable is now present.
    Installed,
    /// Dry run: the install procedure was recorded, not executed.
    Planned,
}

/// Outcome of one recipe in a run.
#[derive(Debug, Clone)]
pub struct RecipeOutcome {
    pub name: String,
    pub version: String,
    pub status: RecipeStatus,
    pub duration: Duration,
}

/// Outcome of every recipe in a completed run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub outcomes: Vec<RecipeOutcome>,
}

impl RunReport {
    /// Recipes that were installed.
    pub fn installed(&self) -> usize {
        self.count(|s| matches!(s, RecipeStatus::Installed))
    }

    /// Recipes skipped by their guard.
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, RecipeStatus::Skipped { .. }))
    }

    /// Recipes only planned (dry run).
    pub fn planned(&self) -> usize {
        self.count(|s| matches!(s, RecipeStatus::Planned))
    }

    /// Total time spent across recipes.
    pub fn total_duration(&self) -> Duration {
        self.outcomes.iter().map(|o| o.duration).sum()
    }

    fn count(&self, pred: impl Fn(&RecipeStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

/// Presence of one recipe's executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCheck {
    pub name: String,
    pub version: String,
    pub guard: String,
    pub status: GuardStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, status: RecipeStatus, ms: u64) -> RecipeOutcome {
        RecipeOutcome {
            name: name.to_string(),
            version: "1".to_string(),
            status,
            duration: Duration::from_millis(ms),
        }
    }

    #[test]
    fn counts_by_status() {
        let report = RunReport {
            outcomes: vec![
                outcome("a", RecipeStatus::Installed, 10),
                outcome(
                    "b",
                    RecipeStatus::Skipped {
                        path: "/usr/bin/b".to_string(),
                    },
                    1,
                ),
                outcome("c", RecipeStatus::Planned, 0),
            ],
        };
        assert_eq!(report.installed(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.planned(), 1);
        assert_eq!(report.total_duration(), Duration::from_millis(11));
    }
}
