//! Configuration validation rules.
//!
//! - Install paths must be absolute
//! - Recipe names are lowercase words (`a-z`, digits, `-`, `_`)
//! - Recipe fields must not be empty
//! - URL templates may only use `{version}` / `{v}`

use std::sync::LazyLock;

use regex::Regex;

use crate::config::schema::ProvisionConfig;
use crate::error::{RecipeError, Result};
use crate::recipe::{unresolved_placeholders, Procedure};

static RECIPE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").unwrap());

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier.
    pub rule: &'static str,
    /// Human-readable message.
    pub message: String,
}

/// Collect every validation problem in `config`.
pub fn validate_config(config: &ProvisionConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("paths.system_install", &config.paths.system_install),
        ("paths.work_dir", &config.paths.work_dir),
    ] {
        if !value.starts_with('/') {
            errors.push(ValidationError {
                rule: "absolute-path",
                message: format!("{} must be an absolute path, got '{}'", field, value),
            });
        }
    }

    if let Some(host) = &config.host {
        if host.address.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-field",
                message: "host.address must not be empty".to_string(),
            });
        }
    }

    for (name, recipe) in &config.recipes {
        if !RECIPE_NAME.is_match(name) {
            errors.push(ValidationError {
                rule: "recipe-name",
                message: format!(
                    "Recipe name '{}' must be lowercase letters, digits, '-' or '_'",
                    name
                ),
            });
        }

        let mut required = vec![
            ("version", recipe.version.as_str()),
            ("url", recipe.url.as_str()),
            ("guard", recipe.guard.as_str()),
        ];
        if let Procedure::JavaLauncher {
            package,
            jar,
            launcher,
        } = &recipe.procedure
        {
            required.push(("procedure.package", package.as_str()));
            required.push(("procedure.jar", jar.as_str()));
            required.push(("procedure.launcher", launcher.as_str()));
        }
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(ValidationError {
                    rule: "empty-field",
                    message: format!("Recipe '{}': {} must not be empty", name, field),
                });
            }
        }

        let templates = std::iter::once(("url", recipe.url.as_str()))
            .chain(recipe.unpack_dir.as_deref().map(|d| ("unpack_dir", d)));
        for (field, template) in templates {
            let unknown = unresolved_placeholders(template);
            if !unknown.is_empty() {
                errors.push(ValidationError {
                    rule: "unknown-placeholder",
                    message: format!(
                        "Recipe '{}': {} uses unknown placeholder(s): {}",
                        name,
                        field,
                        unknown.join(", ")
                    ),
                });
            }
        }
    }

    errors
}

/// Validate `config`, folding all problems into one error.
pub fn validate(config: &ProvisionConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(RecipeError::ConfigValidationError { message })
}
