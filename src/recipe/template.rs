//! `{version}` substitution in recipe URLs and directory names.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RecipeError, Result};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").unwrap());

/// Substitute `{version}` and `{v}` in `template`.
///
/// Any other placeholder left over is a configuration error.
pub fn resolve_template(template: &str, version: &str) -> Result<String> {
    let unknown = unresolved_placeholders(template);
    if !unknown.is_empty() {
        return Err(RecipeError::ConfigValidationError {
            message: format!(
                "Unknown placeholder(s) {} in '{}'; only {{version}} and {{v}} are supported",
                unknown
                    .iter()
                    .map(|p| format!("{{{}}}", p))
                    .collect::<Vec<_>>()
                    .join(", "),
                template
            ),
        });
    }

    Ok(PLACEHOLDER
        .replace_all(template, |_: &regex::Captures<'_>| version.to_string())
        .into_owned())
}

/// Placeholder names in `template` other than `version` and `v`.
pub fn unresolved_placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|c| c[1].to_string())
        .filter(|name| name != "version" && name != "v")
        .collect()
}
