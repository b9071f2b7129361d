//! The set of recipes available to a run.

use std::collections::BTreeMap;

use crate::config::{ProvisionConfig, RecipeConfig};
use crate::error::{RecipeError, Result};

use super::{builtin_recipes, Recipe};

/// Built-in recipes overlaid with those from the config file.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: BTreeMap<String, Recipe>,
}

impl RecipeBook {
    /// A book holding only the built-in recipes.
    pub fn builtin() -> Self {
        let mut book = Self::default();
        for recipe in builtin_recipes() {
            book.insert(recipe);
        }
        book
    }

    /// Built-ins plus the `recipes:` block of `config`.
    ///
    /// A config recipe with a built-in's name replaces it entirely.
    pub fn from_config(config: &ProvisionConfig) -> Self {
        let mut book = Self::builtin();
        for (name, recipe) in &config.recipes {
            book.insert(recipe_from_config(name, recipe));
        }
        book
    }

    /// Add or replace a recipe.
    pub fn insert(&mut self, recipe: Recipe) {
        self.recipes.insert(recipe.name.clone(), recipe);
    }

    /// Look up a recipe by name.
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// Resolve names to recipes, preserving the requested order.
    ///
    /// Duplicates are dropped after their first occurrence.
    pub fn select(&self, names: &[String]) -> Result<Vec<Recipe>> {
        let mut selected: Vec<Recipe> = Vec::with_capacity(names.len());
        for name in names {
            if selected.iter().any(|r| &r.name == name) {
                continue;
            }
            let recipe = self
                .get(name)
                .ok_or_else(|| RecipeError::UnknownRecipe { name: name.clone() })?;
            selected.push(recipe.clone());
        }
        Ok(selected)
    }

    /// All recipes, sorted by name.
    pub fn all(&self) -> Vec<&Recipe> {
        self.recipes.values().collect()
    }

    /// Number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the book is empty.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn recipe_from_config(name: &str, config: &RecipeConfig) -> Recipe {
    Recipe {
        name: name.to_string(),
        description: config.description.clone().unwrap_or_default(),
        version: config.version.clone(),
        url: config.url.clone(),
        guard: config.guard.clone(),
        unpack_dir: config.unpack_dir.clone(),
        procedure: config.procedure.clone(),
    }
}
