//! Recipes that ship with the binary.

use super::{Procedure, Recipe};

/// The built-in recipe set.
pub fn builtin_recipes() -> Vec<Recipe> {
    vec![emboss(), pgdspider()]
}

/// EMBOSS, for platforms without a distribution package (rpm-based hosts).
fn emboss() -> Recipe {
    Recipe {
        name: "emboss".to_string(),
        description: "European Molecular Biology Open Software Suite".to_string(),
        version: "6.3.1".to_string(),
        url: "ftp://emboss.open-bio.org/pub/EMBOSS/EMBOSS-{version}.tar.gz".to_string(),
        guard: "embossversion".to_string(),
        unpack_dir: None,
        procedure: Procedure::ConfigureMake {
            configure_args: Vec::new(),
        },
    }
}

/// PGDSpider format conversion for population genetics programs.
fn pgdspider() -> Recipe {
    Recipe {
        name: "pgdspider".to_string(),
        description: "Data format conversion for population genetics programs".to_string(),
        version: "2.0.1.2".to_string(),
        url: "http://www.cmpg.unibe.ch/software/PGDSpider/PGDSpider_{version}.zip".to_string(),
        guard: "PGDSpider2.sh".to_string(),
        unpack_dir: None,
        procedure: Procedure::JavaLauncher {
            package: "PGDSpider".to_string(),
            jar: "PGDSpider2.jar".to_string(),
            launcher: "PGDSpider2.sh".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_unique() {
        let recipes = builtin_recipes();
        let mut names: Vec<_> = recipes.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), recipes.len());
    }

    #[test]
    fn builtin_urls_resolve() {
        for recipe in builtin_recipes() {
            assert!(recipe.resolved_url().is_ok(), "{}", recipe.name);
        }
    }

    #[test]
    fn pgdspider_launcher_is_its_guard() {
        let recipe = pgdspider();
        match &recipe.procedure {
            Procedure::JavaLauncher { launcher, .. } => assert_eq!(launcher, &recipe.guard),
            other => panic!("unexpected procedure: {:?}", other),
        }
        assert_eq!(
            recipe.resolved_url().unwrap(),
            "http://www.cmpg.unibe.ch/software/PGDSpider/PGDSpider_2.0.1.2.zip"
        );
    }
}
