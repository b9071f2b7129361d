//! Install procedures.
//!
//! [`get_install`] drives one recipe through download → unpack →
//! build-or-relocate → cleanup. Any failing install step aborts the recipe
//! and leaves the work directory in place for inspection; running the
//! recipe again starts over (reusing an already-downloaded archive). A
//! failed cleanup only logs a warning: the tool is installed by then.

pub mod archive;
pub mod build;
pub mod fetch;
pub mod java;

pub use archive::ArchiveKind;
pub use build::configure_make;
pub use fetch::fetch_and_unpack;
pub use java::{java_install, java_install_dir};

use crate::error::Result;
use crate::recipe::{Procedure, Recipe};
use crate::remote::env::join_path;
use crate::remote::RemoteEnv;
use crate::shell::quote;

/// Scratch directory for one recipe at one version.
pub fn recipe_work_dir(env: &RemoteEnv, recipe: &Recipe) -> String {
    join_path(
        &env.paths().work_dir,
        &format!("{}-{}", recipe.name, recipe.version),
    )
}

/// Fetch, build and install `recipe` unconditionally.
///
/// Callers wanting idempotence check the recipe's guard first.
pub fn get_install(env: &RemoteEnv, recipe: &Recipe) -> Result<()> {
    let url = recipe.resolved_url()?;
    let unpack_dir = recipe.resolved_unpack_dir()?;
    let work_dir = recipe_work_dir(env, recipe);

    tracing::info!("Installing {} {} from {}", recipe.name, recipe.version, url);
    let source_dir = fetch_and_unpack(env, &work_dir, &url, unpack_dir.as_deref())?;

    match &recipe.procedure {
        Procedure::ConfigureMake { configure_args } => {
            configure_make(env, &source_dir, configure_args)?;
        }
        Procedure::JavaLauncher {
            package,
            jar,
            launcher,
        } => {
            let installed = java_install(env, &source_dir, package, &recipe.version, jar, launcher)?;
            tracing::debug!("launcher installed at {}", installed);
        }
    }

    cleanup(env, &work_dir);
    Ok(())
}

/// Remove the work dir with the same privileges as the install, since
/// `make install` may leave root-owned files in the build tree.
fn cleanup(env: &RemoteEnv, work_dir: &str) {
    if let Err(e) = env.safe_sudo(&format!("rm -rf {}", quote(work_dir))) {
        tracing::warn!("Could not remove {}: {}", work_dir, e);
    }
}
