//! Jar-plus-launcher installs.

use crate::error::Result;
use crate::remote::env::join_path;
use crate::remote::RemoteEnv;
use crate::shell::quote;

/// Where the jars of `package` at `version` live on the target.
pub fn java_install_dir(env: &RemoteEnv, package: &str, version: &str) -> String {
    join_path(
        &env.paths().system_install,
        &format!("share/java/{}-{}", package, version),
    )
}

/// Install a Java tool shipped as jars plus a launcher script.
///
/// Moves every jar from `source_dir` into the versioned install directory,
/// points the launcher's reference to `jar` at its new location, makes the
/// launcher executable and moves it into `<system_install>/bin`. Returns
/// the launcher's final path.
pub fn java_install(
    env: &RemoteEnv,
    source_dir: &str,
    package: &str,
    version: &str,
    jar: &str,
    launcher: &str,
) -> Result<String> {
    let install_dir = java_install_dir(env, package, version);
    let bin_dir = env.bin_dir();

    env.safe_sudo(&format!(
        "mkdir -p {} {}",
        quote(&install_dir),
        quote(&bin_dir)
    ))?;
    env.safe_sudo_in(source_dir, &format!("mv *.jar {}", quote(&install_dir)))?;
    env.sed_in_place(source_dir, launcher, jar, &join_path(&install_dir, jar))?;
    env.run_in(source_dir, &format!("chmod a+x {}", quote(launcher)))?;
    env.safe_sudo_in(
        source_dir,
        &format!("mv {} {}", quote(launcher), quote(&bin_dir)),
    )?;

    Ok(join_path(&bin_dir, launcher))
}
