//! Presence guard: skip a recipe whose executable is already on PATH.
//!
//! Every check is a fresh query on the target: `which` first, then
//! `test -x` in the configured `<system_install>/bin`, which need not be on
//! the login PATH. Nothing is cached, so a guard queried after an install
//! sees the new binary.

use crate::error::Result;
use crate::remote::env::join_path;
use crate::remote::RemoteEnv;
use crate::shell::quote;

/// Outcome of a presence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardStatus {
    /// The executable resolved to `path`.
    Present { path: String },
    /// The executable is not on PATH.
    Absent,
}

impl GuardStatus {
    /// Whether the executable was found.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }
}

/// Checks for one executable on the target's PATH.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceGuard {
    executable: String,
}

impl PresenceGuard {
    /// Guard on `executable`.
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// The guarded executable name.
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// The command line used to query presence on PATH.
    pub fn command(&self) -> String {
        format!("which {}", quote(&self.executable))
    }

    /// Where the executable lands when installed under `bin_dir`.
    pub fn install_path(&self, bin_dir: &str) -> String {
        join_path(bin_dir, &self.executable)
    }

    /// Query the target.
    ///
    /// Absent only when neither `which` nor the install bin dir finds the
    /// executable; only a broken session is an error.
    pub fn check(&self, env: &RemoteEnv) -> Result<GuardStatus> {
        let status = match self.on_path(env)? {
            Some(path) => GuardStatus::Present { path },
            None => match self.in_bin_dir(env)? {
                Some(path) => GuardStatus::Present { path },
                None => GuardStatus::Absent,
            },
        };
        tracing::debug!(executable = %self.executable, ?status, "presence check");
        Ok(status)
    }

    fn on_path(&self, env: &RemoteEnv) -> Result<Option<String>> {
        let result = env.query(&self.command())?;
        let path = result.stdout.lines().next().unwrap_or("").trim();
        Ok((result.success && !path.is_empty()).then(|| path.to_string()))
    }

    fn in_bin_dir(&self, env: &RemoteEnv) -> Result<Option<String>> {
        let path = self.install_path(&env.bin_dir());
        let result = env.query(&format!("test -x {}", quote(&path)))?;
        Ok(result.success.then_some(path))
    }
}

/// Run `install` only if `guard`'s executable is absent.
///
/// Returns whether `install` ran.
pub fn if_not_installed<F>(env: &RemoteEnv, guard: &PresenceGuard, install: F) -> Result<bool>
where
    F: FnOnce(&RemoteEnv) -> Result<()>,
{
    if let GuardStatus::Present { path } = guard.check(env)? {
        tracing::info!("{} already installed at {}", guard.executable(), path);
        return Ok(false);
    }
    install(env)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InstallPaths;
    use crate::error::RecipeError;
    use crate::remote::MockSession;

    fn env_for(host: &MockSession) -> RemoteEnv {
        RemoteEnv::new(Box::new(host.clone()), InstallPaths::default(), true)
    }

    #[test]
    fn present_reports_path() {
        let host = MockSession::new();
        host.mark_installed("embossversion");
        let status = PresenceGuard::new("embossversion")
            .check(&env_for(&host))
            .unwrap();
        assert_eq!(
            status,
            GuardStatus::Present {
                path: "/usr/local/bin/embossversion".to_string()
            }
        );
        assert!(status.is_present());
    }

    #[test]
    fn absent_when_which_fails() {
        let host = MockSession::new();
        let status = PresenceGuard::new("embossversion")
            .check(&env_for(&host))
            .unwrap();
        assert_eq!(status, GuardStatus::Absent);
    }

    #[test]
    fn absent_when_which_prints_nothing() {
        let host = MockSession::new();
        host.respond("which tool", 0, "");
        let status = PresenceGuard::new("tool").check(&env_for(&host)).unwrap();
        assert_eq!(status, GuardStatus::Absent);
    }

    #[test]
    fn command_quotes_odd_names() {
        assert_eq!(PresenceGuard::new("my tool").command(), "which 'my tool'");
        assert_eq!(
            PresenceGuard::new("PGDSpider2.sh").command(),
            "which PGDSpider2.sh"
        );
    }

    #[test]
    fn present_in_bin_dir_off_path() {
        let host = MockSession::new();
        host.add_file("/opt/bio/bin/bedtools");
        let env = RemoteEnv::new(
            Box::new(host.clone()),
            InstallPaths {
                system_install: "/opt/bio".to_string(),
                work_dir: "/tmp/w".to_string(),
            },
            true,
        );

        let status = PresenceGuard::new("bedtools").check(&env).unwrap();

        assert_eq!(
            status,
            GuardStatus::Present {
                path: "/opt/bio/bin/bedtools".to_string()
            }
        );
        assert_eq!(
            host.commands(),
            vec!["which bedtools", "test -x /opt/bio/bin/bedtools"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn finds_executable_under_custom_prefix_locally() {
        use crate::remote::LocalSession;
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let exe = bin.join("biorecipe-guard-test-tool");
        std::fs::write(&exe, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let env = RemoteEnv::new(
            Box::new(LocalSession::new()),
            InstallPaths {
                system_install: temp.path().display().to_string(),
                work_dir: "/tmp/w".to_string(),
            },
            false,
        );

        let status = PresenceGuard::new("biorecipe-guard-test-tool")
            .check(&env)
            .unwrap();

        assert_eq!(
            status,
            GuardStatus::Present {
                path: exe.display().to_string()
            }
        );
    }

    #[test]
    fn every_check_queries_the_host() {
        let host = MockSession::new();
        let env = env_for(&host);
        let guard = PresenceGuard::new("samtools");

        assert!(!guard.check(&env).unwrap().is_present());
        host.mark_installed("samtools");
        assert!(guard.check(&env).unwrap().is_present());
        assert_eq!(host.commands_matching("which").len(), 2);
    }

    #[test]
    fn if_not_installed_skips_present() {
        let host = MockSession::new();
        host.mark_installed("samtools");
        let ran = if_not_installed(&env_for(&host), &PresenceGuard::new("samtools"), |_| {
            panic!("install must not run")
        })
        .unwrap();
        assert!(!ran);
    }

    #[test]
    fn if_not_installed_runs_when_absent() {
        let host = MockSession::new();
        let ran = if_not_installed(&env_for(&host), &PresenceGuard::new("samtools"), |env| {
            env.run("make install").map(|_| ())
        })
        .unwrap();
        assert!(ran);
        assert_eq!(
            host.commands(),
            vec![
                "which samtools",
                "test -x /usr/local/bin/samtools",
                "make install"
            ]
        );
    }

    #[test]
    fn if_not_installed_propagates_install_error() {
        let host = MockSession::new();
        host.fail_on("make", 2, "");
        let err = if_not_installed(&env_for(&host), &PresenceGuard::new("samtools"), |env| {
            env.run("make").map(|_| ())
        })
        .unwrap_err();
        assert!(matches!(err, RecipeError::CommandFailed { .. }));
    }
}
