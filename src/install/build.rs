//! Autotools-style builds.

use crate::error::Result;
use crate::remote::RemoteEnv;
use crate::shell::quote_join;

/// `./configure`, `make`, then `make install` with elevated privileges.
///
/// The prefix is the target's `system_install`; `extra_args` are appended
/// to the configure line.
pub fn configure_make(env: &RemoteEnv, source_dir: &str, extra_args: &[String]) -> Result<()> {
    let mut configure = vec![
        "./configure".to_string(),
        "--disable-werror".to_string(),
        format!("--prefix={}", env.paths().system_install),
    ];
    configure.extend(extra_args.iter().cloned());

    env.run_in(source_dir, &quote_join(&configure))?;
    env.run_in(source_dir, "make")?;
    env.safe_sudo_in(source_dir, "make install")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InstallPaths;
    use crate::error::RecipeError;
    use crate::remote::MockSession;

    #[test]
    fn runs_configure_make_install_in_order() {
        let host = MockSession::new();
        let env = RemoteEnv::new(Box::new(host.clone()), InstallPaths::default(), true);

        configure_make(&env, "/tmp/w/EMBOSS-6.3.1", &["--without-x".to_string()]).unwrap();

        assert_eq!(
            host.commands(),
            vec![
                "cd /tmp/w/EMBOSS-6.3.1 && ./configure --disable-werror --prefix=/usr/local --without-x",
                "cd /tmp/w/EMBOSS-6.3.1 && make",
                "cd /tmp/w/EMBOSS-6.3.1 && sudo -n make install",
            ]
        );
    }

    #[test]
    fn make_failure_skips_install() {
        let host = MockSession::new();
        host.fail_on("&& make", 2, "error: missing header");
        let env = RemoteEnv::new(Box::new(host.clone()), InstallPaths::default(), false);

        let err = configure_make(&env, "/tmp/w/src", &[]).unwrap_err();

        match err {
            RecipeError::CommandFailed { stderr, .. } => {
                assert_eq!(stderr, "error: missing header")
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(host.commands_matching("make install").is_empty());
    }
}
