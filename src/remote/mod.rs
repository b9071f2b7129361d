//! Remote sessions and the environment context recipes run against.
//!
//! A [`Session`] runs one command line on the target host and reports how it
//! exited. [`RemoteEnv`] wraps a session with the install paths and sudo
//! policy and is the only thing recipes ever see.
//!
//! # Example
//!
//! ```
//! use biorecipe::config::InstallPaths;
//! use biorecipe::remote::{MockSession, RemoteEnv};
//!
//! let session = MockSession::new();
//! session.respond("which embossversion", 0, "/usr/local/bin/embossversion\n");
//! let env = RemoteEnv::new(Box::new(session.clone()), InstallPaths::default(), true);
//!
//! let out = env.run("which embossversion").unwrap();
//! assert!(out.stdout.contains("embossversion"));
//! assert_eq!(session.commands(), vec!["which embossversion".to_string()]);
//! ```

pub mod dry_run;
pub mod env;
pub mod local;
pub mod mock;
pub mod ssh;

pub use dry_run::DryRunSession;
pub use env::RemoteEnv;
pub use local::LocalSession;
pub use mock::MockSession;
pub use ssh::SshSession;

use crate::error::Result;
use crate::shell::CommandResult;

/// A connection able to run shell command lines on the target host.
///
/// Implementations return `Ok` for any command that ran, whatever its exit
/// code. `Err` is reserved for the session itself failing.
pub trait Session {
    /// Run a command line on the host.
    fn exec(&self, command: &str) -> Result<CommandResult>;

    /// Human-readable description of the target (e.g. `ubuntu@bio-1`).
    fn describe(&self) -> String;

    /// Whether commands are only recorded, not executed.
    fn is_dry_run(&self) -> bool {
        false
    }

    /// Commands recorded since the last call, for sessions that only record.
    fn take_plan(&self) -> Vec<String> {
        Vec::new()
    }
}
