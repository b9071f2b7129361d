//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed to by
//! [`CommandDispatcher`]. Commands that talk to a host get their config
//! and [`RemoteEnv`](crate::remote::RemoteEnv) from [`CommandContext`].

pub mod check;
pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod install;
pub mod list;

pub use context::CommandContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
