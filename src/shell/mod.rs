//! Shell command execution and quoting.

pub mod command;
pub mod platform;
pub mod quote;

pub use command::{execute, execute_program, CommandOptions, CommandResult};
pub use platform::{is_ci, is_elevated};
pub use quote::{join as quote_join, quote};
