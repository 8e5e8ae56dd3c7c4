//! Line-oriented shell over [`RentalStore`](crate::store::RentalStore).

pub mod commands;
pub mod context;
pub mod output;
pub mod registry;
mod shell;

pub use context::{CliError, CliMode, CommandError, CommandResult, ShellContext};
pub use shell::{run_cli, run_lines};
