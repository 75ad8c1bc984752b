//! Line-oriented shell over a single in-memory session ledger.

mod commands;
mod context;
pub mod output;
mod shell;

pub use context::{CliError, CliMode, CommandError, LoopControl, ShellContext};
pub use shell::run_cli;
