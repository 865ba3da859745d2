//! CLI module for aerofacet
//!
//! Provides command-line interface for:
//! - search: Answer search requests read from stdin
//! - stats: Print index statistics

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command, search, serve, stats, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_lines, write_error, write_response};
