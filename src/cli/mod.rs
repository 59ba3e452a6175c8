//! CLI module for company-api
//!
//! Provides command-line interface for:
//! - serve: Boot logging, storage and the HTTP server
//! - init: Create the data file and exit

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, Overrides};
pub use commands::{build_state, init, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
