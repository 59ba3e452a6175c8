//! CLI argument definitions using clap
//!
//! Commands:
//! - company-api serve [--config <path>] [--port <n>] [--data-file <path>]
//! - company-api init [--config <path>] [--data-file <path>]
//!
//! `serve` is the default when no subcommand is given.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// company-api - company records over HTTP, stored in one JSON file
#[derive(Parser, Debug)]
#[command(name = "company-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server
    Serve(Overrides),

    /// Create the data file as an empty array if it does not exist
    Init(Overrides),
}

/// Settings shared by every command; each one overrides the config file
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Port to listen on (overrides PORT and the config file)
    #[arg(long)]
    pub port: Option<u16>,

    /// Path of the JSON data file
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The requested command, defaulting to `serve`
    pub fn command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Serve(Overrides::default()))
    }
}
