//! company-api entry point
//!
//! Parses arguments, dispatches to the CLI module and reports failures on
//! stderr with a non-zero exit code. All boot logic lives in `cli`.

use company_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
