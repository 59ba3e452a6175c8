//! CLI command implementations
//!
//! `serve` boots in a fixed order:
//! 1. Configuration resolve
//! 2. Logging install
//! 3. Store bootstrap (data file created as `[]` if missing)
//! 4. Service and router wiring
//! 5. HTTP listen

use std::sync::Arc;

use serde_json::json;

use crate::http_server::{CompanyState, HttpServer};
use crate::observability::{init_logging, Event, SharedEventLog, TracingEventLog};
use crate::service::CompanyService;
use crate::storage::JsonFileStore;

use super::args::{Command, Overrides};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command())
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(overrides) => serve(&overrides),
        Command::Init(overrides) => init(&overrides),
    }
}

fn resolve_config(overrides: &Overrides) -> CliResult<Config> {
    let env_port = std::env::var("PORT").ok();
    Config::resolve(overrides, env_port.as_deref())
}

/// Wire store, service and HTTP state over the configured data file
pub fn build_state(
    config: &Config,
    log: SharedEventLog,
) -> (Arc<JsonFileStore>, Arc<CompanyState>) {
    let store = Arc::new(JsonFileStore::new(config.data_file.clone(), log.clone()));
    let service = CompanyService::new(store.clone(), log.clone());
    (store, Arc::new(CompanyState::new(service, log)))
}

/// Create the data file if it is missing.
///
/// Does not start the server. No subscriber is installed, so store events
/// are dropped.
pub fn init(overrides: &Overrides) -> CliResult<()> {
    let config = resolve_config(overrides)?;
    let store = JsonFileStore::new(config.data_file.clone(), TracingEventLog::shared());

    let created = store.initialize()?;

    write_response(json!({
        "initialized": true,
        "created": created,
        "data_file": config.data_file.display().to_string(),
    }))
}

/// Start the HTTP server and block until it exits
pub fn serve(overrides: &Overrides) -> CliResult<()> {
    let config = resolve_config(overrides)?;

    init_logging(&config.log_level, config.log_file.as_deref())?;
    let log = TracingEventLog::shared();
    log.info(
        Event::ConfigLoaded,
        &[
            ("data_file", config.data_file.display().to_string().as_str()),
            ("port", config.http.port.to_string().as_str()),
        ],
    );

    let (store, state) = build_state(&config, log);
    store.initialize()?;

    let server = HttpServer::new(config.http.clone(), state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}
