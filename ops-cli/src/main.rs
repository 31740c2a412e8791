use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use config_engine::SettingsLoader;
use error_common::{codes, log_error, MediDoctorError, Result};
use logger_redacted::{init_logging, LoggerConfig};
use tracing::debug;
use triage_gateway::ApiClient;
use triage_session::SessionStore;

mod cli;
mod commands;
mod render;

use cli::Cli;
use commands::App;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = init_logging(&LoggerConfig::from_env(cli.verbose)) {
        eprintln!("{} {e}", "warning:".yellow());
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if verbose {
                log_error("medidoctor", &e);
            }
            eprintln!("❌ {} {}", format!("[{}]", e.code()).red(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut loader = SettingsLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    if let Some(api_url) = &cli.api_url {
        loader = loader.with_api_url(api_url.as_str());
    }
    if let Some(path) = &cli.session {
        loader = loader.with_session_path(path);
    }
    let settings = loader.load().map_err(MediDoctorError::from)?;

    let client = ApiClient::from_settings(&settings).map_err(|e| {
        MediDoctorError::config(
            codes::config::INVALID_VALUE,
            format!("HTTP client could not be built: {e}"),
        )
    })?;
    let store = SessionStore::new(settings.resolved_session_path());
    debug!(
        api_url = %settings.api_url,
        session = %store.path().display(),
        "Starting medidoctor"
    );

    App::new(client, store, settings.doctor_limit, cli.json)
        .run(cli.command)
        .await
}
