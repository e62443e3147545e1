//! Mounti command-line client for the travel and parcel marketplace.
//!
//! Main entry point: parses arguments, loads configuration, sets up
//! logging, and dispatches to the CLI commands.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use mounti_cli::Cli;
use mounti_cli::output;
use mounti_core::config::AppConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            output::print_error(&format!("Failed to load configuration: {}", e.message));
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::debug!(env = %cli.env, base_url = %config.api.base_url, "Configuration loaded");

    if let Err(e) = cli.execute(&config).await {
        tracing::debug!(error = %e, "Command failed");
        output::print_error(&e.message);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging. Logs go to stderr so command output stays clean.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
