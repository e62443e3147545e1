//! CLI command definitions and dispatch.

pub mod auth;
pub mod booking;
pub mod config;
pub mod dashboard;
pub mod notification;
pub mod trip;

use clap::{Parser, Subcommand};
use tracing::warn;

use mounti_client::MountiClient;
use mounti_core::config::AppConfig;
use mounti_core::error::AppError;
use mounti_core::result::AppResult;
use mounti_entity::user::User;

use crate::output::OutputFormat;

/// Mounti: find a ride or send a parcel between Tunisia and France
#[derive(Debug, Parser)]
#[command(name = "mounti", version, about, long_about = None)]
pub struct Cli {
    /// Extra configuration file layered over config/default.toml
    #[arg(short, long)]
    pub config: Option<String>,

    /// Environment overlay to load from config/{env}.toml
    #[arg(long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign out, and account details
    Auth(auth::AuthArgs),
    /// Search and publish trips
    Trip(trip::TripArgs),
    /// Book capacity and manage bookings
    Booking(booking::BookingArgs),
    /// Read notifications
    Notification(notification::NotificationArgs),
    /// Overview of my trips, bookings, and notifications
    Dashboard,
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Load configuration for this invocation.
    pub fn load_config(&self) -> AppResult<AppConfig> {
        AppConfig::load(self.config.as_deref(), &self.env)
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        if let Commands::Config(args) = &self.command {
            return config::execute(args, self, config, self.format).await;
        }

        let client = connect(config).await?;
        match &self.command {
            Commands::Auth(args) => auth::execute(args, &client, self.format).await,
            Commands::Trip(args) => trip::execute(args, &client, self.format).await,
            Commands::Booking(args) => booking::execute(args, &client, self.format).await,
            Commands::Notification(args) => {
                notification::execute(args, &client, self.format).await
            }
            Commands::Dashboard => dashboard::execute(&client, self.format).await,
            Commands::Config(_) => Ok(()),
        }
    }
}

/// Build the client and resume any stored session.
async fn connect(config: &AppConfig) -> AppResult<MountiClient> {
    let client = MountiClient::from_config(config)?;
    if let Err(e) = client.session.restore().await {
        warn!(error = %e, "Could not restore stored session");
    }
    Ok(client)
}

/// Helper: the signed-in user, or an error telling how to sign in
pub async fn require_user(client: &MountiClient) -> AppResult<User> {
    client
        .session
        .current_user()
        .await
        .ok_or_else(|| AppError::authentication("Not signed in. Run `mounti auth login` first."))
}

/// Helper: ask before a destructive action unless `--yes` was given
pub fn confirm(prompt: &str, assume_yes: bool) -> AppResult<bool> {
    if assume_yes {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
