//! Authentication commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use mounti_client::MountiClient;
use mounti_core::error::AppError;
use mounti_core::result::AppResult;
use mounti_entity::auth::{Credential, RegisterRequest};
use mounti_entity::user::User;

use crate::output::{self, OutputFormat};

/// Arguments for auth commands
#[derive(Debug, Args)]
pub struct AuthArgs {
    /// Auth subcommand
    #[command(subcommand)]
    pub command: AuthCommand,
}

/// Auth subcommands
#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in with email and password, or with an OAuth session id
    Login {
        /// Account email (will prompt if not provided)
        #[arg(short, long, conflicts_with = "oauth_session")]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long, conflicts_with = "oauth_session")]
        password: Option<String>,
        /// Session id returned by the OAuth redirect
        #[arg(long)]
        oauth_session: Option<String>,
    },
    /// Create an account and sign in
    Register {
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
        /// Offer trips as a transporter
        #[arg(long)]
        transporter: bool,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
}

/// User display row
#[derive(Debug, Serialize, Tabled)]
pub struct UserRow {
    /// User ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Email
    pub email: String,
    /// Role
    pub role: String,
    /// Member since
    pub since: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name.clone(),
            email: u.email.clone(),
            role: u.role_label().to_string(),
            since: u.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Execute auth commands
pub async fn execute(args: &AuthArgs, client: &MountiClient, format: OutputFormat) -> AppResult<()> {
    match &args.command {
        AuthCommand::Login {
            email,
            password,
            oauth_session,
        } => {
            let credential = match oauth_session {
                Some(session_id) => Credential::oauth(session_id.clone()),
                None => {
                    let email = match email {
                        Some(e) => e.clone(),
                        None => dialoguer::Input::new()
                            .with_prompt("Email")
                            .interact_text()
                            .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
                    };
                    let password = match password {
                        Some(p) => p.clone(),
                        None => dialoguer::Password::new()
                            .with_prompt("Password")
                            .interact()
                            .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
                    };
                    Credential::password(email, password)
                }
            };

            let user = client.session.login(credential).await?;
            output::print_success(&format!("Signed in as {} ({})", user.name, user.email));
        }
        AuthCommand::Register {
            email,
            name,
            password,
            transporter,
        } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let user = client
                .session
                .register(&RegisterRequest {
                    email: email.clone(),
                    password,
                    name: name.clone(),
                    is_transporter: *transporter,
                })
                .await?;
            output::print_success(&format!(
                "Account created for {} as {}",
                user.email,
                user.role_label()
            ));
        }
        AuthCommand::Logout => {
            client.session.logout().await;
            output::print_success("Signed out");
        }
        AuthCommand::Whoami => {
            let user = super::require_user(client).await?;
            output::print_item(&UserRow::from(&user), format);
        }
    }

    Ok(())
}
