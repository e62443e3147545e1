//! Notification commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use mounti_client::MountiClient;
use mounti_client::view::NotificationsView;
use mounti_core::result::AppResult;
use mounti_core::types::NotificationId;
use mounti_entity::notification::Notification;

use crate::output::{self, OutputFormat};

/// Arguments for notification commands
#[derive(Debug, Args)]
pub struct NotificationArgs {
    /// Notification subcommand
    #[command(subcommand)]
    pub command: NotificationCommand,
}

/// Notification subcommands
#[derive(Debug, Subcommand)]
pub enum NotificationCommand {
    /// List my notifications, newest first
    List {
        /// Only show unread notifications
        #[arg(short, long)]
        unread: bool,
    },
    /// Mark a notification as read
    Read {
        /// Notification ID
        id: NotificationId,
    },
    /// Count unread notifications
    Unread,
}

/// Notification display row
#[derive(Debug, Serialize, Tabled)]
pub struct NotificationRow {
    /// Notification ID
    pub id: String,
    /// Unread marker
    pub new: &'static str,
    /// Category
    pub kind: String,
    /// Headline
    pub title: String,
    /// Body
    pub message: String,
    /// Received at
    pub received: String,
}

impl From<&Notification> for NotificationRow {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id.to_string(),
            new: if n.is_unread() { "●" } else { "" },
            kind: n.kind.to_string(),
            title: n.title.clone(),
            message: n.message.clone(),
            received: n.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute notification commands
pub async fn execute(
    args: &NotificationArgs,
    client: &MountiClient,
    format: OutputFormat,
) -> AppResult<()> {
    super::require_user(client).await?;

    match &args.command {
        NotificationCommand::List { unread } => {
            let mut view = NotificationsView::new(client.feed.clone());
            let list = view.load().await.clone().into_result()?;
            let rows: Vec<NotificationRow> = list
                .iter()
                .filter(|n| !*unread || n.is_unread())
                .map(NotificationRow::from)
                .collect();
            output::print_list(&rows, format);
        }
        NotificationCommand::Read { id } => {
            let mut view = NotificationsView::new(client.feed.clone());
            view.load().await;
            view.mark_read(*id).await?;
            output::print_success(&format!(
                "Marked {id} as read ({} unread left)",
                view.unread_count()
            ));
        }
        NotificationCommand::Unread => {
            let count = client.notifications.unread_count().await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::json!({ "unread": count })),
                OutputFormat::Table => output::print_kv("Unread", &count.to_string()),
            }
        }
    }

    Ok(())
}
