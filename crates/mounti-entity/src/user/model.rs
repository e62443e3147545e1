//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mounti_core::types::UserId;
use mounti_core::types::timestamp::flexible;

/// A registered Mounti user. Read-only from the client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Email address used to sign in.
    pub email: String,
    /// Human-readable display name.
    #[serde(alias = "displayName", alias = "display_name")]
    pub name: String,
    /// Avatar URL provided by the OAuth flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Whether the user offers trip capacity.
    #[serde(default, alias = "isTransporter")]
    pub is_transporter: bool,
    /// When the account was created.
    #[serde(alias = "createdAt", with = "flexible")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Role label shown in listings.
    pub fn role_label(&self) -> &'static str {
        if self.is_transporter {
            "transporter"
        } else {
            "client"
        }
    }
}
