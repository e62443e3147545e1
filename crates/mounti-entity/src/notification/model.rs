//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mounti_core::types::timestamp::flexible;
use mounti_core::types::{NotificationId, UserId};

use super::kind::NotificationKind;

/// A message generated by the backend for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// Recipient.
    #[serde(alias = "userId")]
    pub user_id: UserId,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Category tag.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Whether the recipient has seen it.
    #[serde(default, alias = "isRead", alias = "is_read")]
    pub read: bool,
    /// When the backend created it.
    #[serde(alias = "createdAt", with = "flexible")]
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        !self.read
    }

    /// Flip the local copy to read. Returns whether anything changed.
    pub fn mark_read(&mut self) -> bool {
        let changed = !self.read;
        self.read = true;
        changed
    }
}
