//! Persistent storage for the bearer credential.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::timestamp::flexible_option;

/// A bearer credential as kept between process runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// The raw bearer token.
    pub token: String,
    /// When the backend said the token stops being valid, if known.
    #[serde(default, with = "flexible_option")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl StoredSession {
    /// Create a stored session record.
    pub fn new(token: impl Into<String>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Check whether the record has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at.map(|exp| exp <= Utc::now()).unwrap_or(false)
    }
}

/// Trait for credential storage backends (file, in-memory).
///
/// Implementations must make `clear` idempotent: clearing an empty store
/// succeeds.
#[async_trait]
pub trait TokenStore: Send + Sync + std::fmt::Debug + 'static {
    /// Load the stored session, if any.
    async fn load(&self) -> AppResult<Option<StoredSession>>;

    /// Replace the stored session.
    async fn save(&self, session: &StoredSession) -> AppResult<()>;

    /// Remove the stored session.
    async fn clear(&self) -> AppResult<()>;
}
