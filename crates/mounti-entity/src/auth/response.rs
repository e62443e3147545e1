//! Session responses from the authentication endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mounti_core::types::timestamp::flexible_option;

use crate::user::User;

/// A bearer credential together with the identity it belongs to.
///
/// The OAuth exchange returns `session_token` and `expires_at`; password
/// login returns `token` and `type`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthSession {
    /// Opaque bearer token.
    #[serde(alias = "token", alias = "accessToken", alias = "sessionToken")]
    pub session_token: String,
    /// Token scheme, always `Bearer` in practice.
    #[serde(default = "default_token_type", alias = "type", alias = "tokenType")]
    pub token_type: String,
    /// The authenticated user.
    pub user: User,
    /// Server-side expiry, when the backend reports one.
    #[serde(default, alias = "expiresAt", with = "flexible_option")]
    pub expires_at: Option<DateTime<Utc>>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("token_type", &self.token_type)
            .field("user", &self.user.email)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}
