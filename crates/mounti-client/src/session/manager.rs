//! Session lifecycle: sign in, register, restore, sign out.

use chrono::{Duration, Utc};
use tracing::{info, warn};

use mounti_core::config::SessionConfig;
use mounti_core::error::AppError;
use mounti_core::result::AppResult;
use mounti_entity::auth::{AuthSession, Credential, OAuthSessionRequest, RegisterRequest};
use mounti_entity::user::User;

use crate::transport::{ApiClient, Auth};

/// Owns the authenticated identity of this client.
///
/// A failed sign-in never disturbs the session that was active before it;
/// the sign-in endpoints are called without a bearer token, so a rejection
/// there cannot trigger the transport's 401 sign-out either.
#[derive(Debug, Clone)]
pub struct SessionManager {
    api: ApiClient,
    /// Lifetime assumed when the backend does not report an expiry.
    ttl: Duration,
}

impl SessionManager {
    pub fn new(api: ApiClient, config: &SessionConfig) -> Self {
        Self {
            api,
            ttl: Duration::days(i64::from(config.ttl_days)),
        }
    }

    /// Exchange a credential for a bearer token and remember the user.
    pub async fn login(&self, credential: Credential) -> AppResult<User> {
        let session: AuthSession = match &credential {
            Credential::OAuthSession { session_id } => {
                if session_id.trim().is_empty() {
                    return Err(AppError::validation("Session ID required"));
                }
                let body = self.api.encode(&OAuthSessionRequest {
                    session_id: session_id.trim().to_string(),
                })?;
                self.api.post("/auth/session", &body, Auth::Anonymous).await?
            }
            Credential::Password(request) => {
                request.check()?;
                let body = self.api.encode(request)?;
                self.api.post("/auth/login", &body, Auth::Anonymous).await?
            }
        };
        self.establish(session).await
    }

    /// Create an account and sign in as it.
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<User> {
        request.check()?;
        let body = self.api.encode(request)?;
        let session: AuthSession = self
            .api
            .post("/auth/register", &body, Auth::Anonymous)
            .await?;
        self.establish(session).await
    }

    async fn establish(&self, session: AuthSession) -> AppResult<User> {
        let expires_at = session
            .expires_at
            .or_else(|| Utc::now().checked_add_signed(self.ttl));
        let user = session.user;
        self.api
            .credentials()
            .install(session.session_token, expires_at, Some(user.clone()))
            .await?;
        info!(user_id = %user.id, email = %user.email, "Signed in");
        Ok(user)
    }

    /// Sign out. The server call is best-effort; local state is always cleared.
    pub async fn logout(&self) {
        let credentials = self.api.credentials();
        if credentials.is_active().await {
            if let Err(e) = self.api.post_empty("/auth/logout").await {
                warn!(error = %e, "Server-side logout failed; clearing local session anyway");
            }
        }
        credentials.clear().await;
        info!("Signed out");
    }

    /// The signed-in user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.api.credentials().user().await
    }

    /// Whether a bearer token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.api.credentials().is_active().await
    }

    /// Re-fetch the signed-in user from the backend.
    pub async fn refresh_user(&self) -> AppResult<User> {
        let user: User = self
            .api
            .get(self.api.dialect().current_user_path(), &[])
            .await?;
        self.api.credentials().set_user(user.clone()).await;
        Ok(user)
    }

    /// Resume a stored session at startup.
    ///
    /// Returns `Ok(None)` when nothing is stored or the backend no longer
    /// accepts the token (which is then discarded). A transport failure keeps
    /// the token for the next attempt and is reported as an error.
    pub async fn restore(&self) -> AppResult<Option<User>> {
        let credentials = self.api.credentials();
        let Some(stored) = credentials.load_stored().await? else {
            return Ok(None);
        };
        credentials.adopt(stored.token).await;

        match self.refresh_user().await {
            Ok(user) => {
                info!(user_id = %user.id, "Restored session");
                Ok(Some(user))
            }
            Err(e) if e.is_authentication() => {
                info!("Stored session rejected by backend");
                credentials.clear().await;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
