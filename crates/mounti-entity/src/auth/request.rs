//! Authentication request bodies with client-side validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use mounti_core::result::AppResult;
use mounti_core::types::WirePayload;

use crate::validation::check;

/// Email/password sign-in body for `POST /auth/login`.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Account password.
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validate before sending.
    pub fn check(&self) -> AppResult<()> {
        check(self)
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl WirePayload for LoginRequest {}

/// Account creation body for `POST /auth/register`.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Account email.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Chosen password.
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
    /// Display name.
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub name: String,
    /// Whether the account will offer trips.
    #[serde(default)]
    pub is_transporter: bool,
}

impl RegisterRequest {
    /// Validate before sending.
    pub fn check(&self) -> AppResult<()> {
        check(self)
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("is_transporter", &self.is_transporter)
            .finish_non_exhaustive()
    }
}

impl WirePayload for RegisterRequest {}

/// OAuth session exchange body for `POST /auth/session`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthSessionRequest {
    /// Session id handed back by the identity provider redirect.
    pub session_id: String,
}

impl WirePayload for OAuthSessionRequest {}

/// Something the session manager can exchange for a bearer token.
#[derive(Debug, Clone)]
pub enum Credential {
    /// Session id from the external OAuth redirect.
    OAuthSession { session_id: String },
    /// Email and password.
    Password(LoginRequest),
}

impl Credential {
    /// Shorthand for an email/password credential.
    pub fn password(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Password(LoginRequest::new(email, password))
    }

    /// Shorthand for an OAuth session credential.
    pub fn oauth(session_id: impl Into<String>) -> Self {
        Self::OAuthSession {
            session_id: session_id.into(),
        }
    }
}
