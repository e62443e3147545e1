//! JSON-over-HTTP transport shared by every gateway.
//!
//! One [`ApiClient`] per process. It owns the `reqwest` connection pool, the
//! configured [`Dialect`], and a handle on the session [`Credentials`], and
//! turns non-success responses into [`AppError`]s carrying the backend's
//! own message.

use std::time::Duration;

use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use mounti_core::config::ApiConfig;
use mounti_core::error::{AppError, ErrorKind};
use mounti_core::result::AppResult;
use mounti_core::types::{Dialect, WirePayload};

use crate::session::Credentials;

/// Query string pairs, already named for the dialect.
pub type Query = Vec<(String, String)>;

/// Whether a request carries the bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Attach the active token if there is one.
    Bearer,
    /// Never attach a token (sign-in endpoints).
    Anonymous,
}

/// HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    dialect: Dialect,
    credentials: Credentials,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig, credentials: Credentials) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            dialect: config.dialect,
            credentials,
        })
    }

    /// Wire dialect of the backend.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Shared session credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Encode a payload in the backend's dialect.
    pub fn encode<T: WirePayload>(&self, payload: &T) -> AppResult<Value> {
        self.dialect.encode(payload)
    }

    /// `GET` a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> AppResult<T> {
        let body = self
            .execute(Method::GET, path, query, None, Auth::Bearer)
            .await?;
        decode(&body)
    }

    /// `POST` a JSON body and decode the response.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: &Value, auth: Auth) -> AppResult<T> {
        let raw = self
            .execute(Method::POST, path, &[], Some(body), auth)
            .await?;
        decode(&raw)
    }

    /// `POST` without a body, ignoring the response.
    pub async fn post_empty(&self, path: &str) -> AppResult<()> {
        self.execute(Method::POST, path, &[], None, Auth::Bearer)
            .await
            .map(|_| ())
    }

    /// `PUT` a JSON body and decode the response.
    pub async fn put<T: DeserializeOwned>(&self, path: &str, body: &Value) -> AppResult<T> {
        let raw = self
            .execute(Method::PUT, path, &[], Some(body), Auth::Bearer)
            .await?;
        decode(&raw)
    }

    /// `PUT` with optional query and body, ignoring the response.
    pub async fn put_unit(
        &self,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> AppResult<()> {
        self.execute(Method::PUT, path, query, body, Auth::Bearer)
            .await
            .map(|_| ())
    }

    /// `DELETE` a resource, ignoring the response.
    pub async fn delete(&self, path: &str) -> AppResult<()> {
        self.execute(Method::DELETE, path, &[], None, Auth::Bearer)
            .await
            .map(|_| ())
    }

    fn url(&self, path: &str, query: &[(String, String)]) -> AppResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid request URL: {}{}", self.base_url, path),
                e,
            )
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        auth: Auth,
    ) -> AppResult<Vec<u8>> {
        let url = self.url(path, query)?;
        let mut request = self.http.request(method.clone(), url);

        let bearer = match auth {
            Auth::Bearer => self.credentials.bearer().await,
            Auth::Anonymous => None,
        };
        if let Some(token) = &bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let raw = response.bytes().await.map_err(transport_error)?.to_vec();
        debug!(%method, path, status = status.as_u16(), bytes = raw.len(), "Backend responded");

        if status.is_success() {
            return Ok(raw);
        }

        let error = AppError::from_status(status.as_u16(), error_message(status, &raw));
        if status == StatusCode::UNAUTHORIZED {
            if let Some(token) = &bearer {
                if self.credentials.clear_if_current(token).await {
                    info!(path, "Backend rejected the session; signed out locally");
                }
            }
        }
        Err(error)
    }
}

fn decode<T: DeserializeOwned>(raw: &[u8]) -> AppResult<T> {
    serde_json::from_slice(raw).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Unexpected response from backend: {e}"),
            e,
        )
    })
}

fn transport_error(err: reqwest::Error) -> AppError {
    let message = if err.is_timeout() {
        "Backend request timed out".to_string()
    } else if err.is_connect() {
        "Could not connect to the backend".to_string()
    } else {
        format!("Request to backend failed: {err}")
    };
    AppError::with_source(ErrorKind::Transport, message, err)
}

/// Pull a human-readable message out of an error body.
///
/// FastAPI answers `{"detail": "..."}` (or a list of field errors for 422),
/// Spring answers `{"message": "..."}`, `{"error": "..."}`, or plain text.
pub(crate) fn error_message(status: StatusCode, raw: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(raw) {
        if let Some(message) = json_message(&value) {
            return message;
        }
    }
    let text = String::from_utf8_lossy(raw);
    let text = text.trim();
    if !text.is_empty() && !text.starts_with('{') && !text.starts_with('<') {
        return text.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}

fn json_message(value: &Value) -> Option<String> {
    match value.get("detail") {
        Some(Value::String(detail)) => return Some(detail.clone()),
        Some(Value::Array(items)) => {
            if let Some(msg) = items.first().and_then(|i| i.get("msg")).and_then(Value::as_str) {
                return Some(msg.to_string());
            }
        }
        _ => {}
    }
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}
