//! Authentication payloads exchanged with the session endpoints.

pub mod request;
pub mod response;

pub use request::{Credential, LoginRequest, OAuthSessionRequest, RegisterRequest};
pub use response::AuthSession;
