//! Session state, credential persistence, and the login/logout lifecycle.

pub mod credentials;
pub mod manager;
pub mod store;

pub use credentials::Credentials;
pub use manager::SessionManager;
pub use store::{FileTokenStore, MemoryTokenStore};
