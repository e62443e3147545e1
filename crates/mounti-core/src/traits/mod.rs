//! Trait definitions shared across crates.

pub mod token_store;

pub use token_store::{StoredSession, TokenStore};
