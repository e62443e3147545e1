//! # mounti-core
//!
//! Core crate for the Mounti client. Contains configuration schemas,
//! typed identifiers, the backend wire dialects, the credential storage
//! trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Mounti crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
