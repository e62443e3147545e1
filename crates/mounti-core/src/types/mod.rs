//! Core type definitions used across the Mounti workspace.

pub mod dialect;
pub mod id;
pub mod timestamp;

pub use dialect::{Dialect, WirePayload};
pub use id::*;
pub use timestamp::parse_timestamp;
