//! # mounti-cli
//!
//! Command tree and terminal rendering for the Mounti client. The binary
//! at the workspace root parses [`Cli`], loads configuration, and calls
//! [`Cli::execute`].

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
