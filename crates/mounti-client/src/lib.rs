//! # mounti-client
//!
//! Typed client for the Mounti marketplace backend.
//!
//! - [`transport::ApiClient`] sends JSON over HTTP and attaches the bearer
//!   credential held by [`session::Credentials`].
//! - [`session::SessionManager`] acquires, restores, and drops that credential.
//! - [`gateway`] wraps the trip, booking, and notification endpoints.
//! - [`view`] holds the state machines the command-line front end renders.
//!
//! [`MountiClient`] wires all of them from an [`AppConfig`](mounti_core::config::AppConfig).

pub mod client;
pub mod gateway;
pub mod session;
pub mod transport;
pub mod view;

pub use client::MountiClient;
