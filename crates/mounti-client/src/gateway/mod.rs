//! Typed wrappers over the backend's domain endpoints.
//!
//! Gateways do no client-side filtering or caching of their own; every call
//! is one HTTP request through the shared [`ApiClient`](crate::transport::ApiClient).

pub mod booking;
pub mod feed;
pub mod notification;
pub mod trip;

pub use booking::BookingGateway;
pub use feed::NotificationFeed;
pub use notification::NotificationGateway;
pub use trip::TripGateway;
