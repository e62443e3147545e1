//! Booking domain entities and pricing rules.

pub mod kind;
pub mod model;
pub mod pricing;
pub mod status;

pub use kind::BookingKind;
pub use model::{Booking, BookingRequest, BookingStatusUpdate};
pub use pricing::{Quote, check_capacity, quote};
pub use status::BookingStatus;
