//! Trip domain entities.

pub mod filter;
pub mod model;
pub mod status;

pub use filter::TripFilter;
pub use model::{Trip, TripRequest};
pub use status::TripStatus;
