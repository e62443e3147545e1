//! View models: the state the command-line front end renders.
//!
//! Each view owns its own state machine ([`Loadable`] for fetched data,
//! [`FormPhase`] for submissions) and talks to the backend only through
//! the gateways.

pub mod booking_form;
pub mod dashboard;
pub mod notifications;
pub mod state;
pub mod trip_form;
pub mod trip_search;

pub use booking_form::BookingForm;
pub use dashboard::{DashboardSummary, DashboardView};
pub use notifications::NotificationsView;
pub use state::{FormPhase, Loadable};
pub use trip_form::TripForm;
pub use trip_search::TripSearchView;
