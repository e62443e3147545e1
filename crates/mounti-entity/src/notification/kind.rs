//! Notification type tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a notification.
///
/// Tags the client does not know are kept verbatim in [`NotificationKind::Other`]
/// so that a newer backend never breaks the notification list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationKind {
    BookingRequest,
    BookingConfirmed,
    TripUpdate,
    TripReminder,
    PaymentReceived,
    TripAvailable,
    /// Unrecognized tag, preserved as received.
    Other(String),
}

impl NotificationKind {
    /// Return the tag in lowercase snake_case.
    pub fn as_str(&self) -> &str {
        match self {
            Self::BookingRequest => "booking_request",
            Self::BookingConfirmed => "booking_confirmed",
            Self::TripUpdate => "trip_update",
            Self::TripReminder => "trip_reminder",
            Self::PaymentReceived => "payment_received",
            Self::TripAvailable => "trip_available",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for NotificationKind {
    fn from(tag: String) -> Self {
        match tag.to_lowercase().as_str() {
            "booking_request" => Self::BookingRequest,
            "booking_confirmed" => Self::BookingConfirmed,
            "trip_update" => Self::TripUpdate,
            "trip_reminder" => Self::TripReminder,
            "payment_received" => Self::PaymentReceived,
            "trip_available" => Self::TripAvailable,
            _ => Self::Other(tag),
        }
    }
}

impl From<NotificationKind> for String {
    fn from(kind: NotificationKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
