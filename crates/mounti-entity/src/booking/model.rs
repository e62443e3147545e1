//! Booking entity model and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mounti_core::types::timestamp::flexible;
use mounti_core::types::{BookingId, TripId, UserId, WirePayload};

use super::kind::BookingKind;
use super::status::BookingStatus;

/// A client's reservation against a trip's capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: BookingId,
    /// The trip being booked.
    #[serde(alias = "tripId")]
    pub trip_id: TripId,
    /// The booking client.
    #[serde(alias = "clientId")]
    pub client_id: UserId,
    /// Client display name, denormalized by the backend.
    #[serde(default, alias = "clientName")]
    pub client_name: String,
    /// Seat or parcel.
    #[serde(alias = "bookingType")]
    pub booking_type: BookingKind,
    /// Seats or kilograms, depending on the kind.
    pub quantity: u32,
    /// Price computed by the backend.
    #[serde(alias = "totalPrice")]
    pub total_price: f64,
    /// Server-driven state.
    #[serde(default)]
    pub status: BookingStatus,
    /// When the booking was made.
    #[serde(alias = "createdAt", with = "flexible")]
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Whether the transporter still has to decide.
    pub fn is_pending(&self) -> bool {
        self.status == BookingStatus::Pending
    }
}

/// Payload for `POST /bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Trip to book.
    pub trip_id: TripId,
    /// Seat or parcel.
    pub booking_type: BookingKind,
    /// Seats or kilograms.
    pub quantity: u32,
}

impl WirePayload for BookingRequest {
    const ENUM_FIELDS: &'static [&'static str] = &["booking_type"];
}

/// JSON body for a booking status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingStatusUpdate {
    /// Target status.
    pub status: BookingStatus,
}

impl WirePayload for BookingStatusUpdate {
    const ENUM_FIELDS: &'static [&'static str] = &["status"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use mounti_core::types::Dialect;

    #[test]
    fn test_both_wire_shapes_deserialize_alike() {
        let fastapi: Booking = serde_json::from_value(serde_json::json!({
            "id": "6f1c2f6e-1111-4c1b-bb61-5d7c1b1ea001",
            "trip_id": "6f1c2f6e-2222-4c1b-bb61-5d7c1b1ea001",
            "client_id": "6f1c2f6e-3333-4c1b-bb61-5d7c1b1ea001",
            "client_name": "Sami",
            "booking_type": "parcel",
            "quantity": 5,
            "total_price": 50.0,
            "status": "pending",
            "created_at": "2025-07-02T09:30:00.123456"
        }))
        .expect("fastapi shape");

        let spring: Booking = serde_json::from_value(serde_json::json!({
            "id": "6f1c2f6e-1111-4c1b-bb61-5d7c1b1ea001",
            "tripId": "6f1c2f6e-2222-4c1b-bb61-5d7c1b1ea001",
            "clientId": "6f1c2f6e-3333-4c1b-bb61-5d7c1b1ea001",
            "clientName": "Sami",
            "bookingType": "PARCEL",
            "quantity": 5,
            "totalPrice": 50.0,
            "status": "PENDING",
            "createdAt": "2025-07-02T09:30:00.123456"
        }))
        .expect("spring shape");

        assert_eq!(fastapi, spring);
        assert!(spring.is_pending());
    }

    #[test]
    fn test_request_encoding() {
        let request = BookingRequest {
            trip_id: TripId::parse("6f1c2f6e-2222-4c1b-bb61-5d7c1b1ea001").unwrap(),
            booking_type: BookingKind::Seat,
            quantity: 2,
        };
        let body = Dialect::Spring.encode(&request).unwrap();
        assert_eq!(body["bookingType"], "SEAT");
        assert_eq!(body["tripId"], "6f1c2f6e-2222-4c1b-bb61-5d7c1b1ea001");

        let body = Dialect::FastApi.encode(&request).unwrap();
        assert_eq!(body["booking_type"], "seat");
    }

    #[test]
    fn test_status_update_encoding() {
        let body = Dialect::Spring
            .encode(&BookingStatusUpdate {
                status: BookingStatus::Confirmed,
            })
            .unwrap();
        assert_eq!(body, serde_json::json!({ "status": "CONFIRMED" }));
    }
}
