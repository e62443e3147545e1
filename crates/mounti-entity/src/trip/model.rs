//! Trip entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mounti_core::result::AppResult;
use mounti_core::types::timestamp::flexible;
use mounti_core::types::{TripId, UserId, WirePayload};

use super::status::TripStatus;
use crate::booking::BookingKind;
use crate::validation::{require_non_negative, require_not_blank};

/// A transporter's declared capacity on a route and date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique trip identifier.
    pub id: TripId,
    /// The transporter offering the capacity.
    #[serde(alias = "transporterId")]
    pub transporter_id: UserId,
    /// Transporter display name, denormalized by the backend.
    #[serde(default, alias = "transporterName")]
    pub transporter_name: String,
    /// Origin city.
    #[serde(alias = "fromLocation")]
    pub from_location: String,
    /// Destination city.
    #[serde(alias = "toLocation")]
    pub to_location: String,
    /// Departure time.
    #[serde(alias = "departureDate", with = "flexible")]
    pub departure_date: DateTime<Utc>,
    /// Passenger seats still available.
    #[serde(alias = "availableSeats")]
    pub available_seats: u32,
    /// Parcel weight still available, in kilograms.
    #[serde(alias = "availableWeightKg")]
    pub available_weight_kg: f64,
    /// Price of one seat.
    #[serde(alias = "pricePerSeat")]
    pub price_per_seat: f64,
    /// Price of one kilogram of parcel.
    #[serde(alias = "pricePerKg")]
    pub price_per_kg: f64,
    /// Free-form notes from the transporter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Lifecycle state.
    #[serde(default)]
    pub status: TripStatus,
    /// When the trip was published.
    #[serde(alias = "createdAt", with = "flexible")]
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Unit price for the given booking kind.
    pub fn unit_price(&self, kind: BookingKind) -> f64 {
        match kind {
            BookingKind::Seat => self.price_per_seat,
            BookingKind::Parcel => self.price_per_kg,
        }
    }

    /// Remaining capacity for the given booking kind, as last observed.
    pub fn remaining_capacity(&self, kind: BookingKind) -> f64 {
        match kind {
            BookingKind::Seat => f64::from(self.available_seats),
            BookingKind::Parcel => self.available_weight_kg,
        }
    }

    /// Whether the trip still accepts bookings.
    pub fn is_bookable(&self) -> bool {
        self.status == TripStatus::Active
    }

    /// Human-readable route, e.g. `Tunis → Paris`.
    pub fn route(&self) -> String {
        format!("{} → {}", self.from_location, self.to_location)
    }
}

/// Payload for creating or updating a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Origin city.
    pub from_location: String,
    /// Destination city.
    pub to_location: String,
    /// Departure time.
    #[serde(with = "flexible")]
    pub departure_date: DateTime<Utc>,
    /// Seats offered.
    pub available_seats: u32,
    /// Parcel weight offered, in kilograms.
    pub available_weight_kg: f64,
    /// Price of one seat.
    pub price_per_seat: f64,
    /// Price of one kilogram of parcel.
    pub price_per_kg: f64,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TripRequest {
    /// Client-side checks before submitting.
    pub fn check(&self) -> AppResult<()> {
        require_not_blank("from_location", &self.from_location)?;
        require_not_blank("to_location", &self.to_location)?;
        require_non_negative("available_weight_kg", self.available_weight_kg)?;
        require_non_negative("price_per_seat", self.price_per_seat)?;
        require_non_negative("price_per_kg", self.price_per_kg)?;
        Ok(())
    }
}

impl WirePayload for TripRequest {}
