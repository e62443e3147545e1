//! Client-side pricing and capacity rules.
//!
//! These mirror what the backend enforces so a form can refuse an obviously
//! invalid booking before sending it. The backend stays authoritative.

use serde::Serialize;

use mounti_core::AppError;
use mounti_core::result::AppResult;

use super::kind::BookingKind;
use crate::trip::Trip;

/// Price breakdown for a prospective booking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    /// Seat or parcel.
    pub kind: BookingKind,
    /// Seats or kilograms.
    pub quantity: u32,
    /// Price per seat or per kilogram.
    pub unit_price: f64,
    /// `quantity × unit_price`.
    pub total: f64,
}

/// Compute the price of booking `quantity` units of `kind` on `trip`.
pub fn quote(trip: &Trip, kind: BookingKind, quantity: u32) -> Quote {
    let unit_price = trip.unit_price(kind);
    Quote {
        kind,
        quantity,
        unit_price,
        total: f64::from(quantity) * unit_price,
    }
}

/// Check a quantity against the trip's last observed capacity.
pub fn check_capacity(trip: &Trip, kind: BookingKind, quantity: u32) -> AppResult<()> {
    if quantity == 0 {
        return Err(AppError::validation("Quantity must be at least 1"));
    }
    if !trip.is_bookable() {
        return Err(AppError::validation(format!(
            "Trip is {} and no longer accepts bookings",
            trip.status
        )));
    }
    if f64::from(quantity) > trip.remaining_capacity(kind) {
        let message = match kind {
            BookingKind::Seat => "Not enough seats available",
            BookingKind::Parcel => "Not enough weight capacity available",
        };
        return Err(AppError::validation(message));
    }
    Ok(())
}
