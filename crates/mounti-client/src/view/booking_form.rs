//! Booking form shown against one trip.

use mounti_core::result::AppResult;
use mounti_entity::booking::{Booking, BookingKind, BookingRequest, Quote, check_capacity, quote};
use mounti_entity::trip::Trip;

use super::state::FormPhase;
use crate::gateway::BookingGateway;

/// Kind and quantity chosen against a trip snapshot.
///
/// Capacity is checked against the snapshot, which may be stale; the backend
/// has the final say.
#[derive(Debug, Clone)]
pub struct BookingForm {
    trip: Trip,
    pub kind: BookingKind,
    pub quantity: u32,
    pub phase: FormPhase,
    pub booking: Option<Booking>,
}

impl BookingForm {
    /// One seat by default.
    pub fn new(trip: Trip) -> Self {
        Self {
            trip,
            kind: BookingKind::Seat,
            quantity: 1,
            phase: FormPhase::Idle,
            booking: None,
        }
    }

    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    /// Price of the current selection.
    pub fn quote(&self) -> Quote {
        quote(&self.trip, self.kind, self.quantity)
    }

    /// Quantity against the trip's last observed capacity.
    pub fn validate(&self) -> AppResult<()> {
        check_capacity(&self.trip, self.kind, self.quantity)
    }

    /// Validate and send the booking.
    pub async fn submit(&mut self, gateway: &BookingGateway) -> AppResult<Booking> {
        if let Err(e) = self.validate() {
            self.phase.reject(&e);
            return Err(e);
        }
        self.phase.begin()?;
        let request = BookingRequest {
            trip_id: self.trip.id,
            booking_type: self.kind,
            quantity: self.quantity,
        };
        let result = gateway.create(&request).await;
        self.phase.settle(&result);
        if let Ok(booking) = &result {
            self.booking = Some(booking.clone());
        }
        result
    }
}
