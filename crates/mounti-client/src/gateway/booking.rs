//! Booking endpoints.

use mounti_core::error::AppError;
use mounti_core::result::AppResult;
use mounti_core::types::{BookingId, Dialect, TripId};
use mounti_entity::booking::{Booking, BookingRequest, BookingStatus, BookingStatusUpdate};

use crate::transport::{ApiClient, Auth};

/// Reserve capacity and follow booking decisions.
#[derive(Debug, Clone)]
pub struct BookingGateway {
    api: ApiClient,
}

impl BookingGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Book capacity on a trip. The backend computes the price and may still
    /// reject the quantity.
    pub async fn create(&self, request: &BookingRequest) -> AppResult<Booking> {
        if request.quantity == 0 {
            return Err(AppError::validation("Quantity must be at least 1"));
        }
        let body = self.api.encode(request)?;
        self.api.post("/bookings", &body, Auth::Bearer).await
    }

    /// Bookings made by the signed-in client.
    pub async fn mine(&self) -> AppResult<Vec<Booking>> {
        self.api.get("/bookings/my", &[]).await
    }

    /// Bookings against one of the signed-in transporter's trips.
    pub async fn for_trip(&self, trip_id: TripId) -> AppResult<Vec<Booking>> {
        self.api.get(&format!("/bookings/trip/{trip_id}"), &[]).await
    }

    pub async fn get(&self, id: BookingId) -> AppResult<Booking> {
        self.api.get(&format!("/bookings/{id}"), &[]).await
    }

    /// Accept or decline a booking as the trip's transporter.
    pub async fn update_status(&self, id: BookingId, status: BookingStatus) -> AppResult<()> {
        let path = format!("/bookings/{id}/status");
        match self.api.dialect() {
            Dialect::FastApi => {
                let query = vec![(
                    "status".to_string(),
                    Dialect::FastApi.enum_value(status.as_str()),
                )];
                self.api.put_unit(&path, &query, None).await
            }
            Dialect::Spring => {
                let body = self.api.encode(&BookingStatusUpdate { status })?;
                self.api.put_unit(&path, &[], Some(&body)).await
            }
        }
    }
}
