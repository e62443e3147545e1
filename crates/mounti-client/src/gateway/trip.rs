//! Trip endpoints.

use tracing::debug;

use mounti_core::result::AppResult;
use mounti_core::types::TripId;
use mounti_entity::trip::{Trip, TripFilter, TripRequest};

use crate::transport::{ApiClient, Auth};

/// Search, read, and publish trips.
#[derive(Debug, Clone)]
pub struct TripGateway {
    api: ApiClient,
}

impl TripGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Active trips matching the criteria. An empty filter sends no
    /// parameters and is therefore the same request as [`list_all`](Self::list_all).
    pub async fn search(&self, filter: &TripFilter) -> AppResult<Vec<Trip>> {
        let query = filter.to_query(self.api.dialect());
        debug!(params = query.len(), "Searching trips");
        self.api.get("/trips", &query).await
    }

    /// Every active trip.
    pub async fn list_all(&self) -> AppResult<Vec<Trip>> {
        self.search(&TripFilter::default()).await
    }

    /// Trips published by the signed-in transporter.
    pub async fn mine(&self) -> AppResult<Vec<Trip>> {
        self.api.get("/trips/my", &[]).await
    }

    pub async fn get(&self, id: TripId) -> AppResult<Trip> {
        self.api.get(&format!("/trips/{id}"), &[]).await
    }

    /// Publish a trip as the signed-in transporter.
    pub async fn create(&self, request: &TripRequest) -> AppResult<Trip> {
        request.check()?;
        let body = self.api.encode(request)?;
        self.api.post("/trips", &body, Auth::Bearer).await
    }

    /// Replace a trip's details.
    pub async fn update(&self, id: TripId, request: &TripRequest) -> AppResult<Trip> {
        request.check()?;
        let body = self.api.encode(request)?;
        self.api.put(&format!("/trips/{id}"), &body).await
    }

    pub async fn delete(&self, id: TripId) -> AppResult<()> {
        self.api.delete(&format!("/trips/{id}")).await
    }
}
