//! Trip search screen.

use mounti_entity::trip::{Trip, TripFilter};

use super::state::Loadable;
use crate::gateway::TripGateway;

/// Search criteria and the trips they matched.
#[derive(Debug, Clone)]
pub struct TripSearchView {
    gateway: TripGateway,
    pub criteria: TripFilter,
    pub results: Loadable<Vec<Trip>>,
}

impl TripSearchView {
    pub fn new(gateway: TripGateway) -> Self {
        Self {
            gateway,
            criteria: TripFilter::default(),
            results: Loadable::Loading,
        }
    }

    /// Run a search with new criteria.
    pub async fn search(&mut self, criteria: TripFilter) -> &Loadable<Vec<Trip>> {
        self.criteria = criteria;
        self.reload().await
    }

    /// Drop all criteria and show every active trip.
    pub async fn clear(&mut self) -> &Loadable<Vec<Trip>> {
        self.search(TripFilter::default()).await
    }

    /// Re-run the current criteria.
    pub async fn reload(&mut self) -> &Loadable<Vec<Trip>> {
        self.results = Loadable::Loading;
        self.results = Loadable::from_result(self.gateway.search(&self.criteria).await);
        &self.results
    }
}
