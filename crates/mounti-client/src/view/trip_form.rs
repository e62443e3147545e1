//! Trip publishing form.

use mounti_core::result::AppResult;
use mounti_entity::trip::{Trip, TripRequest};

use super::state::FormPhase;
use crate::gateway::TripGateway;

/// Draft trip plus submission state.
#[derive(Debug, Clone)]
pub struct TripForm {
    pub draft: TripRequest,
    pub phase: FormPhase,
    /// The trip as the backend stored it, after a successful submit.
    pub created: Option<Trip>,
}

impl TripForm {
    pub fn new(draft: TripRequest) -> Self {
        Self {
            draft,
            phase: FormPhase::Idle,
            created: None,
        }
    }

    /// Client-side checks: non-blank locations, non-negative finite amounts.
    pub fn validate(&self) -> AppResult<()> {
        self.draft.check()
    }

    /// Validate and publish.
    pub async fn submit(&mut self, gateway: &TripGateway) -> AppResult<Trip> {
        if let Err(e) = self.validate() {
            self.phase.reject(&e);
            return Err(e);
        }
        self.phase.begin()?;
        let result = gateway.create(&self.draft).await;
        self.phase.settle(&result);
        if let Ok(trip) = &result {
            self.created = Some(trip.clone());
        }
        result
    }
}
