//! Trip search criteria.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mounti_core::types::Dialect;

/// Server-side trip search criteria. Blank fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripFilter {
    /// Case-insensitive origin match.
    pub from_location: Option<String>,
    /// Case-insensitive destination match.
    pub to_location: Option<String>,
    /// Departure day.
    pub departure_date: Option<NaiveDate>,
}

impl TripFilter {
    /// Create an empty filter (matches every active trip).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict by origin.
    pub fn from(mut self, location: impl Into<String>) -> Self {
        self.from_location = Some(location.into());
        self
    }

    /// Restrict by destination.
    pub fn to(mut self, location: impl Into<String>) -> Self {
        self.to_location = Some(location.into());
        self
    }

    /// Restrict by departure day.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.departure_date = Some(date);
        self
    }

    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        non_blank(&self.from_location).is_none()
            && non_blank(&self.to_location).is_none()
            && self.departure_date.is_none()
    }

    /// Render the criteria as query parameters in the given dialect.
    pub fn to_query(&self, dialect: Dialect) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(from) = non_blank(&self.from_location) {
            params.push((dialect.field_name("from_location"), from.to_string()));
        }
        if let Some(to) = non_blank(&self.to_location) {
            params.push((dialect.field_name("to_location"), to.to_string()));
        }
        if let Some(date) = self.departure_date {
            params.push((
                dialect.field_name("departure_date"),
                date.format("%Y-%m-%d").to_string(),
            ));
        }
        params
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
