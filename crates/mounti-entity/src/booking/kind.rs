//! Booking kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a booking reserves on a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum BookingKind {
    /// Passenger seats; quantity counts seats.
    Seat,
    /// Parcel space; quantity counts kilograms.
    Parcel,
}

impl BookingKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seat => "seat",
            Self::Parcel => "parcel",
        }
    }

    /// Unit the quantity is expressed in.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Seat => "seat(s)",
            Self::Parcel => "kg",
        }
    }
}

impl fmt::Display for BookingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingKind {
    type Err = mounti_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seat" => Ok(Self::Seat),
            "parcel" => Ok(Self::Parcel),
            _ => Err(mounti_core::AppError::validation(format!(
                "Invalid booking type: '{s}'. Expected one of: seat, parcel"
            ))),
        }
    }
}

impl TryFrom<String> for BookingKind {
    type Error = mounti_core::AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
