//! Trip commands: search, publish, and manage trips.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use mounti_client::MountiClient;
use mounti_client::view::{TripForm, TripSearchView};
use mounti_core::result::AppResult;
use mounti_core::types::{TripId, parse_timestamp};
use mounti_entity::trip::{Trip, TripFilter, TripRequest};

use crate::output::{self, OutputFormat, money};

/// Arguments for trip commands
#[derive(Debug, Args)]
pub struct TripArgs {
    /// Trip subcommand
    #[command(subcommand)]
    pub command: TripCommand,
}

/// Trip subcommands
#[derive(Debug, Subcommand)]
pub enum TripCommand {
    /// Search active trips
    Search {
        /// Origin city (case-insensitive)
        #[arg(long)]
        from: Option<String>,
        /// Destination city (case-insensitive)
        #[arg(long)]
        to: Option<String>,
        /// Departure day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List every active trip
    List,
    /// List trips I publish
    Mine,
    /// Show trip details
    Show {
        /// Trip ID
        id: TripId,
    },
    /// Publish a trip
    Create {
        /// Origin city
        #[arg(long)]
        from: String,
        /// Destination city
        #[arg(long)]
        to: String,
        /// Departure time (RFC 3339 or YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        departure: String,
        /// Passenger seats offered
        #[arg(long, default_value_t = 0)]
        seats: u32,
        /// Parcel weight offered, in kilograms
        #[arg(long, default_value_t = 0.0)]
        weight: f64,
        /// Price of one seat
        #[arg(long, default_value_t = 0.0)]
        price_seat: f64,
        /// Price of one kilogram
        #[arg(long, default_value_t = 0.0)]
        price_kg: f64,
        /// Notes for travellers
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update a trip I publish
    Update {
        /// Trip ID
        id: TripId,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        #[arg(long)]
        departure: Option<String>,
        #[arg(long)]
        seats: Option<u32>,
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        price_seat: Option<f64>,
        #[arg(long)]
        price_kg: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a trip I publish
    Delete {
        /// Trip ID
        id: TripId,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Trip display row
#[derive(Debug, Serialize, Tabled)]
pub struct TripRow {
    /// Trip ID
    pub id: String,
    /// Route
    pub route: String,
    /// Departure
    pub departure: String,
    /// Seats left
    pub seats: u32,
    /// Weight left (kg)
    pub kg: String,
    /// Price per seat
    pub per_seat: String,
    /// Price per kg
    pub per_kg: String,
    /// Transporter
    pub transporter: String,
    /// Status
    pub status: String,
}

impl From<&Trip> for TripRow {
    fn from(t: &Trip) -> Self {
        Self {
            id: t.id.to_string(),
            route: t.route(),
            departure: t.departure_date.format("%Y-%m-%d %H:%M").to_string(),
            seats: t.available_seats,
            kg: format!("{:.1}", t.available_weight_kg),
            per_seat: money(t.price_per_seat),
            per_kg: money(t.price_per_kg),
            transporter: t.transporter_name.clone(),
            status: t.status.to_string(),
        }
    }
}

/// Rows for a list of trips.
pub fn rows(trips: &[Trip]) -> Vec<TripRow> {
    trips.iter().map(TripRow::from).collect()
}

/// Execute trip commands
pub async fn execute(args: &TripArgs, client: &MountiClient, format: OutputFormat) -> AppResult<()> {
    match &args.command {
        TripCommand::Search { from, to, date } => {
            let mut criteria = TripFilter::new();
            criteria.from_location = from.clone();
            criteria.to_location = to.clone();
            criteria.departure_date = *date;

            let mut view = TripSearchView::new(client.trips.clone());
            let trips = view.search(criteria).await.clone().into_result()?;
            output::print_list(&rows(&trips), format);
        }
        TripCommand::List => {
            let trips = client.trips.list_all().await?;
            output::print_list(&rows(&trips), format);
        }
        TripCommand::Mine => {
            super::require_user(client).await?;
            let trips = client.trips.mine().await?;
            output::print_list(&rows(&trips), format);
        }
        TripCommand::Show { id } => {
            let trip = client.trips.get(*id).await?;
            output::print_item(&trip, format);
        }
        TripCommand::Create {
            from,
            to,
            departure,
            seats,
            weight,
            price_seat,
            price_kg,
            notes,
        } => {
            super::require_user(client).await?;
            let mut form = TripForm::new(TripRequest {
                from_location: from.clone(),
                to_location: to.clone(),
                departure_date: parse_timestamp(departure)?,
                available_seats: *seats,
                available_weight_kg: *weight,
                price_per_seat: *price_seat,
                price_per_kg: *price_kg,
                notes: notes.clone(),
            });
            let trip = form.submit(&client.trips).await?;
            output::print_success(&format!("Published trip {} ({})", trip.id, trip.route()));
            output::print_item(&TripRow::from(&trip), format);
        }
        TripCommand::Update {
            id,
            from,
            to,
            departure,
            seats,
            weight,
            price_seat,
            price_kg,
            notes,
        } => {
            super::require_user(client).await?;
            let current = client.trips.get(*id).await?;
            let departure_date = match departure {
                Some(raw) => parse_timestamp(raw)?,
                None => current.departure_date,
            };
            let request = TripRequest {
                from_location: from.clone().unwrap_or(current.from_location),
                to_location: to.clone().unwrap_or(current.to_location),
                departure_date,
                available_seats: seats.unwrap_or(current.available_seats),
                available_weight_kg: weight.unwrap_or(current.available_weight_kg),
                price_per_seat: price_seat.unwrap_or(current.price_per_seat),
                price_per_kg: price_kg.unwrap_or(current.price_per_kg),
                notes: notes.clone().or(current.notes),
            };
            request.check()?;
            let trip = client.trips.update(*id, &request).await?;
            output::print_success(&format!("Updated trip {}", trip.id));
            output::print_item(&TripRow::from(&trip), format);
        }
        TripCommand::Delete { id, yes } => {
            super::require_user(client).await?;
            if !super::confirm(&format!("Delete trip {id}?"), *yes)? {
                output::print_warning("Cancelled");
                return Ok(());
            }
            client.trips.delete(*id).await?;
            output::print_success(&format!("Deleted trip {id}"));
        }
    }

    Ok(())
}
