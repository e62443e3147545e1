//! Booking commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use mounti_client::MountiClient;
use mounti_client::view::BookingForm;
use mounti_core::result::AppResult;
use mounti_core::types::{BookingId, TripId};
use mounti_entity::booking::{Booking, BookingKind, BookingStatus, Quote};

use crate::output::{self, OutputFormat, money};

/// Arguments for booking commands
#[derive(Debug, Args)]
pub struct BookingArgs {
    /// Booking subcommand
    #[command(subcommand)]
    pub command: BookingCommand,
}

/// Booking subcommands
#[derive(Debug, Subcommand)]
pub enum BookingCommand {
    /// Book seats or parcel weight on a trip
    Create {
        /// Trip ID
        trip_id: TripId,
        /// What to book: seat or parcel
        #[arg(short, long, default_value = "seat")]
        kind: BookingKind,
        /// Number of seats or kilograms
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Price a booking without placing it
    Quote {
        /// Trip ID
        trip_id: TripId,
        /// What to book: seat or parcel
        #[arg(short, long, default_value = "seat")]
        kind: BookingKind,
        /// Number of seats or kilograms
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// List my bookings
    Mine,
    /// List bookings on one of my trips
    ForTrip {
        /// Trip ID
        trip_id: TripId,
    },
    /// Show booking details
    Show {
        /// Booking ID
        id: BookingId,
    },
    /// Confirm or cancel a booking
    Status {
        /// Booking ID
        id: BookingId,
        /// New status: pending, confirmed, or cancelled
        status: BookingStatus,
    },
}

/// Booking display row
#[derive(Debug, Serialize, Tabled)]
pub struct BookingRow {
    /// Booking ID
    pub id: String,
    /// Trip ID
    pub trip: String,
    /// Client
    pub client: String,
    /// Kind
    pub kind: String,
    /// Quantity with unit
    pub quantity: String,
    /// Total price
    pub total: String,
    /// Status
    pub status: String,
    /// Booked at
    pub booked: String,
}

impl From<&Booking> for BookingRow {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id.to_string(),
            trip: b.trip_id.to_string(),
            client: b.client_name.clone(),
            kind: b.booking_type.to_string(),
            quantity: format!("{} {}", b.quantity, b.booking_type.unit()),
            total: money(b.total_price),
            status: b.status.to_string(),
            booked: b.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Rows for a list of bookings.
pub fn rows(bookings: &[Booking]) -> Vec<BookingRow> {
    bookings.iter().map(BookingRow::from).collect()
}

fn print_quote(route: &str, quote: &Quote, format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_item(quote, format),
        OutputFormat::Table => {
            output::print_kv("Route", route);
            output::print_kv(
                "Quantity",
                &format!("{} {}", quote.quantity, quote.kind.unit()),
            );
            output::print_kv("Unit price", &money(quote.unit_price));
            output::print_kv("Total", &money(quote.total));
        }
    }
}

/// Execute booking commands
pub async fn execute(
    args: &BookingArgs,
    client: &MountiClient,
    format: OutputFormat,
) -> AppResult<()> {
    match &args.command {
        BookingCommand::Create {
            trip_id,
            kind,
            quantity,
        } => {
            super::require_user(client).await?;
            let mut form = BookingForm::new(client.trips.get(*trip_id).await?);
            form.kind = *kind;
            form.quantity = *quantity;
            form.validate()?;
            if format == OutputFormat::Table {
                print_quote(&form.trip().route(), &form.quote(), format);
            }

            let booking = form.submit(&client.bookings).await?;
            output::print_success(&format!(
                "Booked {} {} on {} (status: {})",
                booking.quantity,
                booking.booking_type.unit(),
                form.trip().route(),
                booking.status
            ));
            if format == OutputFormat::Json {
                output::print_item(&booking, format);
            }
        }
        BookingCommand::Quote {
            trip_id,
            kind,
            quantity,
        } => {
            let mut form = BookingForm::new(client.trips.get(*trip_id).await?);
            form.kind = *kind;
            form.quantity = *quantity;
            if let Err(e) = form.validate() {
                output::print_warning(&e.message);
            }
            print_quote(&form.trip().route(), &form.quote(), format);
        }
        BookingCommand::Mine => {
            super::require_user(client).await?;
            let bookings = client.bookings.mine().await?;
            output::print_list(&rows(&bookings), format);
        }
        BookingCommand::ForTrip { trip_id } => {
            super::require_user(client).await?;
            let bookings = client.bookings.for_trip(*trip_id).await?;
            output::print_list(&rows(&bookings), format);
        }
        BookingCommand::Show { id } => {
            let booking = client.bookings.get(*id).await?;
            output::print_item(&booking, format);
        }
        BookingCommand::Status { id, status } => {
            super::require_user(client).await?;
            client.bookings.update_status(*id, *status).await?;
            output::print_success(&format!("Booking {id} is now {status}"));
        }
    }

    Ok(())
}
