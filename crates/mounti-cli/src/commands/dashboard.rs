//! Dashboard command.

use serde_json::json;

use mounti_client::MountiClient;
use mounti_client::view::DashboardView;
use mounti_core::result::AppResult;

use super::{booking, trip};
use crate::output::{self, OutputFormat};

/// Execute the dashboard command
pub async fn execute(client: &MountiClient, format: OutputFormat) -> AppResult<()> {
    let user = super::require_user(client).await?;
    let view = DashboardView::load(&client.trips, &client.bookings, &client.feed).await;
    let summary = view.summary();

    if format == OutputFormat::Json {
        let errors: serde_json::Map<String, serde_json::Value> = view
            .errors()
            .into_iter()
            .map(|(slot, e)| (slot.to_string(), json!(e)))
            .collect();
        let body = json!({
            "user": user,
            "summary": summary,
            "recent_trips": view.recent_trips(),
            "recent_bookings": view.recent_bookings(),
            "errors": errors,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_else(|_| "{}".to_string())
        );
        return Ok(());
    }

    println!("Welcome back, {}", user.name);
    output::print_kv("My trips", &summary.my_trips.to_string());
    output::print_kv("My bookings", &summary.bookings.to_string());
    output::print_kv(
        "Unread notifications",
        &summary.unread_notifications.to_string(),
    );

    if user.is_transporter {
        println!("\nRecent trips");
        output::print_list(&trip::rows(view.recent_trips()), format);
    }
    println!("\nRecent bookings");
    output::print_list(&booking::rows(view.recent_bookings()), format);

    for (slot, error) in view.errors() {
        output::print_warning(&format!("Could not load {slot}: {error}"));
    }

    Ok(())
}
