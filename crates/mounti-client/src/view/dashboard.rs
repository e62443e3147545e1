//! Home screen: my trips, my bookings, unread notifications.

use serde::Serialize;
use tracing::warn;

use mounti_entity::booking::Booking;
use mounti_entity::notification::Notification;
use mounti_entity::trip::Trip;

use super::state::Loadable;
use crate::gateway::{BookingGateway, NotificationFeed, TripGateway};

/// How many items the "recent" sections show.
pub const RECENT_LIMIT: usize = 3;

/// Headline counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub my_trips: usize,
    pub bookings: usize,
    pub unread_notifications: usize,
}

/// Four independently settled slots, fetched concurrently.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub trips: Loadable<Vec<Trip>>,
    pub my_trips: Loadable<Vec<Trip>>,
    pub bookings: Loadable<Vec<Booking>>,
    pub notifications: Loadable<Vec<Notification>>,
}

impl DashboardView {
    /// Fetch every slot at once. A failing slot does not affect the others.
    pub async fn load(
        trips: &TripGateway,
        bookings: &BookingGateway,
        feed: &NotificationFeed,
    ) -> Self {
        let (all, mine, booked, notes) =
            tokio::join!(trips.list_all(), trips.mine(), bookings.mine(), feed.refresh());

        let view = Self {
            trips: Loadable::from_result(all),
            my_trips: Loadable::from_result(mine),
            bookings: Loadable::from_result(booked),
            notifications: Loadable::from_result(notes),
        };
        for (slot, error) in view.errors() {
            warn!(slot, error, "Dashboard slot failed to load");
        }
        view
    }

    /// Counts over whatever loaded; failed slots count as zero.
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            my_trips: self.my_trips.ready().map_or(0, Vec::len),
            bookings: self.bookings.ready().map_or(0, Vec::len),
            unread_notifications: self
                .notifications
                .ready()
                .map_or(0, |list| list.iter().filter(|n| n.is_unread()).count()),
        }
    }

    /// The first few of my trips, in backend order.
    pub fn recent_trips(&self) -> &[Trip] {
        recent(self.my_trips.ready())
    }

    /// The first few of my bookings, in backend order.
    pub fn recent_bookings(&self) -> &[Booking] {
        recent(self.bookings.ready())
    }

    /// Slot name and message of each failed slot.
    pub fn errors(&self) -> Vec<(&'static str, &str)> {
        [
            ("trips", self.trips.error()),
            ("my_trips", self.my_trips.error()),
            ("bookings", self.bookings.error()),
            ("notifications", self.notifications.error()),
        ]
        .into_iter()
        .filter_map(|(slot, err)| err.map(|e| (slot, e)))
        .collect()
    }
}

fn recent<T>(list: Option<&Vec<T>>) -> &[T] {
    match list {
        Some(items) => &items[..items.len().min(RECENT_LIMIT)],
        None => &[],
    }
}
