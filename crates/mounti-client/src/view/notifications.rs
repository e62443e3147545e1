//! Notification list screen.

use mounti_core::result::AppResult;
use mounti_core::types::NotificationId;
use mounti_entity::notification::Notification;

use super::state::Loadable;
use crate::gateway::NotificationFeed;

/// Notification list backed by the shared feed.
#[derive(Debug, Clone)]
pub struct NotificationsView {
    feed: NotificationFeed,
    pub list: Loadable<Vec<Notification>>,
}

impl NotificationsView {
    pub fn new(feed: NotificationFeed) -> Self {
        Self {
            feed,
            list: Loadable::Loading,
        }
    }

    /// Fetch the list.
    pub async fn load(&mut self) -> &Loadable<Vec<Notification>> {
        self.list = Loadable::Loading;
        self.list = Loadable::from_result(self.feed.refresh().await);
        &self.list
    }

    /// Mark one notification read and show the updated cached list.
    pub async fn mark_read(&mut self, id: NotificationId) -> AppResult<()> {
        self.feed.mark_read(id).await?;
        self.list = Loadable::Ready(self.feed.snapshot());
        Ok(())
    }

    pub fn unread_count(&self) -> usize {
        self.list
            .ready()
            .map_or(0, |list| list.iter().filter(|n| n.is_unread()).count())
    }
}
