//! Last-fetched notification list, observable by any number of views.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use mounti_core::result::AppResult;
use mounti_core::types::NotificationId;
use mounti_entity::notification::Notification;

use super::notification::NotificationGateway;

/// Notification cache backed by a `watch` channel.
///
/// Only the most recent list is kept. Marking read updates the cached copy
/// in place so subscribers see the change without a refetch. The cache is
/// emptied whenever the session changes hands or is dropped.
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    gateway: NotificationGateway,
    tx: Arc<watch::Sender<Vec<Notification>>>,
}

impl NotificationFeed {
    pub fn new(gateway: NotificationGateway) -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        let tx = Arc::new(tx);
        gateway.api().credentials().on_session_change({
            let tx = Arc::clone(&tx);
            move || {
                tx.send_if_modified(|list| {
                    let had_items = !list.is_empty();
                    list.clear();
                    had_items
                });
            }
        });
        Self { gateway, tx }
    }

    /// Observe list changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.tx.subscribe()
    }

    /// Copy of the cached list.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.tx.borrow().clone()
    }

    /// Unread notifications in the cached list.
    pub fn unread_count(&self) -> usize {
        self.tx.borrow().iter().filter(|n| n.is_unread()).count()
    }

    /// Replace the cache with a fresh list from the backend.
    pub async fn refresh(&self) -> AppResult<Vec<Notification>> {
        let list = self.gateway.list().await?;
        debug!(count = list.len(), "Notification feed refreshed");
        self.tx.send_replace(list.clone());
        Ok(list)
    }

    /// Seed the cache with a list fetched elsewhere.
    pub fn replace(&self, list: Vec<Notification>) {
        self.tx.send_replace(list);
    }

    /// Mark one notification read on the backend, then in the cache.
    pub async fn mark_read(&self, id: NotificationId) -> AppResult<()> {
        self.gateway.mark_read(id).await?;
        self.tx.send_if_modified(|list| {
            list.iter_mut()
                .find(|n| n.id == id)
                .map(Notification::mark_read)
                .unwrap_or(false)
        });
        Ok(())
    }
}
