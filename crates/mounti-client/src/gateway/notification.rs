//! Notification endpoints.

use mounti_core::result::AppResult;
use mounti_core::types::NotificationId;
use mounti_entity::notification::Notification;

use crate::transport::ApiClient;

/// Read and acknowledge notifications.
#[derive(Debug, Clone)]
pub struct NotificationGateway {
    api: ApiClient,
}

impl NotificationGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Notifications of the signed-in user, newest first as the backend orders them.
    pub async fn list(&self) -> AppResult<Vec<Notification>> {
        self.api.get("/notifications", &[]).await
    }

    /// Mark one notification read. Repeating the call is harmless.
    pub async fn mark_read(&self, id: NotificationId) -> AppResult<()> {
        self.api
            .put_unit(&format!("/notifications/{id}/read"), &[], None)
            .await
    }

    /// Number of unread notifications.
    ///
    /// Uses the dedicated endpoint when the backend has one, otherwise
    /// counts the full list.
    pub async fn unread_count(&self) -> AppResult<u64> {
        if self.api.dialect().has_unread_count_endpoint() {
            self.api.get("/notifications/unread-count", &[]).await
        } else {
            let list = self.list().await?;
            Ok(list.iter().filter(|n| n.is_unread()).count() as u64)
        }
    }
}
