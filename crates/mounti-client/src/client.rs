//! Entry point wiring transport, session, and gateways together.

use std::sync::Arc;

use tracing::debug;

use mounti_core::config::AppConfig;
use mounti_core::result::AppResult;
use mounti_core::traits::TokenStore;

use crate::gateway::{BookingGateway, NotificationFeed, NotificationGateway, TripGateway};
use crate::session::{Credentials, FileTokenStore, SessionManager};
use crate::transport::ApiClient;

/// Everything a front end needs to talk to one Mounti backend.
///
/// All members share one connection pool and one session.
#[derive(Debug, Clone)]
pub struct MountiClient {
    pub session: SessionManager,
    pub trips: TripGateway,
    pub bookings: BookingGateway,
    pub notifications: NotificationGateway,
    pub feed: NotificationFeed,
    api: ApiClient,
}

impl MountiClient {
    /// Build a client persisting its session to `session.token_file`.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let store = Arc::new(FileTokenStore::new(&config.session.token_file));
        Self::with_store(config, store)
    }

    /// Build a client over a caller-supplied token store.
    pub fn with_store(config: &AppConfig, store: Arc<dyn TokenStore>) -> AppResult<Self> {
        let credentials = Credentials::new(store);
        let api = ApiClient::new(&config.api, credentials)?;
        debug!(base_url = api.base_url(), dialect = %api.dialect(), "Mounti client ready");

        let notifications = NotificationGateway::new(api.clone());
        Ok(Self {
            session: SessionManager::new(api.clone(), &config.session),
            trips: TripGateway::new(api.clone()),
            bookings: BookingGateway::new(api.clone()),
            feed: NotificationFeed::new(notifications.clone()),
            notifications,
            api,
        })
    }

    /// The underlying transport.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}
