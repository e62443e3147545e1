//! The in-memory authenticated identity shared by every gateway.

use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use mounti_core::result::AppResult;
use mounti_core::traits::{StoredSession, TokenStore};
use mounti_entity::user::User;

#[derive(Debug, Clone)]
struct ActiveSession {
    token: String,
    user: Option<User>,
}

type SessionHook = Box<dyn Fn() + Send + Sync>;

/// Bearer credential and current user, shared between the transport and
/// the session manager.
///
/// Cloning is cheap; all clones observe the same session. The session lock
/// is only held for in-memory reads and writes, never across a network call.
/// Writes to the token store are serialized by a separate lock so that the
/// stored record always matches the last session installed or cleared.
#[derive(Clone)]
pub struct Credentials {
    active: Arc<RwLock<Option<ActiveSession>>>,
    store: Arc<dyn TokenStore>,
    store_lock: Arc<Mutex<()>>,
    hooks: Arc<StdMutex<Vec<SessionHook>>>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Create an empty credential holder backed by the given store.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            active: Arc::new(RwLock::new(None)),
            store,
            store_lock: Arc::new(Mutex::new(())),
            hooks: Arc::new(StdMutex::new(Vec::new())),
        }
    }

    /// Run `hook` whenever the session is replaced or dropped, including a
    /// sign-out forced by a 401. Caches of per-user data register here.
    pub fn on_session_change(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.hooks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(hook));
    }

    fn session_changed(&self) {
        let hooks = self.hooks.lock().unwrap_or_else(PoisonError::into_inner);
        for hook in hooks.iter() {
            hook();
        }
    }

    /// The bearer token to attach, if a session is active.
    pub async fn bearer(&self) -> Option<String> {
        self.active.read().await.as_ref().map(|s| s.token.clone())
    }

    /// The user of the active session, once known.
    pub async fn user(&self) -> Option<User> {
        self.active.read().await.as_ref().and_then(|s| s.user.clone())
    }

    /// Whether a bearer token is held.
    pub async fn is_active(&self) -> bool {
        self.active.read().await.is_some()
    }

    /// Persist a new token and make it the active credential.
    ///
    /// The store is written first so a storage failure leaves the previous
    /// session in place.
    pub async fn install(
        &self,
        token: String,
        expires_at: Option<DateTime<Utc>>,
        user: Option<User>,
    ) -> AppResult<()> {
        {
            let _store = self.store_lock.lock().await;
            self.store
                .save(&StoredSession::new(token.clone(), expires_at))
                .await?;
            *self.active.write().await = Some(ActiveSession { token, user });
        }
        self.session_changed();
        Ok(())
    }

    /// Adopt a token loaded from the store without writing it back.
    pub(crate) async fn adopt(&self, token: String) {
        *self.active.write().await = Some(ActiveSession { token, user: None });
    }

    /// Record the user behind the active token.
    pub async fn set_user(&self, user: User) {
        if let Some(active) = self.active.write().await.as_mut() {
            active.user = Some(user);
        }
    }

    /// Load a stored session, discarding it if expired.
    pub async fn load_stored(&self) -> AppResult<Option<StoredSession>> {
        let _store = self.store_lock.lock().await;
        match self.store.load().await? {
            Some(stored) if stored.is_expired() => {
                info!("Stored session expired; discarding");
                self.store.clear().await?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// Drop the active session and the stored token.
    ///
    /// Always clears memory; a failure to clear the store is logged.
    pub async fn clear(&self) {
        {
            let _store = self.store_lock.lock().await;
            self.active.write().await.take();
            self.clear_store().await;
        }
        self.session_changed();
    }

    /// Clear only if `token` is still the active one.
    ///
    /// A 401 that arrives after the user already logged in again must not
    /// wipe the newer session, in memory or in the store.
    pub(crate) async fn clear_if_current(&self, token: &str) -> bool {
        {
            let _store = self.store_lock.lock().await;
            let mut active = self.active.write().await;
            if !active.as_ref().is_some_and(|s| s.token == token) {
                return false;
            }
            active.take();
            drop(active);
            self.clear_store().await;
        }
        self.session_changed();
        true
    }

    async fn clear_store(&self) {
        if let Err(e) = self.store.clear().await {
            warn!(error = %e, "Failed to clear stored session");
        }
    }
}
