//! Global application state

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use std::sync::Arc;
use wingman::session::{SessionStorage, StorageError};
use wingman::{Credentials, Session, SessionStore};

/// Backend base URL, fixed at build time.
pub fn api_base_url() -> String {
    option_env!("WINGMAN_API_URL")
        .unwrap_or(wingman::DEFAULT_API_BASE_URL)
        .to_string()
}

/// `window.localStorage`, holding the raw session entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }
}

/// Global application state
///
/// The store owns the session and its persistence; `session` mirrors it so
/// views re-render when it changes.
#[derive(Clone)]
pub struct AppState {
    store: Arc<SessionStore>,
    pub session: RwSignal<Session>,
    pub api_base: RwSignal<String>,
}

impl AppState {
    pub fn new() -> Self {
        let store = Arc::new(SessionStore::restore(BrowserStorage));
        let session = RwSignal::new(store.session());

        Self {
            store,
            session,
            api_base: RwSignal::new(api_base_url()),
        }
    }

    pub fn set_auth(&self, credentials: Credentials) {
        self.store.set_auth(credentials);
        self.session.set(self.store.session());
    }

    pub fn clear_auth(&self) {
        self.store.clear_auth();
        self.session.set(self.store.session());
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// Token for protected calls, read without subscribing.
    pub fn token(&self) -> Option<String> {
        self.store.token()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
