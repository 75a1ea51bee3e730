//! Client-held session and the store that owns it.
//!
//! A [`Session`] is either empty or carries a complete set of
//! [`Credentials`]; partial sessions are unrepresentable. The
//! [`SessionStore`] keeps the current session in memory and mirrors every
//! change to a [`SessionStorage`] backend under the `auth-storage` key, so a
//! new store over the same backend picks the session back up.

pub mod storage;

pub use storage::{MemoryStorage, SessionStorage, StorageError};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;

use crate::types::AuthResponse;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Key of the persisted session entry.
pub const STORAGE_KEY: &str = "auth-storage";

/// Version written into the persisted envelope.
pub const STORAGE_VERSION: u32 = 0;

/// Everything a successful login or registration yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Bearer token, without the `Bearer ` scheme prefix.
    pub token: String,
    pub user_id: String,
    /// Generated client-side per login; identifies the chat conversation.
    pub conversation_id: String,
    /// The company website the account was registered with.
    pub company_name: String,
    pub company_description: String,
}

impl Credentials {
    /// Derives credentials from an auth response, generating a fresh
    /// conversation id.
    pub fn from_auth_response(resp: AuthResponse) -> Self {
        Self {
            token: resp.access_token,
            user_id: resp.user_id,
            conversation_id: uuid::Uuid::new_v4().to_string(),
            company_name: resp.company_website.unwrap_or_default(),
            company_description: resp.company_description.unwrap_or_default(),
        }
    }
}

/// The authenticated session, or its absence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(credentials: Credentials) -> Self {
        Self {
            credentials: Some(credentials),
        }
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    pub fn user_id(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.user_id.as_str())
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.conversation_id.as_str())
    }

    pub fn company_name(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.company_name.as_str())
    }

    pub fn company_description(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.company_description.as_str())
    }

    /// Encodes the session as the persisted envelope.
    pub fn to_entry(&self) -> Result<String, StorageError> {
        let envelope = PersistedEnvelope {
            state: PersistedState::from(self),
            version: STORAGE_VERSION,
        };
        Ok(serde_json::to_string(&envelope)?)
    }

    /// Decodes a persisted envelope.
    ///
    /// A partially populated state decodes to an anonymous session; a
    /// malformed entry or an unknown version is an error.
    pub fn from_entry(raw: &str) -> Result<Self, StorageError> {
        let envelope: PersistedEnvelope = serde_json::from_str(raw)?;
        if envelope.version != STORAGE_VERSION {
            return Err(StorageError::Version(envelope.version));
        }
        Ok(envelope.state.into_session())
    }
}

/// Wire shape of the persisted entry: `{"state": {...}, "version": 0}`.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedEnvelope {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    conversation_id: Option<String>,
    #[serde(default)]
    company_name: Option<String>,
    #[serde(default)]
    company_description: Option<String>,
}

impl From<&Session> for PersistedState {
    fn from(session: &Session) -> Self {
        match session.credentials() {
            Some(c) => Self {
                token: Some(c.token.clone()),
                user_id: Some(c.user_id.clone()),
                conversation_id: Some(c.conversation_id.clone()),
                company_name: Some(c.company_name.clone()),
                company_description: Some(c.company_description.clone()),
            },
            None => Self::default(),
        }
    }
}

impl PersistedState {
    fn into_session(self) -> Session {
        match (
            self.token,
            self.user_id,
            self.conversation_id,
            self.company_name,
            self.company_description,
        ) {
            (
                Some(token),
                Some(user_id),
                Some(conversation_id),
                Some(company_name),
                Some(company_description),
            ) => Session::authenticated(Credentials {
                token: strip_scheme(token),
                user_id,
                conversation_id,
                company_name,
                company_description,
            }),
            (None, None, None, None, None) => Session::anonymous(),
            _ => {
                tracing::warn!(
                    "Persisted session is partially populated; treating it as signed out"
                );
                Session::anonymous()
            }
        }
    }
}

/// Entries written by older clients stored the token with its scheme
/// attached; the store only ever holds the bare token.
fn strip_scheme(token: String) -> String {
    match token.strip_prefix("Bearer ") {
        Some(bare) => bare.trim_start().to_string(),
        None => token,
    }
}

/// Owner of the current session.
///
/// Mutations replace the whole session under a write lock and are then
/// mirrored to storage. A storage failure is logged and does not roll back
/// the in-memory state.
pub struct SessionStore {
    state: RwLock<Session>,
    storage: Box<dyn SessionStorage>,
}

impl SessionStore {
    /// Builds a store over `storage`, restoring any persisted session.
    pub fn restore(storage: impl SessionStorage + 'static) -> Self {
        let session = match storage.read(STORAGE_KEY) {
            Ok(Some(raw)) => Session::from_entry(&raw).unwrap_or_else(|e| {
                tracing::warn!("Ignoring persisted session: {}", e);
                Session::anonymous()
            }),
            Ok(None) => Session::anonymous(),
            Err(e) => {
                tracing::warn!("Failed to read persisted session: {}", e);
                Session::anonymous()
            }
        };

        if session.is_authenticated() {
            tracing::debug!(user_id = session.user_id(), "Restored persisted session");
        }

        Self {
            state: RwLock::new(session),
            storage: Box::new(storage),
        }
    }

    /// A store backed by process memory only.
    pub fn in_memory() -> Self {
        Self::restore(MemoryStorage::new())
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.state.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().token().map(str::to_string)
    }

    /// Replaces all session fields at once.
    pub fn set_auth(&self, credentials: Credentials) {
        tracing::info!(user_id = %credentials.user_id, "Session established");
        self.replace(Session::authenticated(credentials));
    }

    /// Resets all session fields at once.
    pub fn clear_auth(&self) {
        tracing::info!("Session cleared");
        self.replace(Session::anonymous());
    }

    fn replace(&self, session: Session) {
        let mut state = self.state.write();
        *state = session;
        if let Err(e) = state.to_entry().and_then(|raw| self.storage.write(STORAGE_KEY, &raw)) {
            tracing::warn!("Failed to persist session: {}", e);
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
