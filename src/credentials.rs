//! Client-side credential storage
//!
//! The API hands out a short-lived access token and a longer-lived refresh
//! token at login; both are kept together with a cached profile summary
//! under fixed keys and erased together on logout or refresh failure.
//!
//! Storage is modelled as an explicit service injected into the API client
//! (rather than ambient global state) so tests can swap in an in-memory
//! store.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::SESSION_FILE_NAME;

/// Profile summary returned by the login endpoint and cached alongside the
/// token pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedUser {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub profile_picture_url: Option<String>,
}

/// Persisted session state. Field names are the fixed storage keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredSession {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<CachedUser>,
}

/// Credential storage service injected into the API client.
pub trait CredentialStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn cached_user(&self) -> Option<CachedUser>;
    /// Persist a full session (login or register+login).
    fn store_session(&self, access: &str, refresh: &str, user: &CachedUser) -> Result<()>;
    /// Persist a new access token minted by the refresh endpoint.
    fn store_access_token(&self, access: &str) -> Result<()>;
    /// Erase everything. Called on logout and when a refresh fails.
    fn clear(&self) -> Result<()>;
}

/// File-backed credential store.
///
/// Keeps a write-through in-memory copy so every read and write is a single
/// atomic operation on the mutex; the JSON file only matters across runs.
pub struct FileCredentialStore {
    path: PathBuf,
    session: Mutex<StoredSession>,
}

impl FileCredentialStore {
    /// Open the store at the default platform location.
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir().context("Could not determine data directory")?;
        Self::at_path(data_dir.join("buddyterm").join(SESSION_FILE_NAME))
    }

    /// Open a store backed by a specific file.
    pub fn at_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let session = match std::fs::read_to_string(&path) {
            // A corrupt session file is treated as no session
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => StoredSession::default(),
        };
        Ok(Self {
            path,
            session: Mutex::new(session),
        })
    }

    fn persist(&self, session: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create session directory: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(session).context("Failed to serialize session")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write session file: {}", self.path.display()))?;
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn access_token(&self) -> Option<String> {
        self.session.lock().ok()?.access_token.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.session.lock().ok()?.refresh_token.clone()
    }

    fn cached_user(&self) -> Option<CachedUser> {
        self.session.lock().ok()?.user.clone()
    }

    fn store_session(&self, access: &str, refresh: &str, user: &CachedUser) -> Result<()> {
        let mut session = self.session.lock().expect("session lock poisoned");
        session.access_token = Some(access.to_string());
        session.refresh_token = Some(refresh.to_string());
        session.user = Some(user.clone());
        self.persist(&session)
    }

    fn store_access_token(&self, access: &str) -> Result<()> {
        let mut session = self.session.lock().expect("session lock poisoned");
        session.access_token = Some(access.to_string());
        self.persist(&session)
    }

    fn clear(&self) -> Result<()> {
        let mut session = self.session.lock().expect("session lock poisoned");
        *session = StoredSession::default();
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove session file: {}", self.path.display()))?;
        }
        Ok(())
    }
}

/// In-memory credential store.
///
/// Used when `[session] remember = false` and by tests; the session dies
/// with the process.
#[derive(Default)]
pub struct MemoryCredentialStore {
    session: Mutex<StoredSession>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn access_token(&self) -> Option<String> {
        self.session.lock().ok()?.access_token.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.session.lock().ok()?.refresh_token.clone()
    }

    fn cached_user(&self) -> Option<CachedUser> {
        self.session.lock().ok()?.user.clone()
    }

    fn store_session(&self, access: &str, refresh: &str, user: &CachedUser) -> Result<()> {
        let mut session = self.session.lock().expect("session lock poisoned");
        session.access_token = Some(access.to_string());
        session.refresh_token = Some(refresh.to_string());
        session.user = Some(user.clone());
        Ok(())
    }

    fn store_access_token(&self, access: &str) -> Result<()> {
        let mut session = self.session.lock().expect("session lock poisoned");
        session.access_token = Some(access.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut session = self.session.lock().expect("session lock poisoned");
        *session = StoredSession::default();
        Ok(())
    }
}
