//! # Session Store
//!
//! Holds the current credential and user profile. The pair is kept in
//! memory for synchronous queries and mirrored to durable storage so a
//! session survives restarts. Credential and profile are always set and
//! cleared together; storage holding only one of the two is treated as no
//! session at all.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::UserInfo;

use crate::core::storage::{storage_key, KeyValueStore};

fn token_key() -> String {
    storage_key("token")
}

fn user_key() -> String {
    storage_key("user")
}

/// An authenticated session: opaque server-issued credential plus the user
/// profile it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub credential: String,
    pub profile: UserInfo,
}

/// Process-wide session state with durable mirroring.
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Empty store over the given persistence backend.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            current: RwLock::new(None),
        }
    }

    /// Restore a persisted session if both keys are present and readable.
    pub fn hydrate(store: Arc<dyn KeyValueStore>) -> Self {
        let session = read_persisted(store.as_ref());
        if session.is_some() {
            tracing::debug!("Restored persisted session");
        }
        Self {
            store,
            current: RwLock::new(session),
        }
    }

    /// True iff both credential and profile are present.
    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn credential(&self) -> Option<String> {
        self.current
            .read()
            .as_ref()
            .map(|session| session.credential.clone())
    }

    pub fn profile(&self) -> Option<UserInfo> {
        self.current
            .read()
            .as_ref()
            .map(|session| session.profile.clone())
    }

    /// Whether the signed-in user may author listings. Presentation-only:
    /// the backend enforces the real authorization on every request.
    pub fn can_sell(&self) -> bool {
        self.current
            .read()
            .as_ref()
            .map(|session| session.profile.is_admin)
            .unwrap_or(false)
    }

    /// Set credential and profile together, then mirror both to storage.
    ///
    /// A storage failure leaves the in-memory update in place; the window
    /// where memory and disk disagree is accepted and logged.
    pub fn save(&self, credential: String, profile: UserInfo) {
        *self.current.write() = Some(Session {
            credential: credential.clone(),
            profile: profile.clone(),
        });

        if let Err(e) = self.store.set(&token_key(), &credential) {
            tracing::warn!(error = %e, "Failed to persist credential");
        }
        match serde_json::to_string(&profile) {
            Ok(raw) => {
                if let Err(e) = self.store.set(&user_key(), &raw) {
                    tracing::warn!(error = %e, "Failed to persist profile");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to serialize profile"),
        }
    }

    /// Drop the session from memory and remove both persisted keys.
    pub fn clear(&self) {
        *self.current.write() = None;
        for key in [token_key(), user_key()] {
            if let Err(e) = self.store.remove(&key) {
                tracing::warn!(key = %key, error = %e, "Failed to remove persisted session key");
            }
        }
    }
}

/// Partially persisted state (one key without the other, or an unreadable
/// profile) is discarded.
fn read_persisted(store: &dyn KeyValueStore) -> Option<Session> {
    let credential = store.get(&token_key()).ok().flatten()?;
    let raw_profile = store.get(&user_key()).ok().flatten()?;
    match serde_json::from_str(&raw_profile) {
        Ok(profile) => Some(Session {
            credential,
            profile,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Discarding unreadable persisted profile");
            None
        }
    }
}
