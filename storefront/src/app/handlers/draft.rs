//! # Draft Persistence
//!
//! The sell form auto-saves to durable storage after a 2 second idle window
//! and is restored on the next visit. Only a successful submission clears
//! it, so an abandoned browser session never loses work.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::app::state::SellForm;
use crate::core::storage::{storage_key, KeyValueStore};

/// Idle time before an auto-save fires.
const AUTOSAVE_DEBOUNCE_SECS: i64 = 2;

fn draft_key() -> String {
    storage_key("draft")
}

/// Persisted draft payload: every form field plus the selected-image count.
/// Image bytes themselves are not persisted; the count lets the UI tell the
/// author their selection needs re-adding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftListing {
    #[serde(flatten)]
    pub form: SellForm,
    pub image_count: usize,
}

/// Save the current draft. Persistence failures are logged, not surfaced;
/// the next debounce window retries anyway.
pub fn save_draft(store: &dyn KeyValueStore, form: &SellForm, image_count: usize) {
    let draft = DraftListing {
        form: form.clone(),
        image_count,
    };
    match serde_json::to_string(&draft) {
        Ok(raw) => {
            if let Err(e) = store.set(&draft_key(), &raw) {
                tracing::warn!(error = %e, "Failed to persist draft");
            }
        }
        Err(e) => tracing::warn!(error = %e, "Failed to serialize draft"),
    }
}

/// Restore the last saved draft, if any.
pub fn load_draft(store: &dyn KeyValueStore) -> Option<DraftListing> {
    let raw = store.get(&draft_key()).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(draft) => Some(draft),
        Err(e) => {
            tracing::warn!(error = %e, "Discarding unreadable draft");
            None
        }
    }
}

/// Remove the persisted draft.
pub fn clear_draft(store: &dyn KeyValueStore) {
    if let Err(e) = store.remove(&draft_key()) {
        tracing::warn!(error = %e, "Failed to remove draft");
    }
}

/// Debounce for draft auto-saves: each input restarts the idle window, so a
/// burst of edits saves once, 2 seconds after the last keystroke.
#[derive(Debug, Clone, Default)]
pub struct DraftAutosave {
    dirty_since: Option<DateTime<Utc>>,
}

impl DraftAutosave {
    /// Record an input event.
    pub fn note_input(&mut self, now: DateTime<Utc>) {
        self.dirty_since = Some(now);
    }

    /// True once the idle window has elapsed since the last input. Resets
    /// the dirty marker so each burst of edits fires exactly one save.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> bool {
        match self.dirty_since {
            Some(since) if now - since >= Duration::seconds(AUTOSAVE_DEBOUNCE_SECS) => {
                self.dirty_since = None;
                true
            }
            _ => false,
        }
    }
}
