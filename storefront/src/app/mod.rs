//! # Application
//!
//! Wires the session store, API client, notification surface and shared
//! state together, and owns the page-load bootstrap sequence.
//!
//! State lives behind `Arc<RwLock<AppState>>`; workflows take it by
//! reference, lock briefly, and drop locks before any await point.

pub mod handlers;
pub mod state;
pub mod tasks;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::clock::{Clock, SystemClock};
use crate::core::storage::KeyValueStore;
use crate::services::api::catalog::CatalogQuery;
use crate::services::api::{ApiClient, ApiConfig};
use crate::session::SessionStore;
use crate::view::notifications::NotificationManager;
use self::state::AppState;

pub struct App {
    pub api: Arc<ApiClient>,
    pub session: SessionStore,
    pub notifications: NotificationManager,
    pub state: Arc<RwLock<AppState>>,
    pub store: Arc<dyn KeyValueStore>,
    pub clock: Arc<dyn Clock>,
}

impl App {
    /// Application over the real clock. The session hydrates from the given
    /// store immediately.
    pub fn new(config: ApiConfig, store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_clock(config, store, Arc::new(SystemClock))
    }

    pub fn with_clock(
        config: ApiConfig,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            api: Arc::new(ApiClient::new(config)),
            session: SessionStore::hydrate(store.clone()),
            notifications: NotificationManager::new(clock.clone()),
            state: Arc::new(RwLock::new(AppState::default())),
            store,
            clock,
        }
    }

    /// Page-load sequence: fetch reference data and the first listings
    /// page, then restore any sell draft. The session was already hydrated
    /// during construction. Fetch failures surface as notifications and
    /// leave the corresponding state empty.
    pub async fn bootstrap(&self) {
        let _ = handlers::catalog::load_categories(
            self.api.as_ref(),
            &self.state,
            &self.notifications,
        )
        .await;
        let _ = handlers::catalog::load_auctions(
            self.api.as_ref(),
            &self.state,
            &self.notifications,
            CatalogQuery::default(),
        )
        .await;

        if let Some(draft) = handlers::draft::load_draft(self.store.as_ref()) {
            self.state.write().sell.form = draft.form;
            self.notifications
                .info("Draft loaded. Continue editing your listing.");
        }
    }

    /// Record a sell-form edit for the auto-save debounce.
    pub fn note_sell_input(&self) {
        let now = self.clock.now();
        self.state.write().sell.autosave.note_input(now);
    }

    /// Fire a pending draft auto-save once the idle window has elapsed.
    /// Call from the host's regular tick.
    pub fn poll_draft_autosave(&self) {
        let now = self.clock.now();
        let due = {
            let mut state = self.state.write();
            if state.sell.autosave.take_due(now) {
                Some((state.sell.form.clone(), state.sell.images.len()))
            } else {
                None
            }
        };
        if let Some((form, image_count)) = due {
            handlers::draft::save_draft(self.store.as_ref(), &form, image_count);
            tracing::debug!("Draft auto-saved");
        }
    }
}
