//! # Notification Surface
//!
//! Transient user-facing messages with an auto-dismiss window. Workflows
//! push leveled messages; whatever binds the UI reads `visible()` and shows
//! what is still inside its window.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

use crate::core::clock::Clock;

/// How long a message stays visible.
const DISMISS_AFTER_SECS: i64 = 5;

/// Message severity, mapped to styling by the UI binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

/// Notification manager for the application.
pub struct NotificationManager {
    clock: Arc<dyn Clock>,
    items: RwLock<Vec<Notification>>,
}

impl NotificationManager {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            items: RwLock::new(Vec::new()),
        }
    }

    /// Show a success notification
    pub fn success(&self, message: impl Into<String>) {
        self.push(Level::Success, message.into());
    }

    /// Show an error notification
    pub fn error(&self, message: impl Into<String>) {
        self.push(Level::Error, message.into());
    }

    /// Show a warning notification
    pub fn warning(&self, message: impl Into<String>) {
        self.push(Level::Warning, message.into());
    }

    /// Show an info notification
    pub fn info(&self, message: impl Into<String>) {
        self.push(Level::Info, message.into());
    }

    fn push(&self, level: Level, message: String) {
        let now = self.clock.now();
        let mut items = self.items.write();
        items.retain(|item| item.expires_at > now);
        items.push(Notification {
            level,
            message,
            expires_at: now + Duration::seconds(DISMISS_AFTER_SECS),
        });
    }

    /// Messages still inside their dismiss window, oldest first.
    pub fn visible(&self) -> Vec<Notification> {
        let now = self.clock.now();
        self.items
            .read()
            .iter()
            .filter(|item| item.expires_at > now)
            .cloned()
            .collect()
    }

    /// Drop expired messages.
    pub fn sweep(&self) {
        let now = self.clock.now();
        self.items.write().retain(|item| item.expires_at > now);
    }
}
