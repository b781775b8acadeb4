//! # View Models
//!
//! Pure data-to-view-model transformations, decoupled from whatever UI
//! binding mechanism eventually renders them.
//!
//! - [`listing`] - auction cards: price, imagery, truncated descriptions
//! - [`pagination`] - bounded page-control window
//! - [`countdown`] - end-timestamp parsing and time-remaining labels
//! - [`notifications`] - transient leveled messages with auto-dismiss

pub mod countdown;
pub mod listing;
pub mod notifications;
pub mod pagination;

pub use listing::ListingCard;
pub use notifications::{Level, Notification, NotificationManager};
pub use pagination::{pagination_controls, PageControl};
