//! # AuctionHub Storefront - Library Root
//!
//! Client-side engine for the AuctionHub auction marketplace. This crate
//! holds everything between the backend's JSON API and whatever surface
//! renders the result: session handling, validation, listing view models,
//! the bid and authoring workflows, and the countdown tick.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │              storefront (this crate)                 │
//! ├──────────────────────────────────────────────────────┤
//! │  app        - state, workflow handlers, countdown    │
//! │  view       - pure data → view-model transformations │
//! │  session    - credential + profile store             │
//! │  services   - backend HTTP client (reqwest)          │
//! │  core       - errors, clock/storage capabilities     │
//! └──────────────────────────────────────────────────────┘
//!                          │ HTTP (JSON + multipart)
//!                          ▼
//!                ┌─────────────────────┐
//!                │   AuctionHub API    │
//!                └─────────────────────┘
//! ```
//!
//! ## Core Concepts
//!
//! - **State**: `Arc<parking_lot::RwLock<AppState>>`, mutated only by the
//!   owning workflow, locks dropped before await points.
//! - **Seams**: workflows talk to the backend through the
//!   [`core::service::ApiService`] trait, and to time and durable storage
//!   through the [`core::clock::Clock`] and [`core::storage::KeyValueStore`]
//!   capabilities, so every flow runs against fakes in tests.
//! - **View models**: [`view`] turns auction records into display-ready
//!   fragments without touching any UI binding.

pub mod app;
pub mod core;
pub mod services;
pub mod session;
pub mod utils;
pub mod view;

// Re-export commonly used types for convenience
pub use app::state::AppState;
pub use app::App;
pub use core::error::{AppError, Result};
