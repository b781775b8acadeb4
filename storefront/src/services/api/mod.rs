//! # Backend API Client Module
//!
//! HTTP client for communicating with the AuctionHub backend API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient struct and common request plumbing
//! ├── auth.rs      - Authentication endpoints (login, signup, logout)
//! ├── catalog.rs   - Categories and paginated auction listings
//! ├── bids.rs      - Bid submission
//! └── listings.rs  - Auction creation and image upload
//! ```

pub mod auth;
pub mod bids;
pub mod catalog;
pub mod client;
pub mod listings;

pub use catalog::{CatalogQuery, SortOrder, PAGE_SIZE};
pub use client::{ApiClient, ApiConfig};
