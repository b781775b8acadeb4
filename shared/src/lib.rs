//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the storefront client and the
//! AuctionHub backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and user DTOs
//!   - **[`dto::catalog`]**: Category and auction listing DTOs
//!   - **[`dto::bid`]**: Bid submission DTOs
//!   - **[`dto::sell`]**: Auction creation and image upload DTOs
//!
//! ## Wire Format
//!
//! Responses come from the backend in **snake_case** (default serde
//! behavior). Request bodies for bid submission, registration and auction
//! creation use **camelCase**, matching what the backend expects, via
//! `#[serde(rename_all = "camelCase")]` on those types. Error responses
//! always carry a single `error` message field.

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
