//! # Workflow Handlers
//!
//! One module per user-facing flow: auth, catalog browsing, bidding,
//! authoring and draft persistence.

pub mod auth;
pub mod bid;
pub mod catalog;
pub mod draft;
pub mod sell;
