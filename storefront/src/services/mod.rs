//! # External Service Clients
//!
//! Everything that leaves the process lives here; today that is the backend
//! HTTP API.

pub mod api;
