//! # Common Error Types
//!
//! Consolidated error handling for the storefront engine.
//!
//! Errors are categorized by their source:
//!
//! - **Validation**: local form checks that block an action before any request
//! - **Api**: the backend replied with a non-success status
//! - **Network**: the request never completed
//! - **Storage**: durable key-value persistence failed
//! - **Upload**: a single image upload failed after the auction record existed

use thiserror::Error;

/// Application-wide error type covering all failure scenarios in the client.
///
/// Each variant carries a descriptive message. The `#[error]` attribute from
/// `thiserror` provides `Display` and `Error` implementations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Local validation failure. Blocks the action; never sent to the server.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-success HTTP response. Carries the server-supplied message when
    /// the error envelope parses, otherwise the numeric status.
    #[error("API error: {0}")]
    Api(String),

    /// The request could not complete (connection refused, DNS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// Durable storage read or write failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// One image upload failed after the auction itself was created.
    /// Non-fatal for the authoring flow.
    #[error("Upload error: {0}")]
    Upload(String),
}

impl AppError {
    /// The message as shown to the user, without the category prefix.
    ///
    /// API errors surface the server's wording verbatim; the other variants
    /// already carry user-facing text.
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Validation(message)
            | AppError::Api(message)
            | AppError::Network(message)
            | AppError::Storage(message)
            | AppError::Upload(message) => message,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
