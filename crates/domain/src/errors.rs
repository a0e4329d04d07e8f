//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for ImageFeed
///
/// Network-facing operations surface every failure through this enum. A
/// request that was superseded by a newer one is not an error and never
/// appears here.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ImageFeedError {
    /// Malformed URL or parameters; no network attempt was made.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Non-2xx status or a body that could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Transport-level failure.
    #[error("Network error: {0}")]
    Network(String),

    /// A single-flight operation for the same key is already running.
    #[error("Request already in progress")]
    RequestAlreadyInProgress,

    /// No access token is stored.
    #[error("Access token missing")]
    MissingToken,

    /// Explicit HTTP status passthrough.
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// The username cannot be used as a single path segment.
    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ImageFeedError {
    /// HTTP status carried by the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias for ImageFeed operations
pub type Result<T> = std::result::Result<T, ImageFeedError>;
