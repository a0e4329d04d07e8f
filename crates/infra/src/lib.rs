//! # ImageFeed Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP client with timeout and retry support
//! - Photo API adapters (OAuth token endpoint, photos, users)
//! - Token storage backends (platform keychain, JSON settings file)
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `imagefeed-core`
//! - Contains all "impure" code (network, filesystem, keychain)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod storage;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder, RetryPolicy};
pub use integrations::unsplash::{UnsplashAuthClient, UnsplashClient};
pub use storage::{token_storage_from_config, FileTokenStorage, KeychainTokenStorage};
