//! Configuration structures
//!
//! Every section has serde defaults matching the production API so a config
//! file only needs to carry the client credentials.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    AVATAR_CACHE_TTL_SECS, DEFAULT_ACCESS_SCOPE, DEFAULT_API_BASE_URL, DEFAULT_AUTHORIZE_URL,
    DEFAULT_REDIRECT_URI, DEFAULT_TOKEN_URL, KEYCHAIN_SERVICE_NAME, LIKE_REQUEST_TIMEOUT_SECS,
    PHOTOS_PER_PAGE,
};
use crate::errors::{ImageFeedError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

impl Config {
    /// Check that the credentials needed for any request are present.
    ///
    /// # Errors
    /// Returns `ImageFeedError::Config` when the access key is empty.
    pub fn validate(&self) -> Result<()> {
        if self.auth.access_key.trim().is_empty() {
            return Err(ImageFeedError::Config("auth.access_key is required".to_string()));
        }
        if self.feed.per_page == 0 {
            return Err(ImageFeedError::Config("feed.per_page must be positive".to_string()));
        }
        Ok(())
    }
}

/// OAuth client settings
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_authorize_url")]
    pub authorize_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// Public client identifier, also used for `Client-ID` authorization.
    #[serde(default)]
    pub access_key: String,
    #[serde(default)]
    pub secret_key: String,
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
    #[serde(default = "default_scope")]
    pub scope: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            authorize_url: default_authorize_url(),
            token_url: default_token_url(),
            access_key: String::new(),
            secret_key: String::new(),
            redirect_uri: default_redirect_uri(),
            scope: default_scope(),
        }
    }
}

// Secrets stay out of debug output.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("authorize_url", &self.authorize_url)
            .field("token_url", &self.token_url)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Photo API transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_like_timeout_secs")]
    pub like_timeout_secs: u64,
    /// Total attempts per request (initial try + retries on 5xx/transport).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn like_timeout(&self) -> Duration {
        Duration::from_secs(self.like_timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            like_timeout_secs: default_like_timeout_secs(),
            max_attempts: default_max_attempts(),
        }
    }
}

/// Where the access token is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenBackend {
    /// Platform keychain (macOS Keychain, Windows Credential Manager).
    Keychain,
    /// JSON settings file on disk.
    #[default]
    File,
}

/// Token persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: TokenBackend,
    /// Settings file used by the `file` backend.
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
    #[serde(default = "default_keychain_service")]
    pub keychain_service: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: TokenBackend::default(),
            settings_path: default_settings_path(),
            keychain_service: default_keychain_service(),
        }
    }
}

/// Feed behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_avatar_ttl_secs")]
    pub avatar_ttl_secs: u64,
}

impl FeedConfig {
    pub fn avatar_ttl(&self) -> Duration {
        Duration::from_secs(self.avatar_ttl_secs)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { per_page: default_per_page(), avatar_ttl_secs: default_avatar_ttl_secs() }
    }
}

fn default_authorize_url() -> String {
    DEFAULT_AUTHORIZE_URL.to_string()
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_redirect_uri() -> String {
    DEFAULT_REDIRECT_URI.to_string()
}

fn default_scope() -> String {
    DEFAULT_ACCESS_SCOPE.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_like_timeout_secs() -> u64 {
    LIKE_REQUEST_TIMEOUT_SECS
}

fn default_max_attempts() -> usize {
    1
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("imagefeed-settings.json")
}

fn default_keychain_service() -> String {
    KEYCHAIN_SERVICE_NAME.to_string()
}

fn default_per_page() -> u32 {
    PHOTOS_PER_PAGE
}

fn default_avatar_ttl_secs() -> u64 {
    AVATAR_CACHE_TTL_SECS
}
