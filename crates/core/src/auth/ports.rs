//! Port interfaces for token acquisition and persistence

use async_trait::async_trait;
use imagefeed_domain::{AccessToken, Result};

/// Persisted single-slot token store.
///
/// Implementations must survive process restarts. Calls are short and
/// synchronous; they may run while a service holds an internal lock.
pub trait TokenStorage: Send + Sync {
    /// The stored token, if any.
    fn token(&self) -> Result<Option<AccessToken>>;

    /// Replace the stored token.
    fn store(&self, token: &AccessToken) -> Result<()>;

    /// Remove the stored token. Clearing an empty slot succeeds.
    fn clear(&self) -> Result<()>;
}

/// Exchanges an authorization code for an access token.
#[async_trait]
pub trait TokenExchanger: Send + Sync {
    /// One exchange attempt, no retries.
    ///
    /// Non-2xx responses and undecodable bodies map to `InvalidResponse`,
    /// transport failures to `Network`.
    async fn exchange_code(&self, code: &str) -> Result<AccessToken>;
}
