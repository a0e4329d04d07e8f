//! Port interfaces for user endpoints

use async_trait::async_trait;
use imagefeed_domain::{AccessToken, Profile, Result};

#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Profile of the token's owner.
    async fn fetch_profile(&self, token: &AccessToken) -> Result<Profile>;

    /// Medium-size avatar URL of `username`.
    async fn fetch_avatar_url(&self, token: &AccessToken, username: &str) -> Result<String>;
}
