//! Port interfaces for the photo API

use async_trait::async_trait;
use imagefeed_domain::{AccessToken, Photo, Result};

/// Remote photo listing and like endpoints.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Fetch one page of the feed, newest first.
    ///
    /// Without a token the adapter falls back to its public client
    /// credentials.
    async fn fetch_page(
        &self,
        page: u32,
        per_page: u32,
        token: Option<&AccessToken>,
    ) -> Result<Vec<Photo>>;

    /// Like (`liked == true`) or unlike a photo.
    ///
    /// Non-2xx responses map to `HttpStatus`.
    async fn set_like(&self, token: &AccessToken, photo_id: &str, liked: bool) -> Result<()>;
}
