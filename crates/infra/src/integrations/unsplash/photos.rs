//! Photo feed and like endpoints

use async_trait::async_trait;
use imagefeed_core::PhotoSource;
use imagefeed_domain::constants::PHOTOS_ORDER_BY;
use imagefeed_domain::{AccessToken, Photo, Result};
use reqwest::Method;
use tracing::{debug, instrument};

use super::client::{ensure_success, UnsplashClient};
use super::dto::PhotoResult;

#[async_trait]
impl PhotoSource for UnsplashClient {
    #[instrument(skip(self, token), fields(signed_in = token.is_some()))]
    async fn fetch_page(
        &self,
        page: u32,
        per_page: u32,
        token: Option<&AccessToken>,
    ) -> Result<Vec<Photo>> {
        let mut url = self.endpoint(&["photos"])?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("order_by", PHOTOS_ORDER_BY)
            .append_pair("per_page", &per_page.to_string());

        let results: Vec<PhotoResult> = self.fetch_json(self.request(Method::GET, url, token)).await?;
        debug!(count = results.len(), "decoded photo page");
        Ok(results.into_iter().map(Photo::from).collect())
    }

    #[instrument(skip(self, token))]
    async fn set_like(&self, token: &AccessToken, photo_id: &str, liked: bool) -> Result<()> {
        let url = self.endpoint(&["photos", photo_id, "like"])?;
        let method = if liked { Method::POST } else { Method::DELETE };

        let builder = self.request(method, url, Some(token)).timeout(self.like_timeout);
        ensure_success(self.http.send(builder).await?)?;
        Ok(())
    }
}
