//! Current-user and public user endpoints

use async_trait::async_trait;
use imagefeed_core::ProfileSource;
use imagefeed_domain::{AccessToken, Profile, Result};
use reqwest::Method;
use tracing::instrument;

use super::client::UnsplashClient;
use super::dto::{ProfileResult, UserResult};

#[async_trait]
impl ProfileSource for UnsplashClient {
    #[instrument(skip_all)]
    async fn fetch_profile(&self, token: &AccessToken) -> Result<Profile> {
        let url = self.endpoint(&["me"])?;
        let result: ProfileResult = self.fetch_json(self.request(Method::GET, url, Some(token))).await?;
        Ok(result.into())
    }

    #[instrument(skip(self, token))]
    async fn fetch_avatar_url(&self, token: &AccessToken, username: &str) -> Result<String> {
        let url = self.endpoint(&["users", username])?;
        let result: UserResult = self.fetch_json(self.request(Method::GET, url, Some(token))).await?;
        Ok(result.profile_image.medium)
    }
}
