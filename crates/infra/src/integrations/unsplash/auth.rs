//! OAuth token endpoint

use async_trait::async_trait;
use imagefeed_common::auth::AuthorizeRequest;
use imagefeed_core::TokenExchanger;
use imagefeed_domain::{AccessToken, AuthConfig, Config, ImageFeedError, Result};
use reqwest::Method;
use tracing::{info, instrument, warn};
use url::Url;

use super::client::decode_json;
use super::dto::TokenResponseBody;
use crate::http::{HttpClient, RetryPolicy};

/// Exchanges authorization codes at the OAuth token endpoint.
#[derive(Debug, Clone)]
pub struct UnsplashAuthClient {
    http: HttpClient,
    auth: AuthConfig,
}

impl UnsplashAuthClient {
    pub fn new(http: HttpClient, auth: AuthConfig) -> Self {
        Self { http, auth }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let http =
            HttpClient::builder().timeout(config.api.timeout()).retry(RetryPolicy::NONE).build()?;
        Ok(Self::new(http, config.auth.clone()))
    }

    /// Inputs for the consent URL handed to the browser.
    pub fn authorize_request(&self) -> AuthorizeRequest {
        AuthorizeRequest::new(
            self.auth.authorize_url.clone(),
            self.auth.access_key.clone(),
            self.auth.redirect_uri.clone(),
            self.auth.scope.clone(),
        )
    }
}

#[async_trait]
impl TokenExchanger for UnsplashAuthClient {
    #[instrument(skip_all)]
    async fn exchange_code(&self, code: &str) -> Result<AccessToken> {
        let url = Url::parse(&self.auth.token_url).map_err(|e| {
            ImageFeedError::InvalidRequest(format!("invalid token endpoint: {e}"))
        })?;

        let form = [
            ("client_id", self.auth.access_key.as_str()),
            ("client_secret", self.auth.secret_key.as_str()),
            ("redirect_uri", self.auth.redirect_uri.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
        ];
        let builder = self.http.request(Method::POST, url).form(&form);

        let response = self.http.send(builder).await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "token endpoint rejected the code");
            return Err(ImageFeedError::InvalidResponse(format!("token endpoint returned {status}")));
        }

        let body: TokenResponseBody = decode_json(response).await?;
        info!(token_type = body.token_type.as_deref().unwrap_or("unknown"), "access token issued");
        Ok(body.into())
    }
}
