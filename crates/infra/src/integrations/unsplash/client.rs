//! Shared plumbing for the photo API endpoints

use std::time::Duration;

use imagefeed_domain::{AccessToken, ApiConfig, Config, ImageFeedError, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

use crate::http::HttpClient;

/// Client for the authenticated photo API.
///
/// Implements `PhotoSource` and `ProfileSource`.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    pub(super) http: HttpClient,
    base_url: Url,
    access_key: String,
    pub(super) like_timeout: Duration,
}

impl UnsplashClient {
    pub fn new(http: HttpClient, api: &ApiConfig, access_key: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(&api.base_url).map_err(|e| {
            ImageFeedError::Config(format!("invalid api.base_url {:?}: {e}", api.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ImageFeedError::Config(format!("api.base_url {base_url} is not a base URL")));
        }

        Ok(Self { http, base_url, access_key: access_key.into(), like_timeout: api.like_timeout() })
    }

    /// Build from application config with its own HTTP client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.api.timeout())
            .max_attempts(config.api.max_attempts)
            .build()?;
        Self::new(http, &config.api, config.auth.access_key.clone())
    }

    /// `base_url` with `segments` appended, each percent-encoded as one
    /// path segment.
    pub(super) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ImageFeedError::InvalidRequest(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `Bearer <token>` when signed in, `Client-ID <access key>` otherwise.
    pub(super) fn authorize(&self, builder: RequestBuilder, token: Option<&AccessToken>) -> RequestBuilder {
        let value = match token {
            Some(token) => token.bearer(),
            None => format!("Client-ID {}", self.access_key),
        };
        builder.header(AUTHORIZATION, value)
    }

    pub(super) fn request(&self, method: Method, url: Url, token: Option<&AccessToken>) -> RequestBuilder {
        self.authorize(self.http.request(method, url), token)
    }

    /// Send and decode a JSON body; non-2xx maps to `HttpStatus`.
    pub(super) async fn fetch_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = ensure_success(self.http.send(builder).await?)?;
        decode_json(response).await
    }
}

pub(super) fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!(%status, url = %response.url().path(), "photo API returned an error status");
        Err(ImageFeedError::HttpStatus(status.as_u16()))
    }
}

pub(super) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response
        .bytes()
        .await
        .map_err(|e| ImageFeedError::Network(format!("failed to read response body: {e}")))?;
    serde_json::from_slice(&body)
        .map_err(|e| ImageFeedError::InvalidResponse(format!("undecodable body: {e}")))
}
