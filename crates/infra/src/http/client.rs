//! Outbound HTTP for the photo API and token endpoint

use std::time::Duration;

use imagefeed_domain::{ImageFeedError, Result};
use reqwest::{Client as ReqwestClient, Method, Request, RequestBuilder, Response, Url};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// When a request may be sent again.
///
/// Only idempotent methods are ever repeated; a `POST` (token exchange, like)
/// goes out exactly once whatever `max_attempts` says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts for idempotent requests, initial try included.
    pub max_attempts: usize,
    /// Delay before the first retry; doubles for each further one.
    pub base_backoff: Duration,
}

impl RetryPolicy {
    pub const NONE: Self = Self { max_attempts: 1, base_backoff: Duration::ZERO };

    pub fn attempts(max_attempts: usize) -> Self {
        Self { max_attempts: max_attempts.max(1), base_backoff: Duration::from_millis(200) }
    }

    fn attempts_for(&self, method: &Method) -> usize {
        if is_idempotent(method) {
            self.max_attempts.max(1)
        } else {
            1
        }
    }

    /// Delay before retry number `retry` (1-based).
    fn delay_before(&self, retry: usize) -> Duration {
        let shift = u32::try_from(retry.saturating_sub(1).min(8)).unwrap_or(8);
        self.base_backoff.saturating_mul(1u32 << shift)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::NONE
    }
}

/// reqwest client plus timeout and [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    retry: RetryPolicy,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Single-attempt client with the default timeout.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send the request, repeating idempotent ones on 5xx or a transient
    /// transport failure while attempts remain.
    ///
    /// Every HTTP status comes back as a response; only transport failures
    /// become errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let mut request = builder.build().map_err(into_domain)?;
        let attempts = self.retry.attempts_for(request.method());
        let mut attempt = 1;

        loop {
            // Bodies that cannot be cloned are sent once.
            let spare = if attempt < attempts { request.try_clone() } else { None };
            let outcome = self.execute(request, attempt).await;

            let retryable = match &outcome {
                Ok(response) => response.status().is_server_error(),
                Err(err) => is_transient(err),
            };
            match spare {
                Some(next) if retryable => {
                    let delay = self.retry.delay_before(attempt);
                    warn!(attempt, ?delay, "retrying request");
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    request = next;
                    attempt += 1;
                }
                _ => return outcome.map_err(into_domain),
            }
        }
    }

    async fn execute(&self, request: Request, attempt: usize) -> reqwest::Result<Response> {
        let method = request.method().clone();
        debug!(attempt, %method, url = %redacted(request.url()), "sending HTTP request");

        let outcome = self.client.execute(request).await;
        match &outcome {
            Ok(response) => debug!(attempt, %method, status = %response.status(), "HTTP response"),
            Err(err) => debug!(attempt, %method, error = %err, "HTTP request failed"),
        }
        outcome
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    retry: RetryPolicy,
    user_agent: String,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::NONE,
            user_agent: concat!("imagefeed/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Shorthand for [`RetryPolicy::attempts`].
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.retry = RetryPolicy::attempts(attempts);
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .no_proxy()
            .build()
            .map_err(into_domain)?;

        Ok(HttpClient { client, retry: self.retry })
    }
}

fn is_idempotent(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::PUT | Method::DELETE | Method::OPTIONS)
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

fn into_domain(err: reqwest::Error) -> ImageFeedError {
    InfraError::from(err).into()
}

/// URL without its query string; queries may carry credentials.
fn redacted(url: &Url) -> String {
    let mut clean = url.clone();
    clean.set_query(None);
    clean.to_string()
}
