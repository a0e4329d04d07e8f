//! Application context - dependency injection container

use std::sync::Arc;

use imagefeed_common::{Clock, SystemClock};
use imagefeed_core::{
    AvatarService, PhotoListService, ProfileService, SessionService, TokenExchangeService,
    TokenStorage,
};
use imagefeed_domain::{Config, Result};
use imagefeed_infra::{
    token_storage_from_config, HttpClient, RetryPolicy, UnsplashAuthClient, UnsplashClient,
};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub tokens: Arc<dyn TokenStorage>,
    pub auth_client: Arc<UnsplashAuthClient>,

    // Services
    pub exchange: Arc<TokenExchangeService>,
    pub photos: Arc<PhotoListService>,
    pub profile: Arc<ProfileService>,
    pub avatar: Arc<AvatarService>,
    pub session: Arc<SessionService>,
}

impl AppContext {
    /// Load configuration (environment, then config file) and wire services.
    ///
    /// # Errors
    /// Returns `ImageFeedError::Config` when configuration is missing or
    /// invalid.
    pub fn new() -> Result<Self> {
        let config = imagefeed_infra::config::load()?;
        Self::with_config(config)
    }

    /// Wire services for an already loaded configuration.
    ///
    /// # Errors
    /// Returns `ImageFeedError::Config` when validation fails or a URL in the
    /// configuration is unusable.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let tokens = token_storage_from_config(&config.storage);
        Self::with_storage(config, tokens)
    }

    /// Wire services around a caller-provided token store.
    ///
    /// # Errors
    /// Same as [`AppContext::with_config`].
    pub fn with_storage(config: Config, tokens: Arc<dyn TokenStorage>) -> Result<Self> {
        config.validate()?;

        let api_http = HttpClient::builder()
            .timeout(config.api.timeout())
            .max_attempts(config.api.max_attempts)
            .build()?;
        // Authorization codes are single-use.
        let auth_http =
            HttpClient::builder().timeout(config.api.timeout()).retry(RetryPolicy::NONE).build()?;

        let api = Arc::new(UnsplashClient::new(
            api_http,
            &config.api,
            config.auth.access_key.clone(),
        )?);
        let auth_client = Arc::new(UnsplashAuthClient::new(auth_http, config.auth.clone()));
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let exchange = Arc::new(TokenExchangeService::new(auth_client.clone(), tokens.clone()));
        let photos =
            Arc::new(PhotoListService::new(api.clone(), tokens.clone(), config.feed.per_page));
        let profile = Arc::new(ProfileService::new(api.clone()));
        let avatar =
            Arc::new(AvatarService::new(api, tokens.clone(), clock, config.feed.avatar_ttl()));
        let session = Arc::new(SessionService::new(
            tokens.clone(),
            photos.clone(),
            profile.clone(),
            avatar.clone(),
        ));

        info!(
            api = %config.api.base_url,
            backend = ?config.storage.backend,
            per_page = config.feed.per_page,
            "application context initialized"
        );

        Ok(Self { config, tokens, auth_client, exchange, photos, profile, avatar, session })
    }
}
