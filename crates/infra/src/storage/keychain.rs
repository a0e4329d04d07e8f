//! Keychain-backed token slot

use imagefeed_common::security::{KeychainError, KeychainProvider};
use imagefeed_core::TokenStorage;
use imagefeed_domain::constants::TOKEN_STORAGE_KEY;
use imagefeed_domain::{AccessToken, ImageFeedError, Result};

use crate::errors::InfraError;

/// Stores the access token in the platform keychain under `OAuthToken`.
#[derive(Debug, Clone)]
pub struct KeychainTokenStorage {
    keychain: KeychainProvider,
}

impl KeychainTokenStorage {
    pub fn new(service_name: &str) -> Self {
        Self { keychain: KeychainProvider::new(service_name) }
    }
}

fn storage_error(err: KeychainError) -> ImageFeedError {
    InfraError::from(err).into()
}

impl TokenStorage for KeychainTokenStorage {
    fn token(&self) -> Result<Option<AccessToken>> {
        let secret = self.keychain.find_secret(TOKEN_STORAGE_KEY).map_err(storage_error)?;
        Ok(secret.map(AccessToken::new))
    }

    fn store(&self, token: &AccessToken) -> Result<()> {
        self.keychain.set_secret(TOKEN_STORAGE_KEY, token.as_str()).map_err(storage_error)
    }

    fn clear(&self) -> Result<()> {
        self.keychain.delete_secret(TOKEN_STORAGE_KEY).map_err(storage_error)
    }
}
