//! Token storage backends

mod keychain;
mod settings;

use std::sync::Arc;

use imagefeed_core::TokenStorage;
use imagefeed_domain::{StorageConfig, TokenBackend};
use tracing::info;

pub use keychain::KeychainTokenStorage;
pub use settings::FileTokenStorage;

/// Build the backend selected in `config`.
pub fn token_storage_from_config(config: &StorageConfig) -> Arc<dyn TokenStorage> {
    match config.backend {
        TokenBackend::Keychain => {
            info!(service = %config.keychain_service, "using keychain token storage");
            Arc::new(KeychainTokenStorage::new(&config.keychain_service))
        }
        TokenBackend::File => {
            info!(path = %config.settings_path.display(), "using settings file token storage");
            Arc::new(FileTokenStorage::new(config.settings_path.clone()))
        }
    }
}
