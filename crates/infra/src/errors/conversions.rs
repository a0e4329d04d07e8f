//! Conversions from external infrastructure errors into domain errors.

use imagefeed_common::security::KeychainError;
use imagefeed_domain::ImageFeedError;
use keyring::Error as KeyringError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ImageFeedError);

impl From<InfraError> for ImageFeedError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ImageFeedError> for InfraError {
    fn from(value: ImageFeedError) -> Self {
        InfraError(value)
    }
}

trait IntoImageFeedError {
    fn into_imagefeed(self) -> ImageFeedError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ImageFeedError */
/* -------------------------------------------------------------------------- */

impl IntoImageFeedError for HttpError {
    fn into_imagefeed(self) -> ImageFeedError {
        if self.is_builder() {
            return ImageFeedError::InvalidRequest(self.to_string());
        }

        if self.is_timeout() {
            return ImageFeedError::Network(format!("HTTP request timed out: {self}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return ImageFeedError::Network(format!("HTTP connection failure: {self}"));
        }

        if let Some(status) = self.status() {
            return ImageFeedError::HttpStatus(status.as_u16());
        }

        if self.is_decode() {
            return ImageFeedError::InvalidResponse(format!("undecodable body: {self}"));
        }

        ImageFeedError::Network(format!("HTTP transport error: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_imagefeed())
    }
}

/* -------------------------------------------------------------------------- */
/* keyring / keychain → ImageFeedError */
/* -------------------------------------------------------------------------- */

impl IntoImageFeedError for KeyringError {
    fn into_imagefeed(self) -> ImageFeedError {
        match self {
            KeyringError::NoEntry => ImageFeedError::Storage("keychain entry not found".into()),
            KeyringError::BadEncoding(_) => {
                ImageFeedError::Storage("credential in keychain is not valid UTF-8".into())
            }
            KeyringError::PlatformFailure(err) => {
                ImageFeedError::Storage(format!("keychain platform error: {err}"))
            }
            KeyringError::NoStorageAccess(err) => {
                ImageFeedError::Storage(format!("unable to access secure storage: {err}"))
            }
            other => ImageFeedError::Storage(other.to_string()),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        InfraError(value.into_imagefeed())
    }
}

impl From<KeychainError> for InfraError {
    fn from(value: KeychainError) -> Self {
        InfraError(ImageFeedError::Storage(value.to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* filesystem / serialization → ImageFeedError */
/* -------------------------------------------------------------------------- */

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(ImageFeedError::Storage(format!("I/O error: {value}")))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(ImageFeedError::Storage(format!("invalid settings file: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
