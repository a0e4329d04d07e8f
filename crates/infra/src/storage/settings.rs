//! Settings-file token slot
//!
//! The file is a flat JSON object; the token lives under `OAuthToken` and
//! unknown keys are preserved across writes.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use imagefeed_core::TokenStorage;
use imagefeed_domain::constants::TOKEN_STORAGE_KEY;
use imagefeed_domain::{AccessToken, ImageFeedError, Result};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::InfraError;

type Settings = Map<String, Value>;

/// Token persisted in a JSON settings file.
#[derive(Debug)]
pub struct FileTokenStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles within the process.
    lock: Mutex<()>,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Settings> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Settings::new()),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| InfraError::from(e).into()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Settings::new()),
            Err(e) => Err(InfraError::from(e).into()),
        }
    }

    /// Write via a sibling temp file and rename, so readers never see a
    /// partial file.
    fn write(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(InfraError::from)?;
        }

        let contents = serde_json::to_string_pretty(settings).map_err(InfraError::from)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(InfraError::from)?;
        fs::rename(&tmp, &self.path).map_err(InfraError::from)?;
        Ok(())
    }
}

impl TokenStorage for FileTokenStorage {
    fn token(&self) -> Result<Option<AccessToken>> {
        let _guard = self.lock.lock();
        match self.read()?.get(TOKEN_STORAGE_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(token)) => Ok(Some(AccessToken::new(token.clone()))),
            Some(other) => Err(ImageFeedError::Storage(format!(
                "{TOKEN_STORAGE_KEY} is not a string: {other}"
            ))),
        }
    }

    fn store(&self, token: &AccessToken) -> Result<()> {
        let _guard = self.lock.lock();
        let mut settings = self.read()?;
        settings.insert(TOKEN_STORAGE_KEY.to_string(), Value::String(token.as_str().to_string()));
        self.write(&settings)?;
        debug!(path = %self.path.display(), "token written to settings file");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock();
        let mut settings = self.read()?;
        if settings.remove(TOKEN_STORAGE_KEY).is_some() {
            self.write(&settings)?;
        }
        Ok(())
    }
}
