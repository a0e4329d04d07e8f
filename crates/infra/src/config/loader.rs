//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `IMAGEFEED_ACCESS_KEY` is set, configuration comes from the
//!    environment (every other value falls back to its default)
//! 2. Otherwise looks for a config file (JSON or TOML)
//! 3. With neither, defaults are used and validation reports what is missing
//!
//! ## Environment Variables
//! - `IMAGEFEED_ACCESS_KEY`: OAuth client id / public access key (required)
//! - `IMAGEFEED_SECRET_KEY`: OAuth client secret
//! - `IMAGEFEED_REDIRECT_URI`, `IMAGEFEED_SCOPE`
//! - `IMAGEFEED_AUTHORIZE_URL`, `IMAGEFEED_TOKEN_URL`, `IMAGEFEED_API_BASE_URL`
//! - `IMAGEFEED_TIMEOUT_SECS`, `IMAGEFEED_LIKE_TIMEOUT_SECS`,
//!   `IMAGEFEED_MAX_ATTEMPTS`
//! - `IMAGEFEED_TOKEN_BACKEND`: `keychain` or `file`
//! - `IMAGEFEED_SETTINGS_PATH`: settings file for the `file` backend
//! - `IMAGEFEED_PER_PAGE`, `IMAGEFEED_AVATAR_TTL_SECS`
//!
//! ## File Locations
//! The loader tries `imagefeed.{toml,json}` then `config.{toml,json}` in the
//! current directory, its parent, and next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use imagefeed_domain::{Config, ImageFeedError, Result, TokenBackend};

const FILE_NAMES: [&str; 4] = ["imagefeed.toml", "imagefeed.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ImageFeedError::Config` if an environment value or the discovered file
/// is invalid.
pub fn load() -> Result<Config> {
    if std::env::var_os("IMAGEFEED_ACCESS_KEY").is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match find_config_path() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::warn!("No configuration found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `IMAGEFEED_ACCESS_KEY` is required; everything else is optional.
///
/// # Errors
/// Returns `ImageFeedError::Config` if the access key is missing or a value
/// cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.auth.access_key = env_var("IMAGEFEED_ACCESS_KEY")?;
    if let Some(secret) = env_opt("IMAGEFEED_SECRET_KEY") {
        config.auth.secret_key = secret;
    }
    override_string(&mut config.auth.redirect_uri, "IMAGEFEED_REDIRECT_URI");
    override_string(&mut config.auth.scope, "IMAGEFEED_SCOPE");
    override_string(&mut config.auth.authorize_url, "IMAGEFEED_AUTHORIZE_URL");
    override_string(&mut config.auth.token_url, "IMAGEFEED_TOKEN_URL");
    override_string(&mut config.api.base_url, "IMAGEFEED_API_BASE_URL");

    override_parsed(&mut config.api.timeout_secs, "IMAGEFEED_TIMEOUT_SECS")?;
    override_parsed(&mut config.api.like_timeout_secs, "IMAGEFEED_LIKE_TIMEOUT_SECS")?;
    override_parsed(&mut config.api.max_attempts, "IMAGEFEED_MAX_ATTEMPTS")?;
    override_parsed(&mut config.feed.per_page, "IMAGEFEED_PER_PAGE")?;
    override_parsed(&mut config.feed.avatar_ttl_secs, "IMAGEFEED_AVATAR_TTL_SECS")?;

    if let Some(backend) = env_opt("IMAGEFEED_TOKEN_BACKEND") {
        config.storage.backend = parse_backend(&backend)?;
    }
    if let Some(path) = env_opt("IMAGEFEED_SETTINGS_PATH") {
        config.storage.settings_path = PathBuf::from(path);
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, searches the standard locations.
///
/// # Errors
/// Returns `ImageFeedError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ImageFeedError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_path().ok_or_else(|| {
            ImageFeedError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ImageFeedError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ImageFeedError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ImageFeedError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ImageFeedError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file among the standard locations.
pub fn find_config_path() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        ImageFeedError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Set and non-empty value of `key`.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn override_string(target: &mut String, key: &str) {
    if let Some(value) = env_opt(key) {
        *target = value;
    }
}

fn override_parsed<T>(target: &mut T, key: &str) -> Result<()>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if let Some(raw) = env_opt(key) {
        *target = raw
            .trim()
            .parse()
            .map_err(|e| ImageFeedError::Config(format!("Invalid value for {key}: {e}")))?;
    }
    Ok(())
}

fn parse_backend(raw: &str) -> Result<TokenBackend> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "keychain" => Ok(TokenBackend::Keychain),
        "file" => Ok(TokenBackend::File),
        other => Err(ImageFeedError::Config(format!(
            "Invalid token backend {other:?}, expected keychain or file"
        ))),
    }
}
