use std::time::Duration;

use imagefeed_domain::ImageFeedError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber.
///
/// Honours `RUST_LOG`, defaulting to `info`. Output goes to stderr so command
/// output on stdout stays clean. Calling this twice is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier such as `"feed::load_feed"`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert an `ImageFeedError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &ImageFeedError) -> &'static str {
    match error {
        ImageFeedError::InvalidRequest(_) => "invalid_request",
        ImageFeedError::InvalidResponse(_) => "invalid_response",
        ImageFeedError::Network(_) => "network",
        ImageFeedError::RequestAlreadyInProgress => "request_in_progress",
        ImageFeedError::MissingToken => "missing_token",
        ImageFeedError::HttpStatus(_) => "http_status",
        ImageFeedError::InvalidUsername(_) => "invalid_username",
        ImageFeedError::Storage(_) => "storage",
        ImageFeedError::Config(_) => "config",
    }
}
