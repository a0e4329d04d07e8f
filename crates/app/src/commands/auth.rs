//! Sign-in and sign-out commands

use std::time::Instant;

use imagefeed_common::{build_authorization_url, parse_redirect, RedirectOutcome};
use imagefeed_core::FlightOutcome;
use imagefeed_domain::constants::OAUTH_CALLBACK_PATH;
use imagefeed_domain::{ImageFeedError, Result};
use tracing::{info, warn};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// How a `login` attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    SignedIn,
    /// The user declined consent; carries the provider's error value.
    Denied(String),
    /// A newer exchange took over before this one finished.
    Superseded,
}

/// Consent page URL to open in a browser.
///
/// # Errors
/// `ImageFeedError::Config` when the configured authorize endpoint is not a
/// usable base URL.
pub fn authorization_url(ctx: &AppContext) -> Result<String> {
    let request = ctx.auth_client.authorize_request();
    build_authorization_url(&request).map(String::from).ok_or_else(|| {
        ImageFeedError::Config(format!("invalid authorize endpoint: {}", request.endpoint))
    })
}

/// Finish sign-in from the URL the browser was redirected to.
///
/// # Errors
/// `InvalidRequest` when the URL carries neither a code nor an error;
/// otherwise whatever the token exchange reports.
pub async fn login(ctx: &AppContext, redirect: &str) -> Result<LoginOutcome> {
    let start = Instant::now();

    let result = match parse_redirect(redirect, OAUTH_CALLBACK_PATH) {
        RedirectOutcome::Code(code) => match ctx.exchange.exchange(&code).await {
            FlightOutcome::Completed(Ok(_)) => {
                info!("signed in");
                Ok(LoginOutcome::SignedIn)
            }
            FlightOutcome::Completed(Err(err)) => Err(err),
            FlightOutcome::Superseded => Ok(LoginOutcome::Superseded),
        },
        RedirectOutcome::Denied(reason) => {
            warn!(%reason, "authorization denied");
            Ok(LoginOutcome::Denied(reason))
        }
        RedirectOutcome::None => Err(ImageFeedError::InvalidRequest(format!(
            "expected a redirect to {OAUTH_CALLBACK_PATH} carrying a code"
        ))),
    };

    log_command_execution("auth::login", start.elapsed(), result.is_ok());
    result
}

/// Drop the stored token and every cached view of the account.
///
/// # Errors
/// `Storage` when the token cannot be removed; nothing else is cleared then.
pub fn logout(ctx: &AppContext) -> Result<()> {
    let start = Instant::now();
    let result = ctx.session.logout();
    log_command_execution("auth::logout", start.elapsed(), result.is_ok());
    result
}
