//! Profile command

use std::time::Instant;

use imagefeed_core::FlightOutcome;
use imagefeed_domain::{ImageFeedError, Profile, Result};
use serde::Serialize;
use tracing::warn;

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

/// Profile plus avatar, as shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub profile: Profile,
    /// `None` when the avatar lookup failed; the profile is still shown.
    pub avatar_url: Option<String>,
}

/// Fetch the signed-in user's profile and avatar.
///
/// # Errors
/// `MissingToken` when signed out; profile fetch errors otherwise.
pub async fn show_profile(ctx: &AppContext) -> Result<ProfileView> {
    let start = Instant::now();
    let result = fetch_view(ctx).await;
    log_command_execution("profile::show_profile", start.elapsed(), result.is_ok());
    result
}

async fn fetch_view(ctx: &AppContext) -> Result<ProfileView> {
    let token = ctx.tokens.token()?.ok_or(ImageFeedError::MissingToken)?;

    let profile = match ctx.profile.fetch_profile(&token).await {
        FlightOutcome::Completed(result) => result?,
        FlightOutcome::Superseded => return Err(ImageFeedError::RequestAlreadyInProgress),
    };

    let avatar_url = match ctx.avatar.fetch_avatar_url(&profile.username).await {
        Ok(url) => Some(url),
        Err(err) => {
            warn!(error = %err, label = error_label(&err), "avatar lookup failed");
            None
        }
    };

    Ok(ProfileView { profile, avatar_url })
}
