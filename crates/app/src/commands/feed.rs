//! Photo feed commands

use std::time::Instant;

use imagefeed_domain::{Photo, Result};
use tracing::debug;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Load up to `pages` further pages and return the whole feed.
///
/// Stops early when a page adds nothing new.
pub async fn load_feed(ctx: &AppContext, pages: u32) -> Result<Vec<Photo>> {
    let start = Instant::now();
    let result = load_pages(ctx, pages).await;
    log_command_execution("feed::load_feed", start.elapsed(), result.is_ok());
    result
}

async fn load_pages(ctx: &AppContext, pages: u32) -> Result<Vec<Photo>> {
    for _ in 0..pages {
        match ctx.photos.fetch_next_page().await? {
            Some(load) if load.appended == 0 => {
                debug!(page = load.page, "page added no new photos");
                break;
            }
            Some(_) => {}
            None => break,
        }
    }
    Ok(ctx.photos.photos())
}

/// Like or unlike `photo_id`.
///
/// # Errors
/// `MissingToken` when signed out; network and status errors otherwise. The
/// local feed only changes once the server confirms.
pub async fn set_like(ctx: &AppContext, photo_id: &str, liked: bool) -> Result<()> {
    let start = Instant::now();
    let result = ctx.photos.change_like(photo_id, liked).await;
    log_command_execution("feed::set_like", start.elapsed(), result.is_ok());
    result
}
