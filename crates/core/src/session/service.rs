//! Logout and authorization state

use std::sync::Arc;

use imagefeed_common::events::{ChangeNotifier, SubscriptionId};
use imagefeed_domain::Result;
use tracing::{info, instrument, warn};

use crate::auth::ports::TokenStorage;
use crate::photos::PhotoListService;
use crate::profile::{AvatarService, ProfileService};

/// Owns the "is someone signed in" question and tearing a session down.
pub struct SessionService {
    tokens: Arc<dyn TokenStorage>,
    photos: Arc<PhotoListService>,
    profile: Arc<ProfileService>,
    avatar: Arc<AvatarService>,
    logged_out: ChangeNotifier<()>,
}

impl SessionService {
    pub fn new(
        tokens: Arc<dyn TokenStorage>,
        photos: Arc<PhotoListService>,
        profile: Arc<ProfileService>,
        avatar: Arc<AvatarService>,
    ) -> Self {
        Self { tokens, photos, profile, avatar, logged_out: ChangeNotifier::new() }
    }

    /// Whether a token is stored. Storage errors count as signed out.
    pub fn is_authorized(&self) -> bool {
        match self.tokens.token() {
            Ok(token) => token.is_some(),
            Err(err) => {
                warn!(error = %err, "failed to read stored token");
                false
            }
        }
    }

    /// Clear the token and every piece of per-user state, then broadcast.
    ///
    /// # Errors
    /// Returns the storage error if the token could not be removed; nothing
    /// else is cleared in that case.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<()> {
        self.tokens.clear()?;
        self.profile.clear();
        self.avatar.clear();
        self.photos.clear();

        info!("user logged out");
        self.logged_out.notify(&());
        Ok(())
    }

    pub fn on_logout<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&()) + Send + Sync + 'static,
    {
        self.logged_out.subscribe(observer)
    }

    pub fn logged_out(&self) -> &ChangeNotifier<()> {
        &self.logged_out
    }
}
