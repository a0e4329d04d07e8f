//! Profile fetcher

use std::sync::Arc;

use imagefeed_common::sync::{Admission, DuplicatePolicy, SingleFlight};
use imagefeed_domain::{AccessToken, ImageFeedError, Profile};
use parking_lot::RwLock;
use tracing::{info, instrument, warn};

use super::ports::ProfileSource;
use crate::outcome::FlightOutcome;

/// Loads and keeps the signed-in user's profile.
///
/// Only the newest call is allowed to finish: starting a fetch cancels the
/// one in flight, which resolves to [`FlightOutcome::Superseded`].
pub struct ProfileService {
    source: Arc<dyn ProfileSource>,
    flight: SingleFlight<()>,
    profile: RwLock<Option<Profile>>,
}

impl ProfileService {
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        Self {
            source,
            flight: SingleFlight::new(DuplicatePolicy::Supersede),
            profile: RwLock::new(None),
        }
    }

    #[instrument(skip_all)]
    pub async fn fetch_profile(&self, token: &AccessToken) -> FlightOutcome<Profile> {
        let Admission::Started(ticket) = self.flight.begin(()) else {
            // Supersede policy never rejects.
            return FlightOutcome::Completed(Err(ImageFeedError::RequestAlreadyInProgress));
        };

        let Some(result) = ticket.run(self.source.fetch_profile(token)).await else {
            info!("profile fetch superseded");
            return FlightOutcome::Superseded;
        };

        let committed = ticket.commit(|| {
            if let Ok(profile) = &result {
                *self.profile.write() = Some(profile.clone());
            }
            result
        });

        match &committed {
            Some(Ok(profile)) => info!(username = %profile.username, "profile loaded"),
            Some(Err(err)) => warn!(error = %err, "profile fetch failed"),
            None => info!("profile fetch superseded after completion"),
        }
        committed.into()
    }

    /// Latest successfully fetched profile.
    pub fn profile(&self) -> Option<Profile> {
        self.profile.read().clone()
    }

    /// Drop the stored profile and cancel any fetch in flight.
    pub fn clear(&self) {
        self.flight.cancel_pending();
        *self.profile.write() = None;
    }
}
