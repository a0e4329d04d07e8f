//! Single-flight token exchange

use std::sync::Arc;

use imagefeed_common::sync::{Admission, DuplicatePolicy, SingleFlight};
use imagefeed_domain::{AccessToken, ImageFeedError, Result};
use tracing::{debug, info, instrument, warn};

use super::ports::{TokenExchanger, TokenStorage};
use crate::outcome::FlightOutcome;

/// Turns authorization codes into a stored access token.
///
/// At most one exchange is in flight. Repeating the pending code is rejected
/// with `RequestAlreadyInProgress`; a different code supersedes the pending
/// exchange, which then resolves to [`FlightOutcome::Superseded`] without
/// touching the token store.
pub struct TokenExchangeService {
    exchanger: Arc<dyn TokenExchanger>,
    storage: Arc<dyn TokenStorage>,
    flight: SingleFlight<String>,
}

impl TokenExchangeService {
    pub fn new(exchanger: Arc<dyn TokenExchanger>, storage: Arc<dyn TokenStorage>) -> Self {
        Self { exchanger, storage, flight: SingleFlight::new(DuplicatePolicy::Reject) }
    }

    /// Exchange `code` and persist the resulting token.
    #[instrument(skip_all)]
    pub async fn exchange(&self, code: &str) -> FlightOutcome<AccessToken> {
        let ticket = match self.flight.begin(code.to_string()) {
            Admission::Started(ticket) => ticket,
            Admission::Rejected => {
                debug!("exchange for this code already in flight");
                return FlightOutcome::Completed(Err(ImageFeedError::RequestAlreadyInProgress));
            }
        };

        let Some(result) = ticket.run(self.exchanger.exchange_code(code)).await else {
            info!("token exchange superseded by a newer code");
            return FlightOutcome::Superseded;
        };

        // The store runs under the slot lock so a newer code cannot take over
        // between the write and the publish; a superseded exchange never
        // writes. The write is short and synchronous.
        let committed = ticket.commit(|| -> Result<AccessToken> {
            let token = result?;
            self.storage.store(&token)?;
            Ok(token)
        });

        match &committed {
            Some(Ok(_)) => info!("access token stored"),
            Some(Err(err)) => warn!(error = %err, "token exchange failed"),
            None => info!("token exchange superseded after completion"),
        }
        committed.into()
    }

    /// Whether an exchange is currently in flight.
    pub fn is_pending(&self) -> bool {
        self.flight.is_pending()
    }
}

impl std::fmt::Debug for TokenExchangeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenExchangeService").field("flight", &self.flight).finish_non_exhaustive()
    }
}
