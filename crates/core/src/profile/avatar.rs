//! Avatar URL cache

use std::sync::Arc;
use std::time::{Duration, Instant};

use imagefeed_common::events::{ChangeNotifier, SubscriptionId};
use imagefeed_common::time::Clock;
use imagefeed_domain::{ImageFeedError, Result};
use parking_lot::Mutex;
use tracing::{debug, info, instrument};

use super::ports::ProfileSource;
use crate::auth::ports::TokenStorage;

struct AvatarEntry {
    username: String,
    url: String,
    fetched_at: Instant,
}

#[derive(Default)]
struct AvatarCache {
    entry: Option<AvatarEntry>,
    /// Bumped by `clear()`; lookups started under an older epoch are dropped.
    epoch: u64,
}

/// Fetches avatar URLs and remembers the last one for `ttl`.
pub struct AvatarService {
    source: Arc<dyn ProfileSource>,
    tokens: Arc<dyn TokenStorage>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    cache: Mutex<AvatarCache>,
    changes: ChangeNotifier<String>,
}

impl AvatarService {
    pub fn new(
        source: Arc<dyn ProfileSource>,
        tokens: Arc<dyn TokenStorage>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
    ) -> Self {
        Self { source, tokens, clock, ttl, cache: Mutex::new(AvatarCache::default()), changes: ChangeNotifier::new() }
    }

    /// Avatar URL for `username`, from cache while fresh.
    ///
    /// # Errors
    /// `MissingToken` when no token is stored and `InvalidUsername` for an
    /// empty username; neither makes a request. Network and decoding errors
    /// come from the source.
    ///
    /// A URL that arrives after `clear()` is returned to the caller but is
    /// neither cached nor announced.
    #[instrument(skip(self))]
    pub async fn fetch_avatar_url(&self, username: &str) -> Result<String> {
        let token = self.tokens.token()?.ok_or(ImageFeedError::MissingToken)?;
        if username.trim().is_empty() {
            return Err(ImageFeedError::InvalidUsername(username.to_string()));
        }

        let epoch = match self.fresh_entry(username) {
            Ok(url) => {
                debug!("avatar served from cache");
                return Ok(url);
            }
            Err(epoch) => epoch,
        };

        let url = self.source.fetch_avatar_url(&token, username).await?;
        {
            let mut cache = self.cache.lock();
            if cache.epoch != epoch {
                debug!("avatar cache cleared during fetch, discarding url");
                return Ok(url);
            }
            cache.entry = Some(AvatarEntry {
                username: username.to_string(),
                url: url.clone(),
                fetched_at: self.clock.now(),
            });
        }

        info!("avatar url updated");
        self.changes.notify(&url);
        Ok(url)
    }

    /// Last fetched URL, fresh or not.
    pub fn avatar_url(&self) -> Option<String> {
        self.cache.lock().entry.as_ref().map(|entry| entry.url.clone())
    }

    /// Drop the cached entry and orphan any lookup in flight.
    pub fn clear(&self) {
        let mut cache = self.cache.lock();
        cache.entry = None;
        cache.epoch += 1;
    }

    /// Observe every newly fetched avatar URL.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&String) + Send + Sync + 'static,
    {
        self.changes.subscribe(observer)
    }

    pub fn changes(&self) -> &ChangeNotifier<String> {
        &self.changes
    }

    /// Cached URL when fresh for `username`, otherwise the current epoch.
    fn fresh_entry(&self, username: &str) -> std::result::Result<String, u64> {
        let cache = self.cache.lock();
        match &cache.entry {
            Some(entry)
                if entry.username == username
                    && self.clock.elapsed_since(entry.fetched_at) < self.ttl =>
            {
                Ok(entry.url.clone())
            }
            _ => Err(cache.epoch),
        }
    }
}
