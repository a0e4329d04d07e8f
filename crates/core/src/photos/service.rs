//! Photo list synchronizer

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use imagefeed_common::events::{ChangeNotifier, SubscriptionId};
use imagefeed_domain::{ImageFeedError, Photo, Result};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use super::ports::PhotoSource;
use crate::auth::ports::TokenStorage;

/// Summary of one successful page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLoad {
    pub page: u32,
    /// Photos that were new to the list.
    pub appended: usize,
    /// List length after the append.
    pub total: usize,
}

#[derive(Default)]
struct FeedState {
    photos: Vec<Photo>,
    ids: HashSet<String>,
    last_page: Option<u32>,
    /// Bumped by `clear()`; fetches started under an older epoch are dropped.
    epoch: u64,
}

struct FetchGuard<'a>(&'a AtomicBool);

impl Drop for FetchGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// In-memory feed kept in sync with the photo API.
///
/// Pages are appended in arrival order with duplicate ids dropped. Like state
/// only changes after the server confirms it. Observers receive the full list
/// after every successful fetch or like change.
pub struct PhotoListService {
    source: Arc<dyn PhotoSource>,
    tokens: Arc<dyn TokenStorage>,
    per_page: u32,
    state: Mutex<FeedState>,
    fetching: AtomicBool,
    changes: ChangeNotifier<Vec<Photo>>,
}

impl PhotoListService {
    pub fn new(source: Arc<dyn PhotoSource>, tokens: Arc<dyn TokenStorage>, per_page: u32) -> Self {
        Self {
            source,
            tokens,
            per_page,
            state: Mutex::new(FeedState::default()),
            fetching: AtomicBool::new(false),
            changes: ChangeNotifier::new(),
        }
    }

    /// Fetch the page after the last loaded one and append it.
    ///
    /// Returns `Ok(None)` when the call was skipped because another fetch is
    /// running, or when the list was cleared while this fetch was in flight.
    /// A failed fetch leaves the list and cursor unchanged.
    #[instrument(skip(self))]
    pub async fn fetch_next_page(&self) -> Result<Option<PageLoad>> {
        if self
            .fetching
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("page fetch already in flight, skipping");
            return Ok(None);
        }
        let _guard = FetchGuard(&self.fetching);

        let (page, epoch) = {
            let state = self.state.lock();
            (state.last_page.map_or(1, |last| last + 1), state.epoch)
        };
        let token = self.tokens.token()?;

        let fetched = match self.source.fetch_page(page, self.per_page, token.as_ref()).await {
            Ok(photos) => photos,
            Err(err) => {
                warn!(page, error = %err, "photo page fetch failed");
                return Err(err);
            }
        };

        let (load, snapshot) = {
            let mut state = self.state.lock();
            if state.epoch != epoch {
                debug!(page, "list cleared during fetch, discarding page");
                return Ok(None);
            }

            let before = state.photos.len();
            for photo in fetched {
                if state.ids.insert(photo.id.clone()) {
                    state.photos.push(photo);
                }
            }
            state.last_page = Some(page);

            let total = state.photos.len();
            (PageLoad { page, appended: total - before, total }, state.photos.clone())
        };

        info!(page, appended = load.appended, total = load.total, "photo page loaded");
        self.changes.notify(&snapshot);
        Ok(Some(load))
    }

    /// Ask the server to like or unlike `photo_id`, then mirror the result.
    ///
    /// # Errors
    /// `MissingToken` (no request made), `HttpStatus` for a non-2xx answer,
    /// `Network` for transport failures. The list is untouched on error.
    #[instrument(skip(self))]
    pub async fn change_like(&self, photo_id: &str, liked: bool) -> Result<()> {
        let token = self.tokens.token()?.ok_or(ImageFeedError::MissingToken)?;

        self.source.set_like(&token, photo_id, liked).await.inspect_err(|err| {
            warn!(error = %err, "like change rejected");
        })?;

        let snapshot = {
            let mut state = self.state.lock();
            let Some(photo) = state.photos.iter_mut().find(|photo| photo.id == photo_id) else {
                debug!("photo no longer listed, nothing to update");
                return Ok(());
            };
            photo.is_liked = liked;
            state.photos.clone()
        };

        self.changes.notify(&snapshot);
        Ok(())
    }

    /// Request the opposite of the photo's current like state.
    ///
    /// Returns the new state once confirmed.
    pub async fn toggle_like(&self, photo_id: &str) -> Result<bool> {
        let current = self
            .state
            .lock()
            .photos
            .iter()
            .find(|photo| photo.id == photo_id)
            .map(|photo| photo.is_liked)
            .ok_or_else(|| ImageFeedError::InvalidRequest(format!("unknown photo {photo_id}")))?;

        self.change_like(photo_id, !current).await?;
        Ok(!current)
    }

    /// Empty the list and reset the cursor. Does not notify.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.photos.clear();
        state.ids.clear();
        state.last_page = None;
        state.epoch += 1;
    }

    pub fn photos(&self) -> Vec<Photo> {
        self.state.lock().photos.clone()
    }

    pub fn photo(&self, photo_id: &str) -> Option<Photo> {
        self.state.lock().photos.iter().find(|photo| photo.id == photo_id).cloned()
    }

    /// Last successfully loaded page.
    pub fn last_page(&self) -> Option<u32> {
        self.state.lock().last_page
    }

    /// True when row `index` is the last loaded one, i.e. the next page
    /// should be requested once it becomes visible.
    pub fn should_prefetch(&self, index: usize) -> bool {
        let len = self.state.lock().photos.len();
        index.checked_add(1) == Some(len)
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching.load(Ordering::Acquire)
    }

    /// Observe the full list after each change.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&Vec<Photo>) + Send + Sync + 'static,
    {
        self.changes.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.changes.unsubscribe(id)
    }

    pub fn changes(&self) -> &ChangeNotifier<Vec<Photo>> {
        &self.changes
    }
}
