//! Shared test helpers for `imagefeed-core` integration tests.
//!
//! In-memory and scripted implementations of every core port, so tests can
//! focus on service behaviour. Sources can "hold" a call on a oneshot
//! channel to make in-flight states observable.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use imagefeed_core::{PhotoSource, ProfileSource, TokenExchanger, TokenStorage};
use imagefeed_domain::{AccessToken, ImageFeedError, Photo, PhotoSize, Profile, Result};
use parking_lot::Mutex;
use tokio::sync::oneshot;

pub fn photo(id: &str) -> Photo {
    Photo {
        id: id.to_string(),
        size: PhotoSize::new(400, 300),
        created_at: None,
        thumb_url: format!("https://images.test/{id}/small"),
        large_url: format!("https://images.test/{id}/full"),
        is_liked: false,
        description: None,
    }
}

pub fn photos(ids: &[&str]) -> Vec<Photo> {
    ids.iter().map(|id| photo(id)).collect()
}

pub fn ids(list: &[Photo]) -> Vec<String> {
    list.iter().map(|photo| photo.id.clone()).collect()
}

/// In-memory `TokenStorage`.
#[derive(Default)]
pub struct MemoryTokenStorage {
    slot: Mutex<Option<AccessToken>>,
    writes: AtomicUsize,
    store_failure: Mutex<Option<ImageFeedError>>,
}

impl MemoryTokenStorage {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_token(token: &str) -> Arc<Self> {
        let storage = Self::default();
        *storage.slot.lock() = Some(AccessToken::new(token));
        Arc::new(storage)
    }

    pub fn current(&self) -> Option<String> {
        self.slot.lock().as_ref().map(|token| token.as_str().to_string())
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// The next `store` fails with `error` and leaves the slot untouched.
    pub fn fail_next_store(&self, error: ImageFeedError) {
        *self.store_failure.lock() = Some(error);
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn token(&self) -> Result<Option<AccessToken>> {
        Ok(self.slot.lock().clone())
    }

    fn store(&self, token: &AccessToken) -> Result<()> {
        if let Some(error) = self.store_failure.lock().take() {
            return Err(error);
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        *self.slot.lock() = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock() = None;
        Ok(())
    }
}

/// Exchanger answering `token-<code>` unless a call is held.
#[derive(Default)]
pub struct ScriptedExchanger {
    held: Mutex<HashMap<String, oneshot::Receiver<Result<AccessToken>>>>,
    calls: AtomicUsize,
}

impl ScriptedExchanger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// The next exchange of `code` waits for the returned sender.
    pub fn hold(&self, code: &str) -> oneshot::Sender<Result<AccessToken>> {
        let (tx, rx) = oneshot::channel();
        self.held.lock().insert(code.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenExchanger for ScriptedExchanger {
    async fn exchange_code(&self, code: &str) -> Result<AccessToken> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let held = self.held.lock().remove(code);
        match held {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(ImageFeedError::Network("dropped".into()))),
            None => Ok(AccessToken::new(format!("token-{code}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeRequest {
    pub token: String,
    pub photo_id: String,
    pub liked: bool,
}

/// Photo API serving scripted pages.
///
/// Pages without a script answer with an empty list. Like calls succeed
/// unless a failure was queued.
#[derive(Default)]
pub struct ScriptedPhotoSource {
    pages: Mutex<HashMap<u32, Result<Vec<Photo>>>>,
    held_page: Mutex<Option<oneshot::Receiver<()>>>,
    like_results: Mutex<VecDeque<Result<()>>>,
    page_requests: Mutex<Vec<PageRequest>>,
    like_requests: Mutex<Vec<LikeRequest>>,
}

impl ScriptedPhotoSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn page(&self, page: u32, photos: Vec<Photo>) {
        self.pages.lock().insert(page, Ok(photos));
    }

    pub fn fail_page(&self, page: u32, error: ImageFeedError) {
        self.pages.lock().insert(page, Err(error));
    }

    /// The next page fetch waits until the returned sender fires or drops.
    pub fn hold_next_page(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.held_page.lock() = Some(rx);
        tx
    }

    pub fn fail_next_like(&self, error: ImageFeedError) {
        self.like_results.lock().push_back(Err(error));
    }

    pub fn page_requests(&self) -> Vec<PageRequest> {
        self.page_requests.lock().clone()
    }

    pub fn like_requests(&self) -> Vec<LikeRequest> {
        self.like_requests.lock().clone()
    }
}

#[async_trait]
impl PhotoSource for ScriptedPhotoSource {
    async fn fetch_page(
        &self,
        page: u32,
        per_page: u32,
        token: Option<&AccessToken>,
    ) -> Result<Vec<Photo>> {
        self.page_requests.lock().push(PageRequest {
            page,
            per_page,
            token: token.map(|token| token.as_str().to_string()),
        });

        let held = self.held_page.lock().take();
        if let Some(rx) = held {
            let _ = rx.await;
        }

        self.pages.lock().get(&page).cloned().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn set_like(&self, token: &AccessToken, photo_id: &str, liked: bool) -> Result<()> {
        self.like_requests.lock().push(LikeRequest {
            token: token.as_str().to_string(),
            photo_id: photo_id.to_string(),
            liked,
        });
        self.like_results.lock().pop_front().unwrap_or(Ok(()))
    }
}

/// Profile API with a fixed profile and avatar URLs derived from the username.
pub struct ScriptedProfileSource {
    profile: Mutex<Result<Profile>>,
    held_profile: Mutex<VecDeque<oneshot::Receiver<Profile>>>,
    held_avatar: Mutex<VecDeque<oneshot::Receiver<()>>>,
    profile_calls: AtomicUsize,
    avatar_calls: AtomicUsize,
}

impl ScriptedProfileSource {
    pub fn new(profile: Profile) -> Arc<Self> {
        Arc::new(Self {
            profile: Mutex::new(Ok(profile)),
            held_profile: Mutex::new(VecDeque::new()),
            held_avatar: Mutex::new(VecDeque::new()),
            profile_calls: AtomicUsize::new(0),
            avatar_calls: AtomicUsize::new(0),
        })
    }

    pub fn fail_profile(&self, error: ImageFeedError) {
        *self.profile.lock() = Err(error);
    }

    /// The next profile fetch answers with whatever the sender delivers.
    pub fn hold_profile(&self) -> oneshot::Sender<Profile> {
        let (tx, rx) = oneshot::channel();
        self.held_profile.lock().push_back(rx);
        tx
    }

    /// The next avatar lookup waits until the sender fires (or is dropped).
    pub fn hold_avatar(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.held_avatar.lock().push_back(rx);
        tx
    }

    pub fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }

    pub fn avatar_calls(&self) -> usize {
        self.avatar_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileSource for ScriptedProfileSource {
    async fn fetch_profile(&self, _token: &AccessToken) -> Result<Profile> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        let held = self.held_profile.lock().pop_front();
        if let Some(rx) = held {
            return rx.await.map_err(|_| ImageFeedError::Network("dropped".into()));
        }
        self.profile.lock().clone()
    }

    async fn fetch_avatar_url(&self, _token: &AccessToken, username: &str) -> Result<String> {
        let call = self.avatar_calls.fetch_add(1, Ordering::SeqCst) + 1;
        let held = self.held_avatar.lock().pop_front();
        if let Some(rx) = held {
            let _ = rx.await;
        }
        Ok(format!("https://images.test/avatars/{username}/medium?v={call}"))
    }
}

pub fn sample_profile() -> Profile {
    Profile::new("jdoe", Some("Jane"), Some("Doe"), Some("Photographer".to_string()))
}
