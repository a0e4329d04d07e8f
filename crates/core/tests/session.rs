//! Integration tests for `SessionService`.

mod support;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use imagefeed_common::testing::MockClock;
use imagefeed_core::{AvatarService, PhotoListService, ProfileService, SessionService, TokenStorage};
use imagefeed_domain::AccessToken;
use support::{photos, sample_profile, MemoryTokenStorage, ScriptedPhotoSource, ScriptedProfileSource};

struct Fixture {
    storage: Arc<MemoryTokenStorage>,
    profile_source: Arc<ScriptedProfileSource>,
    photos: Arc<PhotoListService>,
    profile: Arc<ProfileService>,
    avatar: Arc<AvatarService>,
    session: SessionService,
}

fn fixture() -> Fixture {
    let storage = MemoryTokenStorage::with_token("tok");
    let photo_source = ScriptedPhotoSource::new();
    photo_source.page(1, photos(&["a", "b"]));
    let profile_source = ScriptedProfileSource::new(sample_profile());

    let photos = Arc::new(PhotoListService::new(photo_source, storage.clone(), 10));
    let profile = Arc::new(ProfileService::new(profile_source.clone()));
    let avatar = Arc::new(AvatarService::new(
        profile_source.clone(),
        storage.clone(),
        Arc::new(MockClock::new()),
        Duration::from_secs(300),
    ));
    let session =
        SessionService::new(storage.clone(), photos.clone(), profile.clone(), avatar.clone());

    Fixture { storage, profile_source, photos, profile, avatar, session }
}

/// Logout wipes every piece of per-user state and notifies once.
///
/// # Test Steps
/// 1. Load photos, profile and avatar
/// 2. Log out
/// 3. Verify token, profile, avatar and list are gone and one event fired
#[tokio::test]
async fn logout_clears_everything() {
    let fx = fixture();
    fx.photos.fetch_next_page().await.unwrap();
    fx.profile.fetch_profile(&AccessToken::new("tok")).await.completed().unwrap().unwrap();
    fx.avatar.fetch_avatar_url("jdoe").await.unwrap();

    let events = Arc::new(AtomicUsize::new(0));
    let counter = events.clone();
    fx.session.on_logout(move |()| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert!(fx.session.is_authorized());
    fx.session.logout().unwrap();

    assert!(!fx.session.is_authorized());
    assert_eq!(fx.storage.current(), None);
    assert_eq!(fx.profile.profile(), None);
    assert_eq!(fx.avatar.avatar_url(), None);
    assert!(fx.photos.photos().is_empty());
    assert_eq!(fx.photos.last_page(), None);
    assert_eq!(events.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn logout_observer_can_read_session_state() {
    let fx = fixture();
    let photos = fx.photos.clone();
    let seen_empty = Arc::new(AtomicUsize::new(0));
    let flag = seen_empty.clone();
    fx.session.on_logout(move |()| {
        if photos.photos().is_empty() {
            flag.fetch_add(1, Ordering::SeqCst);
        }
    });

    fx.session.logout().unwrap();
    assert_eq!(seen_empty.load(Ordering::SeqCst), 1);
}

/// An avatar lookup still in flight at logout must not repopulate the cache.
///
/// # Test Steps
/// 1. Start an avatar lookup that blocks in the source
/// 2. Log out, then let the lookup finish
/// 3. Verify the cache stays empty and no avatar event fired
#[tokio::test]
async fn avatar_arriving_after_logout_is_discarded() {
    let fx = fixture();
    let release = fx.profile_source.hold_avatar();

    let changes = Arc::new(AtomicUsize::new(0));
    let counter = changes.clone();
    fx.avatar.subscribe(move |_url| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let avatar = fx.avatar.clone();
    let lookup = tokio::spawn(async move { avatar.fetch_avatar_url("jdoe").await });
    while fx.profile_source.avatar_calls() == 0 {
        tokio::task::yield_now().await;
    }

    fx.session.logout().unwrap();
    release.send(()).unwrap();
    lookup.await.unwrap().unwrap();

    assert_eq!(fx.avatar.avatar_url(), None);
    assert_eq!(changes.load(Ordering::SeqCst), 0);
}

#[test]
fn unauthorized_without_token() {
    let fx = fixture();
    fx.storage.clear().unwrap();
    assert!(!fx.session.is_authorized());
}
