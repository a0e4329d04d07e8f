//! Integration tests for `TokenExchangeService`.

mod support;

use std::sync::Arc;
use std::time::Duration;

use imagefeed_core::{FlightOutcome, TokenExchangeService};
use imagefeed_domain::{AccessToken, ImageFeedError};
use support::{MemoryTokenStorage, ScriptedExchanger};

fn service(
    exchanger: &Arc<ScriptedExchanger>,
    storage: &Arc<MemoryTokenStorage>,
) -> Arc<TokenExchangeService> {
    Arc::new(TokenExchangeService::new(exchanger.clone(), storage.clone()))
}

async fn wait_until_pending(service: &TokenExchangeService) {
    for _ in 0..100 {
        if service.is_pending() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("exchange never became pending");
}

#[tokio::test]
async fn successful_exchange_stores_token() {
    let exchanger = ScriptedExchanger::new();
    let storage = MemoryTokenStorage::empty();
    let service = service(&exchanger, &storage);

    let outcome = service.exchange("abc").await;

    assert_eq!(outcome, FlightOutcome::Completed(Ok(AccessToken::new("token-abc"))));
    assert_eq!(storage.current().as_deref(), Some("token-abc"));
    assert!(!service.is_pending());
}

#[tokio::test]
async fn failed_exchange_leaves_store_untouched() {
    let exchanger = ScriptedExchanger::new();
    let storage = MemoryTokenStorage::empty();
    let service = service(&exchanger, &storage);

    let release = exchanger.hold("bad");
    release.send(Err(ImageFeedError::InvalidResponse("status 401".into()))).unwrap();

    let outcome = service.exchange("bad").await;
    assert!(matches!(outcome, FlightOutcome::Completed(Err(ImageFeedError::InvalidResponse(_)))));
    assert_eq!(storage.writes(), 0);

    // The slot is free again.
    assert!(matches!(service.exchange("good").await, FlightOutcome::Completed(Ok(_))));
}

/// Same code while in flight is rejected and the pending call carries on.
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_code_is_rejected() {
    let exchanger = ScriptedExchanger::new();
    let storage = MemoryTokenStorage::empty();
    let service = service(&exchanger, &storage);
    let release = exchanger.hold("abc");

    let pending = tokio::spawn({
        let service = service.clone();
        async move { service.exchange("abc").await }
    });
    wait_until_pending(&service).await;

    let duplicate = service.exchange("abc").await;
    assert_eq!(duplicate, FlightOutcome::Completed(Err(ImageFeedError::RequestAlreadyInProgress)));
    assert_eq!(exchanger.calls(), 1);

    release.send(Ok(AccessToken::new("first"))).unwrap();
    let first = pending.await.unwrap();
    assert_eq!(first, FlightOutcome::Completed(Ok(AccessToken::new("first"))));
    assert_eq!(storage.current().as_deref(), Some("first"));
}

/// A failed store is reported and releases the slot for another attempt.
#[tokio::test]
async fn store_failure_releases_slot() {
    let exchanger = ScriptedExchanger::new();
    let storage = MemoryTokenStorage::empty();
    storage.fail_next_store(ImageFeedError::Storage("keychain locked".into()));
    let service = service(&exchanger, &storage);

    let first = service.exchange("abc").await;
    assert_eq!(
        first,
        FlightOutcome::Completed(Err(ImageFeedError::Storage("keychain locked".into())))
    );
    assert_eq!(storage.current(), None);
    assert!(!service.is_pending());

    let second = service.exchange("abc").await;
    assert_eq!(second, FlightOutcome::Completed(Ok(AccessToken::new("token-abc"))));
    assert_eq!(storage.writes(), 1);
}

/// A then B: A never produces an outcome and never writes the store.
///
/// # Test Steps
/// 1. Start exchange A and hold it
/// 2. Start exchange B with a different code
/// 3. Verify A resolves as superseded, B stores its token
/// 4. Release A late and verify nothing changes
#[tokio::test(flavor = "multi_thread")]
async fn new_code_supersedes_pending_exchange() {
    let exchanger = ScriptedExchanger::new();
    let storage = MemoryTokenStorage::empty();
    let service = service(&exchanger, &storage);
    let release_a = exchanger.hold("code-a");

    let call_a = tokio::spawn({
        let service = service.clone();
        async move { service.exchange("code-a").await }
    });
    wait_until_pending(&service).await;

    let outcome_b = service.exchange("code-b").await;
    let outcome_a = call_a.await.unwrap();

    assert!(outcome_a.is_superseded());
    assert_eq!(outcome_b, FlightOutcome::Completed(Ok(AccessToken::new("token-code-b"))));

    // A's response arriving late has nowhere to go.
    let _ = release_a.send(Ok(AccessToken::new("late-a")));
    assert_eq!(storage.current().as_deref(), Some("token-code-b"));
    assert_eq!(storage.writes(), 1);
}
