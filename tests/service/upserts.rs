//! Handler-level behavior: validation before any write, batch upsert
//! semantics, and error-to-status mapping.

use tokio_util::sync::CancellationToken;

use greenroom::service::{get_sessions, get_speakers, post_sessions, post_speakers};
use greenroom::{FilterSpec, HandlerError, Session, Speaker, StoreError};

use crate::support::{gateway, session, speaker, store};

#[tokio::test]
async fn sessions_round_trip_through_handlers() {
    let store = store();
    let sessions = gateway::<Session>(&store);
    let cancel = CancellationToken::new();

    let submitted = vec![session("s1", "A"), session("s2", "B")];
    let acked = post_sessions(&sessions, submitted.clone(), &cancel)
        .await
        .unwrap();
    assert_eq!(acked.len(), 2);

    let found = get_sessions(&sessions, &FilterSpec::default(), &cancel)
        .await
        .unwrap();
    assert_eq!(found, submitted);
}

#[tokio::test]
async fn speakers_round_trip_through_handlers() {
    let store = store();
    let speakers = gateway::<Speaker>(&store);
    let cancel = CancellationToken::new();

    post_speakers(&speakers, vec![speaker("p1", "Ada")], &cancel)
        .await
        .unwrap();

    let found = get_speakers(&speakers, &cancel).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Ada");
}

#[tokio::test]
async fn blank_id_fails_validation_before_any_write() {
    let store = store();
    let sessions = gateway::<Session>(&store);
    let cancel = CancellationToken::new();

    let batch = vec![session("s1", "A"), session("  ", "B")];
    let result = post_sessions(&sessions, batch, &cancel).await;

    match result {
        Err(error @ HandlerError::Validation(_)) => assert_eq!(error.status_code(), 400),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(store.count("sessions"), 0);
}

#[tokio::test]
async fn unavailable_store_maps_to_500() {
    let store = store();
    let sessions = gateway::<Session>(&store);
    let cancel = CancellationToken::new();
    store.set_unavailable(true);

    let read = get_sessions(&sessions, &FilterSpec::default(), &cancel).await;
    match read {
        Err(error @ HandlerError::Store(StoreError::Unavailable(_))) => {
            assert_eq!(error.status_code(), 500)
        }
        other => panic!("expected unavailable, got {other:?}"),
    }

    let write = post_sessions(&sessions, vec![session("s1", "A")], &cancel).await;
    assert!(matches!(
        write,
        Err(HandlerError::Store(StoreError::Unavailable(_)))
    ));
}

#[tokio::test]
async fn cancellation_maps_to_499() {
    let store = store();
    let sessions = gateway::<Session>(&store);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = get_sessions(&sessions, &FilterSpec::default(), &cancel).await;
    match result {
        Err(error @ HandlerError::Store(StoreError::Cancelled)) => {
            assert_eq!(error.status_code(), 499)
        }
        other => panic!("expected cancelled, got {other:?}"),
    }
}

#[tokio::test]
async fn reposting_a_session_replaces_it() {
    let store = store();
    let sessions = gateway::<Session>(&store);
    let cancel = CancellationToken::new();

    post_sessions(&sessions, vec![session("s1", "Draft Title")], &cancel)
        .await
        .unwrap();
    post_sessions(&sessions, vec![session("s1", "Final Title")], &cancel)
        .await
        .unwrap();

    let found = get_sessions(&sessions, &FilterSpec::default(), &cancel)
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Final Title");
}
