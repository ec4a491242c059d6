//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use serde_json::json;

use greenroom::service::http::{router, AppState};
use greenroom::{InMemoryDocumentStore, StoreSettings};

use crate::support::{session, speaker};

/// Bind to port 0 and return the actual address.
async fn start_server() -> (String, Arc<InMemoryDocumentStore>) {
    let store = Arc::new(InMemoryDocumentStore::new());
    let state = AppState::from_settings(Arc::clone(&store), &StoreSettings::default()).unwrap();
    let app = router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), store)
}

#[tokio::test]
async fn health_check() {
    let (base, _store) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn post_then_get_sessions() {
    let (base, _store) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/sessions"))
        .json(&vec![session("s1", "Building Scalable Microservices")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client.get(format!("{base}/sessions")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "s1");
    assert_eq!(items[0]["startTime"], "2026-06-01T09:00:00Z");
}

#[tokio::test]
async fn query_string_filters_sessions() {
    let (base, _store) = start_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/sessions"))
        .json(&vec![
            session("s1", "Building Scalable Microservices"),
            session("s2", "Unrelated Talk"),
        ])
        .send()
        .await
        .unwrap();

    let resp = client
        .get(format!("{base}/sessions?title=scalable&levels=Intermediate"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "s1");
}

#[tokio::test]
async fn bad_query_value_returns_400() {
    let (base, _store) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/sessions?startAfter=yesterday"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("startAfter"));
}

#[tokio::test]
async fn blank_record_id_returns_400_and_writes_nothing() {
    let (base, store) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/sessions"))
        .json(&vec![session("  ", "No Id")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(store.count("sessions"), 0);
}

#[tokio::test]
async fn unavailable_store_returns_500() {
    let (base, store) = start_server().await;
    let client = reqwest::Client::new();
    store.set_unavailable(true);

    let resp = client.get(format!("{base}/speakers")).send().await.unwrap();
    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("unavailable"));
}

#[tokio::test]
async fn post_then_get_speakers() {
    let (base, _store) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/speakers"))
        .json(&vec![speaker("p1", "Ada Lovelace")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client.get(format!("{base}/speakers")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!([{
        "id": "p1",
        "name": "Ada Lovelace",
        "position": "Engineer",
        "company": "Example Co",
        "bio": "",
        "photoUrl": "",
        "sessions": []
    }]));
}
