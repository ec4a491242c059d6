//! HTTP transport — maps routes onto the session/speaker handlers.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /health` — health check returning `{ "ok": true }`.
//! - `GET /sessions` — list sessions; filter criteria come from the query
//!   string (`title`, `tags`, `startAfter`, `endBefore`, `room`, `levels`,
//!   `format`, `language`).
//! - `POST /sessions` — upsert a JSON array of sessions.
//! - `GET /speakers` — list every speaker.
//! - `POST /speakers` — upsert a JSON array of speakers.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use greenroom::{service::http, InMemoryDocumentStore, StoreSettings};
//!
//! let store = Arc::new(InMemoryDocumentStore::new());
//! let state = http::AppState::from_settings(store, &StoreSettings::default())?;
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(state.clone());
//!
//! // Or serve directly
//! http::serve(state, "0.0.0.0:3000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tokio_util::sync::CancellationToken;

use super::error::HandlerError;
use super::handlers;
use crate::domain::{Session, SessionFormat, SessionLevel, Speaker};
use crate::filter::FilterSpec;
use crate::settings::StoreSettings;
use crate::store::{DocumentStore, RecordStoreGateway, StoreError};

/// Shared state for the HTTP routes: one gateway per collection.
pub struct AppState<S> {
    sessions: RecordStoreGateway<Session, S>,
    speakers: RecordStoreGateway<Speaker, S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            speakers: self.speakers.clone(),
        }
    }
}

impl<S: DocumentStore> AppState<S> {
    /// Wire gateways onto the containers named in `settings`.
    pub fn from_settings(store: Arc<S>, settings: &StoreSettings) -> Result<Self, StoreError> {
        Ok(Self {
            sessions: RecordStoreGateway::with_collection(
                Arc::clone(&store),
                &settings.sessions_container,
            )?,
            speakers: RecordStoreGateway::with_collection(store, &settings.speakers_container)?,
        })
    }
}

/// Build an axum `Router` over the given state.
pub fn router<S: DocumentStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/sessions",
            get(list_sessions::<S>).post(upsert_sessions::<S>),
        )
        .route(
            "/speakers",
            get(list_speakers::<S>).post(upsert_speakers::<S>),
        )
        .with_state(state)
}

/// Serve the routes over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<S: DocumentStore + 'static>(
    state: AppState<S>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

/// `GET /health` — returns `{ "ok": true }`.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// Filter criteria as they arrive on the query string. List-valued fields
/// (`tags`, `levels`) are comma-separated; timestamps are RFC 3339.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionQuery {
    pub title: Option<String>,
    pub tags: Option<String>,
    pub start_after: Option<String>,
    pub end_before: Option<String>,
    pub room: Option<String>,
    pub levels: Option<String>,
    pub format: Option<String>,
    pub language: Option<String>,
}

impl SessionQuery {
    /// Decode the raw query-string values into a [`FilterSpec`].
    pub fn into_spec(self) -> Result<FilterSpec, HandlerError> {
        let levels = self
            .levels
            .as_deref()
            .map(parse_levels)
            .transpose()?
            .unwrap_or_default();
        let format = self
            .format
            .as_deref()
            .map(|name| {
                SessionFormat::from_name(name).ok_or_else(|| {
                    HandlerError::DecodeFailed(format!("unknown session format '{}'", name))
                })
            })
            .transpose()?;

        Ok(FilterSpec {
            title_contains: self.title,
            tags: split_list(self.tags.as_deref()),
            start_after: parse_timestamp("startAfter", self.start_after.as_deref())?,
            end_before: parse_timestamp("endBefore", self.end_before.as_deref())?,
            room: self.room,
            levels,
            format,
            language: self.language,
        })
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn parse_levels(raw: &str) -> Result<Vec<SessionLevel>, HandlerError> {
    split_list(Some(raw))
        .iter()
        .map(|name| {
            SessionLevel::from_name(name).ok_or_else(|| {
                HandlerError::DecodeFailed(format!("unknown session level '{}'", name))
            })
        })
        .collect()
}

fn parse_timestamp(
    field: &str,
    raw: Option<&str>,
) -> Result<Option<OffsetDateTime>, HandlerError> {
    match raw {
        Some(value) if !value.trim().is_empty() => OffsetDateTime::parse(value, &Rfc3339)
            .map(Some)
            .map_err(|e| HandlerError::DecodeFailed(format!("bad {} timestamp: {}", field, e))),
        _ => Ok(None),
    }
}

/// `GET /sessions` — list sessions matching the query-string filter.
async fn list_sessions<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Query(query): Query<SessionQuery>,
) -> Response {
    let spec = match query.into_spec() {
        Ok(spec) => spec,
        Err(e) => return respond_error(e),
    };
    let cancel = CancellationToken::new();
    respond(handlers::get_sessions(&state.sessions, &spec, &cancel).await)
}

/// `POST /sessions` — upsert a JSON array of sessions.
async fn upsert_sessions<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Json(sessions): Json<Vec<Session>>,
) -> Response {
    let cancel = CancellationToken::new();
    respond(handlers::post_sessions(&state.sessions, sessions, &cancel).await)
}

/// `GET /speakers` — list every speaker.
async fn list_speakers<S: DocumentStore>(State(state): State<AppState<S>>) -> Response {
    let cancel = CancellationToken::new();
    respond(handlers::get_speakers(&state.speakers, &cancel).await)
}

/// `POST /speakers` — upsert a JSON array of speakers.
async fn upsert_speakers<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Json(speakers): Json<Vec<Speaker>>,
) -> Response {
    let cancel = CancellationToken::new();
    respond(handlers::post_speakers(&state.speakers, speakers, &cancel).await)
}

fn respond<T: serde::Serialize>(result: Result<T, HandlerError>) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(e) => respond_error(e),
    }
}

fn respond_error(e: HandlerError) -> Response {
    let status =
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = json!({ "error": e.to_string() });
    (status, Json(body)).into_response()
}
