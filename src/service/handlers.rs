//! Query and command handlers for sessions and speakers.
//!
//! Each handler composes the cross-cutting concerns explicitly and in order:
//! validate the input, execute against the gateway, log on failure.

use tokio_util::sync::CancellationToken;

use super::error::HandlerError;
use super::middleware::{logged, validate_records};
use crate::domain::{Session, Speaker};
use crate::filter::{build, FilterSpec, QueryPlan};
use crate::store::{DocumentStore, RecordStoreGateway};

/// List sessions matching a filter.
pub async fn get_sessions<S: DocumentStore>(
    gateway: &RecordStoreGateway<Session, S>,
    spec: &FilterSpec,
    cancel: &CancellationToken,
) -> Result<Vec<Session>, HandlerError> {
    let plan = build(spec);
    logged("get_sessions", spec, async {
        gateway.query(&plan, cancel).await.map_err(HandlerError::from)
    })
    .await
}

/// Upsert a batch of sessions, returning the store-acknowledged records.
pub async fn post_sessions<S: DocumentStore>(
    gateway: &RecordStoreGateway<Session, S>,
    sessions: Vec<Session>,
    cancel: &CancellationToken,
) -> Result<Vec<Session>, HandlerError> {
    validate_records(&sessions)?;
    logged("post_sessions", &sessions, async {
        gateway
            .upsert_all(sessions.clone(), cancel)
            .await
            .map_err(HandlerError::from)
    })
    .await
}

/// List every speaker.
pub async fn get_speakers<S: DocumentStore>(
    gateway: &RecordStoreGateway<Speaker, S>,
    cancel: &CancellationToken,
) -> Result<Vec<Speaker>, HandlerError> {
    let plan = QueryPlan::match_all();
    logged("get_speakers", &(), async {
        gateway.query(&plan, cancel).await.map_err(HandlerError::from)
    })
    .await
}

/// Upsert a batch of speakers, returning the store-acknowledged records.
pub async fn post_speakers<S: DocumentStore>(
    gateway: &RecordStoreGateway<Speaker, S>,
    speakers: Vec<Speaker>,
    cancel: &CancellationToken,
) -> Result<Vec<Speaker>, HandlerError> {
    validate_records(&speakers)?;
    logged("post_speakers", &speakers, async {
        gateway
            .upsert_all(speakers.clone(), cancel)
            .await
            .map_err(HandlerError::from)
    })
    .await
}
