//! RecordStoreGateway — all reads and writes for one collection.

use std::marker::PhantomData;
use std::sync::Arc;

use futures_util::future::try_join_all;
use tokio_util::sync::CancellationToken;

use super::{DocumentStore, PageToken, StoreError};
use crate::domain::Record;
use crate::filter::QueryPlan;

/// Mediates every read and write for one record type's collection.
///
/// One gateway per collection, each holding the shared store handle and the
/// collection name resolved at construction. No mutable state between calls;
/// safe to share and clone freely.
pub struct RecordStoreGateway<R, S> {
    store: Arc<S>,
    collection: String,
    _record: PhantomData<fn() -> R>,
}

impl<R, S> Clone for RecordStoreGateway<R, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            collection: self.collection.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record, S: DocumentStore> RecordStoreGateway<R, S> {
    /// Gateway over the record type's own collection.
    pub fn new(store: Arc<S>) -> Result<Self, StoreError> {
        Self::with_collection(store, R::COLLECTION)
    }

    /// Gateway over an explicitly named collection (container overrides from
    /// settings). Fails with `NotConfigured` on a blank name, so a bad
    /// configuration is caught at start-up rather than on first use.
    pub fn with_collection(store: Arc<S>, collection: &str) -> Result<Self, StoreError> {
        if collection.trim().is_empty() {
            return Err(StoreError::NotConfigured(format!(
                "no collection name for {} records",
                std::any::type_name::<R>()
            )));
        }
        Ok(Self {
            store,
            collection: collection.to_string(),
            _record: PhantomData,
        })
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Execute a plan, reading pages sequentially until the store reports no
    /// continuation. Results come back in store order; an empty result is
    /// `Ok(vec![])`, not an error.
    pub async fn query(
        &self,
        plan: &QueryPlan,
        cancel: &CancellationToken,
    ) -> Result<Vec<R>, StoreError> {
        let mut records = Vec::new();
        let mut continuation: Option<PageToken> = None;

        loop {
            let page = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(StoreError::Cancelled),
                page = self.store.read_page(&self.collection, plan, continuation.as_ref()) => page?,
            };

            for item in page.items {
                let record = serde_json::from_value(item).map_err(StoreError::query_failed)?;
                records.push(record);
            }

            match page.continuation {
                Some(token) => continuation = Some(token),
                None => break,
            }
        }

        Ok(records)
    }

    /// Upsert every record, keyed by id. All writes are dispatched before any
    /// is awaited; the call completes once every write has resolved. The
    /// first failure fails the batch, tagged with the failing record's id;
    /// writes already acknowledged stand (no rollback).
    pub async fn upsert_all(
        &self,
        records: Vec<R>,
        cancel: &CancellationToken,
    ) -> Result<Vec<R>, StoreError> {
        let writes = records.iter().map(|record| self.upsert_one(record));

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(StoreError::Cancelled),
            acked = try_join_all(writes) => acked,
        }
    }

    async fn upsert_one(&self, record: &R) -> Result<R, StoreError> {
        let document = serde_json::to_value(record)
            .map_err(|e| StoreError::write_failed(Some(record.id()), e))?;

        let acked = self
            .store
            .upsert(&self.collection, record.id(), document)
            .await
            .map_err(|e| tag_record(e, record.id()))?;

        serde_json::from_value(acked).map_err(|e| StoreError::write_failed(Some(record.id()), e))
    }
}

/// Attach the record id to an anonymous write failure; other variants pass
/// through unchanged.
fn tag_record(error: StoreError, id: &str) -> StoreError {
    match error {
        StoreError::WriteFailed { id: None, source } => StoreError::WriteFailed {
            id: Some(id.to_string()),
            source,
        },
        other => other,
    }
}
