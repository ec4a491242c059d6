//! Record store gateway and the document-store seam it drives.
//!
//! `DocumentStore` is the async surface of the external partitioned store: a
//! single shared, pre-connected handle created at start-up. The gateway owns
//! the mapping between records and their stored document representation;
//! callers never see store-level types.

mod gateway;
mod in_memory;

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;

use serde_json::Value;

use crate::filter::QueryPlan;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Opaque continuation handed back by a store to resume paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageToken(pub String);

/// One page of query results.
///
/// `continuation` is `None` once the store has no further pages.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub items: Vec<Value>,
    pub continuation: Option<PageToken>,
}

/// The async surface of a partitioned document store.
///
/// Implementations must be safe for concurrent use: one handle is shared by
/// every gateway in the process.
pub trait DocumentStore: Send + Sync {
    /// Read the next page of results for a plan. `continuation == None`
    /// requests the first page.
    fn read_page(
        &self,
        collection: &str,
        plan: &QueryPlan,
        continuation: Option<&PageToken>,
    ) -> impl Future<Output = Result<Page, StoreError>> + Send;

    /// Insert or replace one document, keyed by `id` as the partition key.
    /// Returns the store-acknowledged document.
    fn upsert(
        &self,
        collection: &str,
        id: &str,
        document: Value,
    ) -> impl Future<Output = Result<Value, StoreError>> + Send;
}

/// Failures surfaced by the store seam and the gateway.
///
/// All variants are terminal for the operation that raised them; no retry
/// happens inside this crate.
#[derive(Debug)]
pub enum StoreError {
    /// A collection reference was missing or blank at construction. Fatal.
    NotConfigured(String),
    /// Transient connectivity failure, propagated to the caller unretried.
    Unavailable(String),
    /// Query execution failed; the underlying cause is attached.
    QueryFailed(BoxError),
    /// A write failed, carrying the first failing record id when known.
    WriteFailed { id: Option<String>, source: BoxError },
    /// The operation was cancelled before it completed.
    Cancelled,
}

impl StoreError {
    pub(crate) fn query_failed(source: impl Into<BoxError>) -> Self {
        StoreError::QueryFailed(source.into())
    }

    pub(crate) fn write_failed(id: Option<&str>, source: impl Into<BoxError>) -> Self {
        StoreError::WriteFailed {
            id: id.map(str::to_string),
            source: source.into(),
        }
    }

    /// Stable name for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::NotConfigured(_) => "not_configured",
            StoreError::Unavailable(_) => "store_unavailable",
            StoreError::QueryFailed(_) => "store_query_failed",
            StoreError::WriteFailed { .. } => "store_write_failed",
            StoreError::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotConfigured(what) => {
                write!(f, "store not configured: {}", what)
            }
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
            StoreError::QueryFailed(source) => write!(f, "store query failed: {}", source),
            StoreError::WriteFailed {
                id: Some(id),
                source,
            } => write!(f, "store write failed for record {}: {}", id, source),
            StoreError::WriteFailed { id: None, source } => {
                write!(f, "store write failed: {}", source)
            }
            StoreError::Cancelled => write!(f, "operation cancelled"),
        }
    }
}

impl StdError for StoreError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            StoreError::QueryFailed(source) => Some(source.as_ref()),
            StoreError::WriteFailed { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub use gateway::RecordStoreGateway;
pub use in_memory::InMemoryDocumentStore;
