//! greenroom — conference session and speaker persistence core.
//!
//! Two cooperating pieces:
//!
//! - a **filter predicate builder** (`filter`) that turns a caller's optional
//!   search criteria into an ordered, parameterized query plan, and
//! - a **record store gateway** (`store`) that executes plans page by page
//!   against a partitioned document store and dispatches batched upserts
//!   concurrently, one per record id.
//!
//! The `service` module layers explicit middleware (validate → execute → log)
//! over the gateway for the four session/speaker operations, with an optional
//! axum transport behind the `http` feature.

pub mod domain;
pub mod filter;
pub mod service;
pub mod settings;
pub mod store;

pub use domain::{Record, Session, SessionFormat, SessionLevel, Speaker};
pub use filter::{FilterSpec, QueryPlan};
pub use service::HandlerError;
pub use settings::StoreSettings;
pub use store::{
    DocumentStore, InMemoryDocumentStore, Page, PageToken, RecordStoreGateway, StoreError,
};
