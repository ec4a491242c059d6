//! Service layer — handlers for sessions and speakers plus the explicit
//! middleware (validation, failure logging) they compose.
//!
//! Handlers are plain async functions over a [`RecordStoreGateway`]; the
//! optional HTTP transport behind the `http` feature is a thin adapter on
//! top of them.
//!
//! [`RecordStoreGateway`]: crate::store::RecordStoreGateway

mod error;
mod handlers;
mod middleware;

#[cfg(feature = "http")]
pub mod http;

pub use error::HandlerError;
pub use handlers::{get_sessions, get_speakers, post_sessions, post_speakers};
pub use middleware::{logged, validate_records};
