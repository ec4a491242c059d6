//! Domain records — sessions and speakers stored in partitioned collections.

mod session;
mod speaker;

use serde::{de::DeserializeOwned, Serialize};

/// Trait for documents persisted in a partitioned collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name backing this record type.
    const COLLECTION: &'static str;

    /// The partition/identity key. Non-empty, immutable once assigned;
    /// upserts are idempotent on this key.
    fn id(&self) -> &str;
}

pub use session::{Session, SessionFormat, SessionLevel};
pub use speaker::Speaker;
