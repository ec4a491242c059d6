//! Store settings — database and collection configuration resolved at
//! start-up.

use serde::{Deserialize, Serialize};

/// Configuration for the document store and its collections.
///
/// Deserialized from whatever configuration source the host process uses;
/// defaults match the production container layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSettings {
    /// Logical database name.
    pub database: String,
    /// Container holding session documents.
    pub sessions_container: String,
    /// Container holding speaker documents.
    pub speakers_container: String,
    /// Documents fetched per query page.
    pub page_size: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database: "conferences".into(),
            sessions_container: "sessions".into(),
            speakers_container: "speakers".into(),
            page_size: 50,
        }
    }
}
