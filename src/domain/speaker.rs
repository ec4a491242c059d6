use serde::{Deserialize, Serialize};

use super::{Record, Session};

/// A conference speaker, partitioned by `id`.
///
/// Carries the speaker's accepted sessions inline, matching the document
/// shape served to the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub id: String,
    pub name: String,
    pub position: String,
    pub company: String,
    pub bio: String,
    pub photo_url: String,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl Record for Speaker {
    const COLLECTION: &'static str = "speakers";

    fn id(&self) -> &str {
        &self.id
    }
}
