use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Record;

/// The skill level a session is pitched at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SessionLevel {
    /// The level name as stored in documents and bound into query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            SessionLevel::Beginner => "Beginner",
            SessionLevel::Intermediate => "Intermediate",
            SessionLevel::Advanced => "Advanced",
        }
    }

    /// Parse a level name, ignoring ASCII case. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        [
            SessionLevel::Beginner,
            SessionLevel::Intermediate,
            SessionLevel::Advanced,
        ]
        .into_iter()
        .find(|level| level.as_str().eq_ignore_ascii_case(name))
    }
}

/// The delivery format of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionFormat {
    Lecture,
    Workshop,
    Panel,
    Keynote,
    Presentation,
}

impl SessionFormat {
    /// The format name as stored in documents and bound into query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            SessionFormat::Lecture => "Lecture",
            SessionFormat::Workshop => "Workshop",
            SessionFormat::Panel => "Panel",
            SessionFormat::Keynote => "Keynote",
            SessionFormat::Presentation => "Presentation",
        }
    }

    /// Parse a format name, ignoring ASCII case. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        [
            SessionFormat::Lecture,
            SessionFormat::Workshop,
            SessionFormat::Panel,
            SessionFormat::Keynote,
            SessionFormat::Presentation,
        ]
        .into_iter()
        .find(|format| format.as_str().eq_ignore_ascii_case(name))
    }
}

/// A conference session, partitioned by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub tags: Vec<String>,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    pub room: String,
    pub level: SessionLevel,
    pub format: SessionFormat,
    pub language: String,
}

impl Record for Session {
    const COLLECTION: &'static str = "sessions";

    fn id(&self) -> &str {
        &self.id
    }
}
