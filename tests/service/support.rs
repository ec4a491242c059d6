//! Shared fixtures for the service integration tests.

use std::sync::Arc;

use time::macros::datetime;
use time::OffsetDateTime;

use greenroom::{
    InMemoryDocumentStore, Record, RecordStoreGateway, Session, SessionFormat, SessionLevel,
    Speaker,
};

pub fn store() -> Arc<InMemoryDocumentStore> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    Arc::new(InMemoryDocumentStore::new())
}

pub fn gateway<R: Record>(
    store: &Arc<InMemoryDocumentStore>,
) -> RecordStoreGateway<R, InMemoryDocumentStore> {
    RecordStoreGateway::new(Arc::clone(store)).unwrap()
}

pub fn session(id: &str, title: &str) -> Session {
    Session {
        id: id.into(),
        title: title.into(),
        slug: title.to_lowercase().replace(' ', "-"),
        tags: vec!["Architecture".into()],
        description: String::new(),
        start_time: datetime!(2026-06-01 09:00 UTC),
        end_time: datetime!(2026-06-01 10:00 UTC),
        room: "A1".into(),
        level: SessionLevel::Intermediate,
        format: SessionFormat::Lecture,
        language: "English".into(),
    }
}

pub fn session_at(
    id: &str,
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> Session {
    let mut s = session(id, "Timed Session");
    s.start_time = start;
    s.end_time = end;
    s
}

pub fn speaker(id: &str, name: &str) -> Speaker {
    Speaker {
        id: id.into(),
        name: name.into(),
        position: "Engineer".into(),
        company: "Example Co".into(),
        bio: String::new(),
        photo_url: String::new(),
        sessions: vec![],
    }
}
