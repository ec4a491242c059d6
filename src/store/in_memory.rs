//! InMemoryDocumentStore — HashMap-backed document store for testing and
//! development.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::{DocumentStore, Page, PageToken, StoreError};
use crate::filter::{Clause, ParamValue, Parameter, PredicateKind, QueryPlan};
use crate::settings::StoreSettings;

const DEFAULT_PAGE_SIZE: usize = 50;

/// In-memory document store with per-collection BTreeMaps.
///
/// Documents come back in id order, which stands in for the store's default
/// ordering. Clone shares the underlying storage via Arc.
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, BTreeMap<String, Value>>>>,
    unavailable: Arc<AtomicBool>,
    page_size: usize,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocumentStore {
    /// Create an empty store with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create an empty store reading `page_size` documents per page.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            collections: Arc::new(RwLock::new(HashMap::new())),
            unavailable: Arc::new(AtomicBool::new(false)),
            page_size: page_size.max(1),
        }
    }

    /// Create an empty store configured from settings.
    pub fn from_settings(settings: &StoreSettings) -> Self {
        Self::with_page_size(settings.page_size)
    }

    /// Simulate a connectivity outage: every call fails with `Unavailable`
    /// until cleared.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of documents currently held in a collection.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|collections| {
                collections
                    .get(collection)
                    .map(BTreeMap::len)
                    .unwrap_or(0)
            })
            .unwrap_or(0)
    }

    /// Drop every document in a collection. Test cleanup only; production
    /// code never deletes.
    pub fn clear(&self, collection: &str) {
        if let Ok(mut collections) = self.collections.write() {
            collections.remove(collection);
        }
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store offline".into()));
        }
        Ok(())
    }
}

impl DocumentStore for InMemoryDocumentStore {
    async fn read_page(
        &self,
        collection: &str,
        plan: &QueryPlan,
        continuation: Option<&PageToken>,
    ) -> Result<Page, StoreError> {
        self.check_available()?;

        let offset = match continuation {
            Some(token) => token
                .0
                .parse::<usize>()
                .map_err(|_| StoreError::query_failed(format!("bad page token: {}", token.0)))?,
            None => 0,
        };

        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;

        let mut matching = Vec::new();
        if let Some(documents) = collections.get(collection) {
            for document in documents.values() {
                if matches_plan(plan, document)? {
                    matching.push(document.clone());
                }
            }
        }

        let total = matching.len();
        let items: Vec<Value> = matching.into_iter().skip(offset).take(self.page_size).collect();
        let next = offset + items.len();
        let continuation = (next < total).then(|| PageToken(next.to_string()));

        Ok(Page {
            items,
            continuation,
        })
    }

    async fn upsert(
        &self,
        collection: &str,
        id: &str,
        document: Value,
    ) -> Result<Value, StoreError> {
        self.check_available()?;

        if id.trim().is_empty() {
            return Err(StoreError::write_failed(None, "missing partition key"));
        }

        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;

        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), document.clone());

        Ok(document)
    }
}

fn matches_plan(plan: &QueryPlan, document: &Value) -> Result<bool, StoreError> {
    for clause in plan.clauses() {
        if !matches_clause(clause, document)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn matches_clause(clause: &Clause, document: &Value) -> Result<bool, StoreError> {
    let param = clause.param().map(Parameter::value);
    match (clause.kind(), param) {
        (PredicateKind::MatchAll, _) => Ok(true),
        (PredicateKind::TitleContains, Some(ParamValue::Text(needle))) => {
            Ok(str_field(document, "title")
                .map(|title| title.to_lowercase().contains(needle.as_str()))
                .unwrap_or(false))
        }
        (PredicateKind::TagsIntersect, Some(ParamValue::TextSet(wanted))) => {
            let tags = document.get("tags").and_then(Value::as_array);
            Ok(tags
                .map(|tags| {
                    tags.iter()
                        .filter_map(Value::as_str)
                        .any(|tag| wanted.iter().any(|w| w == tag))
                })
                .unwrap_or(false))
        }
        (PredicateKind::StartAtOrAfter, Some(ParamValue::Timestamp(bound))) => {
            Ok(time_field(document, "startTime")?
                .map(|start| start >= *bound)
                .unwrap_or(false))
        }
        (PredicateKind::EndAtOrBefore, Some(ParamValue::Timestamp(bound))) => {
            Ok(time_field(document, "endTime")?
                .map(|end| end <= *bound)
                .unwrap_or(false))
        }
        (PredicateKind::RoomEquals, Some(ParamValue::Text(room))) => {
            Ok(str_field(document, "room") == Some(room.as_str()))
        }
        (PredicateKind::LevelIn, Some(ParamValue::TextSet(levels))) => {
            Ok(str_field(document, "level")
                .map(|level| levels.iter().any(|l| l == level))
                .unwrap_or(false))
        }
        (PredicateKind::FormatEquals, Some(ParamValue::Text(format))) => {
            Ok(str_field(document, "format") == Some(format.as_str()))
        }
        (PredicateKind::LanguageEquals, Some(ParamValue::Text(language))) => {
            Ok(str_field(document, "language") == Some(language.as_str()))
        }
        (kind, _) => Err(StoreError::query_failed(format!(
            "clause {:?} is missing its parameter or bound the wrong type",
            kind
        ))),
    }
}

fn str_field<'a>(document: &'a Value, field: &str) -> Option<&'a str> {
    document.get(field).and_then(Value::as_str)
}

fn time_field(document: &Value, field: &str) -> Result<Option<OffsetDateTime>, StoreError> {
    match str_field(document, field) {
        Some(raw) => OffsetDateTime::parse(raw, &Rfc3339)
            .map(Some)
            .map_err(StoreError::query_failed),
        None => Ok(None),
    }
}
