use super::plan::{Clause, Parameter, PredicateKind, QueryPlan};
use super::FilterSpec;

/// Build a query plan from a filter spec.
///
/// Clauses are appended in a fixed order — title, tags, startAfter,
/// endBefore, room, levels, format, language — regardless of how the spec
/// was populated, so equal specs always yield identical plans. Values are
/// bound as named parameters, never rendered into the clause text.
pub fn build(spec: &FilterSpec) -> QueryPlan {
    let mut clauses = vec![Clause::base()];

    if let Some(title) = present(&spec.title_contains) {
        clauses.push(Clause::new(
            PredicateKind::TitleContains,
            "AND CONTAINS(LOWER(c.title), @title)",
            Parameter::text("@title", title.to_lowercase()),
        ));
    }

    if !spec.tags.is_empty() {
        clauses.push(Clause::new(
            PredicateKind::TagsIntersect,
            "AND ARRAY_INTERSECTS(c.tags, @tags)",
            Parameter::text_set("@tags", spec.tags.clone()),
        ));
    }

    if let Some(start_after) = spec.start_after {
        clauses.push(Clause::new(
            PredicateKind::StartAtOrAfter,
            "AND c.startTime >= @startAfter",
            Parameter::timestamp("@startAfter", start_after),
        ));
    }

    if let Some(end_before) = spec.end_before {
        clauses.push(Clause::new(
            PredicateKind::EndAtOrBefore,
            "AND c.endTime <= @endBefore",
            Parameter::timestamp("@endBefore", end_before),
        ));
    }

    if let Some(room) = present(&spec.room) {
        clauses.push(Clause::new(
            PredicateKind::RoomEquals,
            "AND c.room = @room",
            Parameter::text("@room", room),
        ));
    }

    if !spec.levels.is_empty() {
        let names = spec.levels.iter().map(|level| level.as_str().to_string());
        clauses.push(Clause::new(
            PredicateKind::LevelIn,
            "AND ARRAY_CONTAINS(@levels, c.level)",
            Parameter::text_set("@levels", names.collect()),
        ));
    }

    if let Some(format) = spec.format {
        clauses.push(Clause::new(
            PredicateKind::FormatEquals,
            "AND c.format = @format",
            Parameter::text("@format", format.as_str()),
        ));
    }

    if let Some(language) = present(&spec.language) {
        clauses.push(Clause::new(
            PredicateKind::LanguageEquals,
            "AND c.language = @language",
            Parameter::text("@language", language),
        ));
    }

    QueryPlan::new(clauses)
}

/// A text criterion counts as present only when it has non-whitespace content.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}
