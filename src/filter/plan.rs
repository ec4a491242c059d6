use time::OffsetDateTime;

/// What a clause tests, independent of its rendered query text.
///
/// Store implementations match on this to evaluate a plan against a document
/// without parsing the clause text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateKind {
    /// The unconditional base clause every plan starts from.
    MatchAll,
    /// Case-insensitive substring match on the title field.
    TitleContains,
    /// The record's tag collection shares at least one element with the set.
    TagsIntersect,
    /// Start-time field ≥ bound (inclusive).
    StartAtOrAfter,
    /// End-time field ≤ bound (inclusive).
    EndAtOrBefore,
    /// Exact match on the room field.
    RoomEquals,
    /// The record's level is a member of the set.
    LevelIn,
    /// Exact match on the format field.
    FormatEquals,
    /// Exact match on the language field.
    LanguageEquals,
}

/// A bound query parameter value. Values are always bound, never rendered
/// into the clause text.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    TextSet(Vec<String>),
    Timestamp(OffsetDateTime),
}

/// A named parameter bound to one clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: &'static str,
    value: ParamValue,
}

impl Parameter {
    pub(crate) fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: ParamValue::Text(value.into()),
        }
    }

    pub(crate) fn text_set(name: &'static str, values: Vec<String>) -> Self {
        Self {
            name,
            value: ParamValue::TextSet(values),
        }
    }

    pub(crate) fn timestamp(name: &'static str, value: OffsetDateTime) -> Self {
        Self {
            name,
            value: ParamValue::Timestamp(value),
        }
    }

    /// The placeholder name, including the leading `@`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &ParamValue {
        &self.value
    }
}

/// One predicate clause in a plan: its kind, its rendered text, and at most
/// one bound parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    kind: PredicateKind,
    text: &'static str,
    param: Option<Parameter>,
}

impl Clause {
    /// The base clause: matches every record, binds nothing.
    pub(crate) fn base() -> Self {
        Self {
            kind: PredicateKind::MatchAll,
            text: "SELECT * FROM c WHERE 1=1",
            param: None,
        }
    }

    pub(crate) fn new(kind: PredicateKind, text: &'static str, param: Parameter) -> Self {
        Self {
            kind,
            text,
            param: Some(param),
        }
    }

    pub fn kind(&self) -> PredicateKind {
        self.kind
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn param(&self) -> Option<&Parameter> {
        self.param.as_ref()
    }
}

/// Immutable output of the filter predicate builder: an ordered clause
/// sequence starting from the unconditional base clause.
///
/// Clause order is deterministic for a given `FilterSpec`, so two builds of
/// equal specs produce textually and parametrically identical plans.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    clauses: Vec<Clause>,
}

impl QueryPlan {
    pub(crate) fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    /// The base-clause-only plan: matches every record in the collection.
    pub fn match_all() -> Self {
        Self::new(vec![Clause::base()])
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// The full parameterized query text, clauses joined in order.
    pub fn text(&self) -> String {
        self.clauses
            .iter()
            .map(Clause::text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The bound parameters, in clause order. One per parameterized clause,
    /// so the count always equals the number of placeholders in `text()`.
    pub fn parameters(&self) -> Vec<&Parameter> {
        self.clauses.iter().filter_map(Clause::param).collect()
    }
}
