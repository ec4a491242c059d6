//! Filter predicate builder — turns optional search criteria into an
//! ordered, parameterized query plan.
//!
//! The builder is a pure function: it never fails, holds no state, and is
//! safe for unlimited concurrent use. Absent criteria contribute no
//! predicate, so an empty `FilterSpec` produces the base-clause-only plan.

mod builder;
mod plan;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::{SessionFormat, SessionLevel};

/// A caller's optional criteria for narrowing a session scan.
///
/// Every field is optional. Blank text criteria and empty sets are treated
/// the same as absent ones: they contribute no predicate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Case-insensitive substring match against the title.
    pub title_contains: Option<String>,
    /// Match records whose tag collection intersects this set.
    pub tags: Vec<String>,
    /// Inclusive lower bound on the start-time field.
    #[serde(with = "time::serde::rfc3339::option")]
    pub start_after: Option<OffsetDateTime>,
    /// Inclusive upper bound on the end-time field. Independent of
    /// `start_after`; no relationship between the two is implied.
    #[serde(with = "time::serde::rfc3339::option")]
    pub end_before: Option<OffsetDateTime>,
    /// Exact room match.
    pub room: Option<String>,
    /// Match records whose level is any of these.
    pub levels: Vec<SessionLevel>,
    /// Exact format match.
    pub format: Option<SessionFormat>,
    /// Exact language match.
    pub language: Option<String>,
}

pub use builder::build;
pub use plan::{Clause, ParamValue, Parameter, PredicateKind, QueryPlan};
