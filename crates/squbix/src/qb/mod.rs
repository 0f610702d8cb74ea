//! Fragment-based query builders.
//!
//! Each builder collects opaque SQL fragments per clause and assembles them
//! into one statement on [`BuildQuery::build_query`]:
//!
//! - validate the required fragments, in a documented order
//! - emit the present clauses in a fixed order with their keywords
//! - collapse whitespace runs to single spaces
//!
//! # Usage
//!
//! ```
//! use squbix::qb;
//!
//! let sql = qb::read_query("table_a")
//!     .add_select("field_a")
//!     .add_cte("c AS (SELECT 1)")
//!     .add_limit(10)
//!     .add_offset(5)
//!     .build_query()
//!     .unwrap();
//! assert_eq!(sql, "WITH c AS (SELECT 1) SELECT field_a FROM table_a LIMIT 10 OFFSET 5");
//!
//! let err = qb::update_query("table_a")
//!     .add_set_field("field_a = 1")
//!     .build_query()
//!     .unwrap_err();
//! assert!(err.is_unsafe_update());
//! ```

mod create;
mod delete;
mod fragments;
mod read;
mod traits;
mod update;

pub use create::CreateQuery;
pub use delete::DeleteQuery;
pub use fragments::IntoFragments;
pub use read::ReadQuery;
pub use traits::{BuildQuery, StatementKind};
pub use update::UpdateQuery;

use crate::error::{QueryError, QueryResult};
use crate::normalize::normalize_whitespace;

/// Separator between items of a comma list (select fields, group keys, ...).
const LIST_SEP: &str = ", ";
/// Separator between WHERE predicates.
const AND_SEP: &str = " AND ";

/// Create a SELECT builder reading from `table`.
///
/// # Example
/// ```
/// let qb = squbix::qb::read_query("users").add_select("id");
/// assert_eq!(qb.build_query().unwrap(), "SELECT id FROM users");
/// ```
pub fn read_query(table: &str) -> ReadQuery {
    ReadQuery::new(table)
}

/// Create an INSERT builder targeting `table`.
pub fn create_query(table: &str) -> CreateQuery {
    CreateQuery::new(table)
}

/// Create an UPDATE builder targeting `table`.
///
/// Building without a WHERE predicate always fails.
pub fn update_query(table: &str) -> UpdateQuery {
    UpdateQuery::new(table)
}

/// Create a DELETE builder targeting `table`.
///
/// Unlike UPDATE, a DELETE without WHERE is allowed and removes every row.
pub fn delete_query(table: &str) -> DeleteQuery {
    DeleteQuery::new(table)
}

/// `"<keyword> <a><sep><b>..."`, or `None` when there is nothing to emit.
fn keyword_clause(keyword: &str, items: &[String], sep: &str) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(format!("{} {}", keyword, items.join(sep)))
    }
}

/// Join validated clauses and normalize the result.
fn finish(kind: StatementKind, clauses: QueryResult<Vec<String>>) -> QueryResult<String> {
    match clauses {
        Ok(clauses) => {
            let sql = normalize_whitespace(&clauses.join(" "));
            trace_built(kind, &sql);
            Ok(sql)
        }
        Err(err) => {
            trace_rejected(kind, &err);
            Err(err)
        }
    }
}

#[cfg(feature = "tracing")]
fn trace_built(kind: StatementKind, sql: &str) {
    tracing::debug!(target: "squbix.sql", kind = kind.as_str(), sql, "query built");
}

#[cfg(not(feature = "tracing"))]
fn trace_built(_kind: StatementKind, _sql: &str) {}

#[cfg(feature = "tracing")]
fn trace_rejected(kind: StatementKind, err: &QueryError) {
    tracing::debug!(target: "squbix.sql", kind = kind.as_str(), error = %err, "query rejected");
}

#[cfg(not(feature = "tracing"))]
fn trace_rejected(_kind: StatementKind, _err: &QueryError) {}
