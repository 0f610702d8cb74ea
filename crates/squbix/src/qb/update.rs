//! UPDATE query builder.

use crate::error::{QueryError, QueryResult};
use crate::qb::fragments::IntoFragments;
use crate::qb::traits::{BuildQuery, StatementKind};
use crate::qb::{AND_SEP, LIST_SEP, finish};

/// UPDATE query builder.
///
/// Output template: `UPDATE t SET s1, s2 WHERE w1 AND w2`.
///
/// A WHERE predicate is mandatory. There is no way to build an
/// unconditional UPDATE; use an explicit predicate such as `TRUE` if that is
/// really what you want.
#[derive(Clone, Debug, Default)]
pub struct UpdateQuery {
    /// Target table
    table_fragment: String,
    /// SET assignments (`col = expr`)
    set_fragments: Vec<String>,
    /// WHERE predicates
    where_fragments: Vec<String>,
}

impl UpdateQuery {
    /// Create a new UPDATE builder targeting `table`.
    pub fn new(table: &str) -> Self {
        Self {
            table_fragment: table.to_string(),
            ..Self::default()
        }
    }

    /// Add SET assignments, e.g. `status = 'inactive'`.
    pub fn add_set_field(mut self, assignments: impl IntoFragments) -> Self {
        assignments.append_to(&mut self.set_fragments);
        self
    }

    /// Add WHERE predicates; they are ANDed together.
    pub fn add_where(mut self, predicates: impl IntoFragments) -> Self {
        predicates.append_to(&mut self.where_fragments);
        self
    }

    fn clauses(&self) -> QueryResult<Vec<String>> {
        if self.table_fragment.is_empty() {
            return Err(QueryError::MissingTable);
        }
        if self.set_fragments.is_empty() {
            return Err(QueryError::MissingField { method: "add_set_field" });
        }
        if self.where_fragments.is_empty() {
            return Err(QueryError::MissingUpdateCondition);
        }

        Ok(vec![format!(
            "UPDATE {} SET {} WHERE {}",
            self.table_fragment,
            self.set_fragments.join(LIST_SEP),
            self.where_fragments.join(AND_SEP)
        )])
    }

    /// Validate and assemble the UPDATE statement.
    ///
    /// Same as [`BuildQuery::build_query`], callable without importing the trait.
    pub fn build_query(&self) -> QueryResult<String> {
        finish(StatementKind::Update, self.clauses())
    }
}

impl BuildQuery for UpdateQuery {
    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }

    fn build_query(&self) -> QueryResult<String> {
        UpdateQuery::build_query(self)
    }
}
