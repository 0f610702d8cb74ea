//! INSERT query builder.

use crate::error::{QueryError, QueryResult};
use crate::qb::fragments::IntoFragments;
use crate::qb::traits::{BuildQuery, StatementKind};
use crate::qb::{LIST_SEP, finish, keyword_clause};

/// Where inserted rows come from, resolved at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ValueSource<'a> {
    /// `VALUES (..), (..)`
    Rows(&'a [String]),
    /// A full `SELECT ...` clause
    Select(&'a str),
}

/// INSERT query builder.
///
/// Output template:
///
/// ```text
/// [WITH c1, c2] INSERT INTO t (f1, f2) {VALUES r1, r2 | SELECT ...} [ON CONFLICT ...]
/// ```
///
/// Exactly one value source must be supplied: literal rows via
/// [`add_value`](Self::add_value) or a SELECT via
/// [`add_value_with_select`](Self::add_value_with_select).
#[derive(Clone, Debug, Default)]
pub struct CreateQuery {
    /// WITH definitions
    cte_fragments: Vec<String>,
    /// Target table
    into_fragment: String,
    /// Column list
    field_fragments: Vec<String>,
    /// Parenthesized row literals
    value_fragments: Vec<String>,
    /// SELECT used as value source
    value_with_select_fragment: Option<String>,
    /// Conflict resolution clause
    on_conflict_fragment: Option<String>,
}

impl CreateQuery {
    /// Create a new INSERT builder targeting `table`.
    pub fn new(table: &str) -> Self {
        Self {
            into_fragment: table.to_string(),
            ..Self::default()
        }
    }

    /// Add common table expressions.
    pub fn add_cte(mut self, ctes: impl IntoFragments) -> Self {
        ctes.append_to(&mut self.cte_fragments);
        self
    }

    /// Add columns to insert into.
    pub fn add_field(mut self, fields: impl IntoFragments) -> Self {
        fields.append_to(&mut self.field_fragments);
        self
    }

    /// Add row literals, each a complete `(v1, v2, ...)` tuple.
    pub fn add_value(mut self, rows: impl IntoFragments) -> Self {
        rows.append_to(&mut self.value_fragments);
        self
    }

    /// Use a SELECT clause as the value source (replaces any previous one).
    pub fn add_value_with_select(mut self, select: &str) -> Self {
        self.value_with_select_fragment = non_empty(select);
        self
    }

    /// Set the conflict clause, e.g. `ON CONFLICT (id) DO NOTHING`
    /// (replaces any previous one).
    pub fn add_on_conflict(mut self, on_conflict: &str) -> Self {
        self.on_conflict_fragment = non_empty(on_conflict);
        self
    }

    fn value_source(&self) -> QueryResult<ValueSource<'_>> {
        match (self.value_fragments.as_slice(), self.value_with_select_fragment.as_deref()) {
            ([], None) => Err(QueryError::MissingValue),
            ([], Some(select)) => Ok(ValueSource::Select(select)),
            (rows, None) => Ok(ValueSource::Rows(rows)),
            (_, Some(_)) => Err(QueryError::ConflictingValueSources),
        }
    }

    fn clauses(&self) -> QueryResult<Vec<String>> {
        if self.into_fragment.is_empty() {
            return Err(QueryError::MissingTable);
        }
        if self.field_fragments.is_empty() {
            return Err(QueryError::MissingField { method: "add_field" });
        }
        let source = self.value_source()?;

        let mut clauses = Vec::new();

        clauses.extend(keyword_clause("WITH", &self.cte_fragments, LIST_SEP));

        clauses.push(format!(
            "INSERT INTO {} ({})",
            self.into_fragment,
            self.field_fragments.join(LIST_SEP)
        ));

        match source {
            ValueSource::Rows(rows) => clauses.push(format!("VALUES {}", rows.join(LIST_SEP))),
            ValueSource::Select(select) => clauses.push(select.to_string()),
        }

        clauses.extend(self.on_conflict_fragment.clone());

        Ok(clauses)
    }

    /// Validate and assemble the INSERT statement.
    ///
    /// Same as [`BuildQuery::build_query`], callable without importing the trait.
    pub fn build_query(&self) -> QueryResult<String> {
        finish(StatementKind::Insert, self.clauses())
    }
}

impl BuildQuery for CreateQuery {
    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }

    fn build_query(&self) -> QueryResult<String> {
        CreateQuery::build_query(self)
    }
}

/// Single-slot fragments treat `""` as unset.
fn non_empty(fragment: &str) -> Option<String> {
    if fragment.is_empty() {
        None
    } else {
        Some(fragment.to_string())
    }
}
