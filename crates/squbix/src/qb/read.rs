//! SELECT query builder.

use crate::error::{QueryError, QueryResult};
use crate::qb::fragments::IntoFragments;
use crate::qb::traits::{BuildQuery, StatementKind};
use crate::qb::{AND_SEP, LIST_SEP, finish, keyword_clause};

/// SELECT query builder.
///
/// Output template (bracketed clauses are omitted when empty):
///
/// ```text
/// [WITH c1, c2] SELECT s1, s2 FROM f1, f2 [j1 j2] [WHERE w1 AND w2]
/// [GROUP BY g1, g2] [ORDER BY o1, o2] [LIMIT n] [OFFSET n]
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReadQuery {
    /// WITH definitions
    cte_fragments: Vec<String>,
    /// SELECT fields
    select_fragments: Vec<String>,
    /// FROM tables, the constructor's table first
    from_fragments: Vec<String>,
    /// Complete JOIN phrases
    join_fragments: Vec<String>,
    /// WHERE predicates
    where_fragments: Vec<String>,
    /// GROUP BY keys
    group_by_fragments: Vec<String>,
    /// ORDER BY keys
    order_by_fragments: Vec<String>,
    /// LIMIT
    limit: Option<i64>,
    /// OFFSET
    offset: Option<i64>,
}

impl ReadQuery {
    /// Create a new SELECT builder; `table` seeds the FROM list.
    pub fn new(table: &str) -> Self {
        Self {
            from_fragments: vec![table.to_string()],
            ..Self::default()
        }
    }

    /// Add common table expressions (`name AS (...)`).
    pub fn add_cte(mut self, ctes: impl IntoFragments) -> Self {
        ctes.append_to(&mut self.cte_fragments);
        self
    }

    /// Add fields to select.
    pub fn add_select(mut self, fields: impl IntoFragments) -> Self {
        fields.append_to(&mut self.select_fragments);
        self
    }

    /// Add tables to the FROM list (comma separated, no join syntax).
    pub fn add_from(mut self, tables: impl IntoFragments) -> Self {
        tables.append_to(&mut self.from_fragments);
        self
    }

    /// Add join phrases, e.g. `LEFT JOIN b ON b.id = a.id`.
    pub fn add_join(mut self, joins: impl IntoFragments) -> Self {
        joins.append_to(&mut self.join_fragments);
        self
    }

    /// Add WHERE predicates; they are ANDed together.
    pub fn add_where(mut self, predicates: impl IntoFragments) -> Self {
        predicates.append_to(&mut self.where_fragments);
        self
    }

    /// Add GROUP BY keys.
    pub fn add_group_by(mut self, keys: impl IntoFragments) -> Self {
        keys.append_to(&mut self.group_by_fragments);
        self
    }

    /// Add ORDER BY keys, e.g. `created_at DESC`.
    pub fn add_order_by(mut self, keys: impl IntoFragments) -> Self {
        keys.append_to(&mut self.order_by_fragments);
        self
    }

    /// Set LIMIT.
    pub fn add_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set OFFSET.
    pub fn add_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    fn clauses(&self) -> QueryResult<Vec<String>> {
        if self.from_fragments.is_empty() {
            return Err(QueryError::MissingTable);
        }
        if self.select_fragments.is_empty() {
            return Err(QueryError::MissingSelect);
        }

        let mut clauses = Vec::new();

        clauses.extend(keyword_clause("WITH", &self.cte_fragments, LIST_SEP));

        clauses.push(format!(
            "SELECT {} FROM {}",
            self.select_fragments.join(LIST_SEP),
            self.from_fragments.join(LIST_SEP)
        ));

        // JOINs
        if !self.join_fragments.is_empty() {
            clauses.push(self.join_fragments.join(" "));
        }

        clauses.extend(keyword_clause("WHERE", &self.where_fragments, AND_SEP));
        clauses.extend(keyword_clause("GROUP BY", &self.group_by_fragments, LIST_SEP));
        clauses.extend(keyword_clause("ORDER BY", &self.order_by_fragments, LIST_SEP));

        if let Some(limit) = self.limit {
            clauses.push(format!("LIMIT {}", limit));
        }
        if let Some(offset) = self.offset {
            clauses.push(format!("OFFSET {}", offset));
        }

        Ok(clauses)
    }

    /// Validate and assemble the SELECT statement.
    ///
    /// Same as [`BuildQuery::build_query`], callable without importing the trait.
    pub fn build_query(&self) -> QueryResult<String> {
        finish(StatementKind::Select, self.clauses())
    }
}

impl BuildQuery for ReadQuery {
    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }

    fn build_query(&self) -> QueryResult<String> {
        ReadQuery::build_query(self)
    }
}
