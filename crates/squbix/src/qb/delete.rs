//! DELETE query builder.

use crate::error::{QueryError, QueryResult};
use crate::qb::fragments::IntoFragments;
use crate::qb::traits::{BuildQuery, StatementKind};
use crate::qb::{AND_SEP, finish, keyword_clause};

/// DELETE query builder.
///
/// Output template: `DELETE FROM t [WHERE w1 AND w2]`.
///
/// WHERE is optional: without predicates the statement deletes every row.
#[derive(Clone, Debug, Default)]
pub struct DeleteQuery {
    /// Target table
    from_fragment: String,
    /// WHERE predicates
    where_fragments: Vec<String>,
}

impl DeleteQuery {
    /// Create a new DELETE builder targeting `table`.
    pub fn new(table: &str) -> Self {
        Self {
            from_fragment: table.to_string(),
            where_fragments: Vec::new(),
        }
    }

    /// Add WHERE predicates; they are ANDed together.
    pub fn add_where(mut self, predicates: impl IntoFragments) -> Self {
        predicates.append_to(&mut self.where_fragments);
        self
    }

    fn clauses(&self) -> QueryResult<Vec<String>> {
        if self.from_fragment.is_empty() {
            return Err(QueryError::MissingTable);
        }

        let mut clauses = vec![format!("DELETE FROM {}", self.from_fragment)];
        clauses.extend(keyword_clause("WHERE", &self.where_fragments, AND_SEP));
        Ok(clauses)
    }

    /// Validate and assemble the DELETE statement.
    ///
    /// Same as [`BuildQuery::build_query`], callable without importing the trait.
    pub fn build_query(&self) -> QueryResult<String> {
        finish(StatementKind::Delete, self.clauses())
    }
}

impl BuildQuery for DeleteQuery {
    fn kind(&self) -> StatementKind {
        StatementKind::Delete
    }

    fn build_query(&self) -> QueryResult<String> {
        DeleteQuery::build_query(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_table() {
        let err = DeleteQuery::default().build_query().unwrap_err();
        assert!(err.is_missing_table());
        assert_eq!(err.to_string(), "no table specified for query");
    }

    #[test]
    fn test_delete_all_allowed() {
        assert_eq!(DeleteQuery::new("t").build_query().unwrap(), "DELETE FROM t");
    }

    #[test]
    fn test_delete_with_where() {
        let qb = DeleteQuery::new("table_a").add_where(["table_a.id = :id", "table_a.name = :name"]);
        assert_eq!(
            qb.build_query().unwrap(),
            "DELETE FROM table_a WHERE table_a.id = :id AND table_a.name = :name"
        );
    }
}
