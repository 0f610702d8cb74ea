//! Trait definitions for query builders.

use std::fmt;

use crate::error::QueryResult;

/// The statement a builder produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// SELECT
    Select,
    /// INSERT
    Insert,
    /// UPDATE
    Update,
    /// DELETE
    Delete,
}

impl StatementKind {
    /// The SQL verb.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common interface of all query builders.
///
/// Lets callers hold any builder behind `&dyn BuildQuery` or stay generic
/// over the statement type.
pub trait BuildQuery {
    /// Which statement this builder assembles.
    fn kind(&self) -> StatementKind;

    /// Validate the collected fragments and assemble the statement.
    ///
    /// Does not modify the builder; calling it twice yields the same result.
    fn build_query(&self) -> QueryResult<String>;
}
