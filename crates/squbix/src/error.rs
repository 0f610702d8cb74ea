//! Error types for squbix

use thiserror::Error;

/// Result type alias for query building.
pub type QueryResult<T> = Result<T, QueryError>;

/// Reasons a builder refuses to produce a statement.
///
/// Every variant is a caller-input problem: supply the missing fragment
/// (or drop the conflicting one) and build again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The builder has no target table.
    #[error("no table specified for query")]
    MissingTable,

    /// A SELECT without any projection.
    #[error("no field selected, add it using add_select method")]
    MissingSelect,

    /// An INSERT without columns or an UPDATE without SET assignments.
    #[error("no field specified, add it using {method} method")]
    MissingField {
        /// The adder that supplies the missing fragments.
        method: &'static str,
    },

    /// An INSERT with neither value rows nor a SELECT source.
    #[error("no value(s) to be inserted, add it using add_value or add_value_with_select method")]
    MissingValue,

    /// An INSERT with both value rows and a SELECT source.
    #[error("use only add_value or add_value_with_select to add value(s)")]
    ConflictingValueSources,

    /// An UPDATE without any WHERE predicate. Never waived.
    #[error("no update condition specified, this is DANGEROUS, add it using add_where method")]
    MissingUpdateCondition,
}

impl QueryError {
    /// Check if this is a missing table error
    pub fn is_missing_table(&self) -> bool {
        matches!(self, Self::MissingTable)
    }

    /// Check if this error blocked an unconditional UPDATE
    pub fn is_unsafe_update(&self) -> bool {
        matches!(self, Self::MissingUpdateCondition)
    }
}
