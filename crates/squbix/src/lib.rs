//! # squbix
//!
//! A small fluent assembler for SQL statements built from raw string fragments.
//!
//! ## Features
//!
//! - **Fragments in, one statement out**: clauses are opaque text, appended in call order
//! - **Fixed clause order**: `WITH`, `SELECT`/`FROM`, joins, `WHERE`, `GROUP BY`, `ORDER BY`, `LIMIT`, `OFFSET`
//! - **Single-line output**: every whitespace run collapses to one space, so multi-line literals are fine
//! - **Safe defaults**: UPDATE requires WHERE, INSERT requires exactly one value source
//!
//! Nothing is parsed, quoted or escaped. Callers are responsible for the
//! correctness and safety of every fragment they pass in.
//!
//! ## Query Builder (qb)
//!
//! ```
//! use squbix::qb;
//!
//! # fn main() -> squbix::QueryResult<()> {
//! // SELECT
//! let sql = qb::read_query("users u")
//!     .add_select(["u.id", "u.name"])
//!     .add_join("LEFT JOIN orders o ON o.user_id = u.id")
//!     .add_where("u.status = 'active'")
//!     .add_order_by("u.name ASC")
//!     .add_limit(10)
//!     .build_query()?;
//! assert_eq!(
//!     sql,
//!     "SELECT u.id, u.name FROM users u LEFT JOIN orders o ON o.user_id = u.id \
//!      WHERE u.status = 'active' ORDER BY u.name ASC LIMIT 10"
//! );
//!
//! // INSERT
//! let sql = qb::create_query("users")
//!     .add_field(["name", "email"])
//!     .add_value("('alice', 'alice@example.com')")
//!     .build_query()?;
//! assert_eq!(sql, "INSERT INTO users (name, email) VALUES ('alice', 'alice@example.com')");
//!
//! // UPDATE
//! let sql = qb::update_query("users")
//!     .add_set_field("status = 'inactive'")
//!     .add_where("id = :id")
//!     .build_query()?;
//! assert_eq!(sql, "UPDATE users SET status = 'inactive' WHERE id = :id");
//!
//! // DELETE
//! let sql = qb::delete_query("users").add_where("id = :id").build_query()?;
//! assert_eq!(sql, "DELETE FROM users WHERE id = :id");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod normalize;
pub mod qb;

pub use error::{QueryError, QueryResult};
pub use normalize::normalize_whitespace;

// Re-export qb module for easy access
pub use qb::{
    BuildQuery, CreateQuery, DeleteQuery, IntoFragments, ReadQuery, StatementKind, UpdateQuery,
    create_query, delete_query, read_query, update_query,
};
