//! # fluentsql
//!
//! A fluent builder for literal SQL statement text.
//!
//! ## Features
//!
//! - **Literal output**: values are rendered inline, no placeholders or bind parameters
//! - **Fixed clause order**: builders accept calls in any order and render canonically
//! - **Deferred errors**: configuration mistakes are collected and reported by `to_sql()`
//! - **Data-model adapter**: `#[derive(Dataset)]` maps a struct to its table and columns
//! - **Optional tracing**: rendered statements are logged under the `tracing` feature
//!
//! ## Statements
//!
//! ```
//! use fluentsql::{eq, insert, select, table, update, SqlStatement};
//!
//! // SELECT
//! let user = table("users").alias("u");
//! let token = table("tokens").alias("t");
//! let sql = select()
//!     .field(user.col("id"))
//!     .from(&user)
//!     .inner_join(&token, eq(user.col("id"), token.col("user_id")))
//!     .to_sql()?;
//! assert_eq!(sql, "SELECT u.id FROM users AS u INNER JOIN tokens AS t ON u.id = t.user_id;");
//!
//! // INSERT
//! let sql = insert(("id", "name")).into_table("users").values((1, "test")).to_sql()?;
//! assert_eq!(sql, "INSERT INTO users ( id, name ) VALUES ( 1, 'test' );");
//!
//! // UPDATE
//! let sql = update("users").set("name", "test").filter(eq("id", 1)).to_sql()?;
//! assert_eq!(sql, "UPDATE users SET name = 'test' WHERE id = 1;");
//! # Ok::<(), fluentsql::BuildError>(())
//! ```
//!
//! String values are wrapped in single quotes without escaping. Never feed
//! untrusted input into a rendered statement.

pub mod dataset;
pub mod error;
pub mod expr;
pub mod prelude;
pub mod stmt;
pub mod table;
pub mod value;

#[cfg(feature = "tracing")]
pub mod trace;

pub use dataset::Dataset;
pub use error::{BuildError, BuildResult};
pub use expr::{
    Expr, IntoConditions, between, contains, ends_with, eq, gt, gte, in_list, is_false,
    is_not_false, is_not_null, is_not_true, is_null, is_true, like, lt, lte, ne, not_between,
    not_contains, not_ends_with, not_in, not_like, not_starts_with, starts_with,
};
pub use stmt::{
    DeleteBuilder, InsertBuilder, Join, JoinKind, Order, SelectBuilder, SqlStatement,
    StatementKind, TruncateBuilder, UpdateBuilder, delete, insert, select, truncate, update,
};
pub use table::{ColumnRef, IntoColumn, IntoColumns, TableRef, table};
pub use value::{IntoValues, Value};

#[cfg(feature = "tracing")]
pub use trace::TracingSqlHook;

#[cfg(feature = "derive")]
pub use fluentsql_derive::Dataset;
