//! Convenient imports for typical `fluentsql` usage.
//!
//! ```
//! use fluentsql::prelude::*;
//!
//! let sql = select().from(table("users")).filter(is_null("deleted_at")).to_sql()?;
//! assert_eq!(sql, "SELECT * FROM users WHERE deleted_at IS NULL;");
//! # Ok::<(), BuildError>(())
//! ```

pub use crate::{BuildError, BuildResult, Dataset, Expr, SqlStatement, TableRef, Value};
pub use crate::{delete, insert, select, table, truncate, update};

pub use crate::{
    between, contains, ends_with, eq, gt, gte, in_list, is_false, is_not_false, is_not_null,
    is_not_true, is_null, is_true, like, lt, lte, ne, not_between, not_contains, not_ends_with,
    not_in, not_like, not_starts_with, starts_with,
};

#[cfg(feature = "tracing")]
pub use crate::TracingSqlHook;
