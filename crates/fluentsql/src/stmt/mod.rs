//! Statement builders.
//!
//! Each builder accumulates clause state through consuming calls and renders
//! it in a fixed clause order with [`SqlStatement::to_sql`]:
//!
//! ```
//! use fluentsql::{eq, select, table, SqlStatement};
//!
//! let sql = select().from(table("users")).filter(eq("id", 1)).to_sql()?;
//! assert_eq!(sql, "SELECT * FROM users WHERE id = 1;");
//! # Ok::<(), fluentsql::BuildError>(())
//! ```
//!
//! Configuration mistakes (such as an empty table name) are recorded while
//! chaining and reported by `to_sql()`, which never returns partial text.

mod delete;
mod insert;
mod select;
mod traits;
mod truncate;
mod update;

pub use delete::DeleteBuilder;
pub use insert::InsertBuilder;
pub use select::{Join, JoinKind, Order, SelectBuilder};
pub use traits::{SqlStatement, StatementKind};
pub use truncate::TruncateBuilder;
pub use update::UpdateBuilder;

use crate::error::BuildError;
use crate::table::{IntoColumns, TableRef};

/// Start a SELECT statement (`*` until fields are added).
pub fn select() -> SelectBuilder {
    SelectBuilder::new()
}

/// Start an INSERT statement for the given columns.
///
/// Pass `()` to omit the column list.
pub fn insert(columns: impl IntoColumns) -> InsertBuilder {
    InsertBuilder::new(columns)
}

/// Start an UPDATE statement.
pub fn update(table: impl Into<TableRef>) -> UpdateBuilder {
    UpdateBuilder::new(table)
}

/// Start a DELETE statement.
pub fn delete(table: impl Into<TableRef>) -> DeleteBuilder {
    DeleteBuilder::new(table)
}

/// Start a TRUNCATE statement.
pub fn truncate(table: impl Into<TableRef>) -> TruncateBuilder {
    TruncateBuilder::new(table)
}

/// Accept a target table, recording an error for an empty name.
pub(crate) fn accept_table(
    table: impl Into<TableRef>,
    errors: &mut Vec<BuildError>,
) -> Option<TableRef> {
    let table = table.into();
    if table.is_empty() {
        errors.push(BuildError::EmptyTableName);
        None
    } else {
        Some(table)
    }
}

/// Combine accumulated errors with any render-time ones.
pub(crate) fn check(
    errors: &[BuildError],
    extra: impl IntoIterator<Item = BuildError>,
) -> Result<(), BuildError> {
    let mut all = errors.to_vec();
    all.extend(extra);
    match BuildError::join(&all) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
