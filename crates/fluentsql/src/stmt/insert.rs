//! INSERT statement builder.

use super::traits::{SqlStatement, StatementKind};
use super::{accept_table, check};
use crate::error::{BuildError, BuildResult};
use crate::table::{IntoColumns, TableRef};
use crate::value::{IntoValues, Value};

/// INSERT statement builder.
///
/// Each [`values`](InsertBuilder::values) call adds one row:
///
/// ```
/// use fluentsql::{insert, table, SqlStatement};
///
/// let sql = insert(("id", "name"))
///     .into_table(table("users"))
///     .values((1, "alice"))
///     .values((2, "bob"))
///     .to_sql()?;
/// assert_eq!(sql, "INSERT INTO users ( id, name ) VALUES ( 1, 'alice' ), ( 2, 'bob' );");
/// # Ok::<(), fluentsql::BuildError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InsertBuilder {
    /// Column list (may be empty)
    fields: Vec<String>,
    /// INTO table
    table: Option<TableRef>,
    /// Value rows
    rows: Vec<Vec<Value>>,
    errors: Vec<BuildError>,
}

impl InsertBuilder {
    pub fn new(columns: impl IntoColumns) -> Self {
        Self {
            fields: columns.into_columns(),
            ..Self::default()
        }
    }

    /// Set the target table.
    pub fn into_table(mut self, table: impl Into<TableRef>) -> Self {
        self.table = accept_table(table, &mut self.errors);
        self
    }

    /// Append one row of values; an empty row is ignored.
    pub fn values(mut self, row: impl IntoValues) -> Self {
        let row = row.into_values();
        if !row.is_empty() {
            self.rows.push(row);
        }
        self
    }

    fn render_row(row: &[Value]) -> String {
        let values: Vec<String> = row.iter().map(Value::to_sql).collect();
        format!("( {} )", values.join(", "))
    }
}

impl SqlStatement for InsertBuilder {
    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }

    fn build_sql(&self) -> String {
        let mut parts: Vec<String> = vec!["INSERT".to_string()];

        if let Some(table) = &self.table {
            parts.push("INTO".to_string());
            parts.push(table.to_sql());
        }

        if !self.fields.is_empty() {
            parts.push(format!("( {} )", self.fields.join(", ")));
        }

        if !self.rows.is_empty() {
            let rows: Vec<String> = self.rows.iter().map(|r| Self::render_row(r)).collect();
            parts.push("VALUES".to_string());
            parts.push(rows.join(", "));
        }

        parts.join(" ")
    }

    fn validate(&self) -> BuildResult<()> {
        let missing = self.table.is_none().then_some(BuildError::MissingTable);
        let no_values = self.rows.is_empty().then_some(BuildError::NoValues);
        check(&self.errors, missing.into_iter().chain(no_values))
    }
}
