//! DELETE statement builder.

use super::traits::{SqlStatement, StatementKind};
use super::{accept_table, check};
use crate::error::{BuildError, BuildResult};
use crate::expr::Expr;
use crate::table::TableRef;

/// DELETE statement builder.
///
/// Without a condition the statement deletes every row.
#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    table: Option<TableRef>,
    filter: Option<Expr>,
    errors: Vec<BuildError>,
}

impl DeleteBuilder {
    pub fn new(table: impl Into<TableRef>) -> Self {
        let mut errors = Vec::new();
        let table = accept_table(table, &mut errors);
        Self {
            table,
            filter: None,
            errors,
        }
    }

    /// Set the WHERE condition, replacing any previous one.
    pub fn filter(mut self, condition: Expr) -> Self {
        self.filter = Some(condition);
        self
    }
}

impl SqlStatement for DeleteBuilder {
    fn kind(&self) -> StatementKind {
        StatementKind::Delete
    }

    fn build_sql(&self) -> String {
        let mut parts: Vec<String> = vec!["DELETE FROM".to_string()];

        if let Some(table) = &self.table {
            parts.push(table.to_sql());
        }

        if let Some(filter) = &self.filter {
            parts.push("WHERE".to_string());
            parts.push(filter.text().to_string());
        }

        parts.join(" ")
    }

    fn validate(&self) -> BuildResult<()> {
        check(&self.errors, None::<BuildError>)
    }
}
