//! UPDATE statement builder.

use super::traits::{SqlStatement, StatementKind};
use super::{accept_table, check};
use crate::error::{BuildError, BuildResult};
use crate::expr::Expr;
use crate::table::{IntoColumn, TableRef};
use crate::value::Value;

/// UPDATE statement builder.
///
/// Assignments render in the order their columns were first set.
#[derive(Debug, Clone, Default)]
pub struct UpdateBuilder {
    /// Target table (`None` is a fatal error at render time)
    table: Option<TableRef>,
    /// SET assignments
    assignments: Vec<(String, Value)>,
    /// WHERE condition
    filter: Option<Expr>,
    errors: Vec<BuildError>,
}

impl UpdateBuilder {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self::default().table(table)
    }

    /// Set (or replace) the target table.
    pub fn table(mut self, table: impl Into<TableRef>) -> Self {
        self.table = accept_table(table, &mut self.errors);
        self
    }

    /// Assign a value to a column; setting the same column again replaces
    /// its value in place.
    pub fn set(mut self, column: impl IntoColumn, value: impl Into<Value>) -> Self {
        let column = column.into_column();
        let value = value.into();
        match self.assignments.iter_mut().find(|(c, _)| *c == column) {
            Some(slot) => slot.1 = value,
            None => self.assignments.push((column, value)),
        }
        self
    }

    /// Replace all assignments, in the iteration order of `map`.
    pub fn set_map<I, C, V>(mut self, map: I) -> Self
    where
        I: IntoIterator<Item = (C, V)>,
        C: IntoColumn,
        V: Into<Value>,
    {
        self.assignments.clear();
        for (column, value) in map {
            self = self.set(column, value);
        }
        self
    }

    /// Set the WHERE condition, replacing any previous one.
    pub fn filter(mut self, condition: Expr) -> Self {
        self.filter = Some(condition);
        self
    }
}

impl SqlStatement for UpdateBuilder {
    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }

    fn build_sql(&self) -> String {
        let mut parts: Vec<String> = vec!["UPDATE".to_string()];

        if let Some(table) = &self.table {
            parts.push(table.to_sql());
        }

        let assignments: Vec<String> = self
            .assignments
            .iter()
            .map(|(column, value)| format!("{} = {}", column, value.to_sql()))
            .collect();
        parts.push("SET".to_string());
        parts.push(assignments.join(", "));

        if let Some(filter) = &self.filter {
            parts.push("WHERE".to_string());
            parts.push(filter.text().to_string());
        }

        parts.join(" ")
    }

    fn validate(&self) -> BuildResult<()> {
        // Fatal: reported alone, ahead of anything accumulated.
        if self.table.is_none() {
            return Err(BuildError::MissingTable);
        }
        let empty = self.assignments.is_empty().then_some(BuildError::EmptySet);
        check(&self.errors, empty)
    }
}
