//! TRUNCATE statement builder.

use super::traits::{SqlStatement, StatementKind};
use super::{accept_table, check};
use crate::error::{BuildError, BuildResult};
use crate::table::TableRef;

/// TRUNCATE TABLE statement builder.
#[derive(Debug, Clone)]
pub struct TruncateBuilder {
    table: Option<TableRef>,
    errors: Vec<BuildError>,
}

impl TruncateBuilder {
    pub fn new(table: impl Into<TableRef>) -> Self {
        let mut errors = Vec::new();
        let table = accept_table(table, &mut errors);
        Self { table, errors }
    }
}

impl SqlStatement for TruncateBuilder {
    fn kind(&self) -> StatementKind {
        StatementKind::Truncate
    }

    fn build_sql(&self) -> String {
        match &self.table {
            Some(table) => format!("TRUNCATE TABLE {}", table.to_sql()),
            None => "TRUNCATE TABLE".to_string(),
        }
    }

    fn validate(&self) -> BuildResult<()> {
        check(&self.errors, None::<BuildError>)
    }
}
