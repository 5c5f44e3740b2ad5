//! `tracing` integration for rendered statements.
//!
//! Enabled by the crate feature `tracing`. Every [`SqlStatement::to_sql`]
//! call emits a `DEBUG` event on target `fluentsql.sql`; failures are emitted
//! at `WARN`.
//!
//! [`SqlStatement::to_sql`]: crate::SqlStatement::to_sql

use crate::error::BuildResult;
use crate::stmt::StatementKind;
use tracing::Level;

pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

pub(crate) fn log_rendered(kind: StatementKind, result: &BuildResult<String>) {
    match result {
        Ok(sql) => tracing::debug!(target: "fluentsql.sql", kind = kind.as_str(), sql = %sql, "rendered statement"),
        Err(err) => tracing::warn!(target: "fluentsql.sql", kind = kind.as_str(), error = %err, "statement not rendered"),
    }
}

/// A hook that re-emits rendered SQL at a chosen level.
///
/// # Example
///
/// ```ignore
/// use fluentsql::{select, table, SqlStatement, TracingSqlHook};
/// use tracing::Level;
///
/// let hook = TracingSqlHook::new().level(Level::INFO).max_sql_length(80);
/// let sql = select().from(table("users")).to_sql_traced(&hook)?;
/// ```
#[derive(Debug, Clone)]
pub struct TracingSqlHook {
    /// Tracing event level to emit at.
    pub level: Level,
    /// Truncate long SQL strings (in bytes). `None` means no truncation.
    pub max_sql_length: Option<usize>,
}

impl Default for TracingSqlHook {
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            max_sql_length: Some(200),
        }
    }
}

impl TracingSqlHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tracing event level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    fn truncate_sql(&self, sql: &str) -> String {
        match self.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
            _ => sql.to_string(),
        }
    }

    pub(crate) fn emit(&self, kind: StatementKind, sql: &str) {
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let sql = self.truncate_sql(sql);
        emit_at_level!(
            self.level,
            target: "fluentsql.sql",
            kind = kind.as_str(),
            sql = %sql,
            "sql statement"
        );
    }
}
