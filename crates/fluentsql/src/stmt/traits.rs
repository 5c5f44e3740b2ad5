//! Trait definitions for statement builders.

use crate::error::BuildResult;

#[cfg(feature = "tracing")]
use crate::trace::TracingSqlHook;

/// The kind of statement a builder renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Truncate,
}

impl StatementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
            StatementKind::Truncate => "TRUNCATE",
        }
    }
}

/// Base trait for all statement builders.
pub trait SqlStatement {
    /// Statement kind, used for logging.
    fn kind(&self) -> StatementKind;

    /// Build the clause text without the terminating `;`.
    ///
    /// This does not check builder state; use [`SqlStatement::to_sql`].
    fn build_sql(&self) -> String;

    /// Validate builder state before rendering.
    fn validate(&self) -> BuildResult<()> {
        Ok(())
    }

    /// Render the terminated statement.
    ///
    /// Fails with the combined accumulated errors (or a fatal precondition
    /// error) instead of producing partial text. Rendering is a pure function
    /// of the builder state.
    fn to_sql(&self) -> BuildResult<String> {
        let result = self.validate().map(|()| format!("{};", self.build_sql()));
        #[cfg(feature = "tracing")]
        crate::trace::log_rendered(self.kind(), &result);
        result
    }

    /// Render and emit the statement through a [`TracingSqlHook`].
    #[cfg(feature = "tracing")]
    fn to_sql_traced(&self, hook: &TracingSqlHook) -> BuildResult<String> {
        let sql = self.to_sql()?;
        hook.emit(self.kind(), &sql);
        Ok(sql)
    }
}
