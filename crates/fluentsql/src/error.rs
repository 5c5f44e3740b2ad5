//! Error types for fluentsql

use thiserror::Error;

/// Result type alias for statement rendering
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors surfaced by `to_sql()`.
///
/// Builders record configuration errors while they are being chained and
/// report them only when the statement is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A table reference was created from an empty name.
    #[error("empty table name")]
    EmptyTableName,

    /// The statement has no target table.
    #[error("no table set")]
    MissingTable,

    /// INSERT rendered without any value row.
    #[error("no values provided for insertion")]
    NoValues,

    /// UPDATE rendered without any assignment.
    #[error("no columns set for update")]
    EmptySet,

    /// Several accumulated errors, in the order they were recorded.
    #[error("{}", join_messages(.0))]
    Multiple(Vec<BuildError>),
}

impl BuildError {
    /// Combine accumulated errors into one value.
    ///
    /// Returns `None` for an empty list and the error itself for a single entry.
    pub fn join(errors: &[BuildError]) -> Option<Self> {
        match errors {
            [] => None,
            [single] => Some(single.clone()),
            many => Some(Self::Multiple(many.to_vec())),
        }
    }

    /// Flattened view over this error and any nested ones.
    pub fn errors(&self) -> Vec<&BuildError> {
        match self {
            Self::Multiple(inner) => inner.iter().flat_map(|e| e.errors()).collect(),
            other => vec![other],
        }
    }

    /// Check if this is (or contains) a missing-table error
    pub fn is_missing_table(&self) -> bool {
        self.errors()
            .iter()
            .any(|e| matches!(e, Self::MissingTable))
    }
}

fn join_messages(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
