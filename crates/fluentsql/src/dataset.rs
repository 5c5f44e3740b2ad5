//! Data-model adapter.
//!
//! A [`Dataset`] is a record type that knows its table name and column list.
//! [`SelectBuilder::from_dataset`](crate::SelectBuilder::from_dataset) uses it
//! to fill in the FROM table and projected fields.
//!
//! Usually derived:
//!
//! ```ignore
//! use fluentsql::Dataset;
//!
//! #[derive(Dataset)]
//! #[db(table = "users")]
//! struct User {
//!     id: i64,
//!     #[db(column = "user_name")]
//!     name: String,
//!     #[db(skip)]
//!     cached: Option<String>,
//! }
//!
//! assert_eq!(User::TABLE, "users");
//! assert_eq!(User::COLUMNS, &["id", "user_name"]);
//! ```

use crate::table::TableRef;

/// Table metadata for a record type.
pub trait Dataset {
    /// Physical table name.
    const TABLE: &'static str;

    /// Column names in field declaration order.
    const COLUMNS: &'static [&'static str];

    /// A fresh, unaliased reference to the table.
    fn table_ref() -> TableRef {
        TableRef::new(Self::TABLE)
    }
}
