//! Table and column references.
//!
//! A [`TableRef`] carries the physical table name and the name it is
//! displayed under (its alias). A [`ColumnRef`] snapshots the table's display
//! name at the moment it is created:
//!
//! ```
//! use fluentsql::table;
//!
//! let users = table("users");
//! let early = users.col("id");
//! let users = users.alias("u");
//! let late = users.col("id");
//!
//! assert_eq!(early.to_sql(), "users.id");
//! assert_eq!(late.to_sql(), "u.id");
//! assert_eq!(users.to_sql(), "users AS u");
//! ```
//!
//! Alias a table before deriving columns from it.

/// Create a table reference whose display name equals its base name.
pub fn table(name: impl Into<String>) -> TableRef {
    TableRef::new(name)
}

/// A table, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    name: String,
    base: String,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        let base = name.into();
        Self {
            name: base.clone(),
            base,
        }
    }

    /// Display name (the alias, or the base name when not aliased).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Physical table name.
    pub fn base_name(&self) -> &str {
        &self.base
    }

    pub fn is_aliased(&self) -> bool {
        self.name != self.base
    }

    /// Give the table an alias (`base AS alias`).
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.name = alias.into();
        self
    }

    /// Rename the display name in place.
    ///
    /// Columns already taken from this table keep the previous name.
    pub fn set_alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.name = alias.into();
        self
    }

    /// Reference a column of this table under its current display name.
    pub fn col(&self, column: impl Into<String>) -> ColumnRef {
        ColumnRef {
            table: self.name.clone(),
            column: column.into(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.base.is_empty() || self.name.is_empty()
    }

    /// Render the table for a FROM/INTO/JOIN position.
    pub fn to_sql(&self) -> String {
        if self.is_aliased() {
            format!("{} AS {}", self.base, self.name)
        } else {
            self.base.clone()
        }
    }
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        TableRef::new(name)
    }
}

impl From<String> for TableRef {
    fn from(name: String) -> Self {
        TableRef::new(name)
    }
}

impl From<&TableRef> for TableRef {
    fn from(t: &TableRef) -> Self {
        t.clone()
    }
}

/// A column qualified by a table display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    table: String,
    column: String,
}

impl ColumnRef {
    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn to_sql(&self) -> String {
        format!("{}.{}", self.table, self.column)
    }
}

/// Something usable as a column name (condition target, SET column, field).
pub trait IntoColumn {
    fn into_column(self) -> String;
}

impl IntoColumn for &str {
    fn into_column(self) -> String {
        self.to_string()
    }
}

impl IntoColumn for String {
    fn into_column(self) -> String {
        self
    }
}

impl IntoColumn for &String {
    fn into_column(self) -> String {
        self.clone()
    }
}

impl IntoColumn for ColumnRef {
    fn into_column(self) -> String {
        self.to_sql()
    }
}

impl IntoColumn for &ColumnRef {
    fn into_column(self) -> String {
        self.to_sql()
    }
}

/// A list of columns: a single column, a sequence, or a tuple of columns.
pub trait IntoColumns {
    fn push_columns(self, out: &mut Vec<String>);

    fn into_columns(self) -> Vec<String>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        self.push_columns(&mut out);
        out
    }
}

macro_rules! impl_into_columns_single {
    ($($t:ty),*) => {
        $(
            impl IntoColumns for $t {
                fn push_columns(self, out: &mut Vec<String>) {
                    out.push(self.into_column());
                }
            }
        )*
    };
}

impl_into_columns_single!(&str, String, &String, ColumnRef, &ColumnRef);

impl<T: IntoColumn> IntoColumns for Vec<T> {
    fn push_columns(self, out: &mut Vec<String>) {
        out.extend(self.into_iter().map(IntoColumn::into_column));
    }
}

impl<T: IntoColumn + Clone> IntoColumns for &[T] {
    fn push_columns(self, out: &mut Vec<String>) {
        out.extend(self.iter().cloned().map(IntoColumn::into_column));
    }
}

impl<T: IntoColumn, const N: usize> IntoColumns for [T; N] {
    fn push_columns(self, out: &mut Vec<String>) {
        out.extend(self.into_iter().map(IntoColumn::into_column));
    }
}

impl IntoColumns for () {
    fn push_columns(self, _out: &mut Vec<String>) {}
}

macro_rules! impl_into_columns_tuple {
    ($($name:ident),+) => {
        impl<$($name: IntoColumns),+> IntoColumns for ($($name,)+) {
            #[allow(non_snake_case)]
            fn push_columns(self, out: &mut Vec<String>) {
                let ($($name,)+) = self;
                $($name.push_columns(out);)+
            }
        }
    };
}

impl_into_columns_tuple!(A);
impl_into_columns_tuple!(A, B);
impl_into_columns_tuple!(A, B, C);
impl_into_columns_tuple!(A, B, C, D);
impl_into_columns_tuple!(A, B, C, D, E);
impl_into_columns_tuple!(A, B, C, D, E, F);
impl_into_columns_tuple!(A, B, C, D, E, F, G);
impl_into_columns_tuple!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_is_not_aliased() {
        let t = table("users");
        assert_eq!(t.name(), "users");
        assert_eq!(t.base_name(), "users");
        assert!(!t.is_aliased());
        assert_eq!(t.to_sql(), "users");
    }

    #[test]
    fn alias_changes_display_name_only() {
        let t = table("users").alias("t");
        assert_eq!(t.name(), "t");
        assert_eq!(t.base_name(), "users");
        assert_eq!(t.to_sql(), "users AS t");
    }

    #[test]
    fn alias_equal_to_base_renders_plain() {
        let t = table("users").alias("users");
        assert_eq!(t.to_sql(), "users");
    }

    #[test]
    fn column_snapshots_display_name() {
        let mut t = table("users");
        let before = t.col("id");
        t.set_alias("u");
        let after = t.col("id");

        assert_eq!(before.table(), "users");
        assert_eq!(before.to_sql(), "users.id");
        assert_eq!(after.to_sql(), "u.id");
        assert_eq!(after.column(), "id");
    }

    #[test]
    fn columns_flatten_from_mixed_inputs() {
        let t = table("users").alias("u");
        let cols = ("id", vec![t.col("name"), t.col("email")]).into_columns();
        assert_eq!(cols, vec!["id", "u.name", "u.email"]);
        assert!(().into_columns().is_empty());
    }
}
