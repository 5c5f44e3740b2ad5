//! SELECT statement builder.

use super::traits::{SqlStatement, StatementKind};
use super::{accept_table, check};
use crate::dataset::Dataset;
use crate::error::{BuildError, BuildResult};
use crate::expr::{Expr, IntoConditions};
use crate::table::{IntoColumns, TableRef};

/// JOIN flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL JOIN",
            JoinKind::Cross => "CROSS JOIN",
        }
    }
}

/// A JOIN clause: `<KIND> JOIN <table> [ON c1 AND c2 ...]`.
#[derive(Debug, Clone)]
pub struct Join {
    pub kind: JoinKind,
    pub table: TableRef,
    pub conditions: Vec<Expr>,
}

impl Join {
    pub fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", self.kind.keyword(), self.table.to_sql());
        if !self.conditions.is_empty() {
            let on: Vec<&str> = self.conditions.iter().map(Expr::text).collect();
            sql.push_str(" ON ");
            sql.push_str(&on.join(" AND "));
        }
        sql
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn keyword(&self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone)]
struct OrderClause {
    order: Order,
    columns: String,
}

/// SELECT statement builder.
#[derive(Debug, Clone, Default)]
pub struct SelectBuilder {
    /// Projected fields (empty renders `*`)
    fields: Vec<String>,
    /// FROM table
    table: Option<TableRef>,
    /// JOIN clauses in call order
    joins: Vec<Join>,
    /// WHERE condition
    filter: Option<Expr>,
    /// ORDER BY clauses in call order
    orders: Vec<OrderClause>,
    errors: Vec<BuildError>,
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Fields ====================

    /// Append one or more projected fields.
    pub fn field(mut self, columns: impl IntoColumns) -> Self {
        columns.push_columns(&mut self.fields);
        self
    }

    /// Replace the projected field list.
    pub fn fields(mut self, columns: impl IntoColumns) -> Self {
        self.fields = columns.into_columns();
        self
    }

    // ==================== FROM ====================

    /// Set the FROM table.
    pub fn from(mut self, table: impl Into<TableRef>) -> Self {
        self.table = accept_table(table, &mut self.errors);
        self
    }

    /// Set the FROM table and field list from a [`Dataset`].
    pub fn from_dataset<T: Dataset>(mut self) -> Self {
        self.fields = T::COLUMNS.iter().map(|c| c.to_string()).collect();
        self.table = accept_table(T::table_ref(), &mut self.errors);
        self
    }

    // ==================== JOIN ====================

    /// Add a JOIN of any kind.
    pub fn join(mut self, kind: JoinKind, table: impl Into<TableRef>, on: impl IntoConditions) -> Self {
        if let Some(table) = accept_table(table, &mut self.errors) {
            self.joins.push(Join {
                kind,
                table,
                conditions: on.into_conditions(),
            });
        }
        self
    }

    pub fn inner_join(self, table: impl Into<TableRef>, on: impl IntoConditions) -> Self {
        self.join(JoinKind::Inner, table, on)
    }

    pub fn left_join(self, table: impl Into<TableRef>, on: impl IntoConditions) -> Self {
        self.join(JoinKind::Left, table, on)
    }

    pub fn right_join(self, table: impl Into<TableRef>, on: impl IntoConditions) -> Self {
        self.join(JoinKind::Right, table, on)
    }

    pub fn full_join(self, table: impl Into<TableRef>, on: impl IntoConditions) -> Self {
        self.join(JoinKind::Full, table, on)
    }

    /// Add a CROSS JOIN (no ON clause).
    pub fn cross_join(self, table: impl Into<TableRef>) -> Self {
        self.join(JoinKind::Cross, table, ())
    }

    // ==================== WHERE ====================

    /// Set the WHERE condition, replacing any previous one.
    pub fn filter(mut self, condition: Expr) -> Self {
        self.filter = Some(condition);
        self
    }

    // ==================== ORDER BY ====================

    /// Add an ORDER BY clause; an empty column list is ignored.
    pub fn order_by(mut self, order: Order, columns: impl IntoColumns) -> Self {
        let columns = columns.into_columns();
        if !columns.is_empty() {
            self.orders.push(OrderClause {
                order,
                columns: columns.join(", "),
            });
        }
        self
    }

    pub fn order_asc(self, columns: impl IntoColumns) -> Self {
        self.order_by(Order::Asc, columns)
    }

    pub fn order_desc(self, columns: impl IntoColumns) -> Self {
        self.order_by(Order::Desc, columns)
    }
}

impl SqlStatement for SelectBuilder {
    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }

    fn build_sql(&self) -> String {
        let mut parts: Vec<String> = vec!["SELECT".to_string()];

        if self.fields.is_empty() {
            parts.push("*".to_string());
        } else {
            parts.push(self.fields.join(", "));
        }

        if let Some(table) = &self.table {
            parts.push("FROM".to_string());
            parts.push(table.to_sql());
        }

        parts.extend(self.joins.iter().map(Join::to_sql));

        if let Some(filter) = &self.filter {
            parts.push("WHERE".to_string());
            parts.push(filter.text().to_string());
        }

        if !self.orders.is_empty() {
            let orders: Vec<String> = self
                .orders
                .iter()
                .map(|o| format!("{} {}", o.columns, o.order.keyword()))
                .collect();
            parts.push("ORDER BY".to_string());
            parts.push(orders.join(", "));
        }

        parts.join(" ")
    }

    fn validate(&self) -> BuildResult<()> {
        let missing = self.table.is_none().then_some(BuildError::MissingTable);
        check(&self.errors, missing)
    }
}
