//! Condition expressions for WHERE and JOIN ... ON clauses.
//!
//! An [`Expr`] holds its rendered SQL fragment. Leaf constructors produce
//! `target op literal`; [`Expr::and`] and [`Expr::or`] append another
//! expression and parenthesize it when its text contains the opposite
//! keyword:
//!
//! ```
//! use fluentsql::{eq, Expr};
//!
//! let e = eq("a", 1).and(eq("b", 1).or(eq("c", 1)));
//! assert_eq!(e.text(), "a = 1 AND (b = 1 OR c = 1)");
//!
//! let e = Expr::eq("a", 1).or(Expr::eq("b", 1).and(Expr::eq("c", 1)));
//! assert_eq!(e.text(), "a = 1 OR (b = 1 AND c = 1)");
//! ```
//!
//! The keyword check is a case-sensitive substring scan of the rendered text,
//! so a literal such as `'ORANGE'` on the right-hand side also gets wrapped.

use crate::table::IntoColumn;
use crate::value::{IntoValues, Value, format_list};
use std::fmt;

/// A rendered boolean condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    text: String,
}

impl Expr {
    fn compare(target: impl IntoColumn, op: &str, value: Value) -> Self {
        Self {
            text: format!("{} {} {}", target.into_column(), op, value.to_sql()),
        }
    }

    fn unary(target: impl IntoColumn, suffix: &str) -> Self {
        Self {
            text: format!("{} {}", target.into_column(), suffix),
        }
    }

    fn pattern(target: impl IntoColumn, op: &str, prefix: &str, value: Value, suffix: &str) -> Self {
        let pattern = format!("{prefix}{}{suffix}", value.format(false));
        Self::compare(target, op, Value::Text(pattern))
    }

    fn range(target: impl IntoColumn, op: &str, start: Value, end: Value) -> Self {
        Self {
            text: format!(
                "{} {} {} TO {}",
                target.into_column(),
                op,
                start.to_sql(),
                end.to_sql()
            ),
        }
    }

    fn membership(target: impl IntoColumn, op: &str, values: impl IntoValues) -> Self {
        let values = values.into_values();
        Self {
            text: format!("{} {} ({})", target.into_column(), op, format_list(&values)),
        }
    }

    /// `target = value`
    pub fn eq(target: impl IntoColumn, value: impl Into<Value>) -> Self {
        Self::compare(target, "=", value.into())
    }

    /// `target != value`
    pub fn ne(target: impl IntoColumn, value: impl Into<Value>) -> Self {
        Self::compare(target, "!=", value.into())
    }

    /// `target > value`
    pub fn gt(target: impl IntoColumn, value: impl Into<Value>) -> Self {
        Self::compare(target, ">", value.into())
    }

    /// `target >= value`
    pub fn gte(target: impl IntoColumn, value: impl Into<Value>) -> Self {
        Self::compare(target, ">=", value.into())
    }

    /// `target < value`
    pub fn lt(target: impl IntoColumn, value: impl Into<Value>) -> Self {
        Self::compare(target, "<", value.into())
    }

    /// `target <= value`
    pub fn lte(target: impl IntoColumn, value: impl Into<Value>) -> Self {
        Self::compare(target, "<=", value.into())
    }

    /// `target LIKE pattern`
    pub fn like(target: impl IntoColumn, pattern: impl Into<Value>) -> Self {
        Self::compare(target, "LIKE", pattern.into())
    }

    /// `target NOT LIKE pattern`
    pub fn not_like(target: impl IntoColumn, pattern: impl Into<Value>) -> Self {
        Self::compare(target, "NOT LIKE", pattern.into())
    }

    /// `target LIKE 'value%'`
    pub fn starts_with(target: impl IntoColumn, value: impl Into<Value>) -> Self {
        Self::pattern(target, "LIKE", "", value.into(), "%")
    }

    /// `target NOT LIKE 'value%'`
    pub fn not_starts_with(target: impl IntoColumn, value: impl Into<Value>) -> Self {
        Self::pattern(target, "NOT LIKE", "", value.into(), "%")
    }

    /// `target LIKE '%value'`
    pub fn ends_with(target: impl IntoColumn, value: impl Into<Value>) -> Self {
        Self::pattern(target, "LIKE", "%", value.into(), "")
    }

    /// `target NOT LIKE '%value'`
    pub fn not_ends_with(target: impl IntoColumn, value: impl Into<Value>) -> Self {
        Self::pattern(target, "NOT LIKE", "%", value.into(), "")
    }

    /// `target LIKE '%value%'`
    pub fn contains(target: impl IntoColumn, value: impl Into<Value>) -> Self {
        Self::pattern(target, "LIKE", "%", value.into(), "%")
    }

    /// `target NOT LIKE '%value%'`
    pub fn not_contains(target: impl IntoColumn, value: impl Into<Value>) -> Self {
        Self::pattern(target, "NOT LIKE", "%", value.into(), "%")
    }

    /// `target BETWEEN start TO end`
    pub fn between(
        target: impl IntoColumn,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Self {
        Self::range(target, "BETWEEN", start.into(), end.into())
    }

    /// `target NOT BETWEEN start TO end`
    pub fn not_between(
        target: impl IntoColumn,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Self {
        Self::range(target, "NOT BETWEEN", start.into(), end.into())
    }

    /// `target IN (values...)`
    ///
    /// Scalars, sequences, and tuples of both are flattened in argument order.
    pub fn in_list(target: impl IntoColumn, values: impl IntoValues) -> Self {
        Self::membership(target, "IN", values)
    }

    /// `target NOT IN (values...)`
    pub fn not_in(target: impl IntoColumn, values: impl IntoValues) -> Self {
        Self::membership(target, "NOT IN", values)
    }

    pub fn is_null(target: impl IntoColumn) -> Self {
        Self::unary(target, "IS NULL")
    }

    pub fn is_not_null(target: impl IntoColumn) -> Self {
        Self::unary(target, "IS NOT NULL")
    }

    pub fn is_true(target: impl IntoColumn) -> Self {
        Self::unary(target, "= true")
    }

    pub fn is_not_true(target: impl IntoColumn) -> Self {
        Self::unary(target, "!= true")
    }

    pub fn is_false(target: impl IntoColumn) -> Self {
        Self::unary(target, "= false")
    }

    pub fn is_not_false(target: impl IntoColumn) -> Self {
        Self::unary(target, "!= false")
    }

    /// Raw SQL fragment, used verbatim.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self { text: sql.into() }
    }

    /// `self AND other`, parenthesizing `other` when its text contains `OR`.
    pub fn and(self, other: Expr) -> Self {
        self.combine("AND", "OR", other)
    }

    /// `self OR other`, parenthesizing `other` when its text contains `AND`.
    pub fn or(self, other: Expr) -> Self {
        self.combine("OR", "AND", other)
    }

    fn combine(mut self, op: &str, opposite: &str, other: Expr) -> Self {
        if other.text.contains(opposite) {
            self.text = format!("{} {} ({})", self.text, op, other.text);
        } else {
            self.text = format!("{} {} {}", self.text, op, other.text);
        }
        self
    }

    /// The rendered fragment.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// `target = value`
pub fn eq(target: impl IntoColumn, value: impl Into<Value>) -> Expr {
    Expr::eq(target, value)
}

/// `target != value`
pub fn ne(target: impl IntoColumn, value: impl Into<Value>) -> Expr {
    Expr::ne(target, value)
}

/// `target > value`
pub fn gt(target: impl IntoColumn, value: impl Into<Value>) -> Expr {
    Expr::gt(target, value)
}

/// `target >= value`
pub fn gte(target: impl IntoColumn, value: impl Into<Value>) -> Expr {
    Expr::gte(target, value)
}

/// `target < value`
pub fn lt(target: impl IntoColumn, value: impl Into<Value>) -> Expr {
    Expr::lt(target, value)
}

/// `target <= value`
pub fn lte(target: impl IntoColumn, value: impl Into<Value>) -> Expr {
    Expr::lte(target, value)
}

pub fn like(target: impl IntoColumn, pattern: impl Into<Value>) -> Expr {
    Expr::like(target, pattern)
}

pub fn not_like(target: impl IntoColumn, pattern: impl Into<Value>) -> Expr {
    Expr::not_like(target, pattern)
}

pub fn starts_with(target: impl IntoColumn, value: impl Into<Value>) -> Expr {
    Expr::starts_with(target, value)
}

pub fn not_starts_with(target: impl IntoColumn, value: impl Into<Value>) -> Expr {
    Expr::not_starts_with(target, value)
}

pub fn ends_with(target: impl IntoColumn, value: impl Into<Value>) -> Expr {
    Expr::ends_with(target, value)
}

pub fn not_ends_with(target: impl IntoColumn, value: impl Into<Value>) -> Expr {
    Expr::not_ends_with(target, value)
}

pub fn contains(target: impl IntoColumn, value: impl Into<Value>) -> Expr {
    Expr::contains(target, value)
}

pub fn not_contains(target: impl IntoColumn, value: impl Into<Value>) -> Expr {
    Expr::not_contains(target, value)
}

pub fn between(target: impl IntoColumn, start: impl Into<Value>, end: impl Into<Value>) -> Expr {
    Expr::between(target, start, end)
}

pub fn not_between(
    target: impl IntoColumn,
    start: impl Into<Value>,
    end: impl Into<Value>,
) -> Expr {
    Expr::not_between(target, start, end)
}

pub fn in_list(target: impl IntoColumn, values: impl IntoValues) -> Expr {
    Expr::in_list(target, values)
}

pub fn not_in(target: impl IntoColumn, values: impl IntoValues) -> Expr {
    Expr::not_in(target, values)
}

pub fn is_null(target: impl IntoColumn) -> Expr {
    Expr::is_null(target)
}

pub fn is_not_null(target: impl IntoColumn) -> Expr {
    Expr::is_not_null(target)
}

pub fn is_true(target: impl IntoColumn) -> Expr {
    Expr::is_true(target)
}

pub fn is_not_true(target: impl IntoColumn) -> Expr {
    Expr::is_not_true(target)
}

pub fn is_false(target: impl IntoColumn) -> Expr {
    Expr::is_false(target)
}

pub fn is_not_false(target: impl IntoColumn) -> Expr {
    Expr::is_not_false(target)
}

/// Conditions attached to a JOIN (rendered AND-joined after `ON`).
pub trait IntoConditions {
    fn into_conditions(self) -> Vec<Expr>;
}

impl IntoConditions for Expr {
    fn into_conditions(self) -> Vec<Expr> {
        vec![self]
    }
}

impl IntoConditions for Option<Expr> {
    fn into_conditions(self) -> Vec<Expr> {
        self.into_iter().collect()
    }
}

impl IntoConditions for Vec<Expr> {
    fn into_conditions(self) -> Vec<Expr> {
        self
    }
}

impl<const N: usize> IntoConditions for [Expr; N] {
    fn into_conditions(self) -> Vec<Expr> {
        self.into()
    }
}

impl IntoConditions for () {
    fn into_conditions(self) -> Vec<Expr> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::table;

    #[test]
    fn comparisons_quote_text_only() {
        assert_eq!(eq("test", "user1").text(), "test = 'user1'");
        assert_eq!(eq("test", 1).text(), "test = 1");
        assert_eq!(ne("test", "user1").text(), "test != 'user1'");
        assert_eq!(ne("test", 1).text(), "test != 1");
        assert_eq!(gt("test", 1).text(), "test > 1");
        assert_eq!(gte("test", "user1").text(), "test >= 'user1'");
        assert_eq!(lt("test", 1).text(), "test < 1");
        assert_eq!(lte("test", "user1").text(), "test <= 'user1'");
        assert_eq!(eq("price", 9.5).text(), "price = 9.500000");
    }

    #[test]
    fn like_takes_pattern_as_given() {
        assert_eq!(like("test", "user1%").text(), "test LIKE 'user1%'");
        assert_eq!(not_like("test", "user1%").text(), "test NOT LIKE 'user1%'");
    }

    #[test]
    fn pattern_helpers_wrap_value() {
        assert_eq!(starts_with("test", "user1").text(), "test LIKE 'user1%'");
        assert_eq!(starts_with("test", 1).text(), "test LIKE '1%'");
        assert_eq!(not_starts_with("test", "user1").text(), "test NOT LIKE 'user1%'");
        assert_eq!(ends_with("test", "user1").text(), "test LIKE '%user1'");
        assert_eq!(not_ends_with("test", 1).text(), "test NOT LIKE '%1'");
        assert_eq!(contains("test", "user1").text(), "test LIKE '%user1%'");
        assert_eq!(not_contains("test", 1).text(), "test NOT LIKE '%1%'");
    }

    #[test]
    fn range_uses_to_keyword() {
        assert_eq!(
            between("test", "user1", "user2").text(),
            "test BETWEEN 'user1' TO 'user2'"
        );
        assert_eq!(between("test", 1, 5).text(), "test BETWEEN 1 TO 5");
        assert_eq!(not_between("test", 1, 5).text(), "test NOT BETWEEN 1 TO 5");
    }

    #[test]
    fn membership_flattens_arguments() {
        assert_eq!(in_list("test", "user1").text(), "test IN ('user1')");
        assert_eq!(
            in_list("test", ("user1", "user2")).text(),
            "test IN ('user1', 'user2')"
        );
        assert_eq!(
            in_list("test", vec!["user1", "user2"]).text(),
            "test IN ('user1', 'user2')"
        );
        assert_eq!(
            in_list("test", (vec!["user1", "user2"], "user3")).text(),
            "test IN ('user1', 'user2', 'user3')"
        );
        assert_eq!(in_list("test", 1).text(), "test IN (1)");
        assert_eq!(in_list("test", (1, 3)).text(), "test IN (1, 3)");
        assert_eq!(in_list("test", vec![1, 5]).text(), "test IN (1, 5)");
        assert_eq!(in_list("id", (vec![1, 5], 3)).text(), "id IN (1, 5, 3)");
        assert_eq!(not_in("id", [2, 4]).text(), "id NOT IN (2, 4)");
    }

    #[test]
    fn unary_predicates() {
        assert_eq!(is_null("deleted_at").text(), "deleted_at IS NULL");
        assert_eq!(is_not_null("deleted_at").text(), "deleted_at IS NOT NULL");
        assert_eq!(is_true("active").text(), "active = true");
        assert_eq!(is_not_true("active").text(), "active != true");
        assert_eq!(is_false("active").text(), "active = false");
        assert_eq!(is_not_false("active").text(), "active != false");
    }

    #[test]
    fn column_refs_on_both_sides() {
        let user = table("users").alias("u");
        let token = table("tokens").alias("t");
        assert_eq!(eq(user.col("id"), token.col("user_id")).text(), "u.id = t.user_id");
    }

    #[test]
    fn and_wraps_or_operand() {
        let e = eq("a", 1).and(eq("b", 1).or(eq("c", 1)));
        assert_eq!(e.text(), "a = 1 AND (b = 1 OR c = 1)");
    }

    #[test]
    fn or_wraps_and_operand() {
        let e = eq("a", 1).or(eq("b", 1).and(eq("c", 1)));
        assert_eq!(e.text(), "a = 1 OR (b = 1 AND c = 1)");
    }

    #[test]
    fn same_operator_chains_flat() {
        let e = eq("a", 1).and(eq("b", 2)).and(eq("c", 3));
        assert_eq!(e.text(), "a = 1 AND b = 2 AND c = 3");

        let e = eq("a", 1).or(eq("b", 2).or(eq("c", 3)));
        assert_eq!(e.text(), "a = 1 OR b = 2 OR c = 3");
    }

    #[test]
    fn left_operand_is_never_wrapped() {
        let e = eq("a", 1).or(eq("b", 2)).and(eq("c", 3));
        assert_eq!(e.text(), "a = 1 OR b = 2 AND c = 3");
    }

    #[test]
    fn keyword_inside_literal_still_wraps() {
        let e = eq("a", 1).and(eq("fruit", "ORANGE"));
        assert_eq!(e.text(), "a = 1 AND (fruit = 'ORANGE')");

        let e = eq("a", 1).or(eq("brand", "BRANDT"));
        assert_eq!(e.text(), "a = 1 OR (brand = 'BRANDT')");
    }

    #[test]
    fn keyword_scan_is_case_sensitive() {
        let e = eq("a", 1).and(eq("color", "red"));
        assert_eq!(e.text(), "a = 1 AND color = 'red'");
    }

    #[test]
    fn nested_brackets_rewrap() {
        let inner = eq("b", 1).and(eq("c", 1).or(eq("d", 1)));
        let e = eq("a", 1).and(inner);
        assert_eq!(e.text(), "a = 1 AND (b = 1 AND (c = 1 OR d = 1))");
    }

    #[test]
    fn raw_is_verbatim() {
        assert_eq!(Expr::raw("1=1").to_string(), "1=1");
    }

    #[test]
    fn conditions_from_collections() {
        assert_eq!(eq("a", 1).into_conditions().len(), 1);
        assert_eq!([eq("a", 1), eq("b", 2)].into_conditions().len(), 2);
        assert!(None::<Expr>.into_conditions().is_empty());
        assert!(().into_conditions().is_empty());
    }
}
