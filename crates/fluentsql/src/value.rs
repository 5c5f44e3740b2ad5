//! Literal values and their SQL text form.
//!
//! Values are rendered inline, not bound as parameters. Embedded quote
//! characters are emitted verbatim.

use crate::table::ColumnRef;

/// A scalar that can appear on the value side of a clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text, single-quoted when rendered as a literal.
    Text(String),
    /// Integer, rendered as decimal digits.
    Int(i64),
    /// Float, rendered fixed-point with six fractional digits.
    Float(f64),
    /// Boolean keyword.
    Bool(bool),
    /// A column reference, always rendered as `table.column`.
    Column(ColumnRef),
    /// SQL `NULL`.
    Null,
}

impl Value {
    /// Render the value as SQL text.
    ///
    /// `quote_strings` only affects [`Value::Text`]: literals are quoted,
    /// identifiers (column names) are not.
    pub fn format(&self, quote_strings: bool) -> String {
        match self {
            Value::Text(s) if quote_strings => format!("'{s}'"),
            Value::Text(s) => s.clone(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => format!("{f:.6}"),
            Value::Bool(b) => b.to_string(),
            Value::Column(c) => c.to_sql(),
            Value::Null => "NULL".to_string(),
        }
    }

    /// Render as a literal (strings quoted).
    pub fn to_sql(&self) -> String {
        self.format(true)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }
}

/// Render a list of values for `IN (...)` / `VALUES (...)`.
///
/// If any element is text, every element is rendered unquoted and the list is
/// wrapped in one pair of quotes joined by `', '`.
pub(crate) fn format_list(values: &[Value]) -> String {
    if values.iter().any(Value::is_text) {
        let inner: Vec<String> = values.iter().map(|v| v.format(false)).collect();
        format!("'{}'", inner.join("', '"))
    } else {
        let inner: Vec<String> = values.iter().map(Value::to_sql).collect();
        inner.join(", ")
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Text(v.to_string())
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<ColumnRef> for Value {
    fn from(v: ColumnRef) -> Self {
        Value::Column(v)
    }
}

impl From<&ColumnRef> for Value {
    fn from(v: &ColumnRef) -> Self {
        Value::Column(v.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Arguments that flatten into an ordered list of values.
///
/// Scalars contribute one value, sequences contribute each element, and
/// tuples concatenate their members in order, so mixed argument lists such as
/// `(vec![1, 5], 3)` become `[1, 5, 3]`.
pub trait IntoValues {
    fn push_values(self, out: &mut Vec<Value>);

    fn into_values(self) -> Vec<Value>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        self.push_values(&mut out);
        out
    }
}

macro_rules! impl_into_values_scalar {
    ($($t:ty),*) => {
        $(
            impl IntoValues for $t {
                fn push_values(self, out: &mut Vec<Value>) {
                    out.push(self.into());
                }
            }
        )*
    };
}

impl_into_values_scalar!(
    &str, String, &String, char, i8, i16, i32, i64, u8, u16, u32, f32, f64, bool, ColumnRef,
    &ColumnRef, Value
);

impl<T: Into<Value>> IntoValues for Option<T> {
    fn push_values(self, out: &mut Vec<Value>) {
        out.push(self.into());
    }
}

impl<T: Into<Value>> IntoValues for Vec<T> {
    fn push_values(self, out: &mut Vec<Value>) {
        out.extend(self.into_iter().map(Into::into));
    }
}

impl<T: Into<Value> + Clone> IntoValues for &[T] {
    fn push_values(self, out: &mut Vec<Value>) {
        out.extend(self.iter().cloned().map(Into::into));
    }
}

impl<T: Into<Value>, const N: usize> IntoValues for [T; N] {
    fn push_values(self, out: &mut Vec<Value>) {
        out.extend(self.into_iter().map(Into::into));
    }
}

impl IntoValues for () {
    fn push_values(self, _out: &mut Vec<Value>) {}
}

macro_rules! impl_into_values_tuple {
    ($($name:ident),+) => {
        impl<$($name: IntoValues),+> IntoValues for ($($name,)+) {
            #[allow(non_snake_case)]
            fn push_values(self, out: &mut Vec<Value>) {
                let ($($name,)+) = self;
                $($name.push_values(out);)+
            }
        }
    };
}

impl_into_values_tuple!(A);
impl_into_values_tuple!(A, B);
impl_into_values_tuple!(A, B, C);
impl_into_values_tuple!(A, B, C, D);
impl_into_values_tuple!(A, B, C, D, E);
impl_into_values_tuple!(A, B, C, D, E, F);
impl_into_values_tuple!(A, B, C, D, E, F, G);
impl_into_values_tuple!(A, B, C, D, E, F, G, H);
