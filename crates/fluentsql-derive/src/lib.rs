//! Derive macros for fluentsql
//!
//! Provides `#[derive(Dataset)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod dataset;
mod sql_ident;

/// Derive `Dataset` metadata for a struct.
///
/// # Example
///
/// ```ignore
/// use fluentsql::Dataset;
///
/// #[derive(Dataset)]
/// #[db(table = "users")]
/// struct User {
///     id: i64,
///     #[db(column = "user_name")]
///     name: String,
///     #[db(skip)]
///     cached: Option<String>,
/// }
/// ```
///
/// # Generated
///
/// - `TABLE: &'static str` - Table name
/// - `COLUMNS: &'static [&'static str]` - Column names in field order
///
/// # Attributes
///
/// - `#[db(table = "name")]` - Table name (defaults to the snake_case struct name)
/// - `#[db(column = "name")]` - Map field to a different column name
/// - `#[db(skip)]` - Leave the field out of the column list
#[proc_macro_derive(Dataset, attributes(db))]
pub fn derive_dataset(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    dataset::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
