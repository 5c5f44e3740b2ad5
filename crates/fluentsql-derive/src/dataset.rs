//! Dataset derive macro implementation

use std::collections::HashSet;

use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Result};

use crate::sql_ident::{parse_sql_ident, parse_table_name};

/// Parsed contents of one `#[db(...)]` attribute.
#[derive(Default)]
struct DbAttr {
    table: Option<syn::LitStr>,
    column: Option<syn::LitStr>,
    skip: bool,
}

impl syn::parse::Parse for DbAttr {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut attr = DbAttr::default();

        while !input.is_empty() {
            let ident: syn::Ident = input.parse()?;
            if ident == "skip" {
                attr.skip = true;
            } else if ident == "table" || ident == "column" {
                let _: syn::Token![=] = input.parse()?;
                let value: syn::LitStr = input.parse()?;
                if ident == "table" {
                    attr.table = Some(value);
                } else {
                    attr.column = Some(value);
                }
            } else {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("unknown db attribute `{ident}` (expected table, column or skip)"),
                ));
            }

            if input.peek(syn::Token![,]) {
                let _: syn::Token![,] = input.parse()?;
            } else {
                break;
            }
        }

        Ok(attr)
    }
}

/// Merge every `#[db(...)]` attribute in `attrs`.
fn db_attrs(attrs: &[syn::Attribute]) -> Result<DbAttr> {
    let mut merged = DbAttr::default();
    for attr in attrs {
        if !attr.path().is_ident("db") {
            continue;
        }
        let parsed: DbAttr = attr.parse_args()?;
        merged.table = parsed.table.or(merged.table);
        merged.column = parsed.column.or(merged.column);
        merged.skip |= parsed.skip;
    }
    Ok(merged)
}

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Dataset can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Dataset can only be derived for structs",
            ));
        }
    };

    let container = db_attrs(&input.attrs)?;
    if let Some(column) = &container.column {
        return Err(syn::Error::new(
            column.span(),
            "`column` is a field attribute; use `table` on the struct",
        ));
    }
    let table_name = match &container.table {
        Some(lit) => parse_table_name(&lit.value(), lit.span())?,
        None => name.to_string().to_snake_case(),
    };

    let mut columns = Vec::new();
    let mut seen = HashSet::new();
    for field in fields {
        let attr = db_attrs(&field.attrs)?;
        if let Some(table) = &attr.table {
            return Err(syn::Error::new(table.span(), "`table` is a struct attribute"));
        }
        if attr.skip {
            continue;
        }

        let Some(ident) = &field.ident else {
            continue;
        };
        let column = match &attr.column {
            Some(lit) => parse_sql_ident(&lit.value(), lit.span(), "column")?,
            None => {
                let raw = ident.to_string();
                parse_sql_ident(raw.trim_start_matches("r#"), ident.span(), "column")?
            }
        };
        if !seen.insert(column.clone()) {
            return Err(syn::Error::new(
                field.span(),
                format!("duplicate column '{column}'"),
            ));
        }
        columns.push(column);
    }

    Ok(quote! {
        impl #impl_generics fluentsql::Dataset for #name #ty_generics #where_clause {
            const TABLE: &'static str = #table_name;
            const COLUMNS: &'static [&'static str] = &[#(#columns),*];
        }
    })
}
