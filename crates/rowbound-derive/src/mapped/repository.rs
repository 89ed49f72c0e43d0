//! Repository implementation generator.
//!
//! Generates `{Name}Repository<C>` and its `impl rowbound::Repository` for
//! every mapped type that requested a table. The SQL fragments (column
//! list, placeholder list, assignment list) are precomputed here, at
//! expansion time; the runtime engine treats them as opaque capabilities.
//!
//! # Generated Implementation
//!
//! ```rust,ignore
//! pub struct InvoiceRepository<C> { connection: C }
//!
//! impl<C: rowbound::Connection> rowbound::Repository for InvoiceRepository<C> {
//!     type Entity = Invoice;
//!     type Conn = C;
//!
//!     fn table(&self) -> &'static str { "invoices" }
//!     fn columns(&self) -> &'static str { "id, amount, customer" }
//!     fn placeholders(&self) -> &'static str { ":id, :amount, :customer" }
//!     fn assignments(&self) -> &'static str { "amount = :amount, customer = :customer" }
//!     fn to_row(&self, entity: &Invoice) -> rowbound::Row { /* per property */ }
//!     fn from_row(&self, row: rowbound::Row) -> Result<Invoice, rowbound::RowError> { /* per property */ }
//! }
//! ```
//!
//! Collection properties carry no column: `to_row` skips them and
//! `from_row` hydrates them to `Default::default()`; related rows are the
//! calling coordinator's concern.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{MappedDef, PropertyDef};
use crate::utils::sql;

/// Generate the repository struct and trait implementation.
///
/// Returns an empty `TokenStream` for value objects (no table requested).
pub fn generate(def: &MappedDef) -> TokenStream {
    let Some(table) = def.table() else {
        return TokenStream::new();
    };

    let vis = &def.vis;
    let entity_name = def.name();
    let repository_name = def.ident_with("", "Repository");
    let persistable = def.persistable_properties();

    let columns = sql::join_columns(&persistable);
    let placeholders = sql::placeholders(&persistable);
    let assignments = sql::assignments(&persistable);
    let column_count = persistable.len();

    let pushes: Vec<TokenStream> = persistable.iter().copied().map(push).collect();
    let rebuilds: Vec<TokenStream> = def.properties.iter().map(rebuild).collect();

    let doc = format!("Generated repository for [`{entity_name}`] over table `{table}`.");

    quote! {
        #[doc = #doc]
        #[derive(Debug)]
        #vis struct #repository_name<C> {
            connection: C,
        }

        impl<C: rowbound::Connection> #repository_name<C> {
            /// Repository delegating statement execution to `connection`.
            #vis fn new(connection: C) -> Self {
                Self { connection }
            }
        }

        impl<C: rowbound::Connection> rowbound::Repository for #repository_name<C> {
            type Entity = #entity_name;
            type Conn = C;

            fn connection(&self) -> &C {
                &self.connection
            }

            fn table(&self) -> &'static str {
                #table
            }

            fn columns(&self) -> &'static str {
                #columns
            }

            fn placeholders(&self) -> &'static str {
                #placeholders
            }

            fn assignments(&self) -> &'static str {
                #assignments
            }

            fn to_row(&self, entity: &#entity_name) -> rowbound::Row {
                let mut row = rowbound::Row::with_capacity(#column_count);
                #(#pushes)*
                row
            }

            fn from_row(&self, row: rowbound::Row) -> Result<#entity_name, rowbound::RowError> {
                Ok(#entity_name {
                    #(#rebuilds),*
                })
            }
        }
    }
}

/// `to_row` statement for one persistable property.
fn push(property: &PropertyDef) -> TokenStream {
    let name = property.name_str();
    let field = property.name();
    match property.getter() {
        Some(getter) => quote! {
            let value = entity.#getter();
            row.push(#name, rowbound::ColumnValue::to_value(&value));
        },
        None => quote! {
            row.push(#name, rowbound::ColumnValue::to_value(&entity.#field));
        },
    }
}

/// `from_row` field initializer for one property.
fn rebuild(property: &PropertyDef) -> TokenStream {
    let name = property.name_str();
    let field = property.name();
    if property.is_persistable() {
        quote! { #field: row.decode(#name)? }
    } else {
        quote! { #field: ::core::default::Default::default() }
    }
}
