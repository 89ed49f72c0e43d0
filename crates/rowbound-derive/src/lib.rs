//! # rowbound-derive
//!
//! Procedural macro deriving mapping metadata and persistence code from a
//! single struct definition.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rowbound_derive::Mapped;
//!
//! #[derive(Mapped)]
//! #[mapped(table = "invoices")]
//! pub struct Invoice {
//!     pub id: i64,
//!     pub amount: f64,
//!     pub reference: Option<String>,
//!
//!     #[property(nested)]
//!     pub customer: Customer,
//!
//!     #[property(item = "LineItem[]", nested)]
//!     pub lines: Lines,
//! }
//! ```
//!
//! Generates: an `impl rowbound::Mapped` (property table, memoized
//! classifier), an `InvoiceRepository<C>` implementing
//! `rowbound::Repository`, and for single-property wrapper types a
//! `rowbound::ColumnValue` impl.

mod mapped;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for mapped domain types.
#[proc_macro_derive(Mapped, attributes(mapped, property))]
pub fn derive_mapped(input: TokenStream) -> TokenStream {
    mapped::derive(input)
}
