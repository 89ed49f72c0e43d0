//! Mapped derive macro implementation.
//!
//! This module contains all analysis and code generation for
//! `#[derive(Mapped)]`.

mod column_value;
mod metadata;
pub(crate) mod parse;
mod repository;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::MappedDef;

/// Main entry point for the Mapped derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match MappedDef::from_derive_input(&input) {
        Ok(def) => generate(&def),
        Err(err) => err.write_errors().into(),
    }
}

/// Generate all code for the mapped type.
fn generate(def: &MappedDef) -> TokenStream {
    let metadata_tokens = metadata::generate(def);
    let repository_tokens = repository::generate(def);
    let column_value_tokens = column_value::generate(def);

    let expanded = quote! {
        #metadata_tokens
        #repository_tokens
        #column_value_tokens
    };

    expanded.into()
}
