//! `ColumnValue` generation for single-value wrappers.
//!
//! A mapped type with exactly one persistable property is a wrapper around
//! one column value (an identifier newtype, a quantity, ...). Such types
//! can themselves appear as columns of an embedding entity, so the derive
//! emits a `ColumnValue` impl delegating to the inner value. Multi-property
//! mapped types used as columns need a hand-written impl choosing their
//! column representation.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::MappedDef;

/// Generate the delegating `ColumnValue` impl, when the type qualifies.
pub fn generate(def: &MappedDef) -> TokenStream {
    let persistable = def.persistable_properties();
    if def.properties.len() != 1 || persistable.len() != 1 {
        return TokenStream::new();
    }

    let name = def.name();
    let property = persistable[0];
    let field = property.name();

    let read = match property.getter() {
        Some(getter) => quote! {
            let value = self.#getter();
            rowbound::ColumnValue::to_value(&value)
        },
        None => quote! {
            rowbound::ColumnValue::to_value(&self.#field)
        },
    };

    quote! {
        impl rowbound::ColumnValue for #name {
            fn to_value(&self) -> rowbound::Value {
                #read
            }

            fn from_value(value: &rowbound::Value) -> Result<Self, rowbound::ValueError> {
                Ok(Self {
                    #field: rowbound::ColumnValue::from_value(value)?,
                })
            }
        }
    }
}
