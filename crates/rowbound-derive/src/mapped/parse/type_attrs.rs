// SPDX-License-Identifier: MIT

//! Type-level attribute parsing.
//!
//! This module parses `#[mapped(...)]` using darling and provides the main
//! [`MappedDef`] structure used by all code generators.

use convert_case::{Case, Casing};
use darling::FromDeriveInput;
use proc_macro2::Span;
use syn::{DeriveInput, Ident, Visibility};

use super::property::PropertyDef;

/// Type-level attributes parsed from `#[mapped(...)]`.
///
/// Internal darling carrier; the public shape is [`MappedDef`], which
/// combines these attributes with the analyzed properties.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(mapped), supports(struct_named))]
struct MappedAttrs {
    /// Struct identifier (e.g. `Invoice`).
    ident: Ident,

    /// Struct visibility, propagated to generated types.
    vis: Visibility,

    /// Database table name. Absent for value objects, which get metadata
    /// but no repository.
    #[darling(default)]
    table: Option<String>,

    /// Shorthand requesting a repository with the conventional table name
    /// (snake case of the type name, pluralized).
    #[darling(default)]
    repository: bool,
}

/// Complete parsed definition of one mapped type.
///
/// This is the data structure passed to all code generators.
#[derive(Debug)]
pub struct MappedDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct visibility.
    pub vis: Visibility,

    /// Resolved table name; `None` means no repository is generated.
    table: Option<String>,

    /// Analyzed properties, in declaration order.
    pub properties: Vec<PropertyDef>,
}

impl MappedDef {
    /// Parse a mapped-type definition from syn's `DeriveInput`.
    ///
    /// Property analysis errors are accumulated across fields so one
    /// compile run reports every offending property.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = MappedAttrs::from_derive_input(input)?;

        let named = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => &named.named,
                _ => {
                    return Err(darling::Error::custom("Mapped requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(darling::Error::custom("Mapped can only be derived for structs")
                    .with_span(&input.ident));
            }
        };

        let mut errors = darling::Error::accumulator();
        let properties: Vec<PropertyDef> = named
            .iter()
            .filter_map(|field| errors.handle(PropertyDef::from_field(field)))
            .collect();
        errors.finish()?;

        let table = attrs.table.or_else(|| {
            attrs
                .repository
                .then(|| format!("{}s", attrs.ident.to_string().to_case(Case::Snake)))
        });

        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            table,
            properties,
        })
    }

    /// Get the type name as an identifier.
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Get the type name as a string.
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Resolved table name, when a repository was requested.
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Properties that map to columns of the owning table. Collections are
    /// graph topology only and carry no column.
    pub fn persistable_properties(&self) -> Vec<&PropertyDef> {
        self.properties
            .iter()
            .filter(|property| property.is_persistable())
            .collect()
    }

    /// Create a new identifier with prefix and/or suffix, following the
    /// generated-type naming convention (`InvoiceRepository`, ...).
    pub fn ident_with(&self, prefix: &str, suffix: &str) -> Ident {
        Ident::new(
            &format!("{}{}{}", prefix, self.name_str(), suffix),
            Span::call_site(),
        )
    }
}
