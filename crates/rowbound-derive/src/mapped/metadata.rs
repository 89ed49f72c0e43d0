//! `Mapped` implementation generation.
//!
//! Emits, per derived type:
//!
//! - `TYPE_PATH`, qualified with `module_path!()` at the derive site, so
//!   every mapped type carries its canonical namespace without any source
//!   scanning;
//! - one `static` property table in declaration order, built from `const`
//!   `PropertyDefinition` constructors;
//! - the memoized `classifier()`. The early `get` keeps recursive
//!   classification of nested types outside the `OnceLock` initializer, so
//!   cycles reach the classifier's own guard instead of deadlocking the
//!   lock.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::{ElementShape, MappedDef, PropertyDef, PropertyShape};

/// Generate the `impl rowbound::Mapped` block.
pub fn generate(def: &MappedDef) -> TokenStream {
    let name = def.name();
    let definitions: Vec<TokenStream> = def.properties.iter().map(property_definition).collect();

    quote! {
        impl rowbound::Mapped for #name {
            const TYPE_PATH: &'static str = concat!(module_path!(), "::", stringify!(#name));

            fn properties() -> &'static [rowbound::PropertyDefinition] {
                static PROPERTIES: &[rowbound::PropertyDefinition] = &[ #(#definitions),* ];
                PROPERTIES
            }

            fn classifier() -> &'static rowbound::TypeClassifier {
                static CLASSIFIER: ::std::sync::OnceLock<rowbound::TypeClassifier> =
                    ::std::sync::OnceLock::new();
                if let Some(classifier) = CLASSIFIER.get() {
                    return classifier;
                }
                let built = rowbound::TypeClassifier::classify(
                    <Self as rowbound::Mapped>::TYPE_PATH,
                    <Self as rowbound::Mapped>::properties(),
                );
                CLASSIFIER.get_or_init(move || built)
            }
        }
    }
}

/// One `PropertyDefinition` constructor expression.
fn property_definition(property: &PropertyDef) -> TokenStream {
    let name = property.name_str();
    let accessor = name.clone();

    let base = match property.shape() {
        PropertyShape::Single(ElementShape::Scalar(tag)) => {
            let variant = format_ident!("{}", tag.variant());
            quote! {
                rowbound::PropertyDefinition::scalar(
                    #name,
                    rowbound::TypeTag::#variant,
                    #accessor,
                )
            }
        }
        PropertyShape::Single(ElementShape::Opaque(written)) => quote! {
            rowbound::PropertyDefinition::opaque(#name, #written, #accessor)
        },
        PropertyShape::Single(ElementShape::Object { path, written }) => quote! {
            rowbound::PropertyDefinition::object(
                #name,
                #written,
                <#path as rowbound::Mapped>::classifier,
                #accessor,
            )
        },
        PropertyShape::Collection(ElementShape::Scalar(tag)) => {
            let variant = format_ident!("{}", tag.variant());
            quote! {
                rowbound::PropertyDefinition::collection(
                    #name,
                    rowbound::TypeTag::#variant,
                    #accessor,
                )
            }
        }
        PropertyShape::Collection(ElementShape::Opaque(written)) => quote! {
            rowbound::PropertyDefinition::collection(
                #name,
                rowbound::TypeTag::Object(#written),
                #accessor,
            )
        },
        PropertyShape::Collection(ElementShape::Object { path, written }) => quote! {
            rowbound::PropertyDefinition::object_collection(
                #name,
                #written,
                <#path as rowbound::Mapped>::classifier,
                #accessor,
            )
        },
    };

    let nullable = property
        .is_nullable()
        .then(|| quote! { .nullable() })
        .unwrap_or_default();
    let accessor_override = property
        .getter()
        .map(|getter| {
            let getter = getter.to_string();
            quote! { .with_accessor(#getter) }
        })
        .unwrap_or_default();

    quote! { #base #nullable #accessor_override }
}
