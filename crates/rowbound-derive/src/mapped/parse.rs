//! Declaration analysis for the Mapped derive macro.
//!
//! Type-level attributes (`#[mapped(table = "...", repository)]`) are parsed
//! with darling's `FromDeriveInput`; per-field analysis turns each named
//! field into a [`PropertyDef`], the macro-side precursor of a runtime
//! `PropertyDefinition`.
//!
//! All metadata-derivation failures are reported here, at expansion time,
//! as span-carrying darling errors:
//!
//! - a field whose type shape cannot be mapped,
//! - a collection field with no resolvable element and no `item` annotation,
//! - an `item` annotation that does not encode an element type,
//! - a `getter` override that does not name a method.
//!
//! Errors across fields are accumulated so a single compile run reports
//! every offending property.

mod property;
mod type_attrs;

pub use property::{ElementShape, PropertyDef, PropertyShape, ScalarTag};
pub use type_attrs::MappedDef;
