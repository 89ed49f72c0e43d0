// SPDX-License-Identifier: MIT

//! The derived metadata model.
//!
//! For every mapped type the derive macro emits a [`Mapped`] implementation:
//! a canonical type path, one `static` [`PropertyDefinition`] per field in
//! declaration order, and a lazily built, memoized [`TypeClassifier`]. This
//! metadata is the source of truth for column names, placeholder lists, and
//! row ⇄ entity conversion used by the repository engine.

mod classifier;
mod property;

pub use classifier::{IDENTITY_COLUMN, TypeClassifier, TypeKind};
pub use property::{Classify, PropertyDefinition, TypeTag};

/// A type with derived mapping metadata.
///
/// Implemented by `#[derive(Mapped)]`; not intended for manual
/// implementation, though nothing prevents one.
pub trait Mapped {
    /// Canonical path of the type, qualified with its defining module.
    const TYPE_PATH: &'static str;

    /// Property metadata, ordered exactly as the struct declares its
    /// fields. This order determines column order, placeholder order, and
    /// row ⇄ entity correspondence.
    fn properties() -> &'static [PropertyDefinition];

    /// Structural classification of the type, built on first use and
    /// memoized for the process lifetime.
    fn classifier() -> &'static TypeClassifier;
}
