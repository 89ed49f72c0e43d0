// SPDX-License-Identifier: MIT

//! Per-property metadata.
//!
//! One [`PropertyDefinition`] exists per struct field of a mapped type, in
//! declaration order. The derive macro analyzes each field at expansion time
//! and emits one `static` table of definitions per type; everything here is
//! `const`-constructible for that reason.

use crate::meta::classifier::TypeClassifier;

/// Deferred handle to a mapped type's classifier.
///
/// Nested properties reference the nested type through its own `Mapped`
/// implementation rather than by value, which keeps the metadata tables
/// `static` and makes classification lazy and memoized per type.
pub type Classify = fn() -> &'static TypeClassifier;

/// Declared type tag of a property.
///
/// The four scalar tags are closed; everything else carries the type path
/// as written at the declaration site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// Integer scalar.
    Integer,
    /// Floating-point scalar.
    Float,
    /// Text scalar.
    Text,
    /// Boolean scalar.
    Boolean,
    /// A non-scalar type, named by its declared path.
    Object(&'static str),
}

impl TypeTag {
    /// Lower-case tag name, or the object path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Object(path) => path,
        }
    }

    /// Whether this is one of the four fixed scalar tags.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Object(_))
    }
}

/// Derived metadata for one property of a mapped type.
///
/// Immutable after construction; [`with_accessor`](Self::with_accessor) is
/// the copy operation used when an explicit getter overrides the
/// convention-derived accessor.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDefinition {
    name: &'static str,
    declared: TypeTag,
    is_array: bool,
    nullable: bool,
    accessor: &'static str,
    nested: Option<Classify>,
}

impl PropertyDefinition {
    /// Scalar property.
    pub const fn scalar(name: &'static str, declared: TypeTag, accessor: &'static str) -> Self {
        Self {
            name,
            declared,
            is_array: false,
            nullable: false,
            accessor,
            nested: None,
        }
    }

    /// Non-scalar column type that is not itself a mapped type; it binds
    /// through `ColumnValue` and carries no nested classifier.
    pub const fn opaque(
        name: &'static str,
        declared: &'static str,
        accessor: &'static str,
    ) -> Self {
        Self::scalar(name, TypeTag::Object(declared), accessor)
    }

    /// Collection of scalar or opaque elements.
    pub const fn collection(
        name: &'static str,
        element: TypeTag,
        accessor: &'static str,
    ) -> Self {
        Self {
            name,
            declared: element,
            is_array: true,
            nullable: false,
            accessor,
            nested: None,
        }
    }

    /// Property whose type is itself a mapped object.
    pub const fn object(
        name: &'static str,
        declared: &'static str,
        classify: Classify,
        accessor: &'static str,
    ) -> Self {
        Self {
            name,
            declared: TypeTag::Object(declared),
            is_array: false,
            nullable: false,
            accessor,
            nested: Some(classify),
        }
    }

    /// Collection of mapped objects.
    pub const fn object_collection(
        name: &'static str,
        declared: &'static str,
        classify: Classify,
        accessor: &'static str,
    ) -> Self {
        Self {
            name,
            declared: TypeTag::Object(declared),
            is_array: true,
            nullable: false,
            accessor,
            nested: Some(classify),
        }
    }

    /// Mark the property nullable (declared as `Option<T>`).
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Copy of this definition with a different accessor.
    #[must_use]
    pub const fn with_accessor(mut self, accessor: &'static str) -> Self {
        self.accessor = accessor;
        self
    }

    /// Property name; also the column name for persistable properties.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type tag. For collections this is the element tag.
    pub fn declared(&self) -> TypeTag {
        self.declared
    }

    /// Whether the property is a collection.
    pub fn is_array(&self) -> bool {
        self.is_array
    }

    /// Whether the property was declared `Option<T>`.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Accessor used by generated persistence code: the field name, or an
    /// explicit getter override.
    pub fn accessor(&self) -> &'static str {
        self.accessor
    }

    /// Classifier of the nested mapped type, if the property (array marker
    /// stripped) denotes one. Resolving this may classify further types.
    pub fn nested(&self) -> Option<&'static TypeClassifier> {
        self.nested.map(|classify| classify())
    }

    /// Whether the nested type is an entity. False for properties without a
    /// nested type.
    pub fn is_entity(&self) -> bool {
        self.nested().is_some_and(TypeClassifier::is_entity)
    }

    /// Whether the nested type is a value object. False for properties
    /// without a nested type.
    pub fn is_value_object(&self) -> bool {
        self.nested().is_some_and(TypeClassifier::is_value_object)
    }

    /// Identity column tag of the nested type, or the string-like default
    /// for properties without one.
    pub fn id_type(&self) -> TypeTag {
        self.nested()
            .map_or(TypeTag::Text, TypeClassifier::id_type)
    }
}
