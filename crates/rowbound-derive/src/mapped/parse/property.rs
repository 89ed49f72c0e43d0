// SPDX-License-Identifier: MIT

//! Per-property analysis.
//!
//! This is the analyzer behind the derive macro: given one named field of a
//! mapped struct, it derives the property's semantic name, declared type
//! shape, collection flag, accessor, and (for mapped object types) the link
//! to the nested type's classifier.
//!
//! # Type resolution
//!
//! 1. The field type must be a path type; references, tuples, and other
//!    shapes are not mappable and fail immediately.
//! 2. The fixed scalar tags are closed: Rust's integer primitives, the two
//!    float primitives, `bool`, and `String`. `Option<T>` unwraps to `T`
//!    and marks the property nullable.
//! 3. Collections (`Vec`, `VecDeque`, `HashSet`, `BTreeSet`) resolve their
//!    element structurally from the type argument. A collection with no
//!    resolvable element requires an `item = "..."` annotation naming the
//!    element either as `Item[]` or as `Container<Item>`; the annotation
//!    also serves opaque collection aliases marked
//!    `#[property(collection)]`. Element paths are emitted as written and
//!    resolved by rustc in the deriving module's scope.
//! 4. Any other path type is either a nested mapped object (marked
//!    `#[property(nested)]`) or an opaque column type bound through
//!    `ColumnValue`.
//!
//! # Accessors
//!
//! The accessor defaults to the field itself; `getter = "name"` overrides
//! it with a zero-argument method returning the column value.

use darling::FromField;
use quote::ToTokens;
use syn::{Field, GenericArgument, Ident, Path, PathArguments, Type};

/// Container idents whose single type argument is the collection element.
const COLLECTION_MARKERS: &[&str] = &["Vec", "VecDeque", "HashSet", "BTreeSet"];

/// Field-level attribute carrier for darling.
#[derive(Debug, FromField)]
#[darling(attributes(property))]
struct PropertyAttrs {
    ident: Option<Ident>,
    ty: Type,

    /// The field's type is itself a mapped type.
    #[darling(default)]
    nested: bool,

    /// Treat an opaque alias as a collection; requires `item`.
    #[darling(default)]
    collection: bool,

    /// Element annotation for collections whose element is not
    /// structurally resolvable: `"Item[]"` or `"Container<Item>"`.
    #[darling(default)]
    item: Option<String>,

    /// Accessor override: a zero-argument method returning the column
    /// value.
    #[darling(default)]
    getter: Option<String>,
}

/// One of the four fixed scalar tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarTag {
    Integer,
    Float,
    Text,
    Boolean,
}

impl ScalarTag {
    /// Matching `TypeTag` variant name in the runtime crate.
    pub fn variant(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Text => "Text",
            Self::Boolean => "Boolean",
        }
    }
}

/// Resolved shape of a property's type, array marker stripped.
#[derive(Debug, Clone)]
pub enum ElementShape {
    /// One of the fixed scalar tags.
    Scalar(ScalarTag),
    /// A non-scalar column type bound through `ColumnValue`; carries the
    /// type as written.
    Opaque(String),
    /// A mapped object type; links the nested classifier.
    Object {
        /// Path emitted into generated code, resolved by rustc.
        path: Path,
        /// The path as written, for the declared-type tag.
        written: String,
    },
}

/// Shape of the whole property.
#[derive(Debug, Clone)]
pub enum PropertyShape {
    /// Single value, one column.
    Single(ElementShape),
    /// Collection; metadata-only, no column of its own.
    Collection(ElementShape),
}

/// Analyzed definition of one property.
#[derive(Debug)]
pub struct PropertyDef {
    ident: Ident,
    shape: PropertyShape,
    nullable: bool,
    getter: Option<Ident>,
}

impl PropertyDef {
    /// Analyze one named field.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        Self::analyze(PropertyAttrs::from_field(field)?)
    }

    fn analyze(attrs: PropertyAttrs) -> darling::Result<Self> {
        let ident = attrs.ident.clone().expect("named field required");
        let (ty, nullable) = unwrap_option(&attrs.ty);

        let getter = match &attrs.getter {
            None => None,
            Some(raw) => Some(
                syn::parse_str::<Ident>(raw.trim())
                    .map_err(|_| errors::no_getter(&ident))?,
            ),
        };

        let shape = if let Some(item) = &attrs.item {
            PropertyShape::Collection(parse_item_annotation(&ident, item, attrs.nested)?)
        } else if let Some(element) = collection_element(ty) {
            match element {
                Some(element_ty) => {
                    PropertyShape::Collection(element_shape(&ident, element_ty, attrs.nested)?)
                }
                None => return Err(errors::missing_item_annotation(&ident)),
            }
        } else if attrs.collection {
            return Err(errors::missing_item_annotation(&ident));
        } else {
            PropertyShape::Single(element_shape(&ident, ty, attrs.nested)?)
        };

        Ok(Self {
            ident,
            shape,
            nullable,
            getter,
        })
    }

    /// Property name; also the column name when persistable.
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Property name as a string.
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Resolved shape.
    pub fn shape(&self) -> &PropertyShape {
        &self.shape
    }

    /// Whether the property is a collection.
    pub fn is_collection(&self) -> bool {
        matches!(self.shape, PropertyShape::Collection(_))
    }

    /// Whether the property maps to a column of the owning table.
    pub fn is_persistable(&self) -> bool {
        !self.is_collection()
    }

    /// Whether the field was declared `Option<T>`.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Accessor override, when one was given.
    pub fn getter(&self) -> Option<&Ident> {
        self.getter.as_ref()
    }
}

/// Strip one level of `Option<T>`.
fn unwrap_option(ty: &Type) -> (&Type, bool) {
    if let Type::Path(type_path) = ty
        && type_path.qself.is_none()
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == "Option"
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner)) = args.args.first()
    {
        return (inner, true);
    }
    (ty, false)
}

/// Detect a collection type.
///
/// `None` means not a collection; `Some(None)` a collection marker with no
/// resolvable element; `Some(Some(ty))` the element type.
fn collection_element(ty: &Type) -> Option<Option<&Type>> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if !COLLECTION_MARKERS
        .iter()
        .any(|marker| segment.ident == marker)
    {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => Some(args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        })),
        _ => Some(None),
    }
}

/// Resolve a single (non-collection) type into an element shape.
fn element_shape(property: &Ident, ty: &Type, nested: bool) -> darling::Result<ElementShape> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            if let Some(tag) = scalar_tag(&type_path.path) {
                Ok(ElementShape::Scalar(tag))
            } else if nested {
                Ok(ElementShape::Object {
                    path: type_path.path.clone(),
                    written: compact(ty.to_token_stream()),
                })
            } else {
                Ok(ElementShape::Opaque(compact(ty.to_token_stream())))
            }
        }
        _ => Err(errors::must_have_a_type(property)),
    }
}

/// Parse an `item = "..."` annotation into the element shape.
///
/// Accepts `Item[]` (explicit array marker) and `Container<Item>`
/// (angle-bracket generic form); anything else is rejected. A leading `::`
/// or `crate::` path segment short-circuits resolution; bare names are
/// resolved by rustc in the deriving module's scope.
fn parse_item_annotation(
    property: &Ident,
    annotation: &str,
    nested: bool,
) -> darling::Result<ElementShape> {
    let trimmed = annotation.trim();
    let path: Path = if let Some(stripped) = trimmed.strip_suffix("[]") {
        syn::parse_str(stripped.trim()).map_err(|_| errors::bad_item_annotation(property))?
    } else if trimmed.contains('<') {
        let container: Type =
            syn::parse_str(trimmed).map_err(|_| errors::bad_item_annotation(property))?;
        generic_element(&container).ok_or_else(|| errors::bad_item_annotation(property))?
    } else {
        return Err(errors::bad_item_annotation(property));
    };

    if let Some(tag) = scalar_tag(&path) {
        Ok(ElementShape::Scalar(tag))
    } else if nested {
        Ok(ElementShape::Object {
            written: compact(path.to_token_stream()),
            path,
        })
    } else {
        Ok(ElementShape::Opaque(compact(path.to_token_stream())))
    }
}

/// Single type argument of a generic container annotation.
fn generic_element(container: &Type) -> Option<Path> {
    let Type::Path(type_path) = container else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(Type::Path(inner)) => Some(inner.path.clone()),
        _ => None,
    })
}

/// Match one of the fixed scalar tags.
fn scalar_tag(path: &Path) -> Option<ScalarTag> {
    let segment = path.segments.last()?;
    if path.segments.len() != 1 || !segment.arguments.is_empty() {
        return None;
    }
    let name = segment.ident.to_string();
    match name.as_str() {
        "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" => Some(ScalarTag::Integer),
        "f32" | "f64" => Some(ScalarTag::Float),
        "String" => Some(ScalarTag::Text),
        "bool" => Some(ScalarTag::Boolean),
        _ => None,
    }
}

/// Token text without spaces, for declared-type tags.
fn compact(tokens: proc_macro2::TokenStream) -> String {
    tokens.to_string().replace(' ', "")
}

mod errors {
    use syn::Ident;

    pub fn must_have_a_type(property: &Ident) -> darling::Error {
        darling::Error::custom(format!("property `{property}` must have a mappable type"))
            .with_span(property)
    }

    pub fn missing_item_annotation(property: &Ident) -> darling::Error {
        darling::Error::custom(format!(
            "collection property `{property}` must have an item annotation"
        ))
        .with_span(property)
    }

    pub fn bad_item_annotation(property: &Ident) -> darling::Error {
        darling::Error::custom(format!(
            "item annotation for property `{property}` must name an item type, as `Item[]` or `Container<Item>`"
        ))
        .with_span(property)
    }

    pub fn no_getter(property: &Ident) -> darling::Error {
        darling::Error::custom(format!(
            "getter for property `{property}` must name a zero-argument method"
        ))
        .with_span(property)
    }
}
