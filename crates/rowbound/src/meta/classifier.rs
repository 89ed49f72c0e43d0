// SPDX-License-Identifier: MIT

//! Structural classification of mapped types.
//!
//! A type is an entity if and only if its property list carries a property
//! literally named [`IDENTITY_COLUMN`]; nothing is ever declared. Value
//! objects borrow identity semantics from whichever entity embeds them and
//! fall back to a string-like identity tag.
//!
//! Classification is recursive over the nested-property graph and memoized
//! per type (each `Mapped` implementation holds its classifier in a
//! `OnceLock`, first classification wins). A thread-local in-progress set
//! detects cycles in the mapped-type graph and fails fast; a cyclic mapping
//! is a programming-time defect, so the failure is a panic that names the
//! cycle rather than a recoverable error.

use std::cell::RefCell;

use crate::meta::property::{PropertyDefinition, TypeTag};

/// Name of the identity-bearing property under the surrounding convention.
pub const IDENTITY_COLUMN: &str = "id";

/// Structural kind of a mapped type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Carries its own identity column; independently loadable.
    Entity,
    /// No identity of its own; always embedded in an entity's graph.
    ValueObject,
}

/// Derived classification of one mapped type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeClassifier {
    type_path: &'static str,
    kind: TypeKind,
    id_type: TypeTag,
}

thread_local! {
    static IN_PROGRESS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

impl TypeClassifier {
    /// Classify a type from its canonical path and property list.
    ///
    /// Resolves every nested classifier reachable from `properties`, so a
    /// first classification validates the whole reachable subgraph.
    ///
    /// # Panics
    ///
    /// Panics when the nested-property graph is cyclic.
    pub fn classify(type_path: &'static str, properties: &'static [PropertyDefinition]) -> Self {
        IN_PROGRESS.with(|guard| {
            let mut stack = guard.borrow_mut();
            if stack.contains(&type_path) {
                panic!(
                    "cycle in mapped type graph: {} -> {type_path}",
                    stack.join(" -> "),
                );
            }
            stack.push(type_path);
        });

        for property in properties {
            // Touching the classifier is enough; memoization keeps revisits
            // of shared types cheap.
            let _ = property.nested();
        }

        let identity = properties
            .iter()
            .find(|property| property.name() == IDENTITY_COLUMN);
        let classifier = match identity {
            Some(property) => Self {
                type_path,
                kind: TypeKind::Entity,
                id_type: property.declared(),
            },
            None => Self {
                type_path,
                kind: TypeKind::ValueObject,
                id_type: TypeTag::Text,
            },
        };

        IN_PROGRESS.with(|guard| {
            guard.borrow_mut().pop();
        });
        classifier
    }

    /// Canonical path of the classified type.
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Structural kind.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Whether the type carries its own identity column.
    pub fn is_entity(&self) -> bool {
        self.kind == TypeKind::Entity
    }

    /// Whether the type borrows identity from its embedding entity.
    pub fn is_value_object(&self) -> bool {
        self.kind == TypeKind::ValueObject
    }

    /// Tag of the identity column, or the string-like default for value
    /// objects.
    pub fn id_type(&self) -> TypeTag {
        self.id_type
    }
}
