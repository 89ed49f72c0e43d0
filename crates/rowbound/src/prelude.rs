// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rowbound::prelude::*;
//! ```

pub use crate::{
    Bindings, ColumnValue, Connection, Criteria, Cursor, Direction, Mapped, Order,
    PropertyDefinition, Repository, RepositoryError, Row, RowError, TypeClassifier, TypeKind,
    TypeTag, Value, ValueError,
};
