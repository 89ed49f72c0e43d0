//! # rowbound
//!
//! Declaration-driven object ⇄ row mapping.
//!
//! A mapped type declares nothing but its own fields; the companion derive
//! macro (`rowbound-derive`) turns the declaration into typed metadata
//! (property list, structural entity/value-object classification) and a
//! repository implementation, and this crate supplies the runtime those
//! implementations plug into: the scalar [`Value`] model, the
//! [`Connection`] boundary, and the generic CRUD [`Repository`] engine.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rowbound::{Mapped as _, Repository as _};
//! use rowbound_derive::Mapped;
//!
//! #[derive(Debug, Clone, PartialEq, Mapped)]
//! #[mapped(table = "invoices")]
//! pub struct Invoice {
//!     pub id: i64,
//!     pub amount: f64,
//!     #[property(nested)]
//!     pub customer: Customer,
//! }
//!
//! #[derive(Debug, Clone, PartialEq, Mapped)]
//! pub struct Customer {
//!     pub name: String,
//! }
//!
//! let repository = InvoiceRepository::new(connection);
//! repository.insert(&[invoice])?;
//! let found = repository.load_by_id(7i64)?;
//! ```
//!
//! Generates: an `impl Mapped` carrying one `PropertyDefinition` per field
//! and a memoized `TypeClassifier`, an `InvoiceRepository<C>` implementing
//! [`Repository`], and a `ColumnValue` impl for single-property wrappers
//! such as `Customer`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod connection;
pub mod error;
pub mod meta;
pub mod prelude;
pub mod query;
pub mod repository;
pub mod row;
pub mod value;

pub use connection::{Connection, Rows};
pub use error::{RepositoryError, RowError, ValueError};
pub use meta::{
    Classify, IDENTITY_COLUMN, Mapped, PropertyDefinition, TypeClassifier, TypeKind, TypeTag,
};
pub use query::{Criteria, Direction, Order};
pub use repository::{Cursor, RepoResult, Repository};
pub use row::{Bindings, Row};
pub use value::{ColumnValue, Value};
