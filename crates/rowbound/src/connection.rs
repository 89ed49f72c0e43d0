// SPDX-License-Identifier: MIT

//! The statement-execution boundary.
//!
//! The repository engine owns no SQL driver. It delegates every statement to
//! a [`Connection`] implementation and forwards that implementation's error
//! type unmodified. Drivers are expected to be synchronous; `select` exists
//! so a driver can build criteria-based SELECTs in its own dialect.

use crate::query::{Criteria, Order};
use crate::row::{Bindings, Row};

/// A finite, forward-only result set.
///
/// Rows are yielded in result-set order and are expected to be produced
/// lazily by the driver; the engine pulls one row at a time.
pub type Rows = Box<dyn Iterator<Item = Row>>;

/// External SQL execution collaborator.
pub trait Connection {
    /// Driver failure type, surfaced by the repository without wrapping.
    type Error: std::error::Error + 'static;

    /// Execute a parameterized statement template with named bindings
    /// (`:name` placeholders) and return its result rows.
    fn execute(&self, statement: &str, bindings: &Bindings) -> Result<Rows, Self::Error>;

    /// Fetch rows from `table` matching an equality conjunction, ordered
    /// per `order`, bounded by `limit` and `offset`.
    fn select(
        &self,
        table: &str,
        criteria: &Criteria,
        order: &Order,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Rows, Self::Error>;
}

impl<C: Connection + ?Sized> Connection for &C {
    type Error = C::Error;

    fn execute(&self, statement: &str, bindings: &Bindings) -> Result<Rows, Self::Error> {
        (**self).execute(statement, bindings)
    }

    fn select(
        &self,
        table: &str,
        criteria: &Criteria,
        order: &Order,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Rows, Self::Error> {
        (**self).select(table, criteria, order, limit, offset)
    }
}
