// SPDX-License-Identifier: MIT

//! Generic CRUD engine.
//!
//! [`Repository`] is implemented once per mapped entity type, normally by
//! the derive macro. The implementation supplies the metadata-derived
//! capabilities (table name, column list, placeholder list, assignment
//! list, and the two row ⇄ entity conversions); the provided methods are
//! the engine and treat those capabilities as abstract.
//!
//! Every operation delegates statement execution to the [`Connection`] and
//! surfaces its failures unmodified. Absence of a matching row is a normal
//! `None`, never an error. There is no batching, no implicit transaction,
//! and no retry.

use tracing::debug;

use crate::connection::{Connection, Rows};
use crate::error::{RepositoryError, RowError};
use crate::meta::IDENTITY_COLUMN;
use crate::query::{Criteria, Order};
use crate::row::{Bindings, Row};
use crate::value::Value;

/// Build the INSERT statement for a table from its derived fragments.
pub fn insert_statement(table: &str, columns: &str, placeholders: &str) -> String {
    format!("INSERT INTO {table} ({columns}) VALUES ({placeholders})")
}

/// Build the UPDATE statement for a table from its assignment list.
///
/// The identity binding is the literal `id` placeholder, matching the
/// structural convention that entities carry a property named `id`.
pub fn update_statement(table: &str, assignments: &str) -> String {
    format!("UPDATE {table} SET {assignments} WHERE id = :id")
}

/// Build the DELETE statement for a table, keyed by the identity column.
pub fn delete_statement(table: &str) -> String {
    format!("DELETE FROM {table} WHERE id = :id")
}

/// Result type of repository operations over connection `C`.
pub type RepoResult<T, C> = Result<T, RepositoryError<<C as Connection>::Error>>;

/// Abstract CRUD contract for one mapped entity type.
pub trait Repository {
    /// The mapped entity type.
    type Entity;
    /// The statement-execution collaborator.
    type Conn: Connection;

    /// The connection statements are delegated to.
    fn connection(&self) -> &Self::Conn;

    /// Table name.
    fn table(&self) -> &'static str;

    /// Comma-separated column list, in property order.
    fn columns(&self) -> &'static str;

    /// Comma-separated named placeholder list, parallel to
    /// [`columns`](Self::columns).
    fn placeholders(&self) -> &'static str;

    /// `column = :column` assignment list for UPDATE, excluding the
    /// identity column.
    fn assignments(&self) -> &'static str;

    /// Convert an entity into its row of named column values.
    fn to_row(&self, entity: &Self::Entity) -> Row;

    /// Rebuild an entity from a result row.
    fn from_row(&self, row: Row) -> Result<Self::Entity, RowError>;

    /// Fetch the entity whose identity column equals `id`.
    fn load_by_id<V: Into<Value>>(&self, id: V) -> RepoResult<Option<Self::Entity>, Self::Conn> {
        self.load_by(Criteria::equals(IDENTITY_COLUMN, id), Order::none())
    }

    /// Fetch the first entity matching an equality conjunction, honoring
    /// the given ordering.
    fn load_by(
        &self,
        criteria: Criteria,
        order: Order,
    ) -> RepoResult<Option<Self::Entity>, Self::Conn> {
        let mut rows = self
            .connection()
            .select(self.table(), &criteria, &order, Some(1), None)
            .map_err(RepositoryError::Connection)?;
        match rows.next() {
            Some(row) => Ok(Some(self.from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Execute an arbitrary parameterized statement and map its first row.
    /// Returns `None` when the result set is empty.
    fn load_by_query(
        &self,
        statement: &str,
        bindings: &Bindings,
    ) -> RepoResult<Option<Self::Entity>, Self::Conn> {
        let mut rows = self
            .connection()
            .execute(statement, bindings)
            .map_err(RepositoryError::Connection)?;
        match rows.next() {
            Some(row) => Ok(Some(self.from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Whether at least one row matches the criteria. Bounded fetch of one
    /// row; no entity conversion takes place.
    fn exists(&self, criteria: Criteria) -> RepoResult<bool, Self::Conn> {
        let mut rows = self
            .connection()
            .select(self.table(), &criteria, &Order::none(), Some(1), None)
            .map_err(RepositoryError::Connection)?;
        Ok(rows.next().is_some())
    }

    /// Lazily map the rows matching `criteria` into entities.
    ///
    /// The returned [`Cursor`] converts one row per `next()` call; dropping
    /// it (or calling [`Cursor::close`]) releases the underlying rows.
    /// Every call produces a fresh, restartable sequence.
    fn select(
        &self,
        criteria: Criteria,
        order: Order,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> RepoResult<Cursor<'_, Self>, Self::Conn> {
        debug!(table = self.table(), "select");
        let rows = self
            .connection()
            .select(self.table(), &criteria, &order, limit, offset)
            .map_err(RepositoryError::Connection)?;
        Ok(Cursor::new(self, rows))
    }

    /// Same lazy contract as [`select`](Self::select), driven by an
    /// arbitrary parameterized statement.
    fn select_by_query(
        &self,
        statement: &str,
        bindings: &Bindings,
    ) -> RepoResult<Cursor<'_, Self>, Self::Conn> {
        debug!(table = self.table(), statement, "select by query");
        let rows = self
            .connection()
            .execute(statement, bindings)
            .map_err(RepositoryError::Connection)?;
        Ok(Cursor::new(self, rows))
    }

    /// Insert each entity with one parameterized INSERT, in iteration
    /// order.
    fn insert<'a, I>(&self, entities: I) -> RepoResult<(), Self::Conn>
    where
        I: IntoIterator<Item = &'a Self::Entity>,
        Self::Entity: 'a,
    {
        let statement = insert_statement(self.table(), self.columns(), self.placeholders());
        for entity in entities {
            let bindings = Bindings::from(self.to_row(entity));
            debug!(table = self.table(), "insert");
            self.connection()
                .execute(&statement, &bindings)
                .map_err(RepositoryError::Connection)?;
        }
        Ok(())
    }

    /// Update each entity with one parameterized UPDATE keyed by the
    /// identity column, in iteration order.
    fn update<'a, I>(&self, entities: I) -> RepoResult<(), Self::Conn>
    where
        I: IntoIterator<Item = &'a Self::Entity>,
        Self::Entity: 'a,
    {
        let statement = update_statement(self.table(), self.assignments());
        for entity in entities {
            let row = self.to_row(entity);
            if row.get(IDENTITY_COLUMN).is_none() {
                return Err(RowError::MissingColumn(IDENTITY_COLUMN.to_string()).into());
            }
            let bindings = Bindings::from(row);
            debug!(table = self.table(), "update");
            self.connection()
                .execute(&statement, &bindings)
                .map_err(RepositoryError::Connection)?;
        }
        Ok(())
    }

    /// Delete each entity with one parameterized DELETE keyed by the
    /// identity column, in iteration order.
    fn delete<'a, I>(&self, entities: I) -> RepoResult<(), Self::Conn>
    where
        I: IntoIterator<Item = &'a Self::Entity>,
        Self::Entity: 'a,
    {
        let statement = delete_statement(self.table());
        for entity in entities {
            let row = self.to_row(entity);
            let id = row
                .get(IDENTITY_COLUMN)
                .cloned()
                .ok_or_else(|| RowError::MissingColumn(IDENTITY_COLUMN.to_string()))?;
            let bindings = Bindings::new().bind(IDENTITY_COLUMN, id);
            debug!(table = self.table(), "delete");
            self.connection()
                .execute(&statement, &bindings)
                .map_err(RepositoryError::Connection)?;
        }
        Ok(())
    }
}

/// Lazy, forward-only sequence of mapped entities over a live result set.
///
/// Each `next()` pulls one row from the connection's iterator and converts
/// it; abandoning the cursor is cancellation. Dropping the cursor releases
/// the underlying rows; [`close`](Self::close) does the same explicitly.
pub struct Cursor<'a, R: Repository + ?Sized> {
    repository: &'a R,
    rows: Rows,
}

impl<'a, R: Repository + ?Sized> Cursor<'a, R> {
    fn new(repository: &'a R, rows: Rows) -> Self {
        Self { repository, rows }
    }

    /// Release the underlying result set without consuming the remainder.
    pub fn close(self) {}
}

impl<R: Repository + ?Sized> Iterator for Cursor<'_, R> {
    type Item = Result<R::Entity, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(self.repository.from_row(row))
    }
}
