//! In-memory `Connection` fake shared by the integration tests.
//!
//! Tables are plain row vectors. `select` implements the criteria/order/
//! limit/offset contract directly; `execute` records every statement and
//! understands just enough statement shape (leading INSERT/UPDATE/DELETE/
//! SELECT keyword plus the table token) to keep the stored rows consistent,
//! so round trips through the repository engine can be asserted end to end.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use rowbound::{Bindings, Connection, Criteria, Direction, Order, Row, Rows, Value};

/// One recorded statement execution.
#[derive(Debug, Clone, PartialEq)]
pub struct Executed {
    pub statement: String,
    pub bindings: Vec<(String, Value)>,
}

/// Failure type of the fake driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryError(pub String);

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "memory connection: {}", self.0)
    }
}

impl std::error::Error for MemoryError {}

/// In-memory statement executor.
#[derive(Default)]
pub struct MemoryConnection {
    tables: RefCell<HashMap<String, Vec<Row>>>,
    log: RefCell<Vec<Executed>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a table.
    #[allow(dead_code)]
    pub fn seed(&self, table: &str, rows: Vec<Row>) {
        self.tables.borrow_mut().insert(table.to_string(), rows);
    }

    /// Every statement executed so far, in order.
    #[allow(dead_code)]
    pub fn executed(&self) -> Vec<Executed> {
        self.log.borrow().clone()
    }

    /// Current rows of a table.
    #[allow(dead_code)]
    pub fn rows(&self, table: &str) -> Vec<Row> {
        self.tables.borrow().get(table).cloned().unwrap_or_default()
    }

    fn bindings_to_row(bindings: &Bindings) -> Row {
        bindings
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}

impl Connection for MemoryConnection {
    type Error = MemoryError;

    fn execute(&self, statement: &str, bindings: &Bindings) -> Result<Rows, Self::Error> {
        self.log.borrow_mut().push(Executed {
            statement: statement.to_string(),
            bindings: bindings
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        });

        if let Some(rest) = statement.strip_prefix("INSERT INTO ") {
            let table = first_token(rest);
            let row = Self::bindings_to_row(bindings);
            self.tables.borrow_mut().entry(table).or_default().push(row);
            return Ok(Box::new(std::iter::empty()));
        }

        if let Some(rest) = statement.strip_prefix("UPDATE ") {
            let table = first_token(rest);
            let id = bindings
                .get("id")
                .cloned()
                .ok_or_else(|| MemoryError("update without id binding".to_string()))?;
            let mut tables = self.tables.borrow_mut();
            if let Some(rows) = tables.get_mut(&table) {
                for row in rows.iter_mut() {
                    if row.get("id") == Some(&id) {
                        *row = Self::bindings_to_row(bindings);
                    }
                }
            }
            return Ok(Box::new(std::iter::empty()));
        }

        if let Some(rest) = statement.strip_prefix("DELETE FROM ") {
            let table = first_token(rest);
            let id = bindings
                .get("id")
                .cloned()
                .ok_or_else(|| MemoryError("delete without id binding".to_string()))?;
            let mut tables = self.tables.borrow_mut();
            if let Some(rows) = tables.get_mut(&table) {
                rows.retain(|row| row.get("id") != Some(&id));
            }
            return Ok(Box::new(std::iter::empty()));
        }

        if let Some(from) = statement.split(" FROM ").nth(1) {
            let table = first_token(from);
            let rows = self.rows(&table);
            return Ok(Box::new(rows.into_iter()));
        }

        Err(MemoryError(format!("unsupported statement: {statement}")))
    }

    fn select(
        &self,
        table: &str,
        criteria: &Criteria,
        order: &Order,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Rows, Self::Error> {
        let mut rows = self.rows(table);
        rows.retain(|row| {
            criteria
                .iter()
                .all(|(column, value)| row.get(column) == Some(value))
        });

        let keys: Vec<(String, Direction)> = order
            .iter()
            .map(|(column, direction)| (column.to_string(), direction))
            .collect();
        for (column, direction) in keys.iter().rev() {
            rows.sort_by(|a, b| {
                let ordering = compare(a.get(column), b.get(column));
                match direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }

        let skipped = usize::try_from(offset.unwrap_or(0)).unwrap_or(usize::MAX);
        let taken = limit.map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));
        let rows: Vec<Row> = rows.into_iter().skip(skipped).take(taken).collect();
        Ok(Box::new(rows.into_iter()))
    }
}

fn first_token(text: &str) -> String {
    text.split_whitespace().next().unwrap_or_default().to_string()
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Integer(x)), Some(Value::Integer(y))) => x.cmp(y),
        (Some(Value::Float(x)), Some(Value::Float(y))) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::Text(x)), Some(Value::Text(y))) => x.cmp(y),
        (Some(Value::Boolean(x)), Some(Value::Boolean(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}
