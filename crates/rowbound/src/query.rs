// SPDX-License-Identifier: MIT

//! Criteria and ordering specifications passed to the connection.

use crate::value::Value;

/// Sort direction for one ordering column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Ascending order.
    #[default]
    Ascending,
    /// Descending order.
    Descending,
}

impl Direction {
    /// SQL keyword for the direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Equality conjunction over columns: every entry must match.
///
/// Entries keep insertion order so connections produce deterministic
/// statements.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Criteria {
    entries: Vec<(String, Value)>,
}

impl Criteria {
    /// Matches every row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single equality criterion.
    pub fn equals(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new().and(column, value)
    }

    /// Add a further equality criterion.
    #[must_use]
    pub fn and(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((column.into(), value.into()));
        self
    }

    /// Whether no criteria were given.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate criteria in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(column, value)| (column.as_str(), value))
    }
}

/// Ordering specification: columns with directions, applied in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    entries: Vec<(String, Direction)>,
}

impl Order {
    /// Unspecified order.
    pub fn none() -> Self {
        Self::default()
    }

    /// Order by a single column.
    pub fn by(column: impl Into<String>, direction: Direction) -> Self {
        Self::none().then(column, direction)
    }

    /// Add a further ordering column.
    #[must_use]
    pub fn then(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.entries.push((column.into(), direction));
        self
    }

    /// Whether no ordering was given.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate ordering columns in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Direction)> {
        self.entries
            .iter()
            .map(|(column, direction)| (column.as_str(), *direction))
    }
}
