// SPDX-License-Identifier: MIT

//! Result rows and named statement bindings.
//!
//! Both types are ordered column → value mappings. Order matters: a row's
//! columns correspond positionally to the owning type's property list, which
//! itself mirrors struct declaration order.

use crate::error::RowError;
use crate::value::{ColumnValue, Value};

/// One result row: an ordered mapping of column name to scalar value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    /// Empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty row with room for `capacity` columns.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(capacity),
        }
    }

    /// Append a column. Names are not deduplicated; the first entry under a
    /// name wins on lookup.
    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.columns.push((column.into(), value));
    }

    /// Look up a column by name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Decode a named column into a field type.
    ///
    /// This is the lookup used by generated `from_row` code: a missing
    /// column and an undecodable value are distinct failures.
    pub fn decode<T: ColumnValue>(&self, column: &str) -> Result<T, RowError> {
        let value = self
            .get(column)
            .ok_or_else(|| RowError::MissingColumn(column.to_string()))?;
        T::from_value(value).map_err(|source| RowError::Decode {
            column: column.to_string(),
            source,
        })
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate columns in row order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

/// Named parameters for one statement execution.
///
/// Each entry binds `:name` in the statement template to a scalar value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bindings {
    entries: Vec<(String, Value)>,
}

impl Bindings {
    /// No bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding, builder style.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    /// Look up a binding by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl From<Row> for Bindings {
    /// A row binds directly: every column becomes a `:column` parameter.
    fn from(row: Row) -> Self {
        Self {
            entries: row.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_first_entry() {
        let mut row = Row::new();
        row.push("id", Value::Integer(1));
        row.push("id", Value::Integer(2));
        assert_eq!(row.get("id"), Some(&Value::Integer(1)));
    }

    #[test]
    fn decode_missing_column() {
        let row = Row::new();
        assert_eq!(
            row.decode::<i64>("id"),
            Err(RowError::MissingColumn("id".to_string()))
        );
    }

    #[test]
    fn decode_reports_column_on_bad_value() {
        let mut row = Row::new();
        row.push("amount", Value::Text("oops".into()));
        let err = row.decode::<f64>("amount").unwrap_err();
        assert!(matches!(err, RowError::Decode { ref column, .. } if column == "amount"));
    }

    #[test]
    fn bindings_from_row_preserve_order() {
        let mut row = Row::new();
        row.push("id", Value::Integer(1));
        row.push("name", Value::Text("a".into()));
        let bindings = Bindings::from(row);
        let names: Vec<&str> = bindings.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["id", "name"]);
    }
}
