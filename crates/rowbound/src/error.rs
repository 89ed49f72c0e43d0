// SPDX-License-Identifier: MIT

//! Error types.
//!
//! Metadata-derivation failures are reported by the derive macro at
//! expansion time and never appear here. The runtime errors split into
//! value-level decode failures, row-shape failures, and the repository
//! wrapper that forwards connection failures unmodified.

use thiserror::Error;

use crate::value::Value;

/// A scalar value could not be decoded into the requested field type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The wire value has a different shape than the field expects.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// Expected shape tag.
        expected: &'static str,
        /// Actual shape tag of the value.
        found: &'static str,
    },

    /// An integer column value does not fit the narrower field type.
    #[error("integer {value} does not fit in {target}")]
    OutOfRange {
        /// The wire value.
        value: i64,
        /// Target Rust type name.
        target: &'static str,
    },
}

impl ValueError {
    pub(crate) fn mismatch(expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.type_name(),
        }
    }
}

/// A result row does not match the entity's derived column shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// The row has no column under the expected name.
    #[error("row has no column `{0}`")]
    MissingColumn(String),

    /// A column was present but its value could not be decoded.
    #[error("column `{column}` cannot be decoded")]
    Decode {
        /// Column name.
        column: String,
        /// Underlying conversion failure.
        #[source]
        source: ValueError,
    },
}

/// Failure of a repository operation.
///
/// Connection failures are forwarded exactly as the collaborator raised
/// them; the engine adds no retry or classification. Absence of a row is
/// never an error.
#[derive(Debug)]
pub enum RepositoryError<E> {
    /// The underlying connection reported a failure.
    Connection(E),
    /// A fetched row could not be converted into an entity.
    Row(RowError),
}

impl<E> RepositoryError<E> {
    /// Check if this is a connection failure.
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Check if this is a row conversion failure.
    pub const fn is_row(&self) -> bool {
        matches!(self, Self::Row(_))
    }
}

impl<E: std::fmt::Display> std::fmt::Display for RepositoryError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection(e) => e.fmt(f),
            Self::Row(e) => e.fmt(f),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for RepositoryError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connection(e) => Some(e),
            Self::Row(e) => Some(e),
        }
    }
}

impl<E> From<RowError> for RepositoryError<E> {
    fn from(error: RowError) -> Self {
        Self::Row(error)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug)]
    struct TestError(&'static str);

    impl fmt::Display for TestError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl std::error::Error for TestError {}

    #[test]
    fn repository_error_forwards_connection_display() {
        let err: RepositoryError<TestError> = RepositoryError::Connection(TestError("refused"));
        assert!(err.is_connection());
        assert_eq!(format!("{}", err), "refused");
    }

    #[test]
    fn repository_error_source() {
        use std::error::Error;

        let err: RepositoryError<TestError> =
            RepositoryError::from(RowError::MissingColumn("id".to_string()));
        assert!(err.is_row());
        assert!(err.source().is_some());
    }

    #[test]
    fn decode_error_names_the_column() {
        let err = RowError::Decode {
            column: "amount".to_string(),
            source: ValueError::TypeMismatch {
                expected: "float",
                found: "text",
            },
        };
        assert_eq!(format!("{}", err), "column `amount` cannot be decoded");
    }
}
