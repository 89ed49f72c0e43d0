// SPDX-License-Identifier: MIT

//! Scalar column values and conversions.
//!
//! [`Value`] is the wire type exchanged with the [`Connection`] boundary:
//! every column of a result row and every named binding is one of the five
//! scalar shapes (null, boolean, integer, float, text). [`ColumnValue`] is
//! the conversion contract between a struct field and its column value; the
//! derive macro calls it from generated `to_row`/`from_row` code.
//!
//! [`Connection`]: crate::connection::Connection

use crate::error::ValueError;

/// A scalar database value.
///
/// Integers are widened to `i64` and floats to `f64` on the wire; narrower
/// field types convert back through [`ColumnValue`] with range checks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Boolean column value.
    Boolean(bool),
    /// Integer column value.
    Integer(i64),
    /// Floating-point column value.
    Float(f64),
    /// Text column value.
    Text(String),
}

impl Value {
    /// Lower-case tag of the value's shape, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }

    /// Whether this value is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Conversion between a struct field and its scalar column value.
///
/// Implemented for the primitive scalars, `String`, and `Option<T>`.
/// The derive macro also emits an implementation for mapped types with a
/// single persistable property (single-value wrappers), delegating to the
/// inner value.
pub trait ColumnValue: Sized {
    /// Encode the field as a wire value.
    fn to_value(&self) -> Value;

    /// Decode the field from a wire value.
    fn from_value(value: &Value) -> Result<Self, ValueError>;
}

impl ColumnValue for bool {
    fn to_value(&self) -> Value {
        Value::Boolean(*self)
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Boolean(b) => Ok(*b),
            other => Err(ValueError::mismatch("boolean", other)),
        }
    }
}

impl ColumnValue for i64 {
    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Integer(i) => Ok(*i),
            other => Err(ValueError::mismatch("integer", other)),
        }
    }
}

/// Narrow integer impls widen on encode and range-check on decode.
macro_rules! narrow_integer {
    ($($ty:ty),*) => {
        $(
            impl ColumnValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Integer(i64::from(*self))
                }

                fn from_value(value: &Value) -> Result<Self, ValueError> {
                    match value {
                        Value::Integer(i) => <$ty>::try_from(*i).map_err(|_| ValueError::OutOfRange {
                            value: *i,
                            target: stringify!($ty),
                        }),
                        other => Err(ValueError::mismatch("integer", other)),
                    }
                }
            }
        )*
    };
}

narrow_integer!(i8, i16, i32, u8, u16, u32);

impl ColumnValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(f) => Ok(*f),
            other => Err(ValueError::mismatch("float", other)),
        }
    }
}

impl ColumnValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(f) => Ok(*f as f32),
            other => Err(ValueError::mismatch("float", other)),
        }
    }
}

impl ColumnValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            other => Err(ValueError::mismatch("text", other)),
        }
    }
}

impl<T: ColumnValue> ColumnValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_round_trips() {
        assert_eq!(i64::from_value(&42i64.to_value()), Ok(42));
        assert_eq!(i32::from_value(&7i32.to_value()), Ok(7));
        assert_eq!(f64::from_value(&1.5f64.to_value()), Ok(1.5));
        assert_eq!(bool::from_value(&true.to_value()), Ok(true));
        assert_eq!(
            String::from_value(&"abc".to_string().to_value()),
            Ok("abc".to_string())
        );
    }

    #[test]
    fn narrow_integer_out_of_range() {
        let err = i8::from_value(&Value::Integer(1000)).unwrap_err();
        assert_eq!(
            err,
            ValueError::OutOfRange {
                value: 1000,
                target: "i8"
            }
        );
    }

    #[test]
    fn type_mismatch_names_both_sides() {
        let err = i64::from_value(&Value::Text("x".into())).unwrap_err();
        assert_eq!(
            err,
            ValueError::TypeMismatch {
                expected: "integer",
                found: "text"
            }
        );
    }

    #[test]
    fn option_maps_null() {
        assert_eq!(Option::<i64>::from_value(&Value::Null), Ok(None));
        assert_eq!(Option::<i64>::from_value(&Value::Integer(3)), Ok(Some(3)));
        assert_eq!(None::<i64>.to_value(), Value::Null);
    }

    #[test]
    fn from_sugar() {
        assert_eq!(Value::from("abc"), Value::Text("abc".into()));
        assert_eq!(Value::from(Some(5i64)), Value::Integer(5));
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }
}
