//! Runtime value types for field projection and comparison.
//!
//! The [`Value`] enum is the borrowed value of one record field. The sort engine compares
//! values, the serializer turns them into text, and render strategies format them.

use std::cmp::Ordering;

/// Runtime value of a field, borrowed from the source record.
///
/// # Example
///
/// ```
/// use enerji_grid::{Value, Number};
///
/// struct Row {
///     name: String,
///     value: f64,
/// }
///
/// fn accessor<'a>(row: &'a Row, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&row.name),
///         "value" => Value::Number(Number::F64(row.value)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Array or object value; only ever shown as text.
    Structured(&'a serde_json::Value),
    /// Field not present or null.
    None,
}

impl<'a> Value<'a> {
    /// Projects a JSON value. `null` becomes [`Value::None`].
    pub fn from_json(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::None,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(Number::from_json(n)),
            serde_json::Value::String(s) => Value::String(s),
            structured => Value::Structured(structured),
        }
    }

    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` for a missing value or an empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::None => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Plain textual form, used for raw display and for export.
    ///
    /// Missing values are empty, structured values are compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            Value::String(s) => (*s).to_string(),
            Value::Number(n) => n.to_text(),
            Value::Bool(b) => b.to_string(),
            Value::Structured(v) => v.to_string(),
            Value::None => String::new(),
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Comparisons between different numeric kinds go through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts a JSON number, preferring the integer kinds.
    pub fn from_json(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::I64(i)
        } else if let Some(u) = n.as_u64() {
            Number::U64(u)
        } else {
            Number::F64(n.as_f64().unwrap_or(f64::NAN))
        }
    }

    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types. `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Shortest text form: `10`, `28.8`, `-3`.
    ///
    /// Floats are always positional, never exponent notation: `1e21` prints as
    /// `1000000000000000000000` and `1e-7` as `0.0000001`.
    pub fn to_text(self) -> String {
        match self {
            Number::I64(n) => n.to_string(),
            Number::U64(n) => n.to_string(),
            Number::F64(n) if n.is_infinite() => {
                let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
                text.to_string()
            }
            Number::F64(n) => n.to_string(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}
