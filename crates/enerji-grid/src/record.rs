//! Records and the field access trait.
//!
//! A [`Record`] is one open-ended row of domain data. Anything that can hand out field
//! values by key implements [`FieldSource`], which is all the grid needs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::{GridError, Result};
use crate::value::Value;

/// Trait for types whose fields the grid can project.
///
/// # Manual Implementation
///
/// ```
/// use enerji_grid::{FieldSource, Value, Number};
///
/// struct Fuel {
///     name: String,
///     value: f64,
/// }
///
/// impl FieldSource for Fuel {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "value" => Value::Number(Number::F64(self.value)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait FieldSource {
    /// Returns the value of a field, or [`Value::None`] if the record lacks it.
    fn field_value(&self, field: &str) -> Value<'_>;
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field_value(&self, field: &str) -> Value<'_> {
        (**self).field_value(field)
    }
}

/// One row of heterogeneous key/value data. Key order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, JsonValue>);

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Record::default()
    }

    /// Builds a record from any value that serializes to a JSON object.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Record::try_from(serde_json::to_value(value)?)
    }

    /// Adds a field and returns the record.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a field, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Option<JsonValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Raw JSON value of a field.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FieldSource for Record {
    fn field_value(&self, field: &str) -> Value<'_> {
        self.0.get(field).map(Value::from_json).unwrap_or(Value::None)
    }
}

impl From<Map<String, JsonValue>> for Record {
    fn from(map: Map<String, JsonValue>) -> Self {
        Record(map)
    }
}

impl TryFrom<JsonValue> for Record {
    type Error = GridError;

    fn try_from(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(map) => Ok(Record(map)),
            JsonValue::Null => Err(GridError::NotAnObject("null")),
            JsonValue::Bool(_) => Err(GridError::NotAnObject("a boolean")),
            JsonValue::Number(_) => Err(GridError::NotAnObject("a number")),
            JsonValue::String(_) => Err(GridError::NotAnObject("a string")),
            JsonValue::Array(_) => Err(GridError::NotAnObject("an array")),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
        Record(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;
    use serde_json::json;

    #[derive(Serialize)]
    struct Fuel {
        name: String,
        #[serde(rename = "nameEN")]
        name_en: String,
        value: f64,
    }

    #[test]
    fn builder_and_field_access() {
        let record = Record::new().with("name", "Elektrik").with("value", 485163);

        assert_eq!(record.field_value("name"), Value::String("Elektrik"));
        assert_eq!(
            record.field_value("value"),
            Value::Number(Number::I64(485163))
        );
        assert_eq!(record.field_value("code"), Value::None);
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name", "value"]);
    }

    #[test]
    fn from_serialize_keeps_renamed_keys() {
        let fuel = Fuel {
            name: "Doğal Gaz".into(),
            name_en: "Natural Gas".into(),
            value: 405299.0,
        };
        let record = Record::from_serialize(&fuel).unwrap();

        assert_eq!(record.field_value("nameEN"), Value::String("Natural Gas"));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn non_objects_are_rejected() {
        assert!(matches!(
            Record::try_from(json!([1, 2])),
            Err(GridError::NotAnObject("an array"))
        ));
        assert!(Record::from_serialize(&42).is_err());
    }

    #[test]
    fn null_fields_project_as_none() {
        let record = Record::try_from(json!({"code": null})).unwrap();
        assert_eq!(record.field_value("code"), Value::None);
    }
}
