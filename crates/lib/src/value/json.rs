//! JSON interop for [`Value`].
//!
//! JSON has no absent value, so [`Value::Undefined`] serializes as `null`, the
//! same way non-finite floats do. Deserialization goes through
//! [`serde_json::Value`] and never produces `Undefined`.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{List, Map, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Undefined | Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Float(n) => serde_json::Number::from_f64(*n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::List(list) => {
                serde_json::Value::Array(list.iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Converts to a [`serde_json::Value`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use colltools::Value;
    /// assert_eq!(Value::Undefined.to_json(), serde_json::Value::Null);
    /// assert_eq!(Value::from("hi").to_json(), serde_json::json!("hi"));
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(self)
    }

    /// Parses a JSON document
    pub fn from_json_str(input: &str) -> crate::Result<Self> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(Value::from(json))
    }

    /// Renders as a JSON string, optionally pretty-printed
    pub fn to_json_string(&self, pretty: bool) -> crate::Result<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(rendered)
    }
}

impl FromStr for Value {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Value::from_json_str(s)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Float(_) => serializer.serialize_none(),
            Value::Text(s) => serializer.serialize_str(s),
            Value::List(list) => list.serialize(serializer),
            Value::Map(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<serde_json::Value> for List {
    fn from(json: serde_json::Value) -> Self {
        match Value::from(json) {
            Value::List(list) => list,
            other => List::from(vec![other]),
        }
    }
}

impl TryFrom<serde_json::Value> for Map {
    type Error = super::ValueError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        let value = Value::from(json);
        Map::try_from(&value)
    }
}
