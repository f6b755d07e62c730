//! The dynamic value model.
//!
//! Every operation in this crate works on [`Value`], a self-describing value
//! that is either a scalar or one of the two container shapes:
//!
//! - [`List`] - a Sequence: ordered, integer-indexed
//! - [`Map`] - a Mapping: unique string keys, enumerated in insertion order
//!
//! [`Value::Undefined`] is the absent sentinel. It is distinct from
//! [`Value::Null`]: a Mapping may hold a key whose value is undefined, and that
//! key still exists.

use std::fmt;

pub mod errors;
mod json;
pub mod key;
pub mod list;
pub mod map;

pub use errors::ValueError;
pub use key::Key;
pub use list::List;
pub use map::Map;

/// A dynamically shaped value.
///
/// # Value Types
///
/// ## Scalars
/// - [`Value::Undefined`] - the absent sentinel
/// - [`Value::Null`] - explicit null
/// - [`Value::Bool`] - booleans
/// - [`Value::Int`] / [`Value::Float`] - numbers; both report `"number"` from
///   [`Value::type_of`] and compare numerically
/// - [`Value::Text`] - UTF-8 strings
///
/// ## Containers
/// - [`Value::List`] - a Sequence
/// - [`Value::Map`] - a Mapping
///
/// # Equality
///
/// `==` on `Value` is deep structural equality (see [`crate::ops::is_equal`]):
/// Mappings compare independently of key order, Sequences positionally.
///
/// ```
/// # use colltools::value;
/// assert_eq!(value!({"a": 1, "b": 2}), value!({"b": 2, "a": 1}));
/// assert_ne!(value!([1, 2]), value!([2, 1]));
/// ```
///
/// Strict identity, the `===` of the toolkit, is [`Value::strict_eq`].
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Undefined,
    /// Explicit null
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer number
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text string value
    Text(String),

    /// Ordered collection of values
    List(List),
    /// Key/value collection
    Map(Map),
}

impl Value {
    /// Returns true unless this is the absent sentinel
    pub fn is_defined(&self) -> bool {
        !matches!(self, Value::Undefined)
    }

    /// Returns true if this is an explicit null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for either container shape
    pub fn is_object(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Returns true if this is a Sequence
    pub fn is_array(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns true if this is a Mapping
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns true for numbers of either representation
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Returns the variant name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Returns the runtime type category.
    ///
    /// Two values with different runtime types are never equal. The categories
    /// are coarser than the variants: `Int` and `Float` are both `"number"`,
    /// and null and both container shapes are `"object"`.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Int(_) | Value::Float(_) => "number",
            Value::Text(_) => "string",
            Value::Null | Value::List(_) | Value::Map(_) => "object",
        }
    }

    /// Strict identity comparison.
    ///
    /// Scalars compare by value, numbers numerically across `Int` and `Float`
    /// (`NaN` is never strictly equal to anything). Containers are strictly
    /// equal only when both sides are the very same container in memory.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => *a as f64 == *b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => std::ptr::eq(a, b),
            (Value::Map(a), Value::Map(b)) => std::ptr::eq(a, b),
            _ => false,
        }
    }

    /// Looks up a direct child by index or key.
    ///
    /// Sequences accept index keys (and names that parse as an index);
    /// Mappings accept names (and indices, looked up by their decimal form).
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Option<&Value> {
        let key = key.into();
        match self {
            Value::List(list) => list.get(key.as_index()?),
            Value::Map(map) => match key {
                Key::Name(name) => map.get(name),
                Key::Index(index) => map.get(&index.to_string()),
            },
            _ => None,
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a list (returns immutable reference)
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable list reference
    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a map (returns immutable reference)
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable map reference
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::ops::is_equal(self, other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::List(list) => write!(f, "{list}"),
            Value::Map(map) => write!(f, "{map}"),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        // Indices beyond i64::MAX cannot be addressed anyway
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::List(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(List::from(value))
    }
}

impl<'a> From<Key<'a>> for Value {
    fn from(key: Key<'a>) -> Self {
        match key {
            Key::Index(index) => Value::from(index),
            Key::Name(name) => Value::from(name),
        }
    }
}

// TryFrom implementations for type-directed extraction
impl TryFrom<&Value> for String {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(ValueError::mismatch("String", value)),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = ValueError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(ValueError::mismatch("&str", value)),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(ValueError::mismatch("i64", value)),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_float()
            .ok_or_else(|| ValueError::mismatch("f64", value))
    }
}

impl TryFrom<&Value> for bool {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(ValueError::mismatch("bool", value)),
        }
    }
}

impl TryFrom<&Value> for List {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(list) => Ok(list.clone()),
            _ => Err(ValueError::mismatch("List", value)),
        }
    }
}

impl TryFrom<&Value> for Map {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(map) => Ok(map.clone()),
            _ => Err(ValueError::mismatch("Map", value)),
        }
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.strict_eq(&Value::Int(*other))
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.strict_eq(&Value::Int(*other as i64))
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.strict_eq(&Value::Float(*other))
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
