//! Type predicates.
//!
//! Total functions that classify a possibly absent value. `None` stands for a
//! value that is not there at all and is treated like [`Value::Undefined`].

use crate::Value;

/// Returns true iff the value is present and not [`Value::Undefined`].
///
/// ```
/// # use colltools::{Value, predicates::is_defined};
/// assert!(is_defined(&Value::Null));
/// assert!(!is_defined(&Value::Undefined));
/// assert!(!is_defined(None));
/// ```
pub fn is_defined<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    value.into().is_some_and(Value::is_defined)
}

/// Returns true iff the value is a container, either a Sequence or a Mapping.
pub fn is_object<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    value.into().is_some_and(Value::is_object)
}

/// Returns true iff the value is a Sequence.
pub fn is_array<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    value.into().is_some_and(Value::is_array)
}
