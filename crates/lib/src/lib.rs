//!
//! colltools: shape-agnostic collection utilities over a dynamic value model.
//!
//! Calling code can iterate, transform, compare and merge values without
//! knowing in advance whether a value is an ordered Sequence or a key Mapping.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A self-describing dynamic value. Containers are either a Sequence (`value::List`) or a Mapping (`value::Map`).
//! * **Collections (`iter::Collection`)**: Anything classifiable as a Sequence or a Mapping. All iteration helpers (`iter::each`, `iter::map`, `iter::find`, ...) dispatch on this shape once per call.
//! * **Structural operations (`ops`)**: Deep equality (`ops::is_equal`), shallow and deep merge (`ops::extend`), emptiness and key membership.
//! * **Classes (`class::Class`)**: Single-parent hierarchies by composition, with explicit forwarding to the base initializer and method binding.
//! * **Deferral (`defer::defer`)**: Run a callback after the current synchronous code, on the ambient tokio runtime.
//! * **Snapshots (`snapshot::JoinedSnapshot`)**: Data read from an external database location, navigable through the helpers above.

pub mod class;
pub mod defer;
pub mod iter;
pub mod ops;
pub mod predicates;
pub mod snapshot;
pub mod value;

/// Re-export the value model for easier access.
pub use value::{Key, List, Map, Value, ValueError};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

/// Builds a [`Value`] from JSON-like syntax.
///
/// ```
/// use colltools::{value, Value};
///
/// let v = value!({"name": "rex", "tags": ["a", "b"], "age": 3});
/// assert_eq!(v.get("age"), Some(&Value::Int(3)));
/// ```
#[macro_export]
macro_rules! value {
    ($($json:tt)+) => {
        $crate::Value::from($crate::__private::serde_json::json!($($json)+))
    };
}

/// Result type used throughout the colltools library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the colltools library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured value conversion errors from the value module
    #[error(transparent)]
    Value(value::ValueError),

    /// Structured dispatch and binding errors from the class module
    #[error(transparent)]
    Class(class::ClassError),

    /// A callback was deferred outside a tokio runtime
    #[error("no tokio runtime is available to run deferred callbacks")]
    NoRuntime,
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Value(_) => "value",
            Error::Class(_) => "class",
            Error::NoRuntime => "defer",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is a type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error indicates a missing element.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error reports a write too far past the end of a list.
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_out_of_range(),
            _ => false,
        }
    }

    /// Check if this error reports a call to a method that does not exist.
    pub fn is_not_callable(&self) -> bool {
        match self {
            Error::Class(class_err) => class_err.is_not_callable(),
            _ => false,
        }
    }

    /// Check if this error reports a re-entrant use of a bound receiver.
    pub fn is_receiver_busy(&self) -> bool {
        match self {
            Error::Class(class_err) => class_err.is_receiver_busy(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error is a JSON serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
