//! Error types for value conversions and lookups.

use thiserror::Error;

use super::Value;

/// Structured error types for value operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ValueError {
    /// A value did not have the shape or type the caller asked for
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A write would grow a Sequence past its growth limit
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Key lookup failed
    #[error("element not found: {key}")]
    ElementNotFound { key: String },
}

impl ValueError {
    /// Builds a [`ValueError::TypeMismatch`] describing `actual` by its type name
    pub(crate) fn mismatch(expected: &str, actual: &Value) -> Self {
        ValueError::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.type_name().to_string(),
        }
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }

    /// Check if this error reports a refused Sequence write
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ValueError::IndexOutOfRange { .. })
    }

    /// Check if this error is related to element lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, ValueError::ElementNotFound { .. })
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            ValueError::ElementNotFound { key } => Some(key),
            _ => None,
        }
    }
}

// Conversion from ValueError to the main Error type
impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
