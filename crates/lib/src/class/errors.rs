//! Error types for class dispatch and binding.

use thiserror::Error;

/// Structured error types for the inheritance helper.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ClassError {
    /// No method of that name exists anywhere on the class chain
    #[error("'{method}' is not callable on instances of {class}")]
    NotCallable { class: String, method: String },

    /// A bound method was invoked while its receiver was already borrowed,
    /// typically from inside another method running on the same receiver
    #[error("receiver of bound method '{method}' is already in use")]
    ReceiverBusy { method: String },
}

impl ClassError {
    /// Check if this error reports a missing method
    pub fn is_not_callable(&self) -> bool {
        matches!(self, ClassError::NotCallable { .. })
    }

    /// Check if this error reports a re-entrant receiver borrow
    pub fn is_receiver_busy(&self) -> bool {
        matches!(self, ClassError::ReceiverBusy { .. })
    }

    /// Get the method name this error is about
    pub fn method(&self) -> &str {
        match self {
            ClassError::NotCallable { method, .. } | ClassError::ReceiverBusy { method } => method,
        }
    }
}

// Conversion from ClassError to the main Error type
impl From<ClassError> for crate::Error {
    fn from(err: ClassError) -> Self {
        crate::Error::Class(err)
    }
}
