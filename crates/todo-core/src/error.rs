//! Error types for the todo library.

use thiserror::Error;

/// Error type for all todo list operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Index-based access outside `[0, len)`
    #[error("Index {index} out of range for list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    /// Extraction from a list with no items
    #[error("Cannot {operation} from an empty list")]
    EmptyList { operation: &'static str },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TodoError {
        TodoError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TodoError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an out-of-range error for `index` against a list of `len`.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

/// Result type alias for todo operations
pub type Result<T> = std::result::Result<T, TodoError>;
