//! Tuple descriptor error types
//!
//! Error codes:
//! - TD_INVALID_SCHEMA (REJECT)
//! - TD_INDEX_OUT_OF_RANGE (REJECT)
//! - TD_FIELD_NOT_FOUND (REJECT)
//!
//! None of these are fatal. A descriptor is never partially built or
//! mutated, so the caller can always recover.

use std::fmt;

use thiserror::Error;

/// Severity levels for schema errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Caller request rejected, nothing changed
    Reject,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Stable error codes for descriptor failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaErrorCode {
    /// Descriptor built from an empty type sequence
    TdInvalidSchema,
    /// Positional access outside `[0, num_fields)`
    TdIndexOutOfRange,
    /// No field carries the requested name
    TdFieldNotFound,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::TdInvalidSchema => "TD_INVALID_SCHEMA",
            SchemaErrorCode::TdIndexOutOfRange => "TD_INDEX_OUT_OF_RANGE",
            SchemaErrorCode::TdFieldNotFound => "TD_FIELD_NOT_FOUND",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Reject
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised by [`TupleDesc`](super::TupleDesc) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("invalid schema: {reason}")]
    InvalidSchema { reason: String },

    #[error("field index {index} out of range (descriptor has {num_fields} fields)")]
    IndexOutOfRange { index: usize, num_fields: usize },

    #[error("no field named '{name}'")]
    FieldNotFound { name: String },
}

impl SchemaError {
    /// Create an invalid schema error for an empty type sequence
    pub fn empty_schema() -> Self {
        SchemaError::InvalidSchema {
            reason: "a tuple descriptor requires at least one field".into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, num_fields: usize) -> Self {
        SchemaError::IndexOutOfRange { index, num_fields }
    }

    /// Create a field not found error
    pub fn field_not_found(name: impl Into<String>) -> Self {
        SchemaError::FieldNotFound { name: name.into() }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        match self {
            SchemaError::InvalidSchema { .. } => SchemaErrorCode::TdInvalidSchema,
            SchemaError::IndexOutOfRange { .. } => SchemaErrorCode::TdIndexOutOfRange,
            SchemaError::FieldNotFound { .. } => SchemaErrorCode::TdFieldNotFound,
        }
    }

    /// Returns the severity level
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
