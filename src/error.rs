//! Error types for timetable generation.

use thiserror::Error;

/// Errors that can occur while generating timetables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableError {
    /// One or more required names were empty (or whitespace only).
    ///
    /// No combinations are produced when this is returned.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Request fields that failed validation, in request order.
        fields: Vec<String>,
        /// Human-readable description.
        message: String,
    },

    /// Rotation was requested over an empty teacher list.
    #[error("Teacher pool is empty")]
    EmptyTeacherPool,
}

impl TimetableError {
    /// Creates an `InvalidInput` error for a single field.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            fields: vec![field.into()],
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TimetableError>;
