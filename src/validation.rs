//! Input validation for timetable requests.
//!
//! Checks a request before any timetable is built. Detects:
//! - Empty school names
//! - Empty teacher names
//!
//! Whitespace-only names count as empty. All problems are collected so
//! the caller can report every missing field at once.

use crate::combination::TimetableRequest;
use crate::error::TimetableError;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Request field that failed (e.g., "schoolAName", "teachers.physics").
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A school name is empty.
    EmptySchoolName,
    /// A teacher name is empty.
    EmptyTeacherName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            message: message.into(),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates a generation request.
///
/// Checks:
/// 1. Both school names are non-empty
/// 2. All five teacher names are non-empty
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues
/// in request field order.
pub fn validate_request(request: &TimetableRequest) -> ValidationResult {
    let mut errors = Vec::new();

    for (field, label, value) in [
        ("schoolAName", "School A", &request.school_a_name),
        ("schoolBName", "School B", &request.school_b_name),
    ] {
        if is_blank(value) {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptySchoolName,
                field,
                format!("{label} name is required"),
            ));
        }
    }

    for (field, value, subject) in request.teachers.entries() {
        if is_blank(value) {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTeacherName,
                format!("teachers.{field}"),
                format!("{subject} teacher name is required ({field})"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl From<Vec<ValidationError>> for TimetableError {
    fn from(errors: Vec<ValidationError>) -> Self {
        let has_school = errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptySchoolName);
        let has_teacher = errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyTeacherName);

        let message = match (has_school, has_teacher) {
            (true, true) => "Please enter both school names and all teacher names",
            (true, false) => "Please enter both school names",
            _ => "Please enter all teacher names",
        };

        TimetableError::InvalidInput {
            fields: errors.into_iter().map(|e| e.field).collect(),
            message: message.to_string(),
        }
    }
}
