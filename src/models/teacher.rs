//! Teacher model.
//!
//! Teachers are the shared resource of the timetable: a fixed pool of
//! five subject teachers serves both schools. A teacher is immutable
//! once constructed from request input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject taught by a teacher.
///
/// Closed set: every presentation consumer (summaries, color-coding)
/// can match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Maths,
    Physics,
    Chemistry,
    Biology,
}

impl Subject {
    /// English display name (e.g., "Maths").
    pub fn name(&self) -> &'static str {
        match self {
            Subject::Maths => "Maths",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A subject teacher.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Teacher {
    /// Stable teacher identifier ("1".."5" for the standard pool).
    pub id: String,
    /// Display name as entered by the user.
    pub name: String,
    /// Subject taught.
    pub subject: Subject,
}

impl Teacher {
    /// Creates a new teacher.
    pub fn new(id: impl Into<String>, name: impl Into<String>, subject: Subject) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subject,
        }
    }
}
