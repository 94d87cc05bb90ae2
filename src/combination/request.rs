//! Generation request payload.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};
use crate::models::{Subject, Teacher};

/// Names for the five-teacher pool.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeacherNames {
    /// First Maths teacher.
    pub maths1: String,
    /// Second Maths teacher.
    pub maths2: String,
    /// Physics teacher.
    pub physics: String,
    /// Chemistry teacher.
    pub chemistry: String,
    /// Biology teacher.
    pub biology: String,
}

impl TeacherNames {
    /// Creates the name set in pool order.
    pub fn new(
        maths1: impl Into<String>,
        maths2: impl Into<String>,
        physics: impl Into<String>,
        chemistry: impl Into<String>,
        biology: impl Into<String>,
    ) -> Self {
        Self {
            maths1: maths1.into(),
            maths2: maths2.into(),
            physics: physics.into(),
            chemistry: chemistry.into(),
            biology: biology.into(),
        }
    }

    /// (field name, value, subject) in pool order.
    pub fn entries(&self) -> [(&'static str, &str, Subject); 5] {
        [
            ("maths1", self.maths1.as_str(), Subject::Maths),
            ("maths2", self.maths2.as_str(), Subject::Maths),
            ("physics", self.physics.as_str(), Subject::Physics),
            ("chemistry", self.chemistry.as_str(), Subject::Chemistry),
            ("biology", self.biology.as_str(), Subject::Biology),
        ]
    }
}

/// Builds the fixed teacher pool: ids "1".."5",
/// subjects Maths, Maths, Physics, Chemistry, Biology.
pub fn teacher_pool(names: &TeacherNames) -> Vec<Teacher> {
    names
        .entries()
        .iter()
        .enumerate()
        .map(|(i, (_, name, subject))| Teacher::new((i + 1).to_string(), *name, *subject))
        .collect()
}

/// Everything needed to generate timetables.
///
/// Deserializes from the form payload, e.g.
///
/// ```
/// use u_timetable::combination::TimetableRequest;
///
/// let request = TimetableRequest::from_json(r#"{
///     "schoolAName": "Green High",
///     "schoolBName": "Blue Valley",
///     "teachers": {
///         "maths1": "Alice", "maths2": "Bob", "physics": "Cara",
///         "chemistry": "Dee", "biology": "Eve"
///     }
/// }"#).unwrap();
/// assert_eq!(request.teachers.physics, "Cara");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRequest {
    /// Morning school name.
    pub school_a_name: String,
    /// Afternoon school name.
    pub school_b_name: String,
    /// Teacher names.
    pub teachers: TeacherNames,
}

impl TimetableRequest {
    /// Creates a request.
    pub fn new(
        school_a_name: impl Into<String>,
        school_b_name: impl Into<String>,
        teachers: TeacherNames,
    ) -> Self {
        Self {
            school_a_name: school_a_name.into(),
            school_b_name: school_b_name.into(),
            teachers,
        }
    }

    /// Parses a request from its JSON form payload.
    ///
    /// Only the shape is checked here; empty names are caught by
    /// [`validate_request`](crate::validation::validate_request).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| TimetableError::invalid_field("request", format!("malformed request: {e}")))
    }
}
