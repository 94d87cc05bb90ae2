//! School model.
//!
//! Two schools share the teacher pool in disjoint sessions:
//! School A teaches mornings Monday to Saturday, School B teaches
//! afternoons Thursday to Saturday.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Operating days of School A.
pub const SCHOOL_A_DAYS: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Operating days of School B.
pub const SCHOOL_B_DAYS: [&str; 3] = ["Thursday", "Friday", "Saturday"];

/// Number of periods taught per day in either session.
pub const PERIODS_PER_SESSION: u8 = 4;

/// Time of day a school operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Session {
    /// Periods 1-4.
    Morning,
    /// Periods 5-8 at presentation time; 1-4 in the core structure.
    Afternoon,
}

impl Session {
    /// Period numbers as shown to users.
    ///
    /// Afternoon periods are relabeled 5-8. Timetable data always
    /// stores periods 1-4.
    pub fn period_labels(&self) -> RangeInclusive<u8> {
        match self {
            Session::Morning => 1..=PERIODS_PER_SESSION,
            Session::Afternoon => PERIODS_PER_SESSION + 1..=PERIODS_PER_SESSION * 2,
        }
    }

    /// Display label for the period range (e.g., "1-4").
    pub fn period_range_label(&self) -> String {
        let labels = self.period_labels();
        format!("{}-{}", labels.start(), labels.end())
    }

    /// Display label for the operating days.
    pub fn day_range_label(&self) -> &'static str {
        match self {
            Session::Morning => "Mon-Sat",
            Session::Afternoon => "Thu-Sat",
        }
    }

    /// Capitalized session name (e.g., "Morning").
    pub fn name(&self) -> &'static str {
        match self {
            Session::Morning => "Morning",
            Session::Afternoon => "Afternoon",
        }
    }
}

/// A school with its session and ordered day sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    /// School identifier ("A" or "B").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Operating session.
    pub session: Session,
    /// Calendar day names in timetable order.
    pub days: Vec<String>,
}

impl School {
    /// Creates a school with an explicit day sequence.
    pub fn new<I, S>(id: impl Into<String>, name: impl Into<String>, session: Session, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            session,
            days: days.into_iter().map(Into::into).collect(),
        }
    }

    /// School A: morning session, Monday to Saturday.
    pub fn school_a(name: impl Into<String>) -> Self {
        Self::new("A", name, Session::Morning, SCHOOL_A_DAYS)
    }

    /// School B: afternoon session, Thursday to Saturday.
    pub fn school_b(name: impl Into<String>) -> Self {
        Self::new("B", name, Session::Afternoon, SCHOOL_B_DAYS)
    }
}
