//! Teacher workload summary.
//!
//! Counts assigned periods per teacher name and converts them to
//! teaching minutes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Periods | Slots carrying the teacher's name |
//! | Minutes | Periods × 40 |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{SchoolTimetable, TimetableCombination};

/// Length of one class in minutes.
pub const CLASS_DURATION_MINUTES: u32 = 40;

/// Periods and minutes for one teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherWorkload {
    /// Teacher display name.
    pub teacher: String,
    /// Number of periods taught.
    pub periods: u32,
    /// Teaching time in minutes.
    pub minutes: u32,
}

impl TeacherWorkload {
    fn new(teacher: impl Into<String>, periods: u32) -> Self {
        Self {
            teacher: teacher.into(),
            periods,
            minutes: periods * CLASS_DURATION_MINUTES,
        }
    }
}

/// Per-teacher workload, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSummary {
    /// One entry per distinct teacher name.
    pub entries: Vec<TeacherWorkload>,
}

impl WorkloadSummary {
    /// Counts periods per teacher in one school's timetable.
    pub fn for_timetable(timetable: &SchoolTimetable) -> Self {
        Self::from_counts(
            timetable
                .slots()
                .map(|slot| (slot.teacher.name.as_str(), 1)),
        )
    }

    /// Totals across both schools of a combination.
    pub fn for_combination(combination: &TimetableCombination) -> Self {
        Self::for_timetable(&combination.school_a).merge(&Self::for_timetable(&combination.school_b))
    }

    /// Adds another summary's counts to this one.
    ///
    /// Names new to `self` are appended after existing entries.
    pub fn merge(&self, other: &Self) -> Self {
        Self::from_counts(
            self.entries
                .iter()
                .chain(other.entries.iter())
                .map(|e| (e.teacher.as_str(), e.periods)),
        )
    }

    fn from_counts<'a>(counts: impl Iterator<Item = (&'a str, u32)>) -> Self {
        let mut order: Vec<&str> = Vec::new();
        let mut periods: HashMap<&str, u32> = HashMap::new();
        for (name, count) in counts {
            let entry = periods.entry(name).or_insert_with(|| {
                order.push(name);
                0
            });
            *entry += count;
        }

        let entries = order
            .into_iter()
            .map(|name| TeacherWorkload::new(name, periods.get(name).copied().unwrap_or(0)))
            .collect();
        Self { entries }
    }

    /// Finds the entry for a teacher name.
    pub fn get(&self, teacher: &str) -> Option<&TeacherWorkload> {
        self.entries.iter().find(|e| e.teacher == teacher)
    }

    /// Sum of periods over all teachers.
    pub fn total_periods(&self) -> u32 {
        self.entries.iter().map(|e| e.periods).sum()
    }

    /// Sum of minutes over all teachers.
    pub fn total_minutes(&self) -> u32 {
        self.entries.iter().map(|e| e.minutes).sum()
    }
}

/// Workload of a combination split by school, plus the overall total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationWorkload {
    /// Morning school workload.
    pub school_a: WorkloadSummary,
    /// Afternoon school workload.
    pub school_b: WorkloadSummary,
    /// Both schools combined.
    pub overall: WorkloadSummary,
}

impl CombinationWorkload {
    /// Computes the split and overall workload for a combination.
    pub fn calculate(combination: &TimetableCombination) -> Self {
        let school_a = WorkloadSummary::for_timetable(&combination.school_a);
        let school_b = WorkloadSummary::for_timetable(&combination.school_b);
        let overall = school_a.merge(&school_b);
        Self {
            school_a,
            school_b,
            overall,
        }
    }
}
