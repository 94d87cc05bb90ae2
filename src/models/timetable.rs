//! Timetable (solution) model.
//!
//! A combination pairs one timetable per school. Each timetable holds one
//! day schedule per operating day, and each day schedule holds exactly
//! four period slots.
//!
//! All values are plain data: they serialize unchanged for rendering and
//! export, and cloning a combination never aliases another.

use serde::{Deserialize, Serialize};

use super::{School, Subject, Teacher};

/// A teacher assigned to one period of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Period number within the session (1-4).
    pub period: u8,
    /// Assigned teacher.
    pub teacher: Teacher,
    /// Subject taught; always the teacher's subject.
    pub subject: Subject,
}

impl TimeSlot {
    /// Creates a slot, taking the subject from the teacher.
    pub fn new(period: u8, teacher: Teacher) -> Self {
        let subject = teacher.subject;
        Self {
            period,
            teacher,
            subject,
        }
    }
}

/// Period assignments for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Calendar day name.
    pub day: String,
    /// Slots ordered by period.
    pub slots: Vec<TimeSlot>,
}

impl DaySchedule {
    /// Creates a day schedule.
    pub fn new(day: impl Into<String>, slots: Vec<TimeSlot>) -> Self {
        Self {
            day: day.into(),
            slots,
        }
    }

    /// Finds the slot for a period number.
    pub fn slot(&self, period: u8) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.period == period)
    }

    /// Teacher IDs in period order.
    pub fn teacher_ids(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.teacher.id.as_str()).collect()
    }
}

/// A school paired with its day-by-day schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolTimetable {
    /// The school this timetable belongs to.
    pub school: School,
    /// One entry per day in `school.days` order.
    pub schedule: Vec<DaySchedule>,
}

impl SchoolTimetable {
    /// Creates a school timetable.
    pub fn new(school: School, schedule: Vec<DaySchedule>) -> Self {
        Self { school, schedule }
    }

    /// Finds the schedule for a day name.
    pub fn day(&self, day: &str) -> Option<&DaySchedule> {
        self.schedule.iter().find(|d| d.day == day)
    }

    /// Iterates over every slot, day by day.
    pub fn slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.schedule.iter().flat_map(|d| d.slots.iter())
    }

    /// Total number of slots across all days.
    pub fn slot_count(&self) -> usize {
        self.schedule.iter().map(|d| d.slots.len()).sum()
    }

    /// Number of periods taught by the named teacher.
    pub fn periods_for_teacher(&self, name: &str) -> usize {
        self.slots().filter(|s| s.teacher.name == name).count()
    }
}

/// One complete pair of school timetables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableCombination {
    /// Combination number (1, 2 or 3).
    pub id: u32,
    /// Morning school timetable.
    pub school_a: SchoolTimetable,
    /// Afternoon school timetable.
    pub school_b: SchoolTimetable,
}

impl TimetableCombination {
    /// Creates a combination.
    pub fn new(id: u32, school_a: SchoolTimetable, school_b: SchoolTimetable) -> Self {
        Self {
            id,
            school_a,
            school_b,
        }
    }

    /// Both timetables, School A first.
    pub fn timetables(&self) -> [&SchoolTimetable; 2] {
        [&self.school_a, &self.school_b]
    }

    /// Periods taught by the named teacher across both schools.
    pub fn periods_for_teacher(&self, name: &str) -> usize {
        self.timetables()
            .iter()
            .map(|t| t.periods_for_teacher(name))
            .sum()
    }
}
