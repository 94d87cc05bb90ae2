//! Timetable domain models.
//!
//! Provides the data types shared by the rotation engine, the
//! combination builder, and export consumers.
//!
//! # Structure
//!
//! | Type | Holds |
//! |------|-------|
//! | TimetableCombination | one SchoolTimetable per school |
//! | SchoolTimetable | School + one DaySchedule per operating day |
//! | DaySchedule | day name + four TimeSlots |
//! | TimeSlot | period number + Teacher + Subject |

mod school;
mod teacher;
mod timetable;

pub use school::{School, Session, PERIODS_PER_SESSION, SCHOOL_A_DAYS, SCHOOL_B_DAYS};
pub use teacher::{Subject, Teacher};
pub use timetable::{DaySchedule, SchoolTimetable, TimeSlot, TimetableCombination};
