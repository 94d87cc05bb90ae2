//! Round-robin teacher rotation.
//!
//! Pure functions that turn an ordered teacher list and an offset into
//! one day's period assignments, plus the Fisher-Yates shuffle used to
//! vary combinations 2 and 3.
//!
//! # Rotation Policy
//!
//! For a day with offset `k` over `n` teachers, the list is first
//! left-rotated by `k`, then period `p` takes index `(p - 1 + k) mod n`
//! of the rotated list. The offset is therefore applied twice; period 1
//! lands on original index `2k mod n`.
//!
//! # Usage
//!
//! ```
//! use u_timetable::models::{Subject, Teacher};
//! use u_timetable::rotation::assign_day;
//!
//! let pool = vec![
//!     Teacher::new("1", "Alice", Subject::Maths),
//!     Teacher::new("2", "Bob", Subject::Maths),
//!     Teacher::new("3", "Cara", Subject::Physics),
//!     Teacher::new("4", "Dee", Subject::Chemistry),
//!     Teacher::new("5", "Eve", Subject::Biology),
//! ];
//! let tuesday = assign_day("Tuesday", &pool, 1).unwrap();
//! assert_eq!(tuesday.slots[0].teacher.name, "Cara");
//! ```

use rand::Rng;

use crate::error::{Result, TimetableError};
use crate::models::{DaySchedule, Teacher, TimeSlot, PERIODS_PER_SESSION};

/// Returns a copy of `teachers` cyclically left-rotated by `shift_count`.
///
/// The element at `shift_count mod len` becomes first. An empty input
/// yields an empty output.
pub fn rotate_teachers(teachers: &[Teacher], shift_count: usize) -> Vec<Teacher> {
    let mut rotated = teachers.to_vec();
    if !rotated.is_empty() {
        rotated.rotate_left(shift_count % teachers.len());
    }
    rotated
}

/// Assigns a teacher to each of the day's four periods.
///
/// # Errors
/// Returns [`TimetableError::EmptyTeacherPool`] if `teachers` is empty.
pub fn assign_day(day: &str, teachers: &[Teacher], rotation_offset: usize) -> Result<DaySchedule> {
    if teachers.is_empty() {
        return Err(TimetableError::EmptyTeacherPool);
    }

    let rotated = rotate_teachers(teachers, rotation_offset);
    let slots = (1..=PERIODS_PER_SESSION)
        .map(|period| {
            let index = (usize::from(period) - 1 + rotation_offset % teachers.len()) % teachers.len();
            TimeSlot::new(period, rotated[index].clone())
        })
        .collect();

    Ok(DaySchedule::new(day, slots))
}

/// Returns the items in a uniformly random order (Fisher-Yates).
///
/// The input is never mutated. Randomness comes entirely from `rng`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
