//! Class timetable generation for two schools sharing one teacher pool.
//!
//! Five subject teachers serve a morning school (Monday to Saturday) and
//! an afternoon school (Thursday to Saturday). Each request yields three
//! alternative timetable combinations built by round-robin rotation.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Teacher`, `Subject`, `School`, `Session`,
//!   `TimeSlot`, `DaySchedule`, `SchoolTimetable`, `TimetableCombination`
//! - **`rotation`**: Rotation engine (teacher rotation, day assignment, shuffle)
//! - **`combination`**: Combination builder and request payload
//! - **`validation`**: Request checks (empty school or teacher names)
//! - **`export`**: Table rows, workload summary, workbook layout
//!
//! # Example
//!
//! ```
//! use u_timetable::combination::{generate_combinations, TeacherNames};
//! use u_timetable::export::timetable_rows;
//!
//! let names = TeacherNames::new("Alice", "Bob", "Cara", "Dee", "Eve");
//! let combos = generate_combinations("Green High", "Blue Valley", &names).unwrap();
//!
//! let monday = &timetable_rows(&combos[0].school_a)[0];
//! assert_eq!(monday.cells[0], "Maths (Alice)");
//! ```

pub mod combination;
pub mod error;
pub mod export;
pub mod models;
pub mod rotation;
pub mod validation;

pub use error::{Result, TimetableError};
