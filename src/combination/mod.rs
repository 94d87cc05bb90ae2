//! Combination builder.
//!
//! Runs the rotation engine over every day of both schools, three times,
//! to produce the alternative timetable combinations.
//!
//! # Usage
//!
//! ```
//! use u_timetable::combination::{TimetableGenerator, TimetableRequest, TeacherNames};
//!
//! let request = TimetableRequest::new(
//!     "Green High",
//!     "Blue Valley",
//!     TeacherNames::new("Alice", "Bob", "Cara", "Dee", "Eve"),
//! );
//! let combos = TimetableGenerator::new().generate(&request).unwrap();
//! assert_eq!(combos.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

mod builder;
mod request;

pub use builder::{
    build_school_timetable, generate_combinations, generate_combinations_with_rng,
    TimetableGenerator, COMBINATION_COUNT,
};
pub use request::{teacher_pool, TeacherNames, TimetableRequest};
