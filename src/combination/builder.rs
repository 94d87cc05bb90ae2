//! Combination builder.
//!
//! # Algorithm
//!
//! For combination index `i` in 0..3:
//! 1. Pick teacher orders. `i == 0`: School A gets the pool as-is and
//!    School B gets it reversed. Otherwise each school gets its own
//!    independent shuffle of the pool.
//! 2. Build School A with seed `i` and School B with seed `i + 2`.
//!    Day `d` of a school uses rotation offset `(d + seed) mod n`.
//! 3. Emit the pair as combination `i + 1`.
//!
//! Combination 1 depends only on the teacher names; 2 and 3 draw fresh
//! randomness on every call.

use rand::Rng;
use tracing::{debug, info, warn};

use super::request::{teacher_pool, TeacherNames, TimetableRequest};
use crate::error::{Result, TimetableError};
use crate::models::{School, SchoolTimetable, Teacher, TimetableCombination};
use crate::rotation::{assign_day, shuffle};
use crate::validation::validate_request;

/// Number of combinations produced per generation call.
pub const COMBINATION_COUNT: usize = 3;

/// Offset between the two schools' combination seeds.
const SCHOOL_B_SEED_OFFSET: usize = 2;

/// Builds one school's timetable from an ordered teacher list.
///
/// # Errors
/// Returns [`TimetableError::EmptyTeacherPool`] if `teachers` is empty.
pub fn build_school_timetable(
    school: &School,
    teachers: &[Teacher],
    combination_seed: usize,
) -> Result<SchoolTimetable> {
    if teachers.is_empty() {
        return Err(TimetableError::EmptyTeacherPool);
    }

    let schedule = school
        .days
        .iter()
        .enumerate()
        .map(|(day_index, day)| {
            let rotation_offset = (day_index + combination_seed % teachers.len()) % teachers.len();
            assign_day(day, teachers, rotation_offset)
        })
        .collect::<Result<Vec<_>>>()?;

    let timetable = SchoolTimetable::new(school.clone(), schedule);
    debug!(
        school = %school.id,
        seed = combination_seed,
        days = timetable.schedule.len(),
        slots = timetable.slot_count(),
        "school timetable built"
    );

    Ok(timetable)
}

/// Generates the three combinations using the thread-local RNG.
///
/// # Errors
/// Returns [`TimetableError::InvalidInput`] if any name is empty; no
/// combinations are produced in that case.
///
/// # Example
///
/// ```
/// use u_timetable::combination::{generate_combinations, TeacherNames};
///
/// let names = TeacherNames::new("Alice", "Bob", "Cara", "Dee", "Eve");
/// let combos = generate_combinations("Green High", "Blue Valley", &names).unwrap();
/// assert_eq!(combos.len(), 3);
/// assert_eq!(combos[0].school_a.schedule.len(), 6);
/// assert_eq!(combos[0].school_b.schedule.len(), 3);
/// ```
pub fn generate_combinations(
    school_a_name: &str,
    school_b_name: &str,
    teacher_names: &TeacherNames,
) -> Result<Vec<TimetableCombination>> {
    generate_combinations_with_rng(school_a_name, school_b_name, teacher_names, &mut rand::rng())
}

/// Generates the three combinations with an injected randomness source.
///
/// Only combinations 2 and 3 consume randomness.
pub fn generate_combinations_with_rng<R: Rng + ?Sized>(
    school_a_name: &str,
    school_b_name: &str,
    teacher_names: &TeacherNames,
    rng: &mut R,
) -> Result<Vec<TimetableCombination>> {
    let request = TimetableRequest::new(school_a_name, school_b_name, teacher_names.clone());
    if let Err(errors) = validate_request(&request) {
        let err = TimetableError::from(errors);
        warn!(error = %err, "timetable request rejected");
        return Err(err);
    }

    let pool = teacher_pool(teacher_names);
    let school_a = School::school_a(school_a_name);
    let school_b = School::school_b(school_b_name);

    let mut combinations = Vec::with_capacity(COMBINATION_COUNT);
    for i in 0..COMBINATION_COUNT {
        let (order_a, order_b) = if i == 0 {
            let mut reversed = pool.clone();
            reversed.reverse();
            (pool.clone(), reversed)
        } else {
            (shuffle(&pool, rng), shuffle(&pool, rng))
        };

        let timetable_a = build_school_timetable(&school_a, &order_a, i)?;
        let timetable_b = build_school_timetable(&school_b, &order_b, i + SCHOOL_B_SEED_OFFSET)?;

        combinations.push(TimetableCombination::new(
            (i + 1) as u32,
            timetable_a,
            timetable_b,
        ));
    }

    info!(
        school_a = %school_a.name,
        school_b = %school_b.name,
        combinations = combinations.len(),
        "timetable combinations generated"
    );

    Ok(combinations)
}

/// Stateless entry point for the generate/regenerate workflow.
///
/// Holds nothing between calls: every call builds a fresh set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimetableGenerator;

impl TimetableGenerator {
    /// Creates a generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates combinations for a request.
    pub fn generate(&self, request: &TimetableRequest) -> Result<Vec<TimetableCombination>> {
        generate_combinations(
            &request.school_a_name,
            &request.school_b_name,
            &request.teachers,
        )
    }

    /// Generates combinations for a request with an injected RNG.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        request: &TimetableRequest,
        rng: &mut R,
    ) -> Result<Vec<TimetableCombination>> {
        generate_combinations_with_rng(
            &request.school_a_name,
            &request.school_b_name,
            &request.teachers,
            rng,
        )
    }

    /// Discards any previous result and generates a fresh set.
    ///
    /// Identical to [`generate`](Self::generate): combination 1 is
    /// reproduced, combinations 2 and 3 are reshuffled.
    pub fn regenerate(&self, request: &TimetableRequest) -> Result<Vec<TimetableCombination>> {
        self.generate(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, Subject};
    use rand::rngs::SmallRng;
    use rand::{RngCore, SeedableRng};

    /// Always yields the maximum value, so every Fisher-Yates draw picks
    /// `j == i` and the shuffle leaves the order unchanged.
    struct MaxRng;

    impl RngCore for MaxRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(u8::MAX);
        }
    }

    fn names() -> TeacherNames {
        TeacherNames::new("Alice", "Bob", "Cara", "Dee", "Eve")
    }

    fn generate_seeded(seed: u64) -> Vec<TimetableCombination> {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_combinations_with_rng("Green High", "Blue Valley", &names(), &mut rng).unwrap()
    }

    fn day_names(t: &SchoolTimetable) -> Vec<&str> {
        t.schedule.iter().map(|d| d.day.as_str()).collect()
    }

    #[test]
    fn test_three_combinations_in_order() {
        let combos = generate_seeded(1);
        let ids: Vec<u32> = combos.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_structure_of_every_combination() {
        for combo in generate_seeded(2) {
            assert_eq!(
                day_names(&combo.school_a),
                vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
            );
            assert_eq!(day_names(&combo.school_b), vec!["Thursday", "Friday", "Saturday"]);
            assert_eq!(combo.school_a.school.session, Session::Morning);
            assert_eq!(combo.school_b.school.session, Session::Afternoon);

            for timetable in combo.timetables() {
                for day in &timetable.schedule {
                    let periods: Vec<u8> = day.slots.iter().map(|s| s.period).collect();
                    assert_eq!(periods, vec![1, 2, 3, 4]);

                    let mut ids = day.teacher_ids();
                    ids.sort();
                    ids.dedup();
                    assert_eq!(ids.len(), 4, "duplicate teacher on {}", day.day);

                    for slot in &day.slots {
                        assert_eq!(slot.subject, slot.teacher.subject);
                    }
                }
            }
        }
    }

    #[test]
    fn test_worked_example_school_a() {
        let combos = generate_seeded(3);
        let a = &combos[0].school_a;
        assert_eq!(a.school.name, "Green High");

        let monday = a.day("Monday").unwrap();
        let names: Vec<&str> = monday.slots.iter().map(|s| s.teacher.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Cara", "Dee"]);

        let tuesday = a.day("Tuesday").unwrap();
        let names: Vec<&str> = tuesday.slots.iter().map(|s| s.teacher.name.as_str()).collect();
        assert_eq!(names, vec!["Cara", "Dee", "Eve", "Alice"]);
        assert_eq!(tuesday.slots[3].subject, Subject::Maths);
    }

    #[test]
    fn test_combination_one_school_b_uses_reversed_pool() {
        let combos = generate_seeded(4);
        let b = &combos[0].school_b;
        // reversed = [5,4,3,2,1]; Thursday: day 0, seed 2 → offset 2
        // rotated = [3,2,1,5,4]; period 1 → rotated[2]
        assert_eq!(b.day("Thursday").unwrap().teacher_ids(), vec!["1", "5", "4", "3"]);
        // Friday: offset 3, rotated = [2,1,5,4,3]; period 1 → rotated[3]
        assert_eq!(b.day("Friday").unwrap().teacher_ids(), vec!["4", "3", "2", "1"]);
        // Saturday: offset 4, rotated = [1,5,4,3,2]; period 1 → rotated[4]
        assert_eq!(b.day("Saturday").unwrap().teacher_ids(), vec!["2", "1", "5", "4"]);
    }

    #[test]
    fn test_combination_one_is_deterministic() {
        let first = generate_seeded(10);
        let second = generate_seeded(11);
        assert_eq!(first[0], second[0]);

        let unseeded = generate_combinations("Green High", "Blue Valley", &names()).unwrap();
        assert_eq!(unseeded[0], first[0]);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        assert_eq!(generate_seeded(5), generate_seeded(5));
    }

    #[test]
    fn test_shuffled_combinations_vary_with_rng() {
        let base = generate_seeded(0);
        let varied = (1..20).any(|seed| {
            let other = generate_seeded(seed);
            other[1] != base[1] || other[2] != base[2]
        });
        assert!(varied, "combinations 2 and 3 should depend on the RNG");
    }

    #[test]
    fn test_empty_name_rejected_without_results() {
        let mut n = names();
        n.biology = "  ".into();
        let err = generate_combinations("Green High", "Blue Valley", &n).unwrap_err();
        match err {
            TimetableError::InvalidInput { fields, .. } => {
                assert_eq!(fields, vec!["teachers.biology"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = generate_combinations("", "Blue Valley", &names()).unwrap_err();
        assert!(matches!(err, TimetableError::InvalidInput { .. }));
    }

    #[test]
    fn test_build_school_timetable_offsets() {
        let pool = teacher_pool(&names());
        let school = School::school_b("Blue Valley");
        let t = build_school_timetable(&school, &pool, 4).unwrap();
        // Thursday offset 4, Friday offset 0 (wraps), Saturday offset 1
        assert_eq!(t.schedule[1].teacher_ids(), vec!["1", "2", "3", "4"]);
        assert_eq!(t.schedule[2].teacher_ids(), vec!["3", "4", "5", "1"]);
    }

    #[test]
    fn test_shuffled_combinations_use_school_seeds() {
        let combos =
            generate_combinations_with_rng("Green High", "Blue Valley", &names(), &mut MaxRng)
                .unwrap();
        let pool = teacher_pool(&names());
        let school_a = School::school_a("Green High");
        let school_b = School::school_b("Blue Valley");

        for (i, combo) in combos.iter().enumerate().skip(1) {
            assert_eq!(
                combo.school_a,
                build_school_timetable(&school_a, &pool, i).unwrap(),
                "combination {} school A",
                combo.id
            );
            assert_eq!(
                combo.school_b,
                build_school_timetable(&school_b, &pool, i + 2).unwrap(),
                "combination {} school B",
                combo.id
            );
        }
    }

    #[test]
    fn test_build_school_timetable_huge_seed_reduces_first() {
        let pool = teacher_pool(&names());
        let school = School::school_a("Green High");
        let t = build_school_timetable(&school, &pool, usize::MAX).unwrap();
        let reduced = build_school_timetable(&school, &pool, usize::MAX % pool.len()).unwrap();
        assert_eq!(t, reduced);
    }

    #[test]
    fn test_build_school_timetable_empty_pool() {
        let school = School::school_a("Green High");
        let err = build_school_timetable(&school, &[], 0).unwrap_err();
        assert_eq!(err, TimetableError::EmptyTeacherPool);
    }

    #[test]
    fn test_generator_regenerate_keeps_combination_one() {
        let generator = TimetableGenerator::new();
        let request = TimetableRequest::new("Green High", "Blue Valley", names());
        let first = generator.generate(&request).unwrap();
        let again = generator.regenerate(&request).unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(again.len(), 3);
        assert_eq!(first[0], again[0]);
    }

    #[test]
    fn test_generator_with_rng_matches_free_function() {
        let generator = TimetableGenerator::new();
        let request = TimetableRequest::new("Green High", "Blue Valley", names());
        let via_generator = generator
            .generate_with_rng(&request, &mut SmallRng::seed_from_u64(8))
            .unwrap();
        assert_eq!(via_generator, generate_seeded(8));
    }
}
