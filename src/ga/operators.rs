//! Genetic operators over course-assignment schedules.
//!
//! Single-point tail-swap crossover and single-gene mutation. Both are
//! length-preserving; neither enforces assignment uniqueness — conflicts
//! introduced here are priced by the fitness evaluator, not repaired.

use crate::model::{GridConfig, Schedule};
use rand::Rng;

/// Single-point crossover.
///
/// Draws one crossover point `k` uniformly from `[1, len - 1]` and swaps
/// the tail segments:
///
/// - `child1 = parent1[..k] + parent2[k..]`
/// - `child2 = parent2[..k] + parent1[k..]`
///
/// One-course parents have no interior point and are returned as clones.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn single_point_crossover<R: Rng>(
    parent1: &Schedule,
    parent2: &Schedule,
    rng: &mut R,
) -> (Schedule, Schedule) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return (parent1.clone(), parent2.clone());
    }

    let k = rng.random_range(1..n);

    let mut child1 = Vec::with_capacity(n);
    child1.extend_from_slice(&parent1.assignments()[..k]);
    child1.extend_from_slice(&parent2.assignments()[k..]);

    let mut child2 = Vec::with_capacity(n);
    child2.extend_from_slice(&parent2.assignments()[..k]);
    child2.extend_from_slice(&parent1.assignments()[k..]);

    (Schedule::new(child1), Schedule::new(child2))
}

/// Single-gene mutation: one uniformly chosen course is reassigned to a
/// fresh uniform grid cell. Every other gene is untouched.
///
/// # Panics
/// Panics if the schedule is empty.
pub fn mutate_gene<R: Rng>(grid: &GridConfig, schedule: &mut Schedule, rng: &mut R) {
    assert!(!schedule.is_empty(), "cannot mutate an empty schedule");
    let course = rng.random_range(0..schedule.len());
    schedule.set(course, grid.random_assignment(rng));
}
