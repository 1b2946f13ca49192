//! Fitness-proportionate parent selection.
//!
//! The genetic engine draws a full replacement set every generation:
//! `population_size` schedules sampled with replacement, weighted by
//! fitness share. A generation whose total fitness is zero (every
//! schedule has a conflict) degenerates to uniform sampling — that is a
//! documented fallback, not an error.

use crate::model::{FitnessScore, Schedule};
use rand::Rng;

/// Samples `population.len()` schedules with replacement, weighted by
/// `fitness_scores`.
///
/// Weight of an individual is `fitness / total`. When `total == 0` every
/// individual is drawn uniformly (probability `1/n` each).
///
/// # Panics
/// Panics if `population` is empty or the score slice length differs.
pub fn select_population<R: Rng>(
    population: &[Schedule],
    fitness_scores: &[FitnessScore],
    rng: &mut R,
) -> Vec<Schedule> {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    assert_eq!(
        population.len(),
        fitness_scores.len(),
        "one fitness score per schedule"
    );

    let n = population.len();
    let total: f64 = fitness_scores.iter().sum();

    if total <= 0.0 {
        // Degenerate generation: all conflicts. Uniform with replacement.
        return (0..n)
            .map(|_| population[rng.random_range(0..n)].clone())
            .collect();
    }

    (0..n)
        .map(|_| population[roulette_spin(fitness_scores, total, rng)].clone())
        .collect()
}

/// One roulette-wheel draw: linear scan over cumulative weights.
fn roulette_spin<R: Rng>(fitness_scores: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &score) in fitness_scores.iter().enumerate() {
        cumulative += score;
        if cumulative > threshold {
            return i;
        }
    }
    fitness_scores.len() - 1 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Assignment, GridConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Pairwise-distinct schedules, so each selected clone maps back to
    /// exactly one source index.
    fn make_population(grid: &GridConfig, n: usize) -> Vec<Schedule> {
        assert!(n <= grid.classrooms);
        (0..n)
            .map(|i| {
                Schedule::new(
                    (0..grid.courses)
                        .map(|course| Assignment {
                            classroom: i,
                            timeslot: course % grid.timeslots,
                        })
                        .collect(),
                )
            })
            .collect()
    }

    /// Count how often each source index gets selected over many trials.
    fn selection_counts(
        population: &[Schedule],
        scores: &[f64],
        trials: usize,
        seed: u64,
    ) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut counts = vec![0usize; population.len()];
        for _ in 0..trials {
            let selected = select_population(population, scores, &mut rng);
            for s in &selected {
                // Map each selected schedule back to its source index.
                let idx = population.iter().position(|p| p == s).unwrap();
                counts[idx] += 1;
            }
        }
        counts
    }

    #[test]
    fn test_selected_set_has_population_size() {
        let grid = GridConfig::new(10, 6, 28).unwrap();
        let population = make_population(&grid, 8);
        let scores: Vec<f64> = population.iter().map(|s| grid.fitness(s)).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let selected = select_population(&population, &scores, &mut rng);
        assert_eq!(selected.len(), 8);
    }

    #[test]
    fn test_zero_total_fitness_is_roughly_uniform() {
        // Four distinct schedules, all scored 0: every index should be
        // drawn with frequency ~ 1/4 over many trials.
        let grid = GridConfig::new(4, 4, 3).unwrap();
        let population = make_population(&grid, 4);
        let scores = vec![0.0; 4];

        let counts = selection_counts(&population, &scores, 2500, 42);
        let draws: usize = counts.iter().sum();
        assert_eq!(draws, 10_000);
        for &c in &counts {
            // Expected 2500 each; allow a generous statistical margin.
            assert!(
                (2000..=3000).contains(&c),
                "expected roughly uniform fallback, got {counts:?}"
            );
        }
    }

    #[test]
    fn test_weighted_selection_favors_fitter() {
        let grid = GridConfig::new(4, 4, 3).unwrap();
        let population = make_population(&grid, 4);
        let scores = vec![0.8, 0.1, 0.05, 0.05];

        let counts = selection_counts(&population, &scores, 1000, 42);
        assert!(
            counts[0] > counts[1] && counts[1] > counts[2],
            "selection frequency should follow fitness share, got {counts:?}"
        );
        // Index 0 holds 80% of the total weight.
        assert!(counts[0] > 3000, "got {counts:?}");
    }

    #[test]
    fn test_zero_weight_individual_never_selected() {
        let grid = GridConfig::new(4, 4, 3).unwrap();
        let population = make_population(&grid, 4);
        let scores = vec![0.5, 0.5, 0.5, 0.0];

        let counts = selection_counts(&population, &scores, 500, 42);
        assert_eq!(counts[3], 0, "zero-fitness schedule must not be drawn");
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        select_population(&[], &[], &mut rng);
    }
}
