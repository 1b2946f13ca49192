//! Shared data model: search grid, course assignments, schedules, and the
//! fitness evaluator used by both engines.
//!
//! The grid is a discrete `classrooms × timeslots` space. A [`Schedule`]
//! places one [`Assignment`] per course; both search engines explore the
//! same space and score candidates with [`GridConfig::fitness`].

use crate::error::ConfigError;
use rand::Rng;
use std::collections::HashSet;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scalar fitness in `[0, 1]`.
///
/// 0 means at least two courses collide on the same (classroom, timeslot)
/// cell; otherwise the value is the fraction of grid cells covered by
/// distinct assignments.
pub type FitnessScore = f64;

/// Dimensions of the search space.
///
/// Passed explicitly into every constructor and stochastic operator —
/// there is no process-wide grid state.
///
/// # Examples
///
/// ```
/// use slotplan::GridConfig;
///
/// let grid = GridConfig::new(10, 6, 28).unwrap();
/// assert_eq!(grid.cells(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Number of classrooms (rows of the grid).
    pub classrooms: usize,

    /// Number of timeslots (columns of the grid).
    pub timeslots: usize,

    /// Number of courses to place. One gene/dimension per course.
    pub courses: usize,
}

impl GridConfig {
    /// Creates a validated grid configuration.
    ///
    /// Returns [`ConfigError::InvalidGrid`] if any dimension is zero.
    pub fn new(classrooms: usize, timeslots: usize, courses: usize) -> Result<Self, ConfigError> {
        let grid = Self {
            classrooms,
            timeslots,
            courses,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Validates the dimensions.
    ///
    /// Useful when the struct was built with literal syntax instead of
    /// [`GridConfig::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.classrooms == 0 {
            return Err(ConfigError::InvalidGrid("classrooms"));
        }
        if self.timeslots == 0 {
            return Err(ConfigError::InvalidGrid("timeslots"));
        }
        if self.courses == 0 {
            return Err(ConfigError::InvalidGrid("courses"));
        }
        Ok(())
    }

    /// Total number of (classroom, timeslot) cells in the grid.
    pub fn cells(&self) -> usize {
        self.classrooms * self.timeslots
    }

    /// Draws one uniformly random in-range assignment.
    pub fn random_assignment<R: Rng>(&self, rng: &mut R) -> Assignment {
        Assignment {
            classroom: rng.random_range(0..self.classrooms),
            timeslot: rng.random_range(0..self.timeslots),
        }
    }

    /// Scores a schedule.
    ///
    /// Single pass over the assignments: the first repeated assignment
    /// short-circuits to 0.0 (a conflict is a result, not an error).
    /// A conflict-free schedule scores `distinct / cells` — coverage of
    /// the whole grid, not of the course count, so a grid larger than the
    /// course count caps the achievable fitness below 1.0.
    pub fn fitness(&self, schedule: &Schedule) -> FitnessScore {
        let mut seen = HashSet::with_capacity(schedule.len());
        for &assignment in schedule.iter() {
            if !seen.insert(assignment) {
                return 0.0;
            }
        }
        seen.len() as f64 / self.cells() as f64
    }
}

/// One course's placement: a (classroom, timeslot) cell.
///
/// Plain value type with no identity of its own; two assignments to the
/// same cell are equal, which is exactly what conflict detection needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    /// Classroom index in `[0, grid.classrooms)`.
    pub classroom: usize,

    /// Timeslot index in `[0, grid.timeslots)`.
    pub timeslot: usize,
}

/// An ordered sequence of assignments, one per course index.
///
/// Position *i* is course *i*. Length always equals `grid.courses`;
/// search operators mutate cells but never grow or shrink the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    assignments: Vec<Assignment>,
}

impl Schedule {
    /// Wraps an assignment vector as a schedule.
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    /// Draws `grid.courses` uniform assignments with no uniqueness
    /// constraint. Used for PSO particle positions, where conflicts are
    /// resolved by the search itself.
    pub fn random<R: Rng>(grid: &GridConfig, rng: &mut R) -> Self {
        let assignments = (0..grid.courses)
            .map(|_| grid.random_assignment(rng))
            .collect();
        Self { assignments }
    }

    /// Draws `grid.courses` *distinct* uniform assignments by rejection
    /// sampling, so the sequence length equals the course count and the
    /// initial fitness is nonzero.
    ///
    /// When the grid has fewer cells than courses, distinctness is
    /// impossible and this falls back to [`Schedule::random`].
    pub fn random_distinct<R: Rng>(grid: &GridConfig, rng: &mut R) -> Self {
        if grid.courses > grid.cells() {
            return Self::random(grid, rng);
        }
        let mut seen = HashSet::with_capacity(grid.courses);
        let mut assignments = Vec::with_capacity(grid.courses);
        while assignments.len() < grid.courses {
            let candidate = grid.random_assignment(rng);
            if seen.insert(candidate) {
                assignments.push(candidate);
            }
        }
        Self { assignments }
    }

    /// Number of courses in the schedule.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// True if the schedule holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterates over the per-course assignments.
    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.assignments.iter()
    }

    /// The assignments as a slice.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Replaces the assignment of one course.
    ///
    /// # Panics
    /// Panics if `course` is out of bounds.
    pub fn set(&mut self, course: usize, assignment: Assignment) {
        self.assignments[course] = assignment;
    }
}

impl Index<usize> for Schedule {
    type Output = Assignment;

    fn index(&self, course: usize) -> &Assignment {
        &self.assignments[course]
    }
}

/// Builds the genetic engine's initial population: `population_size`
/// schedules with distinct assignments (see [`Schedule::random_distinct`]).
pub fn generate_initial_population<R: Rng>(
    grid: &GridConfig,
    population_size: usize,
    rng: &mut R,
) -> Vec<Schedule> {
    (0..population_size)
        .map(|_| Schedule::random_distinct(grid, rng))
        .collect()
}
