//! Particle state and per-particle update rules.
//!
//! A particle's position is a whole [`Schedule`]: one grid cell per
//! course. Velocity is continuous per course and axis, but every position
//! update rounds and clamps back onto the integer grid, so positions are
//! valid coordinates at all times.

use super::config::PsoConfig;
use crate::model::{Assignment, FitnessScore, GridConfig, Schedule};
use rand::Rng;

/// Continuous velocity of one course along both grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    /// Classroom-axis component.
    pub classroom: f64,

    /// Timeslot-axis component.
    pub timeslot: f64,
}

/// Identity-bearing swarm member, created once and mutated in place
/// every iteration.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current position: one assignment per course.
    pub position: Schedule,

    /// Per-course velocity vector.
    pub velocity: Vec<Velocity>,

    /// Best position this particle has ever occupied.
    pub best: Schedule,

    /// Fitness of `position` at the last evaluation.
    pub fitness: FitnessScore,
}

impl Particle {
    /// Creates a particle at a uniformly random position with zero
    /// velocity. The personal best starts at the initial position.
    pub fn new<R: Rng>(grid: &GridConfig, rng: &mut R) -> Self {
        let position = Schedule::random(grid, rng);
        Self {
            velocity: vec![Velocity::default(); grid.courses],
            best: position.clone(),
            fitness: 0.0,
            position,
        }
    }

    /// Applies the velocity update rule for every course:
    ///
    /// `v' = w·v + c1·r1·(pbest − x) + c2·r2·(gbest − x)`
    ///
    /// One `(r1, r2)` pair is drawn per course and shared across both
    /// axes when [`PsoConfig::coupled_axis_draws`] is set; otherwise the
    /// timeslot axis draws its own pair.
    pub fn update_velocity<R: Rng>(
        &mut self,
        global_best: &Schedule,
        config: &PsoConfig,
        rng: &mut R,
    ) {
        let w = config.inertia_weight;
        let c1 = config.cognitive_weight;
        let c2 = config.social_weight;

        for course in 0..self.velocity.len() {
            let x = self.position[course];
            let pbest = self.best[course];
            let gbest = global_best[course];

            let (r1, r2): (f64, f64) = (rng.random(), rng.random());
            let v = &mut self.velocity[course];
            v.classroom = w * v.classroom
                + c1 * r1 * (pbest.classroom as f64 - x.classroom as f64)
                + c2 * r2 * (gbest.classroom as f64 - x.classroom as f64);

            let (r1, r2) = if config.coupled_axis_draws {
                (r1, r2)
            } else {
                (rng.random(), rng.random())
            };
            v.timeslot = w * v.timeslot
                + c1 * r1 * (pbest.timeslot as f64 - x.timeslot as f64)
                + c2 * r2 * (gbest.timeslot as f64 - x.timeslot as f64);
        }
    }

    /// Moves the particle: per course and axis,
    /// `x' = clamp(round(x + v))` into the grid's valid range.
    pub fn update_position(&mut self, grid: &GridConfig) {
        for course in 0..self.position.len() {
            let x = self.position[course];
            let v = self.velocity[course];
            self.position.set(
                course,
                Assignment {
                    classroom: clamp_axis(x.classroom as f64 + v.classroom, grid.classrooms),
                    timeslot: clamp_axis(x.timeslot as f64 + v.timeslot, grid.timeslots),
                },
            );
        }
    }
}

/// Rounds a continuous axis value onto `[0, count - 1]`.
fn clamp_axis(value: f64, count: usize) -> usize {
    value.round().clamp(0.0, (count - 1) as f64) as usize
}
