//! Schedule reporting.
//!
//! External collaborator over the engines' `(Schedule, FitnessScore)`
//! output: projects a schedule into a classroom × timeslot occupancy
//! table. Lives outside the search core — swapping renderers requires no
//! change to either engine.

use crate::model::{GridConfig, Schedule};
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Course counts per (classroom, timeslot) cell.
///
/// A conflict-free schedule has every count at 0 or 1; counts above 1
/// mark double-booked cells.
///
/// # Examples
///
/// ```
/// use slotplan::report::OccupancyTable;
/// use slotplan::{Assignment, GridConfig, Schedule};
///
/// let grid = GridConfig::new(2, 2, 3).unwrap();
/// let schedule = Schedule::new(vec![
///     Assignment { classroom: 0, timeslot: 0 },
///     Assignment { classroom: 0, timeslot: 1 },
///     Assignment { classroom: 1, timeslot: 0 },
/// ]);
/// let table = OccupancyTable::from_schedule(&grid, &schedule);
/// assert_eq!(table.count(0, 0), 1);
/// assert_eq!(table.count(1, 1), 0);
/// assert_eq!(table.classroom_total(0), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OccupancyTable {
    classrooms: usize,
    timeslots: usize,
    counts: Vec<usize>,
}

impl OccupancyTable {
    /// Tallies a schedule's assignments into the grid.
    pub fn from_schedule(grid: &GridConfig, schedule: &Schedule) -> Self {
        let mut counts = vec![0usize; grid.cells()];
        for a in schedule.iter() {
            counts[a.classroom * grid.timeslots + a.timeslot] += 1;
        }
        Self {
            classrooms: grid.classrooms,
            timeslots: grid.timeslots,
            counts,
        }
    }

    /// Number of courses placed in one cell.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn count(&self, classroom: usize, timeslot: usize) -> usize {
        assert!(classroom < self.classrooms, "classroom out of range");
        assert!(timeslot < self.timeslots, "timeslot out of range");
        self.counts[classroom * self.timeslots + timeslot]
    }

    /// Total courses placed in one classroom across all timeslots.
    pub fn classroom_total(&self, classroom: usize) -> usize {
        (0..self.timeslots)
            .map(|t| self.count(classroom, t))
            .sum()
    }

    /// Total courses placed in one timeslot across all classrooms.
    pub fn timeslot_total(&self, timeslot: usize) -> usize {
        (0..self.classrooms)
            .map(|c| self.count(c, timeslot))
            .sum()
    }

    /// Total courses in the table (the schedule length).
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// True if no cell holds more than one course.
    pub fn is_conflict_free(&self) -> bool {
        self.counts.iter().all(|&c| c <= 1)
    }
}

impl fmt::Display for OccupancyTable {
    /// Renders a plain-text contingency table: one row per classroom,
    /// one column per timeslot.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>10}", "")?;
        for t in 0..self.timeslots {
            write!(f, " slot {t:>2}")?;
        }
        writeln!(f)?;
        for c in 0..self.classrooms {
            write!(f, "room {c:>5}")?;
            for t in 0..self.timeslots {
                write!(f, " {:>7}", self.count(c, t))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
