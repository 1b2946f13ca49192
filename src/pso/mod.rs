//! Particle-swarm search engine.
//!
//! A swarm of identity-bearing particles explores the same discrete
//! assignment grid as the genetic engine. Each iteration evaluates every
//! particle, updates personal and global bests (strict improvement only),
//! then applies the classic velocity rule and a round-and-clamp position
//! update that keeps positions on the integer grid.
//!
//! # Key Types
//!
//! - [`PsoConfig`]: Swarm size, iteration budget, inertia/cognitive/social weights
//! - [`Particle`] / [`Velocity`]: Per-particle state
//! - [`PsoRunner`]: Executes the iteration loop
//! - [`PsoResult`]: Final `(Schedule, FitnessScore)` plus the monotone
//!   global-best history
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"

mod config;
mod particle;
mod runner;

pub use config::PsoConfig;
pub use particle::{Particle, Velocity};
pub use runner::{PsoResult, PsoRunner};
