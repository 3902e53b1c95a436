//! GA-based timetable optimization.
//!
//! Implements a direct grid encoding: a chromosome is the weekly grid
//! itself, one optional assignment per (day, slot) cell. Double-booking
//! within a cell is therefore impossible by construction; the evaluator
//! penalizes the soft structure (workload, back-to-back runs, lunch
//! coverage, preferences) and rewards spread.
//!
//! # Submodules
//!
//! - [`chromosome`]: Grid-shaped candidate representation
//! - [`operators`]: Tournament selection, day-point crossover, mutations
//! - [`fitness`]: Weighted penalty/reward evaluator
//! - [`problem`]: Eligibility precomputation and operator wiring
//! - [`config`] / [`runner`]: Loop parameters and the generational driver

pub mod chromosome;
pub mod config;
pub mod fitness;
pub mod operators;
pub mod problem;
pub mod runner;

pub use chromosome::{SlotAssignment, Timetable};
pub use config::GaConfig;
pub use fitness::{FitnessBreakdown, FitnessEvaluator, FitnessWeights};
pub use problem::{Eligibility, TimetableProblem, UnmetReason, UnmetRequirement};
pub use runner::{GaResult, GaRunner};
