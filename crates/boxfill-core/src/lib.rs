//! boxfill Core - shared types and traits for the search framework
//!
//! This crate provides the abstractions every other boxfill crate builds on:
//! - The terminal-condition taxonomy ([`SearchError`])
//! - The per-step result type ([`StepOutcome`])
//! - Domain traits for local search and backtracking problems
//! - The reproducible random number generator used by all engines

pub mod domain;
pub mod error;
pub mod outcome;
pub mod rng;

pub use domain::{
    ConstraintProblem, Neighborhood, NeighborhoodMode, Objective, ResumeToken, SearchProblem,
};
pub use error::{Result, SearchError};
pub use outcome::StepOutcome;
pub use rng::{rng_from_seed, SearchRng};
