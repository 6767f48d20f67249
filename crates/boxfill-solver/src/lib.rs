//! boxfill Solver - the search engines
//!
//! This crate provides:
//! - The [`SearchEngine`] step contract
//! - Local search (hill climbing, simulated annealing) with pluggable
//!   acceptors, foragers and cooling schedules
//! - Backtracking search over any [`ConstraintProblem`](boxfill_core::ConstraintProblem)
//! - Termination helpers: step budgets, stagnation counters, convergence windows

pub mod engine;
pub mod phase;
pub mod termination;

pub use engine::SearchEngine;
pub use phase::backtracking::BacktrackingSearch;
pub use phase::localsearch::{
    Acceptor, BestScoreForager, CoolingSchedule, FirstCandidateForager, HillClimbingAcceptor,
    LocalSearchForager, LocalSearchPhase, SimulatedAnnealingAcceptor,
};
pub use termination::{ConvergenceWindow, StagnationCounter, StepBudget};
