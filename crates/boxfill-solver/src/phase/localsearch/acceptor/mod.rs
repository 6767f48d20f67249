//! Acceptors for local search move acceptance.
//!
//! Acceptors decide whether the candidate picked by the forager replaces
//! the current Solution, given the objective delta `candidate - current`.

mod hill_climbing;
mod simulated_annealing;

use std::fmt::Debug;

use boxfill_core::SearchRng;

pub use hill_climbing::HillClimbingAcceptor;
pub use simulated_annealing::SimulatedAnnealingAcceptor;

/// Trait for accepting or rejecting moves in local search.
pub trait Acceptor: Send + Debug {
    /// Returns true if a candidate improving the objective by `delta`
    /// should be taken at `step` (1-based).
    fn is_accepted(&mut self, delta: f64, step: u64, rng: &mut SearchRng) -> bool;

    /// Called when a phase starts.
    fn phase_started(&mut self) {}
}
