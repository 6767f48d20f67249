//! Termination helpers.
//!
//! Engines report termination through [`StepOutcome`](boxfill_core::StepOutcome);
//! these counters decide when to do so:
//! - [`StepBudget`]: hard cap on steps
//! - [`StagnationCounter`]: consecutive non-accepting steps
//! - [`ConvergenceWindow`]: flat objective over recent steps (driver side)

mod budget;
mod convergence;
mod stagnation;

pub use budget::StepBudget;
pub use convergence::ConvergenceWindow;
pub use stagnation::StagnationCounter;

#[cfg(test)]
mod tests;
