//! boxfill - 2-D box filling by local search and backtracking
//!
//! Rectangles are packed into square boxes of side `L`; the search tries to
//! empty boxes out. This crate wires the pieces together:
//! - Free entry points over any [`SearchProblem`]
//! - [`Engine`] construction from a [`BoxFillConfig`]
//! - A step [`driver`] that runs an engine to a stop condition
//! - Opt-in [`console`] logging
//!
//! # Example
//!
//! ```
//! use boxfill::prelude::*;
//!
//! let instance = BoxFilling::new(10, 12, 4, 4).with_box_limit(20);
//! let mut rng = rng_from_seed(Some(3));
//!
//! let packing = boxfill::generate_feasible_solution(&instance, &mut rng).unwrap();
//! assert!(boxfill::is_feasible(&instance, &packing));
//!
//! let scores = boxfill::objective(&instance, &[packing.clone()]);
//! assert_eq!(scores.len(), 1);
//!
//! let compacted = boxfill::compact_boxes(&packing);
//! assert_eq!(compacted.num_boxes(), compacted.box_counts().len());
//! ```

pub mod console;
pub mod driver;
mod engine;

pub use engine::{
    geometric_instance, neighborhood_mode, relaxed_instance, rule_based_instance, Engine,
    LocalSearchEngine,
};

pub use boxfill_config::{
    AlgorithmKind, BoxFillConfig, ConfigError, CoolingScheduleKind, InstanceConfig,
    NeighborhoodKind, ProblemVariant,
};
pub use boxfill_core::{
    rng_from_seed, NeighborhoodMode, SearchError, SearchProblem, SearchRng, StepOutcome,
};
pub use boxfill_packing::{
    compact_boxes, BoxFilling, BoxFillingObjective, Packing, PermutationSolution, Rectangle,
    RelaxedBoxFilling, RelaxedPacking, RuleBasedBoxFilling,
};
pub use boxfill_solver::SearchEngine;
pub use driver::{run, RunError, RunReport, StopReason};

use boxfill_core::Objective;

/// Generates a random feasible starting Solution for `instance`.
///
/// # Errors
///
/// [`SearchError::GenerationFailure`] when the instance parameters are
/// invalid or the retry budget runs out.
pub fn generate_feasible_solution<P: SearchProblem>(
    instance: &P,
    rng: &mut SearchRng,
) -> Result<P::Solution, SearchError> {
    instance.generate_feasible_solution(rng)
}

/// Scores a batch of Solutions in order. Higher is better.
pub fn objective<P: SearchProblem>(instance: &P, solutions: &[P::Solution]) -> Vec<f64> {
    instance.objective().evaluate(solutions)
}

/// Returns true if `solution` satisfies every constraint of `instance`.
pub fn is_feasible<P: SearchProblem>(instance: &P, solution: &P::Solution) -> bool {
    instance.is_feasible(solution)
}

pub mod prelude {
    pub use super::{
        rng_from_seed, BoxFillConfig, BoxFilling, Engine, Packing, RuleBasedBoxFilling,
        SearchEngine, SearchProblem, StepOutcome,
    };
}
