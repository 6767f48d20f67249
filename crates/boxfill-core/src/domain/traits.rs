//! Core domain traits

use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::domain::ResumeToken;
use crate::error::SearchError;
use crate::rng::SearchRng;

/// How a neighborhood enumerates candidates.
///
/// Variants that only have one way of producing neighbors ignore the mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NeighborhoodMode {
    /// Every valid single-piece move.
    Exhaustive,
    /// Only moves anchored next to occupied cells.
    ProbableFields,
    /// A few randomly sampled moves.
    #[default]
    Stochastic,
}

impl std::fmt::Display for NeighborhoodMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NeighborhoodMode::Exhaustive => write!(f, "Exhaustive"),
            NeighborhoodMode::ProbableFields => write!(f, "ProbableFields"),
            NeighborhoodMode::Stochastic => write!(f, "Stochastic"),
        }
    }
}

/// Produces the Solutions reachable from a Solution by one elementary move.
///
/// # Type Parameters
/// * `S` - The solution type
pub trait Neighborhood<S>: Send + Debug {
    /// Returns candidate neighbors of `solution`.
    ///
    /// `token` identifies the caller's current Solution; lazy neighborhoods
    /// continue their sequence while it is unchanged. An empty result means
    /// no candidate this time, which is not an error.
    fn neighbors(
        &mut self,
        solution: &S,
        mode: NeighborhoodMode,
        token: ResumeToken,
        rng: &mut SearchRng,
    ) -> Vec<S>;
}

/// Scores Solutions. Higher is better.
pub trait Objective<S>: Send + Debug {
    /// Scores every Solution of the batch, preserving order.
    fn evaluate(&self, solutions: &[S]) -> Vec<f64>;

    /// Scores a single Solution.
    fn evaluate_one(&self, solution: &S) -> f64 {
        self.evaluate(std::slice::from_ref(solution))
            .first()
            .copied()
            .unwrap_or(f64::NEG_INFINITY)
    }
}

/// A problem instance that local search can work on.
///
/// Binds one Solution representation to the Neighborhood and Objective that
/// understand it.
pub trait SearchProblem: Send + Debug {
    type Solution: Clone + Send + Debug;
    type Neighborhood: Neighborhood<Self::Solution>;
    type Objective: Objective<Self::Solution>;

    /// Generates a random feasible starting Solution.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::GenerationFailure`] when no feasible Solution is
    /// found within the instance's retry budget.
    fn generate_feasible_solution(&self, rng: &mut SearchRng)
        -> Result<Self::Solution, SearchError>;

    /// Returns true if `solution` satisfies every hard constraint.
    fn is_feasible(&self, solution: &Self::Solution) -> bool;

    /// Creates a neighborhood bound to this instance.
    fn neighborhood(&self) -> Self::Neighborhood;

    /// Creates an objective bound to this instance.
    fn objective(&self) -> Self::Objective;
}

/// A problem instance that backtracking can work on.
///
/// Variables are the things still to be placed, values are the ways one can
/// be placed. Both must be hashable so the engine can remember what it tried.
pub trait ConstraintProblem: Send + Debug {
    type Solution: Clone + Send + Debug;
    type Variable: Clone + Ord + Hash + Debug + Send;
    type Value: Clone + Eq + Hash + Debug + Send;

    /// Picks the next variable to assign from the non-empty `unassigned` set.
    fn choose_variable<'a>(
        &self,
        unassigned: &'a BTreeSet<Self::Variable>,
        solution: &Self::Solution,
    ) -> Option<&'a Self::Variable>;

    /// Enumerates candidate values in the order they should be tried,
    /// leaving out everything in `pruned`.
    fn values(
        &self,
        variable: &Self::Variable,
        solution: &Self::Solution,
        pruned: &HashSet<Self::Value>,
    ) -> Vec<Self::Value>;

    /// Returns true if `value` can be assigned to `variable` in `solution`.
    fn is_feasible_value(
        &self,
        value: &Self::Value,
        variable: &Self::Variable,
        solution: &Self::Solution,
    ) -> bool;

    /// Returns a new partial Solution with `variable` assigned to `value`.
    fn assign_value(
        &self,
        value: &Self::Value,
        variable: &Self::Variable,
        solution: &Self::Solution,
    ) -> Self::Solution;
}
