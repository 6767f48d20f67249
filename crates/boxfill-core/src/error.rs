//! Terminal conditions raised by search engines.

use thiserror::Error;

/// Typed terminal outcomes of a search.
///
/// None of these is a bug: every variant tells the driver to stop stepping and
/// what to do with the last Solution it holds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No feasible starting solution was found within the retry budget.
    #[error("Could not generate a feasible solution: {0}")]
    GenerationFailure(String),

    /// Consecutive non-accepting steps exceeded the attempt budget.
    #[error("No improvement found after {attempts} attempts")]
    NoImprovementFound { attempts: u64 },

    /// The backtracking variable pool was already empty.
    #[error("No assignable variables available")]
    NoVariablesAvailable,

    /// Backtracking exhausted level 0 without a complete assignment.
    #[error("Instance is unsatisfiable under the current parameters")]
    UnsatisfiableInstance,

    /// The engine step counter exceeded its configured total.
    #[error("Step limit of {limit} reached")]
    StepLimitReached { limit: u64 },
}

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
