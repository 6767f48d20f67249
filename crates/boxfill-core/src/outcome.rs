//! Result of a single engine step.

use crate::error::SearchError;

/// What one call to `step` produced.
///
/// Termination is part of the type: a driver loops while it receives
/// `Continue`, keeps the Solution carried by `Done`, and stops on `Failed`
/// while keeping whatever Solution it passed in last.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum StepOutcome<S> {
    /// The search can go on from this Solution.
    Continue(S),
    /// The search finished with this Solution.
    Done(S),
    /// The search reached a terminal condition.
    Failed(SearchError),
}

impl<S> StepOutcome<S> {
    /// Returns true for `Done` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepOutcome::Continue(_))
    }

    /// Returns the carried Solution, if any.
    pub fn solution(&self) -> Option<&S> {
        match self {
            StepOutcome::Continue(s) | StepOutcome::Done(s) => Some(s),
            StepOutcome::Failed(_) => None,
        }
    }

    /// Consumes the outcome and returns the carried Solution, if any.
    pub fn into_solution(self) -> Option<S> {
        match self {
            StepOutcome::Continue(s) | StepOutcome::Done(s) => Some(s),
            StepOutcome::Failed(_) => None,
        }
    }

    /// Returns the terminal condition, if any.
    pub fn error(&self) -> Option<&SearchError> {
        match self {
            StepOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Converts to a `Result`, dropping the `Continue`/`Done` distinction.
    pub fn into_result(self) -> Result<S, SearchError> {
        match self {
            StepOutcome::Continue(s) | StepOutcome::Done(s) => Ok(s),
            StepOutcome::Failed(e) => Err(e),
        }
    }

    /// Maps the carried Solution.
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> StepOutcome<T> {
        match self {
            StepOutcome::Continue(s) => StepOutcome::Continue(f(s)),
            StepOutcome::Done(s) => StepOutcome::Done(f(s)),
            StepOutcome::Failed(e) => StepOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_variants() {
        assert!(!StepOutcome::Continue(1).is_terminal());
        assert!(StepOutcome::Done(1).is_terminal());
        assert!(StepOutcome::<i32>::Failed(SearchError::NoVariablesAvailable).is_terminal());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(StepOutcome::Done(3).into_result(), Ok(3));
        assert_eq!(
            StepOutcome::<i32>::Failed(SearchError::UnsatisfiableInstance).into_result(),
            Err(SearchError::UnsatisfiableInstance)
        );
    }

    #[test]
    fn test_map_keeps_variant() {
        assert_eq!(StepOutcome::Done(2).map(|v| v * 2), StepOutcome::Done(4));
        assert_eq!(
            StepOutcome::Continue(2).map(|v| v + 1),
            StepOutcome::Continue(3)
        );
    }
}
