//! Step count budget.

use boxfill_core::SearchError;

/// Counts steps against a limit.
///
/// # Example
///
/// ```
/// use boxfill_solver::StepBudget;
///
/// let mut budget = StepBudget::new(2);
/// assert!(budget.try_consume().is_ok());
/// assert!(budget.try_consume().is_ok());
/// assert!(budget.try_consume().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StepBudget {
    limit: u64,
    count: u64,
}

impl StepBudget {
    pub fn new(limit: u64) -> Self {
        Self { limit, count: 0 }
    }

    /// Takes one step from the budget.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::StepLimitReached`] once `limit` steps were
    /// taken; the count does not move past the limit.
    pub fn try_consume(&mut self) -> Result<u64, SearchError> {
        if self.count >= self.limit {
            return Err(SearchError::StepLimitReached { limit: self.limit });
        }
        self.count += 1;
        Ok(self.count)
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn is_exhausted(&self) -> bool {
        self.count >= self.limit
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
