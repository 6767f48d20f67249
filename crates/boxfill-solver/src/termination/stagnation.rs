//! Unimproved step counting.

use boxfill_core::SearchError;

/// Counts consecutive steps without an accepted move.
#[derive(Debug, Clone)]
pub struct StagnationCounter {
    attempts: u64,
    misses: u64,
}

impl StagnationCounter {
    pub fn new(attempts: u64) -> Self {
        Self {
            attempts,
            misses: 0,
        }
    }

    /// Records one miss.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoImprovementFound`] once more than `attempts`
    /// consecutive misses were recorded.
    pub fn miss(&mut self) -> Result<(), SearchError> {
        self.misses += 1;
        if self.misses > self.attempts {
            return Err(SearchError::NoImprovementFound {
                attempts: self.attempts,
            });
        }
        Ok(())
    }

    /// Called on acceptance.
    pub fn reset(&mut self) {
        self.misses = 0;
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }
}
