//! Hill climbing acceptor.

use boxfill_core::SearchRng;

use super::Acceptor;

/// Hill climbing acceptor - accepts only improving moves.
///
/// Equal scores are rejected, so plateaus count as stagnation.
///
/// # Example
///
/// ```
/// use boxfill_solver::HillClimbingAcceptor;
///
/// let acceptor = HillClimbingAcceptor::new();
/// ```
#[derive(Debug, Clone, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    /// Creates a new hill climbing acceptor.
    pub fn new() -> Self {
        Self
    }
}

impl Acceptor for HillClimbingAcceptor {
    fn is_accepted(&mut self, delta: f64, _step: u64, _rng: &mut SearchRng) -> bool {
        delta > 0.0
    }
}
