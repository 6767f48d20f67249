//! Foragers for local search candidate selection
//!
//! Foragers decide how many candidates get evaluated and which one is put
//! forward to the acceptor.

use std::fmt::Debug;

/// Trait for selecting a candidate in local search.
pub trait LocalSearchForager: Send + Debug {
    /// How many leading candidates need scoring, `None` for all of them.
    fn evaluation_limit(&self) -> Option<usize>;

    /// Picks a candidate from the objective deltas of the evaluated ones.
    ///
    /// Returns the candidate index and its delta, or None when `deltas` is
    /// empty.
    fn pick(&self, deltas: &[f64]) -> Option<(usize, f64)>;
}

/// A forager that picks the best-scoring candidate.
///
/// Ties go to the earliest candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestScoreForager;

impl BestScoreForager {
    pub fn new() -> Self {
        Self
    }
}

impl LocalSearchForager for BestScoreForager {
    fn evaluation_limit(&self) -> Option<usize> {
        None
    }

    fn pick(&self, deltas: &[f64]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &delta) in deltas.iter().enumerate() {
            match best {
                Some((_, best_delta)) if delta <= best_delta => {}
                _ => best = Some((i, delta)),
            }
        }
        best
    }
}

/// A forager that only looks at the first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidateForager;

impl FirstCandidateForager {
    pub fn new() -> Self {
        Self
    }
}

impl LocalSearchForager for FirstCandidateForager {
    fn evaluation_limit(&self) -> Option<usize> {
        Some(1)
    }

    fn pick(&self, deltas: &[f64]) -> Option<(usize, f64)> {
        deltas.first().map(|&delta| (0, delta))
    }
}
