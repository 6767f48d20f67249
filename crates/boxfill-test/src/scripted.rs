//! Scripted local-search fixtures.
//!
//! # Example
//!
//! ```
//! use boxfill_core::{rng_from_seed, Neighborhood, NeighborhoodMode, ResumeToken};
//! use boxfill_test::{ScriptedNeighborhood, Tagged};
//!
//! let mut neighborhood = ScriptedNeighborhood::repeating(Tagged::batch(&[3, 5]));
//! let mut rng = rng_from_seed(Some(0));
//! let next = neighborhood.neighbors(
//!     &Tagged::new(0, 0),
//!     NeighborhoodMode::Exhaustive,
//!     ResumeToken::initial(),
//!     &mut rng,
//! );
//! assert_eq!(next.len(), 2);
//! ```

use std::collections::VecDeque;

use boxfill_core::{Neighborhood, NeighborhoodMode, Objective, ResumeToken, SearchRng};

/// A Solution that is just a score, plus a tag to tell equal scores apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tagged {
    pub tag: usize,
    pub value: f64,
}

impl Tagged {
    pub fn new(tag: usize, value: impl Into<f64>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }

    /// One Solution per value, tagged with its index.
    pub fn batch(values: &[i32]) -> Vec<Tagged> {
        values
            .iter()
            .enumerate()
            .map(|(tag, &v)| Tagged::new(tag, v))
            .collect()
    }
}

/// Scores a [`Tagged`] by its value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueObjective;

impl Objective<Tagged> for ValueObjective {
    fn evaluate(&self, solutions: &[Tagged]) -> Vec<f64> {
        solutions.iter().map(|s| s.value).collect()
    }
}

/// Replays prepared candidate batches, ignoring the current Solution.
///
/// Candidate values are offsets: a candidate with value `v` is returned as
/// `current.value + v`, so the objective delta of each candidate is exactly
/// its scripted value.
#[derive(Debug, Clone, Default)]
pub struct ScriptedNeighborhood {
    batches: VecDeque<Vec<Tagged>>,
    repeat: Option<Vec<Tagged>>,
    tokens: Vec<ResumeToken>,
}

impl ScriptedNeighborhood {
    /// Hands out `batches` in order, then nothing.
    pub fn new(batches: Vec<Vec<Tagged>>) -> Self {
        Self {
            batches: batches.into(),
            repeat: None,
            tokens: Vec::new(),
        }
    }

    /// Hands out `batch` on every call.
    pub fn repeating(batch: Vec<Tagged>) -> Self {
        Self {
            batches: VecDeque::new(),
            repeat: Some(batch),
            tokens: Vec::new(),
        }
    }

    /// Tokens passed in so far, one per call.
    pub fn tokens(&self) -> &[ResumeToken] {
        &self.tokens
    }
}

impl Neighborhood<Tagged> for ScriptedNeighborhood {
    fn neighbors(
        &mut self,
        solution: &Tagged,
        _mode: NeighborhoodMode,
        token: ResumeToken,
        _rng: &mut SearchRng,
    ) -> Vec<Tagged> {
        self.tokens.push(token);
        let batch = match self.batches.pop_front() {
            Some(batch) => batch,
            None => self.repeat.clone().unwrap_or_default(),
        };
        batch
            .into_iter()
            .map(|c| Tagged::new(c.tag, solution.value + c.value))
            .collect()
    }
}

/// Never produces a candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyNeighborhood;

impl<S> Neighborhood<S> for EmptyNeighborhood {
    fn neighbors(
        &mut self,
        _solution: &S,
        _mode: NeighborhoodMode,
        _token: ResumeToken,
        _rng: &mut SearchRng,
    ) -> Vec<S> {
        Vec::new()
    }
}
