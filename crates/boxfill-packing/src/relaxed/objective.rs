use std::sync::atomic::{AtomicU64, Ordering};

use boxfill_core::Objective;

use super::solution::RelaxedPacking;

/// Steps over which the overlap penalty ramps up by one unit.
const PENALTY_RAMP_STEPS: f64 = 50.0;

/// Weight of the overlap terms once the ramp is complete.
pub const MAX_PENALTY_FRACTION: f64 = 2.0;

/// Overlap weight at search step `step`: `min(2, step / 50)`.
pub fn penalty_fraction(step: u64) -> f64 {
    (step as f64 / PENALTY_RAMP_STEPS).min(MAX_PENALTY_FRACTION)
}

/// Scores relaxed packings, charging more for overlaps as the search goes on.
///
/// `score = n − boxes³ + fraction · (single − stacked) + occupied` where
/// `single` counts cells covered once, `stacked` sums the cover of cells
/// covered more than once and `occupied` counts covered cells.
///
/// The objective counts its own steps: every step evaluates the current
/// Solution and then the candidates, so two batches make one step.
#[derive(Debug)]
pub struct RelaxedObjective {
    box_size: i32,
    batches: AtomicU64,
}

impl RelaxedObjective {
    pub fn new(box_size: i32) -> Self {
        Self {
            box_size,
            batches: AtomicU64::new(0),
        }
    }

    /// Steps seen so far.
    pub fn step(&self) -> u64 {
        self.batches.load(Ordering::Relaxed) / 2
    }

    /// Scores `solution` with the overlap terms weighted by `fraction`.
    pub fn score(solution: &RelaxedPacking, box_size: i32, fraction: f64) -> f64 {
        let tally = solution.coverage(box_size).tally();
        let boxes = solution.packing().num_boxes() as f64;
        solution.len() as f64 - boxes.powi(3)
            + fraction * (tally.single as f64 - tally.stacked as f64)
            + tally.occupied as f64
    }
}

impl Objective<RelaxedPacking> for RelaxedObjective {
    fn evaluate(&self, solutions: &[RelaxedPacking]) -> Vec<f64> {
        let fraction = penalty_fraction(self.step());
        self.batches.fetch_add(1, Ordering::Relaxed);
        solutions
            .iter()
            .map(|s| Self::score(s, self.box_size, fraction))
            .collect()
    }
}
