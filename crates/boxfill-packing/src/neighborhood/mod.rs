//! Single-rectangle move neighborhoods for the geometric variant.
//!
//! Every candidate differs from the current packing in exactly one
//! rectangle, which keeps its id and its index. Three policies trade
//! completeness for cost:
//!
//! - [`exhaustive_moves`]: every position in the neighbouring boxes
//! - [`probable_field_moves`]: positions anchored next to occupied cells
//! - [`stochastic_moves`]: one random piece, bottom-left placement in sampled boxes

mod exhaustive;
mod probable_fields;
mod stochastic;

pub use exhaustive::exhaustive_moves;
pub use probable_fields::probable_field_moves;
pub use stochastic::{bottom_left_fit, stochastic_moves};

use boxfill_core::{Neighborhood, NeighborhoodMode, ResumeToken, SearchRng};
use tracing::trace;

use crate::solution::Packing;

/// Neighborhood over [`Packing`]s in boxes of a fixed edge.
#[derive(Debug, Clone)]
pub struct GeometricNeighborhood {
    box_size: i32,
    sample_boxes: usize,
}

impl GeometricNeighborhood {
    pub fn new(box_size: i32) -> Self {
        Self {
            box_size,
            sample_boxes: 1,
        }
    }

    /// Sets how many target boxes the stochastic policy samples.
    pub fn with_sample_boxes(mut self, sample_boxes: usize) -> Self {
        self.sample_boxes = sample_boxes.max(1);
        self
    }

    pub fn box_size(&self) -> i32 {
        self.box_size
    }

    pub fn sample_boxes(&self) -> usize {
        self.sample_boxes
    }
}

impl Neighborhood<Packing> for GeometricNeighborhood {
    fn neighbors(
        &mut self,
        solution: &Packing,
        mode: NeighborhoodMode,
        _token: ResumeToken,
        rng: &mut SearchRng,
    ) -> Vec<Packing> {
        let candidates = match mode {
            NeighborhoodMode::Exhaustive => exhaustive_moves(solution, self.box_size),
            NeighborhoodMode::ProbableFields => probable_field_moves(solution, self.box_size),
            NeighborhoodMode::Stochastic => {
                stochastic_moves(solution, self.box_size, self.sample_boxes, rng)
            }
        };
        trace!(
            event = "neighbors",
            mode = %mode,
            candidates = candidates.len(),
        );
        candidates
    }
}
