use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use boxfill_core::{SearchError, SearchProblem, SearchRng};

use crate::rectangle::{Corner, Rectangle};
use crate::solution::Packing;

use super::neighborhood::RelaxedNeighborhood;
use super::objective::RelaxedObjective;
use super::solution::RelaxedPacking;

/// Geometric box filling with overlaps allowed.
///
/// The search starts with every rectangle stacked in the corner of box 0
/// and spreads them out as the overlap penalty grows.
#[derive(Debug, Clone)]
pub struct RelaxedBoxFilling {
    box_size: i32,
    rectangle_count: usize,
    min_width: i32,
    max_width: i32,
    min_height: i32,
    max_height: i32,
}

impl RelaxedBoxFilling {
    pub fn new(box_size: i32, rectangle_count: usize, max_width: i32, max_height: i32) -> Self {
        Self {
            box_size,
            rectangle_count,
            min_width: 1,
            max_width,
            min_height: 1,
            max_height,
        }
    }

    pub fn with_min_width(mut self, min_width: i32) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_min_height(mut self, min_height: i32) -> Self {
        self.min_height = min_height;
        self
    }

    pub fn box_size(&self) -> i32 {
        self.box_size
    }

    pub fn rectangle_count(&self) -> usize {
        self.rectangle_count
    }
}

impl SearchProblem for RelaxedBoxFilling {
    type Solution = RelaxedPacking;
    type Neighborhood = RelaxedNeighborhood;
    type Objective = RelaxedObjective;

    fn generate_feasible_solution(&self, rng: &mut SearchRng) -> Result<RelaxedPacking, SearchError> {
        let sides_ok = 1 <= self.min_width
            && self.min_width <= self.max_width
            && self.max_width <= self.box_size
            && 1 <= self.min_height
            && self.min_height <= self.max_height
            && self.max_height <= self.box_size;
        if !sides_ok {
            return Err(SearchError::GenerationFailure(
                "rectangle sides must lie within 1..=box size".to_string(),
            ));
        }

        let packing: Packing = (0..self.rectangle_count)
            .map(|id| {
                let width = rng.random_range(self.min_width..=self.max_width);
                let height = rng.random_range(self.min_height..=self.max_height);
                Rectangle::new(width, height, Corner::default(), 0, id)
            })
            .collect();
        debug!(event = "solution_generated", rectangles = packing.len());
        Ok(RelaxedPacking::new(packing))
    }

    fn is_feasible(&self, solution: &RelaxedPacking) -> bool {
        let mut ids = HashSet::with_capacity(solution.len());
        solution.len() == self.rectangle_count
            && solution
                .packing()
                .rectangles()
                .iter()
                .all(|r| ids.insert(r.id()) && r.fits_in(self.box_size))
    }

    fn neighborhood(&self) -> RelaxedNeighborhood {
        RelaxedNeighborhood::new(self.box_size)
    }

    fn objective(&self) -> RelaxedObjective {
        RelaxedObjective::new(self.box_size)
    }
}
