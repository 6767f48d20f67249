use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use boxfill_core::{SearchError, SearchProblem, SearchRng};

use super::neighborhood::RuleBasedNeighborhood;
use super::objective::RuleBasedObjective;
use super::permutation::{PermutationSolution, Piece};

/// Box filling over placement orders instead of positions.
///
/// Local search only; there is nothing to backtrack over.
#[derive(Debug, Clone)]
pub struct RuleBasedBoxFilling {
    box_size: i32,
    rectangle_count: usize,
    min_width: i32,
    max_width: i32,
    min_height: i32,
    max_height: i32,
}

impl RuleBasedBoxFilling {
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

impl SearchProblem for RuleBasedBoxFilling {
    type Solution = PermutationSolution;
    type Neighborhood = RuleBasedNeighborhood;
    type Objective = RuleBasedObjective;

    fn generate_feasible_solution(
        &self,
        rng: &mut SearchRng,
    ) -> Result<PermutationSolution, SearchError> {
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

        let pieces = (0..self.rectangle_count)
            .map(|id| {
                let width = rng.random_range(self.min_width..=self.max_width);
                let height = rng.random_range(self.min_height..=self.max_height);
                Piece::new(id, width, height)
            })
            .collect();
        let solution = PermutationSolution::new(pieces, self.box_size);
        debug!(event = "solution_generated", pieces = solution.len());
        Ok(solution)
    }

    fn is_feasible(&self, solution: &PermutationSolution) -> bool {
        let mut ids = HashSet::with_capacity(solution.len());
        solution.len() == self.rectangle_count
            && solution.pieces().iter().all(|p| {
                ids.insert(p.id) && p.width <= self.box_size && p.height <= self.box_size
            })
    }

    fn neighborhood(&self) -> RuleBasedNeighborhood {
        RuleBasedNeighborhood::new()
    }

    fn objective(&self) -> RuleBasedObjective {
        RuleBasedObjective
    }
}
