//! Lazy windowed placements under a shrinking overlap allowance.

use rand::seq::SliceRandom;
use tracing::trace;

use boxfill_core::{Neighborhood, NeighborhoodMode, ResumeToken, SearchRng};

use crate::rectangle::{Corner, Rotation};

use super::coverage::{Coverage, WindowSums};
use super::solution::RelaxedPacking;

/// Share of a rectangle's area that may land on covered cells after
/// `restarts` neighbor sequences: `max(0, (100 − restarts) / 100)`.
pub fn overlap_allowance(restarts: u64) -> f64 {
    ((100.0 - restarts as f64) / 100.0).max(0.0)
}

/// Position in the placement sequence of one Solution.
#[derive(Debug, Clone)]
struct Cursor {
    token: ResumeToken,
    allowance: f64,
    box_size: i32,
    coverage: Coverage,
    order: Vec<usize>,
    next_rect: usize,
    slot: usize,
    sums: Option<WindowSums>,
}

impl Cursor {
    fn start(
        solution: &RelaxedPacking,
        box_size: i32,
        allowance: f64,
        token: ResumeToken,
        rng: &mut SearchRng,
    ) -> Self {
        // one spare box beyond the last used
        let boxes = solution.packing().num_boxes() + 1;
        let mut order: Vec<usize> = (0..solution.len()).collect();
        order.shuffle(rng);
        Self {
            token,
            allowance,
            box_size,
            coverage: Coverage::of(solution.packing(), box_size, boxes),
            order,
            next_rect: 0,
            slot: 0,
            sums: None,
        }
    }

    fn advance(&mut self, solution: &RelaxedPacking) -> Option<RelaxedPacking> {
        let packing = solution.packing();
        while let Some(&index) = self.order.get(self.next_rect) {
            let rect = &packing.rectangles()[index];
            let rows = (self.box_size - rect.height() + 1).max(0) as usize;
            let cols = (self.box_size - rect.width() + 1).max(0) as usize;
            let slots = self.coverage.boxes() * rows * cols;

            let sums = self.sums.get_or_insert_with(|| {
                let mut others = self.coverage.clone();
                others.remove(rect);
                WindowSums::new(&others)
            });
            let budget = rect.area() as f64 * self.allowance;

            while self.slot < slots {
                let slot = self.slot;
                self.slot += 1;
                let box_id = slot / (rows * cols);
                let row = ((slot / cols) % rows) as i32;
                let col = (slot % cols) as i32;

                let cover = sums.window(box_id, row, col, rect.width(), rect.height());
                if cover as f64 > budget {
                    continue;
                }
                let moved = rect.placed(box_id, Corner::new(row, col), Rotation::Upright);
                if moved.same_placement(rect) {
                    continue;
                }
                return Some(RelaxedPacking::new(packing.with_replaced(index, moved)));
            }

            self.next_rect += 1;
            self.slot = 0;
            self.sums = None;
        }
        None
    }
}

/// Moves one rectangle to a window of any box whose existing cover stays
/// within the overlap allowance.
///
/// Rectangles are visited in a random order drawn per Solution, windows row
/// by row through every used box plus one empty one. Hands out one neighbor
/// per call; the sequence continues while the caller passes the same token.
/// Each new token tightens the allowance by one percent until overlapping
/// moves are no longer offered. The mode is ignored.
#[derive(Debug, Clone)]
pub struct RelaxedNeighborhood {
    box_size: i32,
    restarts: u64,
    cursor: Option<Cursor>,
}

impl RelaxedNeighborhood {
    pub fn new(box_size: i32) -> Self {
        Self {
            box_size,
            restarts: 0,
            cursor: None,
        }
    }

    /// Neighbor sequences started so far.
    pub fn restarts(&self) -> u64 {
        self.restarts
    }

    /// Allowance of the current sequence.
    pub fn allowance(&self) -> f64 {
        overlap_allowance(self.restarts)
    }
}

impl Neighborhood<RelaxedPacking> for RelaxedNeighborhood {
    fn neighbors(
        &mut self,
        solution: &RelaxedPacking,
        _mode: NeighborhoodMode,
        token: ResumeToken,
        rng: &mut SearchRng,
    ) -> Vec<RelaxedPacking> {
        let stale = self.cursor.as_ref().map_or(true, |c| c.token != token);
        if stale {
            self.restarts += 1;
            let allowance = self.allowance();
            trace!(
                event = "neighbor_sequence_restart",
                token = %token,
                allowance,
            );
            self.cursor = Some(Cursor::start(solution, self.box_size, allowance, token, rng));
        }
        match self.cursor.as_mut() {
            Some(cursor) => cursor.advance(solution).into_iter().collect(),
            None => Vec::new(),
        }
    }
}
