//! Occupancy bookkeeping.
//!
//! Stateless helpers answering "which cells are taken" and "does this
//! footprint collide".

use crate::rectangle::{Cell, CellSet, Rectangle};
use crate::solution::Packing;

/// Union of the footprints of every rectangle in `packing`.
pub fn blocked_cells(packing: &Packing) -> CellSet {
    let mut blocked = CellSet::with_capacity(packing.occupied_area());
    for rect in packing.rectangles() {
        blocked.extend(rect.cells());
    }
    blocked
}

/// Union of the footprints of every rectangle except the one with `id`.
pub fn blocked_cells_except(packing: &Packing, id: usize) -> CellSet {
    let mut blocked = CellSet::with_capacity(packing.occupied_area());
    for rect in packing.rectangles().iter().filter(|r| r.id() != id) {
        blocked.extend(rect.cells());
    }
    blocked
}

/// Returns true if no cell of `candidate` is in `blocked`.
pub fn is_disjoint(candidate: &CellSet, blocked: &CellSet) -> bool {
    candidate.is_disjoint(blocked)
}

/// Collision test without materializing the candidate footprint.
pub(crate) fn collides(rect: &Rectangle, blocked: &CellSet) -> bool {
    rect.cells().any(|cell| blocked.contains(&cell))
}

/// The in-bounds 4-neighbours of `cell` in a box of edge `box_size`.
pub fn adjacent_cells(cell: Cell, box_size: i32) -> impl Iterator<Item = Cell> {
    const STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    STEPS.into_iter().filter_map(move |(dr, dc)| {
        let (row, col) = (cell.row + dr, cell.col + dc);
        let inside = (0..box_size).contains(&row) && (0..box_size).contains(&col);
        inside.then_some(Cell::new(cell.box_id, row, col))
    })
}

#[cfg(test)]
mod tests;
