//! Moves anchored on cells adjacent to other rectangles.

use std::collections::{BTreeSet, HashSet};

use smallvec::SmallVec;

use crate::occupancy::{adjacent_cells, blocked_cells_except, collides};
use crate::rectangle::{Cell, CellSet, Corner, Rectangle, Rotation};
use crate::solution::Packing;

/// Free in-bounds cells touching `blocked`, in sorted order.
fn probable_fields(blocked: &CellSet, box_size: i32) -> BTreeSet<Cell> {
    blocked
        .iter()
        .flat_map(|&cell| adjacent_cells(cell, box_size))
        .filter(|cell| !blocked.contains(cell))
        .collect()
}

/// The four ways `rect` can be anchored on `field`.
///
/// As is with the field top-left, turned with the field top-left, turned
/// with the field bottom-left, as is with the field top-right.
fn anchorings(rect: &Rectangle, field: Cell) -> SmallVec<[Rectangle; 4]> {
    let w = rect.width();
    let (b, r, c) = (field.box_id, field.row, field.col);
    let mut out: SmallVec<[Rectangle; 4]> = SmallVec::new();
    for candidate in [
        rect.placed(b, Corner::new(r, c), Rotation::Upright),
        rect.placed(b, Corner::new(r, c), Rotation::Rotated),
        rect.placed(b, Corner::new(r - w + 1, c), Rotation::Rotated),
        rect.placed(b, Corner::new(r, c - w + 1), Rotation::Upright),
    ] {
        if !out.iter().any(|seen| seen.same_placement(&candidate)) {
            out.push(candidate);
        }
    }
    out
}

/// Collision-free moves of one rectangle onto fields next to the others.
///
/// Much cheaper than [`exhaustive_moves`](super::exhaustive_moves) on large
/// boxes and still finds the tight placements that matter. Duplicate
/// placements and the identity move are dropped.
pub fn probable_field_moves(packing: &Packing, box_size: i32) -> Vec<Packing> {
    let mut neighbors = Vec::new();

    for (index, rect) in packing.rectangles().iter().enumerate() {
        let blocked = blocked_cells_except(packing, rect.id());
        let mut seen: HashSet<(usize, Corner, i32, i32)> = HashSet::new();

        for field in probable_fields(&blocked, box_size) {
            for moved in anchorings(rect, field) {
                if !moved.fits_in(box_size) || moved.same_placement(rect) {
                    continue;
                }
                let key = (moved.box_id(), moved.corner(), moved.width(), moved.height());
                if !seen.insert(key) || collides(&moved, &blocked) {
                    continue;
                }
                neighbors.push(packing.with_replaced(index, moved));
            }
        }
    }

    neighbors
}
