//! Randomly sampled moves with bottom-left placement.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::seq::IndexedRandom;

use boxfill_core::SearchRng;

use crate::occupancy::{blocked_cells_except, collides};
use crate::rectangle::{CellSet, Corner, Rectangle, Rotation};
use crate::solution::Packing;

/// First collision-free placement of `rect` in `box_id`, scanning rows from
/// the bottom and columns from the left.
///
/// At each cell the rectangle is tried as is, then turned. Placements equal
/// to `rect`'s current one are passed over.
pub fn bottom_left_fit(
    rect: &Rectangle,
    box_id: usize,
    box_size: i32,
    blocked: &CellSet,
) -> Option<Rectangle> {
    for row in (0..box_size).rev() {
        for col in 0..box_size {
            for &rotation in Rotation::options(rect.width(), rect.height()) {
                let moved = rect.placed(box_id, Corner::new(row, col), rotation);
                if moved.fits_in(box_size)
                    && !moved.same_placement(rect)
                    && !collides(&moved, blocked)
                {
                    return Some(moved);
                }
            }
        }
    }
    None
}

/// Moves one randomly chosen rectangle into randomly chosen boxes.
///
/// The source box is drawn proportionally to its free area, the rectangle
/// uniformly within it. Then `sample_boxes` target boxes (at most the box
/// count, drawn with replacement) are weighted by occupied area, and each
/// yields its bottom-left fit, if any.
pub fn stochastic_moves(
    packing: &Packing,
    box_size: i32,
    sample_boxes: usize,
    rng: &mut SearchRng,
) -> Vec<Packing> {
    let areas = packing.box_areas();
    if areas.is_empty() {
        return Vec::new();
    }
    let boxes: Vec<usize> = areas.keys().copied().collect();
    let capacity = i64::from(box_size) * i64::from(box_size);

    let free: Vec<i64> = areas.values().map(|&a| (capacity - a).max(0)).collect();
    let Ok(by_free) = WeightedIndex::new(&free) else {
        return Vec::new();
    };
    let source = boxes[by_free.sample(rng)];

    let in_source: Vec<&Rectangle> = packing
        .rectangles()
        .iter()
        .filter(|r| r.box_id() == source)
        .collect();
    let Some(&&rect) = in_source.choose(rng) else {
        return Vec::new();
    };

    let occupied: Vec<i64> = areas.values().copied().collect();
    let Ok(by_occupied) = WeightedIndex::new(&occupied) else {
        return Vec::new();
    };

    let blocked = blocked_cells_except(packing, rect.id());
    let draws = sample_boxes.min(packing.num_boxes());
    (0..draws)
        .filter_map(|_| {
            let target = boxes[by_occupied.sample(rng)];
            bottom_left_fit(&rect, target, box_size, &blocked)
        })
        .filter_map(|moved| packing.replacing(moved))
        .collect()
}
