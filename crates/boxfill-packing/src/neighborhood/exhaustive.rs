//! Exhaustive single-rectangle moves.

use crate::occupancy::{blocked_cells_except, collides};
use crate::rectangle::{Corner, Rotation};
use crate::solution::Packing;

/// Every collision-free move of one rectangle into its own box or a
/// neighbouring existing box.
///
/// Order: rectangle (packing order), orientation (as is, then turned when
/// not square), box, row, column. The identity move is left out.
pub fn exhaustive_moves(packing: &Packing, box_size: i32) -> Vec<Packing> {
    let num_boxes = packing.num_boxes();
    let mut neighbors = Vec::new();

    for (index, rect) in packing.rectangles().iter().enumerate() {
        let blocked = blocked_cells_except(packing, rect.id());
        let first_box = rect.box_id().saturating_sub(1);
        let last_box = (rect.box_id() + 1).min(num_boxes.saturating_sub(1));

        for &rotation in Rotation::options(rect.width(), rect.height()) {
            let (width, height) = rotation.dims(rect.width(), rect.height());
            for box_id in first_box..=last_box {
                for row in 0..=box_size - height {
                    for col in 0..=box_size - width {
                        let moved = rect.placed(box_id, Corner::new(row, col), rotation);
                        if moved.same_placement(rect) || collides(&moved, &blocked) {
                            continue;
                        }
                        neighbors.push(packing.with_replaced(index, moved));
                    }
                }
            }
        }
    }

    neighbors
}
