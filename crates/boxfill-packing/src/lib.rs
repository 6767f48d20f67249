//! boxfill Packing - the box-filling domain
//!
//! This crate provides everything that knows about rectangles and boxes:
//! - Rectangle geometry ([`Rectangle`], footprints and hulls)
//! - Occupancy bookkeeping and collision tests
//! - The packing Solution type and box-index compaction
//! - Objective, neighborhoods and the [`BoxFilling`] instance
//! - The permutation-based variant in [`rule_based`]
//! - The overlap-tolerant variant in [`relaxed`]

pub mod instance;
pub mod neighborhood;
pub mod objective;
pub mod occupancy;
pub mod rectangle;
pub mod relaxed;
pub mod rule_based;
pub mod solution;

pub use instance::{BoxFilling, Placement};
pub use neighborhood::GeometricNeighborhood;
pub use objective::BoxFillingObjective;
pub use occupancy::{adjacent_cells, blocked_cells, blocked_cells_except, is_disjoint};
pub use rectangle::{footprint, hull, Cell, CellSet, Corner, Rectangle, Rotation};
pub use relaxed::{
    penalty_fraction, RelaxedBoxFilling, RelaxedNeighborhood, RelaxedObjective, RelaxedPacking,
    MAX_PENALTY_FRACTION,
};
pub use rule_based::{
    PermutationSolution, Piece, RuleBasedBoxFilling, RuleBasedNeighborhood, RuleBasedObjective,
};
pub use solution::{compact_boxes, Packing};
