//! Relaxed geometric box filling.
//!
//! Rectangles keep explicit positions but may overlap. The objective charges
//! for overlapping cells with a penalty that grows over the first steps, and
//! the neighborhood tolerates less overlap the longer the search runs, so the
//! search drifts from a crowded start towards a proper packing.

mod coverage;
mod instance;
mod neighborhood;
mod objective;
mod solution;

pub use coverage::{Coverage, Tally, WindowSums};
pub use instance::RelaxedBoxFilling;
pub use neighborhood::{overlap_allowance, RelaxedNeighborhood};
pub use objective::{penalty_fraction, RelaxedObjective, MAX_PENALTY_FRACTION};
pub use solution::RelaxedPacking;
