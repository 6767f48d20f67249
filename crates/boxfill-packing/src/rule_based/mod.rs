//! Permutation-based ("rule-based") box filling.
//!
//! A Solution is an order of pieces; a fixed shelf rule turns the order into
//! positions. Search then only permutes, never collides.

mod instance;
mod neighborhood;
mod objective;
mod permutation;

pub use instance::RuleBasedBoxFilling;
pub use neighborhood::RuleBasedNeighborhood;
pub use objective::RuleBasedObjective;
pub use permutation::{PermutationSolution, Piece};
