//! Backtracking search
//!
//! Depth-first constraint search, one assignment or one undo per step.
//! The engine keeps a trail of frames, one per level: the variable and value
//! assigned there and the Solution as it was before. Backtracking pops a
//! frame and hands its snapshot back to the driver.

mod search;

pub use search::BacktrackingSearch;
