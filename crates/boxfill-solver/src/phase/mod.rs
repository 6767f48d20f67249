//! Search engines
//!
//! - [`localsearch::LocalSearchPhase`]: improves a complete Solution one move at a time
//! - [`backtracking::BacktrackingSearch`]: builds a Solution one assignment at a time

pub mod backtracking;
pub mod localsearch;
