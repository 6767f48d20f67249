//! Shared test fixtures for boxfill crates.
//!
//! This crate provides small problems with fully predictable behaviour so
//! the engines can be tested without the packing geometry.
//! It only depends on `boxfill-core`.
//!
//! - [`scripted`] - tagged Solutions, a value objective and neighborhoods that
//!   replay fixed candidate lists
//! - [`nqueens`] - N-Queens as a constraint problem for backtracking
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! boxfill-test = { workspace = true }
//! ```

pub mod nqueens;
pub mod scripted;

pub use nqueens::{NQueens, QueensBoard};
pub use scripted::{EmptyNeighborhood, ScriptedNeighborhood, Tagged, ValueObjective};
