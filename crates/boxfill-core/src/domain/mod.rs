//! Domain traits for search problems.

mod token;
mod traits;

pub use token::ResumeToken;
pub use traits::{ConstraintProblem, Neighborhood, NeighborhoodMode, Objective, SearchProblem};
