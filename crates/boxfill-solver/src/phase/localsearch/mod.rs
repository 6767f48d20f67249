//! Local search
//!
//! Improves an existing Solution by moving to neighbors that are accepted
//! according to an acceptance criterion.

mod acceptor;
mod cooling;
mod forager;
mod phase;

pub use acceptor::{Acceptor, HillClimbingAcceptor, SimulatedAnnealingAcceptor};
pub use cooling::CoolingSchedule;
pub use forager::{BestScoreForager, FirstCandidateForager, LocalSearchForager};
pub use phase::LocalSearchPhase;

#[cfg(test)]
mod tests;
