//! The engine step contract.

use std::fmt::Debug;

use boxfill_core::StepOutcome;

/// A search engine driven one step at a time.
///
/// The driver owns the loop: it passes in the Solution it currently holds
/// and gets back either the next one or a terminal condition. Engines never
/// block and never loop internally, so stopping early is just not calling
/// `step` again.
///
/// # Type Parameters
/// * `S` - The solution type
pub trait SearchEngine<S>: Send + Debug {
    /// Performs one step from `current`.
    fn step(&mut self, current: S) -> StepOutcome<S>;

    /// Steps taken so far.
    fn step_count(&self) -> u64;

    /// Returns the name of this engine type.
    fn phase_type_name(&self) -> &'static str;
}
