//! Simulated annealing acceptor.

use rand::Rng;
use tracing::trace;

use boxfill_core::SearchRng;

use super::Acceptor;
use crate::phase::localsearch::CoolingSchedule;

/// Added to the temperature so a frozen schedule never divides by zero.
const TEMPERATURE_FLOOR: f64 = 1e-2;

/// Simulated annealing acceptor - accepts moves with temperature-based probability.
///
/// Improving moves are always taken. Before judging a non-improving move the
/// temperature is cooled once, then the move is taken with probability
/// `exp(delta / (T + 0.01))`.
///
/// # Example
///
/// ```
/// use boxfill_solver::{CoolingSchedule, SimulatedAnnealingAcceptor};
///
/// let acceptor = SimulatedAnnealingAcceptor::new(50.0, CoolingSchedule::Geometric { alpha: 0.99 });
/// assert_eq!(acceptor.temperature(), 50.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedAnnealingAcceptor {
    /// Initial temperature.
    starting_temperature: f64,
    /// Current temperature.
    current_temperature: f64,
    schedule: CoolingSchedule,
}

impl SimulatedAnnealingAcceptor {
    /// Creates a new simulated annealing acceptor.
    ///
    /// # Arguments
    /// * `starting_temperature` - Initial temperature (higher = more exploration)
    /// * `schedule` - How the temperature falls
    pub fn new(starting_temperature: f64, schedule: CoolingSchedule) -> Self {
        Self {
            starting_temperature,
            current_temperature: starting_temperature,
            schedule,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.current_temperature
    }

    pub fn schedule(&self) -> CoolingSchedule {
        self.schedule
    }

    /// Probability of taking a move with `delta` at temperature `temperature`.
    pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
        (delta / (temperature + TEMPERATURE_FLOOR)).exp().min(1.0)
    }
}

impl Default for SimulatedAnnealingAcceptor {
    fn default() -> Self {
        Self::new(50.0, CoolingSchedule::default())
    }
}

impl Acceptor for SimulatedAnnealingAcceptor {
    fn is_accepted(&mut self, delta: f64, step: u64, rng: &mut SearchRng) -> bool {
        if delta > 0.0 {
            return true;
        }

        self.current_temperature = self.schedule.next_temperature(self.current_temperature, step);
        let probability = Self::acceptance_probability(delta, self.current_temperature);
        let draw: f64 = rng.random();
        trace!(
            event = "annealing_draw",
            step,
            delta,
            temperature = self.current_temperature,
            probability,
        );
        draw < probability
    }

    fn phase_started(&mut self) {
        self.current_temperature = self.starting_temperature;
    }
}
