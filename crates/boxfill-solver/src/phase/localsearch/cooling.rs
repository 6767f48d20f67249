//! Temperature schedules for simulated annealing.

/// How the temperature falls as steps go by.
///
/// # Example
///
/// ```
/// use boxfill_solver::CoolingSchedule;
///
/// let geometric = CoolingSchedule::Geometric { alpha: 0.99 };
/// assert!((geometric.next_temperature(50.0, 10) - 50.0 * 0.99f64.powi(10)).abs() < 1e-12);
///
/// let logarithmic = CoolingSchedule::Logarithmic { constant: 50.0 };
/// assert!((logarithmic.next_temperature(0.0, 10) - 50.0 / 11f64.ln()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingSchedule {
    /// `T ← T × alpha^step`. Compounds on the previous temperature.
    Geometric { alpha: f64 },
    /// `T ← C / ln(1 + step)`. Independent of the previous temperature.
    Logarithmic { constant: f64 },
}

impl CoolingSchedule {
    /// The temperature after cooling from `current` at `step` (1-based).
    pub fn next_temperature(&self, current: f64, step: u64) -> f64 {
        match *self {
            CoolingSchedule::Geometric { alpha } => {
                current * alpha.powi(i32::try_from(step).unwrap_or(i32::MAX))
            }
            CoolingSchedule::Logarithmic { constant } => {
                // ln(1) is 0, so step 0 is treated as step 1
                constant / (1.0 + step.max(1) as f64).ln()
            }
        }
    }
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.99 }
    }
}

impl std::fmt::Display for CoolingSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoolingSchedule::Geometric { alpha } => write!(f, "Geometric(alpha={alpha})"),
            CoolingSchedule::Logarithmic { constant } => write!(f, "Logarithmic(C={constant})"),
        }
    }
}
