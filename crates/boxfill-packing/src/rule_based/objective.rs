use boxfill_core::Objective;

use super::permutation::PermutationSolution;

const FIRST_EXPONENT: f64 = 2.0;
const LAST_EXPONENT: f64 = 1.1;

/// Exponent for box `index` of `boxes`, spaced linearly from 2.0 down to 1.1.
fn exponent(index: usize, boxes: usize) -> f64 {
    if boxes <= 1 {
        return FIRST_EXPONENT;
    }
    let t = index as f64 / (boxes - 1) as f64;
    FIRST_EXPONENT + t * (LAST_EXPONENT - FIRST_EXPONENT)
}

/// Scores a permutation by its realized occupancy: `Σ_b occ_b ^ p_b`.
///
/// Early boxes get the steeper exponent, so filling them up front is
/// rewarded over spreading pieces evenly.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedObjective;

impl RuleBasedObjective {
    pub fn score(solution: &PermutationSolution) -> f64 {
        let areas = solution.realize().box_areas();
        let boxes = areas.len();
        areas
            .values()
            .enumerate()
            .map(|(index, &occupied)| (occupied as f64).powf(exponent(index, boxes)))
            .sum()
    }
}

impl Objective<PermutationSolution> for RuleBasedObjective {
    fn evaluate(&self, solutions: &[PermutationSolution]) -> Vec<f64> {
        solutions.iter().map(Self::score).collect()
    }
}
