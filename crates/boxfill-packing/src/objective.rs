//! Box-filling objective.

use boxfill_core::Objective;

use crate::solution::Packing;

/// Exponent applied to each box's rectangle count.
///
/// Slightly super-linear, so concentrating rectangles in fewer boxes pays
/// off even before a box empties out.
pub const FILL_EXPONENT: f64 = 1.1;

/// Scores a packing as `-numBoxes + Σ_box count^1.1`. Higher is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxFillingObjective;

impl BoxFillingObjective {
    pub fn new() -> Self {
        Self
    }

    /// Scores one packing.
    pub fn score(packing: &Packing) -> f64 {
        let fill: f64 = packing
            .box_counts()
            .values()
            .map(|&count| (count as f64).powf(FILL_EXPONENT))
            .sum();
        fill - packing.num_boxes() as f64
    }
}

impl Objective<Packing> for BoxFillingObjective {
    fn evaluate(&self, solutions: &[Packing]) -> Vec<f64> {
        solutions.iter().map(Self::score).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rectangle::{Corner, Rectangle};

    fn packing(boxes: &[usize]) -> Packing {
        boxes
            .iter()
            .enumerate()
            .map(|(id, &b)| Rectangle::new(1, 1, Corner::new(0, id as i32), b, id))
            .collect()
    }

    #[test]
    fn test_empty_packing_scores_zero() {
        assert_eq!(BoxFillingObjective::score(&Packing::empty()), 0.0);
    }

    #[test]
    fn test_known_values() {
        let single = BoxFillingObjective::score(&packing(&[0, 0, 0]));
        assert!((single - (3f64.powf(1.1) - 1.0)).abs() < 1e-12);

        let split = BoxFillingObjective::score(&packing(&[0, 0, 1]));
        assert!((split - (2f64.powf(1.1) + 1.0 - 2.0)).abs() < 1e-12);
        assert!(single > split);
    }

    #[test]
    fn test_gaps_count_as_boxes() {
        // box 1 is empty but box 2 is used: numBoxes is 3
        let gapped = BoxFillingObjective::score(&packing(&[0, 2]));
        assert!((gapped - (2.0 - 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_batch_preserves_order() {
        let objective = BoxFillingObjective::new();
        let scores = objective.evaluate(&[packing(&[0, 1]), packing(&[0, 0])]);
        assert_eq!(scores.len(), 2);
        assert!(scores[1] > scores[0]);
    }
}
