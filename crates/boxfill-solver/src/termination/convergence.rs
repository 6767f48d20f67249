//! Objective convergence detection.

use std::collections::VecDeque;

/// Ring buffer of recent objective values.
///
/// Converged once the buffer is full and the population standard deviation
/// of its values is below the threshold.
///
/// # Example
///
/// ```
/// use boxfill_solver::ConvergenceWindow;
///
/// let mut window = ConvergenceWindow::new(3, 1e-5);
/// window.push(1.0);
/// window.push(1.0);
/// assert!(!window.is_converged());
/// window.push(1.0);
/// assert!(window.is_converged());
/// ```
#[derive(Debug, Clone)]
pub struct ConvergenceWindow {
    capacity: usize,
    threshold: f64,
    values: VecDeque<f64>,
}

impl ConvergenceWindow {
    pub fn new(capacity: usize, threshold: f64) -> Self {
        Self {
            capacity,
            threshold,
            values: VecDeque::with_capacity(capacity),
        }
    }

    /// Records a value, dropping the oldest once full.
    pub fn push(&mut self, value: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.values.len() == self.capacity
    }

    /// Population standard deviation, `None` while empty.
    pub fn std_dev(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let n = self.values.len() as f64;
        let mean = self.values.iter().sum::<f64>() / n;
        let variance = self.values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Some(variance.sqrt())
    }

    pub fn is_converged(&self) -> bool {
        self.is_full() && self.std_dev().is_some_and(|sd| sd < self.threshold)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
