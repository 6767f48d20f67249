//! Tests for termination helpers.

use super::*;
use boxfill_core::SearchError;

#[test]
fn test_step_budget() {
    let mut budget = StepBudget::new(3);
    assert_eq!(budget.try_consume(), Ok(1));
    assert_eq!(budget.try_consume(), Ok(2));
    assert!(!budget.is_exhausted());
    assert_eq!(budget.try_consume(), Ok(3));
    assert!(budget.is_exhausted());
    assert_eq!(
        budget.try_consume(),
        Err(SearchError::StepLimitReached { limit: 3 })
    );
    assert_eq!(budget.count(), 3);

    budget.reset();
    assert_eq!(budget.count(), 0);
}

#[test]
fn test_zero_budget() {
    let mut budget = StepBudget::new(0);
    assert!(budget.try_consume().is_err());
}

#[test]
fn test_stagnation_fails_after_attempts() {
    let mut counter = StagnationCounter::new(2);
    assert!(counter.miss().is_ok());
    assert!(counter.miss().is_ok());
    assert_eq!(
        counter.miss(),
        Err(SearchError::NoImprovementFound { attempts: 2 })
    );
}

#[test]
fn test_stagnation_reset() {
    let mut counter = StagnationCounter::new(1);
    assert!(counter.miss().is_ok());
    counter.reset();
    assert_eq!(counter.misses(), 0);
    assert!(counter.miss().is_ok());
}

#[test]
fn test_convergence_needs_full_window() {
    let mut window = ConvergenceWindow::new(4, 0.1);
    for _ in 0..3 {
        window.push(2.0);
    }
    assert!(!window.is_converged());
    window.push(2.0);
    assert!(window.is_converged());
}

#[test]
fn test_convergence_rolls_over() {
    let mut window = ConvergenceWindow::new(3, 0.1);
    window.push(0.0);
    window.push(10.0);
    window.push(10.0);
    assert!(!window.is_converged());
    window.push(10.0);
    assert_eq!(window.len(), 3);
    assert!(window.is_converged());
}

#[test]
fn test_std_dev() {
    let mut window = ConvergenceWindow::new(4, 1.0);
    assert!(window.std_dev().is_none());
    for v in [2.0, 4.0, 4.0, 6.0] {
        window.push(v);
    }
    let sd = window.std_dev().unwrap();
    assert!((sd - 2f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_zero_capacity_never_converges() {
    let mut window = ConvergenceWindow::new(0, 1.0);
    window.push(1.0);
    assert!(window.is_empty());
    assert!(!window.is_converged());
}
