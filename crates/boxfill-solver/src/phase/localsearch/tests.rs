//! Tests for the local search phase.

use super::*;
use crate::engine::SearchEngine;
use boxfill_core::{NeighborhoodMode, ResumeToken, SearchError, StepOutcome};
use boxfill_test::{EmptyNeighborhood, ScriptedNeighborhood, Tagged, ValueObjective};

fn start() -> Tagged {
    Tagged::new(usize::MAX, 0)
}

#[test]
fn test_best_score_forager_picks_first_maximum() {
    let forager = BestScoreForager::new();
    assert_eq!(forager.pick(&[3.0, 5.0, 5.0, -1.0]), Some((1, 5.0)));
    assert_eq!(forager.pick(&[]), None);
    assert_eq!(forager.evaluation_limit(), None);
}

#[test]
fn test_first_candidate_forager() {
    let forager = FirstCandidateForager::new();
    assert_eq!(forager.pick(&[-2.0, 7.0]), Some((0, -2.0)));
    assert_eq!(forager.evaluation_limit(), Some(1));
}

#[test]
fn test_hill_climbing_takes_first_best_candidate() {
    let neighborhood = ScriptedNeighborhood::repeating(Tagged::batch(&[3, 5, 5, -1]));
    let mut phase = LocalSearchPhase::new(
        neighborhood,
        ValueObjective,
        HillClimbingAcceptor::new(),
        BestScoreForager::new(),
    )
    .with_mode(NeighborhoodMode::Exhaustive)
    .with_seed(0);

    match phase.step(start()) {
        StepOutcome::Continue(next) => {
            assert_eq!(next.tag, 1);
            assert_eq!(next.value, 5.0);
        }
        other => panic!("expected Continue, got {other:?}"),
    }
    assert_eq!(phase.step_count(), 1);
    assert_eq!(phase.token(), ResumeToken::initial().next());
}

#[test]
fn test_hill_climbing_miss_returns_current() {
    let neighborhood = ScriptedNeighborhood::repeating(Tagged::batch(&[0, -1]));
    let mut phase = LocalSearchPhase::new(
        neighborhood,
        ValueObjective,
        HillClimbingAcceptor::new(),
        BestScoreForager::new(),
    )
    .with_seed(0);

    let current = Tagged::new(7, 2);
    assert_eq!(phase.step(current), StepOutcome::Continue(current));
    // token only moves on acceptance
    assert_eq!(phase.token(), ResumeToken::initial());
}

#[test]
fn test_stagnation_fails_on_exactly_the_sixth_call() {
    let mut phase = LocalSearchPhase::new(
        EmptyNeighborhood,
        ValueObjective,
        HillClimbingAcceptor::new(),
        BestScoreForager::new(),
    )
    .with_attempts(5)
    .with_seed(0);

    for _ in 0..5 {
        assert!(matches!(phase.step(start()), StepOutcome::Continue(_)));
    }
    assert_eq!(
        phase.step(start()),
        StepOutcome::Failed(SearchError::NoImprovementFound { attempts: 5 })
    );
}

#[test]
fn test_rejected_candidates_count_as_stagnation() {
    let neighborhood = ScriptedNeighborhood::repeating(Tagged::batch(&[-1]));
    let mut phase = LocalSearchPhase::new(
        neighborhood,
        ValueObjective,
        HillClimbingAcceptor::new(),
        BestScoreForager::new(),
    )
    .with_attempts(2)
    .with_seed(0);

    assert!(matches!(phase.step(start()), StepOutcome::Continue(_)));
    assert!(matches!(phase.step(start()), StepOutcome::Continue(_)));
    assert!(matches!(
        phase.step(start()),
        StepOutcome::Failed(SearchError::NoImprovementFound { .. })
    ));
}

#[test]
fn test_acceptance_resets_stagnation() {
    // miss, hit, miss, miss: never more than two misses in a row
    let neighborhood = ScriptedNeighborhood::new(vec![
        vec![],
        Tagged::batch(&[1]),
        vec![],
        vec![],
    ]);
    let mut phase = LocalSearchPhase::new(
        neighborhood,
        ValueObjective,
        HillClimbingAcceptor::new(),
        BestScoreForager::new(),
    )
    .with_attempts(2)
    .with_seed(0);

    let mut current = start();
    for _ in 0..4 {
        match phase.step(current) {
            StepOutcome::Continue(next) => current = next,
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(current.value, 1.0);
    assert!(phase.step(current).is_terminal());
}

#[test]
fn test_step_limit() {
    let neighborhood = ScriptedNeighborhood::repeating(Tagged::batch(&[1]));
    let mut phase = LocalSearchPhase::new(
        neighborhood,
        ValueObjective,
        HillClimbingAcceptor::new(),
        BestScoreForager::new(),
    )
    .with_step_limit(3)
    .with_seed(0);

    let mut current = start();
    for _ in 0..3 {
        current = phase.step(current).into_solution().unwrap();
    }
    assert_eq!(current.value, 3.0);
    assert_eq!(
        phase.step(current),
        StepOutcome::Failed(SearchError::StepLimitReached { limit: 3 })
    );
    assert_eq!(phase.step_count(), 3);
}

#[test]
fn test_simulated_annealing_only_scores_first_candidate() {
    // the second candidate is better but never looked at
    let neighborhood = ScriptedNeighborhood::repeating(Tagged::batch(&[1, 10]));
    let mut phase = LocalSearchPhase::new(
        neighborhood,
        ValueObjective,
        SimulatedAnnealingAcceptor::new(50.0, CoolingSchedule::default()),
        FirstCandidateForager::new(),
    )
    .with_seed(0);

    let next = phase.step(start()).into_solution().unwrap();
    assert_eq!(next.tag, 0);
    assert_eq!(next.value, 1.0);
}

#[test]
fn test_invalidate_advances_token() {
    let mut phase = LocalSearchPhase::new(
        ScriptedNeighborhood::repeating(Tagged::batch(&[-1])),
        ValueObjective,
        HillClimbingAcceptor::new(),
        BestScoreForager::new(),
    )
    .with_seed(0);

    let _ = phase.step(start());
    phase.invalidate();
    let _ = phase.step(start());

    let tokens = phase.neighborhood().tokens();
    assert_eq!(tokens, &[ResumeToken::initial(), ResumeToken::initial().next()]);
}

#[test]
fn test_seeded_phases_agree() {
    let run = || {
        let mut phase = LocalSearchPhase::new(
            ScriptedNeighborhood::repeating(Tagged::batch(&[-1])),
            ValueObjective,
            SimulatedAnnealingAcceptor::new(1.0, CoolingSchedule::Geometric { alpha: 0.9 }),
            FirstCandidateForager::new(),
        )
        .with_attempts(1_000)
        .with_seed(21);
        let mut current = start();
        for _ in 0..50 {
            current = phase.step(current).into_solution().unwrap();
        }
        current.value
    };
    assert_eq!(run(), run());
}
