//! End-to-end runs through the public entry points.

use boxfill::prelude::*;
use boxfill::{
    compact_boxes, geometric_instance, run, AlgorithmKind, InstanceConfig, NeighborhoodKind,
    ProblemVariant, StopReason,
};

fn config(algorithm: AlgorithmKind, box_size: i32, count: usize, side: i32) -> BoxFillConfig {
    BoxFillConfig::new()
        .with_random_seed(11)
        .with_instance(InstanceConfig {
            box_size,
            rectangle_count: count,
            max_width: side,
            max_height: side,
            box_limit: 50,
            algorithm,
            ..InstanceConfig::default()
        })
}

#[test]
fn test_backtracking_packs_three_squares() {
    let mut config = config(AlgorithmKind::Backtracking, 5, 3, 2);
    config.instance.min_width = 2;
    config.instance.min_height = 2;
    config.instance.box_limit = 10;

    let report = run(&config).unwrap();
    assert_eq!(report.stop_reason, StopReason::Completed);
    assert_eq!(report.solution.len(), 3);
    assert!(report.end_boxes <= 3);
    assert_eq!(report.start_boxes, 0);

    let instance = geometric_instance(&config);
    assert!(boxfill::is_feasible(&instance, &report.solution));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    for algorithm in [
        AlgorithmKind::HillClimbing,
        AlgorithmKind::SimulatedAnnealing,
        AlgorithmKind::Backtracking,
    ] {
        let mut config = config(algorithm, 6, 8, 3);
        config.local_search.step_limit = 50;
        config.backtracking.step_limit = 200;

        let a = run(&config).unwrap();
        let b = run(&config).unwrap();
        assert!(a.solution.same_layout(&b.solution), "{algorithm:?}");
        assert_eq!(a.steps, b.steps);
        assert_eq!(a.stop_reason, b.stop_reason);
        assert_eq!(a.end_objective, b.end_objective);
    }
}

#[test]
fn test_local_search_steps_never_overlap() {
    let cases = [
        (AlgorithmKind::HillClimbing, NeighborhoodKind::Exhaustive),
        (AlgorithmKind::HillClimbing, NeighborhoodKind::ProbableFields),
        (AlgorithmKind::SimulatedAnnealing, NeighborhoodKind::Stochastic),
        (AlgorithmKind::SimulatedAnnealing, NeighborhoodKind::ProbableFields),
    ];
    for (algorithm, neighborhood) in cases {
        let mut config = config(algorithm, 6, 10, 3);
        config.local_search.neighborhood = Some(neighborhood);
        let instance = geometric_instance(&config);
        let mut rng = rng_from_seed(Some(4));
        let mut engine = Engine::from_config(&instance, &config, &mut rng).unwrap();

        let mut current = instance.generate_feasible_solution(&mut rng).unwrap();
        for _ in 0..30 {
            match engine.step(current.clone()) {
                StepOutcome::Continue(next) => {
                    assert!(instance.is_feasible(&next), "{algorithm:?} {neighborhood:?}");
                    assert_eq!(next.len(), 10);
                    current = compact_boxes(&next);
                }
                StepOutcome::Done(_) => panic!("local search never completes"),
                StepOutcome::Failed(_) => break,
            }
        }
    }
}

#[test]
fn test_hill_climbing_never_loses_score() {
    let config = config(AlgorithmKind::HillClimbing, 6, 10, 3);
    let instance = geometric_instance(&config);
    let mut rng = rng_from_seed(Some(8));
    let mut engine = Engine::from_config(&instance, &config, &mut rng).unwrap();

    let mut current = instance.generate_feasible_solution(&mut rng).unwrap();
    let mut score = boxfill::objective(&instance, &[current.clone()])[0];
    for _ in 0..20 {
        let Some(next) = engine.step(current.clone()).into_solution() else {
            break;
        };
        let next_score = boxfill::objective(&instance, &[next.clone()])[0];
        assert!(next_score >= score);
        score = next_score;
        current = next;
    }
}

#[test]
fn test_compaction_is_idempotent() {
    let config = config(AlgorithmKind::SimulatedAnnealing, 6, 20, 4);
    let instance = geometric_instance(&config);
    let mut rng = rng_from_seed(Some(2));
    let packing = instance.generate_feasible_solution(&mut rng).unwrap();

    // drop every rectangle in box 0 to leave a gap
    let gapped: Packing = packing
        .rectangles()
        .iter()
        .filter(|r| r.box_id() != 0)
        .copied()
        .collect();
    let once = compact_boxes(&gapped);
    let twice = compact_boxes(&once);

    assert!(once.same_layout(&twice));
    assert_eq!(once.num_boxes(), once.box_counts().len());
    assert_eq!(
        once.box_counts().keys().copied().collect::<Vec<_>>(),
        (0..once.num_boxes()).collect::<Vec<_>>()
    );
}

#[test]
fn test_run_from_toml() {
    let config = BoxFillConfig::from_toml_str(
        r#"
        random_seed = 3

        [instance]
        box_size = 8
        rectangle_count = 12
        max_width = 4
        max_height = 4
        algorithm = "simulated_annealing"
        cooling_schedule = "logarithmic"

        [local_search]
        step_limit = 300
        attempts = 50

        [driver]
        convergence_window = 40
        "#,
    )
    .unwrap();

    let report = run(&config).unwrap();
    assert_eq!(report.solution.len(), 12);
    assert!(report.steps <= 300);
    assert!(boxfill::is_feasible(&geometric_instance(&config), &report.solution));
    assert_ne!(report.stop_reason, StopReason::Completed);
}

#[test]
fn test_rule_based_run() {
    let config =
        config(AlgorithmKind::HillClimbing, 8, 15, 4).with_variant(ProblemVariant::RuleBased);

    let report = run(&config).unwrap();
    assert_eq!(report.solution.len(), 15);
    assert!(report.end_objective >= report.start_objective);
    assert!(boxfill::is_feasible(&geometric_instance(&config), &report.solution));
}
