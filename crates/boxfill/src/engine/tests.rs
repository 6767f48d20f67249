//! Tests for engine construction.

use super::*;
use boxfill_config::{InstanceConfig, NeighborhoodKind};
use boxfill_core::rng_from_seed;

fn small_config(algorithm: AlgorithmKind) -> BoxFillConfig {
    BoxFillConfig::new().with_instance(InstanceConfig {
        box_size: 6,
        rectangle_count: 5,
        max_width: 3,
        max_height: 3,
        box_limit: 10,
        algorithm,
        ..InstanceConfig::default()
    })
}

#[test]
fn test_neighborhood_mode_mapping() {
    assert_eq!(
        neighborhood_mode(NeighborhoodKind::Exhaustive),
        NeighborhoodMode::Exhaustive
    );
    assert_eq!(
        neighborhood_mode(NeighborhoodKind::ProbableFields),
        NeighborhoodMode::ProbableFields
    );
    assert_eq!(
        neighborhood_mode(NeighborhoodKind::Stochastic),
        NeighborhoodMode::Stochastic
    );
}

#[test]
fn test_geometric_instance_follows_config() {
    let instance = geometric_instance(&small_config(AlgorithmKind::HillClimbing));
    assert_eq!(instance.box_size(), 6);
    assert_eq!(instance.rectangle_count(), 5);
    assert_eq!(instance.box_limit(), 10);
}

#[test]
fn test_rule_based_instance_follows_config() {
    let instance = rule_based_instance(&small_config(AlgorithmKind::HillClimbing));
    assert_eq!(instance.box_size(), 6);
    assert_eq!(instance.rectangle_count(), 5);
}

#[test]
fn test_cooling_schedule_from_config() {
    let mut config = small_config(AlgorithmKind::SimulatedAnnealing);
    config.local_search.alpha = 0.95;
    assert_eq!(
        cooling_schedule(&config),
        CoolingSchedule::Geometric { alpha: 0.95 }
    );

    config.instance.cooling_schedule = CoolingScheduleKind::Logarithmic;
    match cooling_schedule(&config) {
        CoolingSchedule::Logarithmic { constant } => {
            assert!((constant - 5f64.powf(1.1)).abs() < 1e-12);
        }
        other => panic!("expected logarithmic, got {other:?}"),
    }

    config.local_search.log_constant = Some(3.0);
    assert_eq!(
        cooling_schedule(&config),
        CoolingSchedule::Logarithmic { constant: 3.0 }
    );
}

#[test]
fn test_local_search_engine_variants() {
    let mut rng = rng_from_seed(Some(0));

    let config = small_config(AlgorithmKind::HillClimbing);
    let instance = geometric_instance(&config);
    let engine = LocalSearchEngine::from_config(&instance, &config, &mut rng).unwrap();
    assert_eq!(engine.phase_type_name(), "HillClimbing");
    match &engine {
        LocalSearchEngine::HillClimbing(phase) => {
            assert_eq!(phase.mode(), NeighborhoodMode::Exhaustive);
        }
        other => panic!("expected hill climbing, got {other:?}"),
    }

    let config = small_config(AlgorithmKind::SimulatedAnnealing);
    let engine = LocalSearchEngine::from_config(&instance, &config, &mut rng).unwrap();
    assert_eq!(engine.phase_type_name(), "SimulatedAnnealing");
    match &engine {
        LocalSearchEngine::SimulatedAnnealing(phase) => {
            assert_eq!(phase.mode(), NeighborhoodMode::Stochastic);
            assert_eq!(phase.acceptor().temperature(), 50.0);
        }
        other => panic!("expected simulated annealing, got {other:?}"),
    }

    let config = small_config(AlgorithmKind::Backtracking);
    assert!(LocalSearchEngine::from_config(&instance, &config, &mut rng).is_none());
}

#[test]
fn test_configured_neighborhood_overrides_default() {
    let mut config = small_config(AlgorithmKind::HillClimbing);
    config.local_search.neighborhood = Some(NeighborhoodKind::ProbableFields);
    let instance = geometric_instance(&config);
    let mut rng = rng_from_seed(Some(0));

    match LocalSearchEngine::from_config(&instance, &config, &mut rng) {
        Some(LocalSearchEngine::HillClimbing(phase)) => {
            assert_eq!(phase.mode(), NeighborhoodMode::ProbableFields);
        }
        other => panic!("expected hill climbing, got {other:?}"),
    }
}

#[test]
fn test_backtracking_engine_starts_empty() {
    let config = small_config(AlgorithmKind::Backtracking);
    let instance = geometric_instance(&config);
    let mut rng = rng_from_seed(Some(0));

    let engine = Engine::from_config(&instance, &config, &mut rng).unwrap();
    assert!(engine.is_backtracking());
    assert_eq!(engine.phase_type_name(), "Backtracking");
    assert_eq!(engine.initial_solution(), Some(Packing::empty()));
    match &engine {
        Engine::Backtracking(search) => assert_eq!(search.variable_count(), 5),
        other => panic!("expected backtracking, got {other:?}"),
    }
}

#[test]
fn test_backtracking_pool_emptiness() {
    let mut config = small_config(AlgorithmKind::Backtracking);
    let mut rng = rng_from_seed(Some(0));
    let engine = Engine::from_config(&geometric_instance(&config), &config, &mut rng).unwrap();
    assert!(!engine.pool_is_empty());

    config.instance.rectangle_count = 0;
    let engine = Engine::from_config(&geometric_instance(&config), &config, &mut rng).unwrap();
    assert!(engine.pool_is_empty());

    let config = small_config(AlgorithmKind::HillClimbing);
    let engine = Engine::from_config(&geometric_instance(&config), &config, &mut rng).unwrap();
    assert!(!engine.pool_is_empty());
}

#[test]
fn test_relaxed_instance_follows_config() {
    let mut config = small_config(AlgorithmKind::SimulatedAnnealing);
    config.instance.min_height = 2;
    let instance = relaxed_instance(&config);
    assert_eq!(instance.box_size(), 6);
    assert_eq!(instance.rectangle_count(), 5);

    let mut rng = rng_from_seed(Some(2));
    let start = instance.generate_feasible_solution(&mut rng).unwrap();
    assert!(start.packing().rectangles().iter().all(|r| r.height() >= 2));
    assert!(LocalSearchEngine::from_config(&instance, &config, &mut rng).is_some());
}

#[test]
fn test_local_search_engine_has_no_initial_solution() {
    let config = small_config(AlgorithmKind::SimulatedAnnealing);
    let instance = geometric_instance(&config);
    let mut rng = rng_from_seed(Some(0));

    let engine = Engine::from_config(&instance, &config, &mut rng).unwrap();
    assert!(!engine.is_backtracking());
    assert_eq!(engine.initial_solution(), None);
}

#[test]
fn test_invalid_instance_fails_backtracking_construction() {
    let mut config = small_config(AlgorithmKind::Backtracking);
    config.instance.max_width = 7;
    let instance = geometric_instance(&config);
    let mut rng = rng_from_seed(Some(0));

    assert!(matches!(
        Engine::from_config(&instance, &config, &mut rng),
        Err(SearchError::GenerationFailure(_))
    ));
}
