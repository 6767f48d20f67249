//! Tests for configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42
        variant = "geometric"

        [instance]
        box_size = 8
        rectangle_count = 20
        min_width = 2
        max_width = 5
        min_height = 1
        max_height = 3
        box_limit = 50
        algorithm = "simulated_annealing"
        temperature = 25.0
        cooling_schedule = "logarithmic"

        [local_search]
        step_limit = 500
        attempts = 10
        neighborhood = "probable_fields"

        [backtracking]
        step_limit = 900
    "#;

    let config = BoxFillConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.instance.box_size, 8);
    assert_eq!(config.instance.cooling_schedule, CoolingScheduleKind::Logarithmic);
    assert_eq!(config.local_search.step_limit, 500);
    assert_eq!(
        config.local_search.neighborhood,
        Some(NeighborhoodKind::ProbableFields)
    );
    assert_eq!(config.backtracking.step_limit, 900);
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        variant: rule_based
        instance:
          box_size: 10
          rectangle_count: 5
          max_width: 4
          max_height: 4
          algorithm: hill_climbing
    "#;

    let config = BoxFillConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.variant, ProblemVariant::RuleBased);
    assert_eq!(config.instance.algorithm, AlgorithmKind::HillClimbing);
    assert_eq!(config.instance.min_width, 1);
}

#[test]
fn test_defaults() {
    let config = BoxFillConfig::default();
    assert_eq!(config.instance.box_size, 20);
    assert_eq!(config.instance.algorithm, AlgorithmKind::SimulatedAnnealing);
    assert_eq!(config.instance.cooling_schedule, CoolingScheduleKind::Geometric);
    assert_eq!(config.local_search.attempts, 100);
    assert_eq!(config.driver.convergence_window, 10_000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder() {
    let config = BoxFillConfig::new()
        .with_random_seed(123)
        .with_algorithm(AlgorithmKind::Backtracking);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.instance.algorithm, AlgorithmKind::Backtracking);
}

#[test]
fn test_neighborhood_defaults_follow_algorithm() {
    let ls = LocalSearchConfig::default();
    assert_eq!(
        ls.neighborhood_for(AlgorithmKind::HillClimbing),
        NeighborhoodKind::Exhaustive
    );
    assert_eq!(
        ls.neighborhood_for(AlgorithmKind::SimulatedAnnealing),
        NeighborhoodKind::Stochastic
    );
}

#[test]
fn test_log_constant_default() {
    let ls = LocalSearchConfig::default();
    assert!((ls.log_constant_for(10) - 10f64.powf(1.1)).abs() < 1e-9);

    let ls = LocalSearchConfig {
        log_constant: Some(50.0),
        ..Default::default()
    };
    assert_eq!(ls.log_constant_for(10), 50.0);
}

#[test]
fn test_rejects_width_larger_than_box() {
    let config = BoxFillConfig::new().with_instance(InstanceConfig {
        box_size: 5,
        max_width: 6,
        ..Default::default()
    });
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("width"));
}

#[test]
fn test_rejects_zero_box_limit() {
    let config = BoxFillConfig::new().with_instance(InstanceConfig {
        box_limit: 0,
        ..Default::default()
    });
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_rejects_rule_based_backtracking() {
    let config = BoxFillConfig::new()
        .with_variant(ProblemVariant::RuleBased)
        .with_algorithm(AlgorithmKind::Backtracking);
    assert!(config.validate().is_err());
}

#[test]
fn test_relaxed_geometric_variant() {
    let config = BoxFillConfig::from_toml_str(r#"variant = "relaxed_geometric""#).unwrap();
    assert_eq!(config.variant, ProblemVariant::RelaxedGeometric);
    assert!(config.validate().is_ok());

    let config = config.with_algorithm(AlgorithmKind::Backtracking);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = BoxFillConfig::load("definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
