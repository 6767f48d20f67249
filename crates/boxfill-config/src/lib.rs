//! Configuration system for boxfill.
//!
//! Load instance and search parameters from TOML or YAML so runs can be
//! tuned without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use boxfill_config::{AlgorithmKind, BoxFillConfig};
//!
//! let config = BoxFillConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [instance]
//!     box_size = 10
//!     rectangle_count = 12
//!     max_width = 4
//!     max_height = 4
//!     algorithm = "hill_climbing"
//!
//!     [local_search]
//!     attempts = 20
//! "#).unwrap();
//!
//! assert_eq!(config.instance.algorithm, AlgorithmKind::HillClimbing);
//! assert_eq!(config.local_search.attempts, 20);
//! assert!(config.validate().is_ok());
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use boxfill_config::BoxFillConfig;
//!
//! let config = BoxFillConfig::load("boxfill.toml").unwrap_or_default();
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BoxFillConfig {
    /// Random seed for reproducible runs.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Which problem representation to search.
    #[serde(default)]
    pub variant: ProblemVariant,

    /// Instance parameters.
    #[serde(default)]
    pub instance: InstanceConfig,

    /// Local search engine parameters.
    #[serde(default)]
    pub local_search: LocalSearchConfig,

    /// Backtracking engine parameters.
    #[serde(default)]
    pub backtracking: BacktrackingConfig,

    /// Driver loop parameters.
    #[serde(default)]
    pub driver: DriverConfig,
}

impl BoxFillConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the instance parameters.
    pub fn with_instance(mut self, instance: InstanceConfig) -> Self {
        self.instance = instance;
        self
    }

    /// Sets the search algorithm.
    pub fn with_algorithm(mut self, algorithm: AlgorithmKind) -> Self {
        self.instance.algorithm = algorithm;
        self
    }

    /// Sets the problem variant.
    pub fn with_variant(mut self, variant: ProblemVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Checks every documented parameter range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.instance.validate()?;
        self.local_search.validate()?;
        self.driver.validate()?;
        if self.variant != ProblemVariant::Geometric
            && self.instance.algorithm == AlgorithmKind::Backtracking
        {
            return Err(ConfigError::Invalid(format!(
                "the {:?} variant does not support backtracking",
                self.variant
            )));
        }
        Ok(())
    }
}

/// Problem representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemVariant {
    /// Rectangles with explicit positions.
    #[default]
    Geometric,

    /// Permutations realized by shelf placement.
    RuleBased,

    /// Explicit positions with overlaps tolerated and penalized.
    RelaxedGeometric,
}

/// Search algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// Greedy best-improvement local search.
    HillClimbing,

    /// Temperature-driven local search.
    #[default]
    SimulatedAnnealing,

    /// Systematic constraint search.
    Backtracking,
}

/// Temperature decay rule for simulated annealing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoolingScheduleKind {
    /// `T = C / ln(1 + step)`
    Logarithmic,

    /// `T = T_prev * alpha^step`
    #[default]
    Geometric,
}

/// Neighborhood enumeration policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborhoodKind {
    Exhaustive,
    ProbableFields,
    Stochastic,
}

/// Instance parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct InstanceConfig {
    /// Edge length `L` of every box.
    pub box_size: i32,

    /// Number of rectangles to place.
    pub rectangle_count: usize,

    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,

    /// Maximum number of boxes a packing may use.
    pub box_limit: usize,

    /// Search algorithm.
    pub algorithm: AlgorithmKind,

    /// Starting temperature for simulated annealing.
    pub temperature: f64,

    /// Cooling schedule for simulated annealing.
    pub cooling_schedule: CoolingScheduleKind,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            box_size: 20,
            rectangle_count: 100,
            min_width: 1,
            max_width: 10,
            min_height: 1,
            max_height: 10,
            box_limit: 1000,
            algorithm: AlgorithmKind::default(),
            temperature: 50.0,
            cooling_schedule: CoolingScheduleKind::default(),
        }
    }
}

impl InstanceConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.box_size <= 0 {
            return Err(invalid("box_size must be positive"));
        }
        check_range("width", self.min_width, self.max_width, self.box_size)?;
        check_range("height", self.min_height, self.max_height, self.box_size)?;
        if self.box_limit == 0 {
            return Err(invalid("box_limit must be positive"));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(invalid("temperature must be a finite non-negative number"));
        }
        Ok(())
    }
}

fn check_range(name: &str, min: i32, max: i32, box_size: i32) -> Result<(), ConfigError> {
    if min < 1 || min > max || max > box_size {
        return Err(ConfigError::Invalid(format!(
            "{name} bounds must satisfy 1 <= min ({min}) <= max ({max}) <= box_size ({box_size})"
        )));
    }
    Ok(())
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Invalid(message.to_string())
}

/// Local search configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LocalSearchConfig {
    /// Maximum number of steps.
    pub step_limit: u64,

    /// Consecutive non-accepting steps tolerated before giving up.
    pub attempts: u64,

    /// Neighborhood policy. Defaults to exhaustive for hill climbing and
    /// stochastic for simulated annealing.
    pub neighborhood: Option<NeighborhoodKind>,

    /// Geometric cooling factor.
    pub alpha: f64,

    /// Logarithmic cooling constant. Defaults to `rectangle_count^1.1`.
    pub log_constant: Option<f64>,

    /// Target boxes sampled per stochastic move.
    pub sample_boxes: usize,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            step_limit: 10_000,
            attempts: 100,
            neighborhood: None,
            alpha: 0.99,
            log_constant: None,
            sample_boxes: 1,
        }
    }
}

impl LocalSearchConfig {
    /// Returns the configured neighborhood, or the algorithm's default one.
    pub fn neighborhood_for(&self, algorithm: AlgorithmKind) -> NeighborhoodKind {
        self.neighborhood.unwrap_or(match algorithm {
            AlgorithmKind::HillClimbing => NeighborhoodKind::Exhaustive,
            _ => NeighborhoodKind::Stochastic,
        })
    }

    /// Returns the logarithmic cooling constant for `rectangle_count` pieces.
    pub fn log_constant_for(&self, rectangle_count: usize) -> f64 {
        self.log_constant
            .unwrap_or_else(|| (rectangle_count.max(1) as f64).powf(1.1))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(invalid("alpha must lie in (0, 1]"));
        }
        if let Some(c) = self.log_constant {
            if !c.is_finite() || c < 0.0 {
                return Err(invalid("log_constant must be a finite non-negative number"));
            }
        }
        if self.sample_boxes == 0 {
            return Err(invalid("sample_boxes must be positive"));
        }
        Ok(())
    }
}

/// Backtracking configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BacktrackingConfig {
    /// Maximum number of assign/backtrack steps.
    pub step_limit: u64,
}

impl Default for BacktrackingConfig {
    fn default() -> Self {
        Self { step_limit: 10_000 }
    }
}

/// Driver loop configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DriverConfig {
    /// Number of recent objective values the convergence test looks at.
    pub convergence_window: usize,

    /// Standard deviation below which the run counts as converged.
    pub convergence_threshold: f64,

    /// Retry budget for generating a feasible start.
    pub generation_attempts: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            convergence_window: 10_000,
            convergence_threshold: 1e-5,
            generation_attempts: 100,
        }
    }
}

impl DriverConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.convergence_window == 0 {
            return Err(invalid("convergence_window must be positive"));
        }
        if self.generation_attempts == 0 {
            return Err(invalid("generation_attempts must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
