//! Step driver: runs one configured search to a stop condition.
//!
//! The driver owns the loop the engines leave out. It produces the start
//! Solution, feeds every returned Solution back in, compacts box indices
//! after each geometric or relaxed step and decides when to stop.

use std::fmt;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info};

use boxfill_config::{BoxFillConfig, ConfigError, ProblemVariant};
use boxfill_core::{rng_from_seed, Objective, SearchError, SearchProblem, StepOutcome};
use boxfill_packing::{
    compact_boxes, BoxFilling, BoxFillingObjective, Packing, RelaxedObjective, RelaxedPacking,
    RuleBasedObjective, MAX_PENALTY_FRACTION,
};
use boxfill_solver::{ConvergenceWindow, SearchEngine};

use crate::engine::{
    geometric_instance, relaxed_instance, rule_based_instance, Engine, LocalSearchEngine,
};

/// Failures that prevent a run from starting.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("the {0:?} variant has no backtracking engine")]
    UnsupportedAlgorithm(ProblemVariant),
}

/// Why the driver stopped stepping.
#[derive(Debug, Clone, PartialEq)]
pub enum StopReason {
    /// The engine returned a complete Solution.
    Completed,
    /// The objective stopped moving over the convergence window.
    Converged,
    /// The engine reported a terminal condition.
    Terminated(SearchError),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Completed => write!(f, "completed"),
            StopReason::Converged => write!(f, "converged"),
            StopReason::Terminated(err) => write!(f, "{err}"),
        }
    }
}

/// Outcome of [`run`].
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Last Solution, realized as a packing.
    pub solution: Packing,
    pub start_objective: f64,
    pub end_objective: f64,
    pub start_boxes: usize,
    pub end_boxes: usize,
    /// Steps the engine took.
    pub steps: u64,
    pub stop_reason: StopReason,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn improvement(&self) -> f64 {
        self.end_objective - self.start_objective
    }

    pub fn boxes_saved(&self) -> isize {
        self.start_boxes as isize - self.end_boxes as isize
    }
}

/// Runs the search `config` describes.
///
/// # Errors
///
/// Invalid configuration, a start Solution (or backtracking pool) that
/// can't be generated, or an algorithm the variant doesn't support. Terminal
/// conditions met while stepping are not errors: they end up in
/// [`RunReport::stop_reason`].
///
/// # Example
///
/// ```
/// use boxfill::{run, BoxFillConfig, InstanceConfig, StopReason};
///
/// let mut config = BoxFillConfig::new().with_random_seed(5);
/// config.instance = InstanceConfig {
///     box_size: 8,
///     rectangle_count: 10,
///     max_width: 4,
///     max_height: 4,
///     ..InstanceConfig::default()
/// };
/// config.local_search.step_limit = 200;
///
/// let report = run(&config).unwrap();
/// assert_eq!(report.solution.len(), 10);
/// assert!(report.steps <= 200);
/// assert!(!matches!(report.stop_reason, StopReason::Completed));
/// ```
pub fn run(config: &BoxFillConfig) -> Result<RunReport, RunError> {
    config.validate()?;
    let started = Instant::now();
    info!(
        event = "run_started",
        variant = ?config.variant,
        algorithm = ?config.instance.algorithm,
        rectangles = config.instance.rectangle_count,
        box_size = config.instance.box_size,
        seed = ?config.random_seed,
    );

    let report = match config.variant {
        ProblemVariant::Geometric => run_geometric(config, started)?,
        ProblemVariant::RuleBased => run_rule_based(config, started)?,
        ProblemVariant::RelaxedGeometric => run_relaxed(config, started)?,
    };

    info!(
        event = "run_finished",
        stop_reason = %report.stop_reason,
        steps = report.steps,
        start_objective = report.start_objective,
        end_objective = report.end_objective,
        start_boxes = report.start_boxes,
        end_boxes = report.end_boxes,
        best_objective = BoxFilling::best_objective(config.instance.rectangle_count),
        elapsed_ms = report.elapsed.as_millis() as u64,
    );
    Ok(report)
}

fn run_geometric(config: &BoxFillConfig, started: Instant) -> Result<RunReport, RunError> {
    let instance = geometric_instance(config);
    let mut rng = rng_from_seed(config.random_seed);
    let mut engine = Engine::from_config(&instance, config, &mut rng)?;

    let (start, window) = match engine.initial_solution() {
        Some(empty) => (empty, None),
        None => (
            compact_boxes(&instance.generate_feasible_solution(&mut rng)?),
            Some(convergence_window(config)),
        ),
    };
    let start_objective = BoxFillingObjective::score(&start);
    let start_boxes = start.num_boxes();

    let (solution, stop_reason) = if engine.pool_is_empty() {
        (start, StopReason::Completed)
    } else {
        drive(
            &mut engine,
            start,
            window,
            BoxFillingObjective::score,
            |next| compact_boxes(&next),
        )
    };

    Ok(RunReport {
        start_objective,
        end_objective: BoxFillingObjective::score(&solution),
        start_boxes,
        end_boxes: solution.num_boxes(),
        steps: engine.step_count(),
        stop_reason,
        elapsed: started.elapsed(),
        solution,
    })
}

fn run_rule_based(config: &BoxFillConfig, started: Instant) -> Result<RunReport, RunError> {
    let instance = rule_based_instance(config);
    let mut rng = rng_from_seed(config.random_seed);
    let mut engine = LocalSearchEngine::from_config(&instance, config, &mut rng)
        .ok_or(RunError::UnsupportedAlgorithm(ProblemVariant::RuleBased))?;

    let start = instance.generate_feasible_solution(&mut rng)?;
    let objective = instance.objective();
    let start_objective = objective.evaluate_one(&start);
    let start_boxes = start.realize().num_boxes();

    let window = Some(convergence_window(config));
    let (solution, stop_reason) =
        drive(&mut engine, start, window, RuleBasedObjective::score, |next| next);

    Ok(RunReport {
        start_objective,
        end_objective: objective.evaluate_one(&solution),
        start_boxes,
        end_boxes: solution.realize().num_boxes(),
        steps: engine.step_count(),
        stop_reason,
        elapsed: started.elapsed(),
        solution: solution.realize(),
    })
}

/// The report and the convergence window score overlaps at full weight.
fn run_relaxed(config: &BoxFillConfig, started: Instant) -> Result<RunReport, RunError> {
    let instance = relaxed_instance(config);
    let box_size = instance.box_size();
    let mut rng = rng_from_seed(config.random_seed);
    let mut engine = LocalSearchEngine::from_config(&instance, config, &mut rng)
        .ok_or(RunError::UnsupportedAlgorithm(ProblemVariant::RelaxedGeometric))?;

    let start = instance.generate_feasible_solution(&mut rng)?;
    let score = |s: &RelaxedPacking| RelaxedObjective::score(s, box_size, MAX_PENALTY_FRACTION);
    let start_objective = score(&start);
    let start_boxes = start.packing().num_boxes();

    let window = Some(convergence_window(config));
    let (solution, stop_reason) = drive(&mut engine, start, window, score, |next| {
        RelaxedPacking::new(compact_boxes(next.packing()))
    });
    debug!(
        event = "relaxed_overlap",
        overlap_cells = solution.overlap_cells(box_size),
    );

    Ok(RunReport {
        start_objective,
        end_objective: score(&solution),
        start_boxes,
        end_boxes: solution.packing().num_boxes(),
        steps: engine.step_count(),
        stop_reason,
        elapsed: started.elapsed(),
        solution: solution.into_packing(),
    })
}

fn convergence_window(config: &BoxFillConfig) -> ConvergenceWindow {
    ConvergenceWindow::new(
        config.driver.convergence_window,
        config.driver.convergence_threshold,
    )
}

/// Steps `engine` until it stops or the objective settles.
///
/// `settle` normalizes every Solution the engine returns before it is
/// scored and fed back in.
fn drive<S, E>(
    engine: &mut E,
    start: S,
    mut window: Option<ConvergenceWindow>,
    score: impl Fn(&S) -> f64,
    settle: impl Fn(S) -> S,
) -> (S, StopReason)
where
    S: Clone,
    E: SearchEngine<S>,
{
    let mut current = start;
    loop {
        match engine.step(current.clone()) {
            StepOutcome::Continue(next) => {
                current = settle(next);
                let Some(window) = window.as_mut() else {
                    continue;
                };
                window.push(score(&current));
                if window.is_converged() {
                    debug!(
                        event = "converged",
                        steps = engine.step_count(),
                        std_dev = window.std_dev().unwrap_or_default(),
                    );
                    return (current, StopReason::Converged);
                }
            }
            StepOutcome::Done(done) => return (settle(done), StopReason::Completed),
            StepOutcome::Failed(err) => return (current, StopReason::Terminated(err)),
        }
    }
}
