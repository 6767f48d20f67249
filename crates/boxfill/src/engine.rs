//! Engine construction from configuration.

use rand::SeedableRng;
use tracing::info;

use boxfill_config::{AlgorithmKind, BoxFillConfig, CoolingScheduleKind, NeighborhoodKind};
use boxfill_core::{NeighborhoodMode, SearchError, SearchProblem, SearchRng, StepOutcome};
use boxfill_packing::{BoxFilling, Packing, RelaxedBoxFilling, RuleBasedBoxFilling};
use boxfill_solver::{
    BacktrackingSearch, BestScoreForager, CoolingSchedule, FirstCandidateForager,
    HillClimbingAcceptor, LocalSearchPhase, SearchEngine, SimulatedAnnealingAcceptor,
};

/// Maps the configured neighborhood policy onto the engine's mode.
pub fn neighborhood_mode(kind: NeighborhoodKind) -> NeighborhoodMode {
    match kind {
        NeighborhoodKind::Exhaustive => NeighborhoodMode::Exhaustive,
        NeighborhoodKind::ProbableFields => NeighborhoodMode::ProbableFields,
        NeighborhoodKind::Stochastic => NeighborhoodMode::Stochastic,
    }
}

/// Builds the geometric instance described by `config`.
pub fn geometric_instance(config: &BoxFillConfig) -> BoxFilling {
    let instance = &config.instance;
    BoxFilling::new(
        instance.box_size,
        instance.rectangle_count,
        instance.max_width,
        instance.max_height,
    )
    .with_min_width(instance.min_width)
    .with_min_height(instance.min_height)
    .with_box_limit(instance.box_limit)
    .with_generation_attempts(config.driver.generation_attempts)
    .with_sample_boxes(config.local_search.sample_boxes)
}

/// Builds the permutation instance described by `config`.
pub fn rule_based_instance(config: &BoxFillConfig) -> RuleBasedBoxFilling {
    let instance = &config.instance;
    RuleBasedBoxFilling::new(
        instance.box_size,
        instance.rectangle_count,
        instance.max_width,
        instance.max_height,
    )
    .with_min_width(instance.min_width)
    .with_min_height(instance.min_height)
}

/// Builds the overlap-tolerant instance described by `config`.
pub fn relaxed_instance(config: &BoxFillConfig) -> RelaxedBoxFilling {
    let instance = &config.instance;
    RelaxedBoxFilling::new(
        instance.box_size,
        instance.rectangle_count,
        instance.max_width,
        instance.max_height,
    )
    .with_min_width(instance.min_width)
    .with_min_height(instance.min_height)
}

fn cooling_schedule(config: &BoxFillConfig) -> CoolingSchedule {
    match config.instance.cooling_schedule {
        CoolingScheduleKind::Geometric => CoolingSchedule::Geometric {
            alpha: config.local_search.alpha,
        },
        CoolingScheduleKind::Logarithmic => CoolingSchedule::Logarithmic {
            constant: config
                .local_search
                .log_constant_for(config.instance.rectangle_count),
        },
    }
}

type Phase<P, A, Fo> = LocalSearchPhase<
    <P as SearchProblem>::Solution,
    <P as SearchProblem>::Neighborhood,
    <P as SearchProblem>::Objective,
    A,
    Fo,
>;

/// Local search over any [`SearchProblem`], with the acceptor and forager
/// fixed by the algorithm.
///
/// Hill climbing scores the whole neighborhood and takes the first best
/// candidate. Simulated annealing scores only the first candidate.
#[derive(Debug)]
pub enum LocalSearchEngine<P: SearchProblem> {
    HillClimbing(Phase<P, HillClimbingAcceptor, BestScoreForager>),
    SimulatedAnnealing(Phase<P, SimulatedAnnealingAcceptor, FirstCandidateForager>),
}

impl<P: SearchProblem> LocalSearchEngine<P> {
    /// Creates the configured local search for `problem`.
    ///
    /// The engine draws its own generator from `rng`. Backtracking has no
    /// local search form, so it yields `None`.
    pub fn from_config(problem: &P, config: &BoxFillConfig, rng: &mut SearchRng) -> Option<Self> {
        let algorithm = config.instance.algorithm;
        let local_search = &config.local_search;
        let mode = neighborhood_mode(local_search.neighborhood_for(algorithm));
        let engine_rng = SearchRng::from_rng(rng);

        let engine = match algorithm {
            AlgorithmKind::HillClimbing => Self::HillClimbing(
                LocalSearchPhase::new(
                    problem.neighborhood(),
                    problem.objective(),
                    HillClimbingAcceptor::new(),
                    BestScoreForager::new(),
                )
                .with_mode(mode)
                .with_step_limit(local_search.step_limit)
                .with_attempts(local_search.attempts)
                .with_rng(engine_rng),
            ),
            AlgorithmKind::SimulatedAnnealing => Self::SimulatedAnnealing(
                LocalSearchPhase::new(
                    problem.neighborhood(),
                    problem.objective(),
                    SimulatedAnnealingAcceptor::new(
                        config.instance.temperature,
                        cooling_schedule(config),
                    ),
                    FirstCandidateForager::new(),
                )
                .with_mode(mode)
                .with_step_limit(local_search.step_limit)
                .with_attempts(local_search.attempts)
                .with_rng(engine_rng),
            ),
            AlgorithmKind::Backtracking => return None,
        };
        Some(engine)
    }

    /// Tells the neighborhood that the current Solution changed outside the engine.
    pub fn invalidate(&mut self) {
        match self {
            Self::HillClimbing(phase) => phase.invalidate(),
            Self::SimulatedAnnealing(phase) => phase.invalidate(),
        }
    }
}

impl<P: SearchProblem> SearchEngine<P::Solution> for LocalSearchEngine<P> {
    fn step(&mut self, current: P::Solution) -> StepOutcome<P::Solution> {
        match self {
            Self::HillClimbing(phase) => phase.step(current),
            Self::SimulatedAnnealing(phase) => phase.step(current),
        }
    }

    fn step_count(&self) -> u64 {
        match self {
            Self::HillClimbing(phase) => phase.step_count(),
            Self::SimulatedAnnealing(phase) => phase.step_count(),
        }
    }

    fn phase_type_name(&self) -> &'static str {
        match self {
            Self::HillClimbing(_) => "HillClimbing",
            Self::SimulatedAnnealing(_) => "SimulatedAnnealing",
        }
    }
}

/// Any engine over geometric packings.
///
/// Local search engines start from a feasible packing. The backtracking
/// engine starts from [`Packing::empty`] and owns its rectangle pool.
///
/// # Example
///
/// ```
/// use boxfill::prelude::*;
/// use boxfill::{AlgorithmKind, InstanceConfig};
///
/// let config = BoxFillConfig::new().with_instance(InstanceConfig {
///     box_size: 6,
///     rectangle_count: 8,
///     max_width: 3,
///     max_height: 3,
///     algorithm: AlgorithmKind::HillClimbing,
///     ..InstanceConfig::default()
/// });
/// let instance = boxfill::geometric_instance(&config);
/// let mut rng = rng_from_seed(Some(1));
/// let mut engine = Engine::from_config(&instance, &config, &mut rng).unwrap();
///
/// let start = instance.generate_feasible_solution(&mut rng).unwrap();
/// let next = engine.step(start).into_solution().unwrap();
/// assert!(instance.is_feasible(&next));
/// ```
#[derive(Debug)]
pub enum Engine {
    LocalSearch(LocalSearchEngine<BoxFilling>),
    Backtracking(BacktrackingSearch<BoxFilling>),
}

impl Engine {
    /// Creates the engine `config` asks for.
    ///
    /// # Errors
    ///
    /// [`SearchError::GenerationFailure`] if the backtracking rectangle pool
    /// can't be generated.
    pub fn from_config(
        instance: &BoxFilling,
        config: &BoxFillConfig,
        rng: &mut SearchRng,
    ) -> Result<Self, SearchError> {
        let engine = match LocalSearchEngine::from_config(instance, config, rng) {
            Some(local_search) => Engine::LocalSearch(local_search),
            None => {
                let variables = instance.variables(rng)?;
                Engine::Backtracking(
                    BacktrackingSearch::new(instance.clone(), variables)
                        .with_step_limit(config.backtracking.step_limit),
                )
            }
        };
        info!(
            event = "engine_created",
            engine = engine.phase_type_name(),
            rectangles = instance.rectangle_count(),
            box_size = instance.box_size(),
        );
        Ok(engine)
    }

    pub fn is_backtracking(&self) -> bool {
        matches!(self, Engine::Backtracking(_))
    }

    /// Returns true for a backtracking engine with nothing to place.
    pub fn pool_is_empty(&self) -> bool {
        match self {
            Engine::Backtracking(search) => search.unassigned().is_empty(),
            Engine::LocalSearch(_) => false,
        }
    }

    /// The Solution this engine expects on its first step, when it has one
    /// of its own.
    pub fn initial_solution(&self) -> Option<Packing> {
        self.is_backtracking().then(Packing::empty)
    }
}

impl SearchEngine<Packing> for Engine {
    fn step(&mut self, current: Packing) -> StepOutcome<Packing> {
        match self {
            Engine::LocalSearch(engine) => engine.step(current),
            Engine::Backtracking(engine) => engine.step(current),
        }
    }

    fn step_count(&self) -> u64 {
        match self {
            Engine::LocalSearch(engine) => engine.step_count(),
            Engine::Backtracking(engine) => engine.step_count(),
        }
    }

    fn phase_type_name(&self) -> &'static str {
        match self {
            Engine::LocalSearch(engine) => engine.phase_type_name(),
            Engine::Backtracking(engine) => engine.phase_type_name(),
        }
    }
}

#[cfg(test)]
mod tests;
