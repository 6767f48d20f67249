//! Local search phase implementation.

use std::fmt::Debug;
use std::marker::PhantomData;

use tracing::{debug, info, trace};

use boxfill_core::{
    rng_from_seed, Neighborhood, NeighborhoodMode, Objective, ResumeToken, SearchRng, StepOutcome,
};

use crate::engine::SearchEngine;
use crate::phase::localsearch::{Acceptor, LocalSearchForager};
use crate::termination::{StagnationCounter, StepBudget};

/// Local search phase that improves an existing Solution.
///
/// Each step:
/// 1. Takes one unit of the step budget
/// 2. Asks the neighborhood for candidates
/// 3. Scores the candidates the forager needs, and the current Solution
/// 4. Lets the forager pick one and the acceptor judge it
///
/// A step that accepts nothing is a miss and returns the current Solution
/// unchanged; too many misses in a row end the search. An empty
/// neighborhood is a miss too.
///
/// # Type Parameters
/// * `S` - The solution type
/// * `N` - The neighborhood type
/// * `O` - The objective type
/// * `A` - The acceptor type
/// * `Fo` - The forager type
pub struct LocalSearchPhase<S, N, O, A, Fo>
where
    N: Neighborhood<S>,
    O: Objective<S>,
    A: Acceptor,
    Fo: LocalSearchForager,
{
    neighborhood: N,
    objective: O,
    acceptor: A,
    forager: Fo,
    mode: NeighborhoodMode,
    budget: StepBudget,
    stagnation: StagnationCounter,
    token: ResumeToken,
    rng: SearchRng,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, N, O, A, Fo> LocalSearchPhase<S, N, O, A, Fo>
where
    N: Neighborhood<S>,
    O: Objective<S>,
    A: Acceptor,
    Fo: LocalSearchForager,
{
    /// Creates a new local search phase.
    ///
    /// Defaults: stochastic neighbors, 10 000 steps, 100 attempts, an
    /// entropy-seeded generator.
    pub fn new(neighborhood: N, objective: O, mut acceptor: A, forager: Fo) -> Self {
        acceptor.phase_started();
        Self {
            neighborhood,
            objective,
            acceptor,
            forager,
            mode: NeighborhoodMode::default(),
            budget: StepBudget::new(10_000),
            stagnation: StagnationCounter::new(100),
            token: ResumeToken::initial(),
            rng: rng_from_seed(None),
            _phantom: PhantomData,
        }
    }

    pub fn with_mode(mut self, mode: NeighborhoodMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_step_limit(mut self, step_limit: u64) -> Self {
        self.budget = StepBudget::new(step_limit);
        self
    }

    /// Sets how many consecutive misses are tolerated.
    pub fn with_attempts(mut self, attempts: u64) -> Self {
        self.stagnation = StagnationCounter::new(attempts);
        self
    }

    pub fn with_rng(mut self, rng: SearchRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(rng_from_seed(Some(seed)))
    }

    /// Tells lazy neighborhoods that the Solution changed outside this engine.
    pub fn invalidate(&mut self) {
        self.token.advance();
    }

    pub fn token(&self) -> ResumeToken {
        self.token
    }

    pub fn mode(&self) -> NeighborhoodMode {
        self.mode
    }

    pub fn acceptor(&self) -> &A {
        &self.acceptor
    }

    pub fn neighborhood(&self) -> &N {
        &self.neighborhood
    }

    fn miss(&mut self, current: S) -> StepOutcome<S> {
        match self.stagnation.miss() {
            Ok(()) => StepOutcome::Continue(current),
            Err(err) => {
                info!(
                    event = "local_search_stagnated",
                    steps = self.budget.count(),
                    attempts = self.stagnation.attempts(),
                );
                StepOutcome::Failed(err)
            }
        }
    }
}

impl<S, N, O, A, Fo> Debug for LocalSearchPhase<S, N, O, A, Fo>
where
    N: Neighborhood<S>,
    O: Objective<S>,
    A: Acceptor,
    Fo: LocalSearchForager,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSearchPhase")
            .field("neighborhood", &self.neighborhood)
            .field("objective", &self.objective)
            .field("acceptor", &self.acceptor)
            .field("forager", &self.forager)
            .field("mode", &self.mode)
            .field("budget", &self.budget)
            .field("stagnation", &self.stagnation)
            .field("token", &self.token)
            .finish()
    }
}

impl<S, N, O, A, Fo> SearchEngine<S> for LocalSearchPhase<S, N, O, A, Fo>
where
    S: Send,
    N: Neighborhood<S>,
    O: Objective<S>,
    A: Acceptor,
    Fo: LocalSearchForager,
{
    fn step(&mut self, current: S) -> StepOutcome<S> {
        let step = match self.budget.try_consume() {
            Ok(step) => step,
            Err(err) => {
                info!(event = "step_limit_reached", limit = self.budget.limit());
                return StepOutcome::Failed(err);
            }
        };

        let mut candidates =
            self.neighborhood
                .neighbors(&current, self.mode, self.token, &mut self.rng);
        if let Some(limit) = self.forager.evaluation_limit() {
            candidates.truncate(limit);
        }
        if candidates.is_empty() {
            debug!(event = "step", step, candidates = 0, accepted = false);
            return self.miss(current);
        }

        let current_score = self.objective.evaluate_one(&current);
        let deltas: Vec<f64> = self
            .objective
            .evaluate(&candidates)
            .into_iter()
            .map(|score| score - current_score)
            .collect();
        trace!(event = "candidates_scored", step, current_score, deltas = ?deltas);

        let picked = self.forager.pick(&deltas);
        let accepted = picked.filter(|&(_, delta)| self.acceptor.is_accepted(delta, step, &mut self.rng));

        match accepted {
            Some((index, delta)) => {
                self.stagnation.reset();
                self.token.advance();
                debug!(
                    event = "step",
                    step,
                    candidates = candidates.len(),
                    accepted = true,
                    delta,
                    score = current_score + delta,
                );
                StepOutcome::Continue(candidates.swap_remove(index))
            }
            None => {
                debug!(
                    event = "step",
                    step,
                    candidates = candidates.len(),
                    accepted = false,
                );
                self.miss(current)
            }
        }
    }

    fn step_count(&self) -> u64 {
        self.budget.count()
    }

    fn phase_type_name(&self) -> &'static str {
        "LocalSearch"
    }
}
