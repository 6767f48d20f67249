//! Backtracking engine implementation.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, info};

use boxfill_core::{ConstraintProblem, SearchError, StepOutcome};

use crate::engine::SearchEngine;
use crate::termination::StepBudget;

/// One level of the search.
#[derive(Debug)]
struct Frame<P: ConstraintProblem> {
    variable: P::Variable,
    value: P::Value,
    snapshot: P::Solution,
}

/// Backtracking engine over a [`ConstraintProblem`].
///
/// Each step either assigns the first feasible, not yet pruned value to the
/// chosen variable, or undoes the previous level. Values tried at a level are
/// pruned for its variable, so an undo never repeats an assignment.
///
/// The driver starts from an empty Solution and feeds every returned
/// Solution back in. `Done` carries the complete assignment.
///
/// # Example
///
/// ```
/// use boxfill_core::StepOutcome;
/// use boxfill_solver::{BacktrackingSearch, SearchEngine};
/// use boxfill_test::{NQueens, QueensBoard};
///
/// let problem = NQueens::new(4);
/// let variables = problem.variables();
/// let mut search = BacktrackingSearch::new(problem, variables);
///
/// let mut board = QueensBoard::default();
/// let solved = loop {
///     match search.step(board) {
///         StepOutcome::Continue(next) => board = next,
///         StepOutcome::Done(done) => break done,
///         StepOutcome::Failed(err) => panic!("{err}"),
///     }
/// };
/// assert_eq!(solved.len(), 4);
/// assert!(solved.is_consistent());
/// ```
#[derive(Debug)]
pub struct BacktrackingSearch<P: ConstraintProblem> {
    problem: P,
    variable_count: usize,
    unassigned: BTreeSet<P::Variable>,
    pruned: HashMap<P::Variable, HashSet<P::Value>>,
    trail: Vec<Frame<P>>,
    budget: StepBudget,
}

impl<P: ConstraintProblem> BacktrackingSearch<P> {
    /// Creates an engine that will assign every variable in `variables`.
    ///
    /// The step budget defaults to 10 000.
    pub fn new(problem: P, variables: BTreeSet<P::Variable>) -> Self {
        Self {
            problem,
            variable_count: variables.len(),
            unassigned: variables,
            pruned: HashMap::new(),
            trail: Vec::new(),
            budget: StepBudget::new(10_000),
        }
    }

    pub fn with_step_limit(mut self, step_limit: u64) -> Self {
        self.budget = StepBudget::new(step_limit);
        self
    }

    /// Starts over with a fresh variable pool. The step budget carries on.
    pub fn restart(&mut self, variables: BTreeSet<P::Variable>) {
        self.reset();
        self.variable_count = variables.len();
        self.unassigned = variables;
    }

    /// Number of assignments on the trail; always
    /// `variable_count - unassigned().len()`.
    pub fn level(&self) -> usize {
        self.trail.len()
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn unassigned(&self) -> &BTreeSet<P::Variable> {
        &self.unassigned
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Drops the trail and all pruning. The variable pool is left as is.
    fn reset(&mut self) {
        self.pruned.clear();
        self.trail.clear();
    }

    fn backtrack(&mut self, failed: P::Variable) -> StepOutcome<P::Solution> {
        let Some(frame) = self.trail.pop() else {
            info!(
                event = "backtracking_unsatisfiable",
                steps = self.budget.count(),
            );
            self.reset();
            return StepOutcome::Failed(SearchError::UnsatisfiableInstance);
        };

        self.pruned
            .entry(frame.variable.clone())
            .or_default()
            .insert(frame.value);
        if let Some(values) = self.pruned.get_mut(&failed) {
            values.clear();
        }
        debug!(
            event = "backtrack",
            step = self.budget.count(),
            level = self.trail.len(),
            variable = ?frame.variable,
        );
        self.unassigned.insert(frame.variable);
        StepOutcome::Continue(frame.snapshot)
    }
}

impl<P: ConstraintProblem> SearchEngine<P::Solution> for BacktrackingSearch<P> {
    fn step(&mut self, current: P::Solution) -> StepOutcome<P::Solution> {
        if self.unassigned.is_empty() {
            self.reset();
            return StepOutcome::Failed(SearchError::NoVariablesAvailable);
        }
        if let Err(err) = self.budget.try_consume() {
            info!(event = "step_limit_reached", limit = self.budget.limit());
            return StepOutcome::Failed(err);
        }

        let Some(variable) = self
            .problem
            .choose_variable(&self.unassigned, &current)
            .cloned()
        else {
            return StepOutcome::Failed(SearchError::NoVariablesAvailable);
        };

        let no_pruning = HashSet::new();
        let pruned = self.pruned.get(&variable).unwrap_or(&no_pruning);
        let value = self
            .problem
            .values(&variable, &current, pruned)
            .into_iter()
            .find(|value| self.problem.is_feasible_value(value, &variable, &current));

        let Some(value) = value else {
            return self.backtrack(variable);
        };

        self.unassigned.remove(&variable);
        self.pruned
            .entry(variable.clone())
            .or_default()
            .insert(value.clone());
        let next = self.problem.assign_value(&value, &variable, &current);
        debug!(
            event = "assign",
            step = self.budget.count(),
            level = self.trail.len() + 1,
            variable = ?variable,
            value = ?value,
        );
        self.trail.push(Frame {
            variable,
            value,
            snapshot: current,
        });

        if self.unassigned.is_empty() {
            info!(
                event = "backtracking_complete",
                steps = self.budget.count(),
                variables = self.variable_count,
            );
            return StepOutcome::Done(next);
        }
        StepOutcome::Continue(next)
    }

    fn step_count(&self) -> u64 {
        self.budget.count()
    }

    fn phase_type_name(&self) -> &'static str {
        "Backtracking"
    }
}
