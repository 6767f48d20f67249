//! Lazy neighbor sequence over permutations.

use boxfill_core::{Neighborhood, NeighborhoodMode, ResumeToken, SearchRng};
use tracing::trace;

use super::permutation::PermutationSolution;

/// Position in the move sequence of one Solution.
#[derive(Debug, Clone)]
struct Cursor {
    token: ResumeToken,
    blocks: Vec<(usize, usize)>,
    next_block: usize,
    i: usize,
    j: usize,
}

impl Cursor {
    fn start(solution: &PermutationSolution, token: ResumeToken) -> Self {
        let mut bounds = solution.box_starts();
        bounds.push(solution.len());
        // box 0 is already in front
        let blocks = bounds.windows(2).skip(1).map(|w| (w[0], w[1])).collect();
        Self {
            token,
            blocks,
            next_block: 0,
            i: 0,
            j: 1,
        }
    }

    fn advance(&mut self, solution: &PermutationSolution) -> Option<PermutationSolution> {
        if let Some(&(start, end)) = self.blocks.get(self.next_block) {
            self.next_block += 1;
            return Some(solution.with_block_first(start, end));
        }
        let n = solution.len();
        if self.j >= n {
            return None;
        }
        let neighbor = solution.with_swapped(self.i, self.j);
        self.j += 1;
        if self.j >= n {
            self.i += 1;
            self.j = self.i + 1;
        }
        Some(neighbor)
    }
}

/// Hands out one neighbor per call.
///
/// First each box's pieces moved to the front of the order, then every
/// pairwise swap `(i, j)` with `i < j`. The sequence continues while the
/// caller keeps passing the same token and restarts when it changes. Once
/// exhausted it returns nothing until the token changes. The mode is
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedNeighborhood {
    cursor: Option<Cursor>,
}

impl RuleBasedNeighborhood {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Neighborhood<PermutationSolution> for RuleBasedNeighborhood {
    fn neighbors(
        &mut self,
        solution: &PermutationSolution,
        _mode: NeighborhoodMode,
        token: ResumeToken,
        _rng: &mut SearchRng,
    ) -> Vec<PermutationSolution> {
        let stale = self.cursor.as_ref().map_or(true, |c| c.token != token);
        if stale {
            trace!(event = "neighbor_sequence_restart", token = %token);
            self.cursor = Some(Cursor::start(solution, token));
        }
        match self.cursor.as_mut() {
            Some(cursor) => cursor.advance(solution).into_iter().collect(),
            None => Vec::new(),
        }
    }
}
