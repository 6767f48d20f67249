//! N-Queens as a constraint problem.
//!
//! Variables are columns, values are rows. Four queens have two solutions,
//! three queens have none, which makes both outcomes of a backtracking run
//! easy to provoke.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use boxfill_core::ConstraintProblem;

/// A partial board: column → row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueensBoard {
    pub rows: BTreeMap<usize, usize>,
}

impl QueensBoard {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if no two placed queens attack each other.
    pub fn is_consistent(&self) -> bool {
        let placed: Vec<_> = self.rows.iter().collect();
        placed.iter().enumerate().all(|(i, &(&c1, &r1))| {
            placed[i + 1..]
                .iter()
                .all(|&(&c2, &r2)| r1 != r2 && r1.abs_diff(r2) != c1.abs_diff(c2))
        })
    }
}

/// The N-Queens problem on an `n × n` board.
#[derive(Debug, Clone, Copy)]
pub struct NQueens {
    pub n: usize,
}

impl NQueens {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// All columns, unassigned.
    pub fn variables(&self) -> BTreeSet<usize> {
        (0..self.n).collect()
    }
}

impl ConstraintProblem for NQueens {
    type Solution = QueensBoard;
    type Variable = usize;
    type Value = usize;

    fn choose_variable<'a>(
        &self,
        unassigned: &'a BTreeSet<usize>,
        _solution: &QueensBoard,
    ) -> Option<&'a usize> {
        unassigned.first()
    }

    fn values(&self, _column: &usize, _solution: &QueensBoard, pruned: &HashSet<usize>) -> Vec<usize> {
        (0..self.n).filter(|row| !pruned.contains(row)).collect()
    }

    fn is_feasible_value(&self, row: &usize, column: &usize, solution: &QueensBoard) -> bool {
        solution
            .rows
            .iter()
            .all(|(&c, &r)| r != *row && r.abs_diff(*row) != c.abs_diff(*column))
    }

    fn assign_value(&self, row: &usize, column: &usize, solution: &QueensBoard) -> QueensBoard {
        let mut next = solution.clone();
        next.rows.insert(*column, *row);
        next
    }
}
