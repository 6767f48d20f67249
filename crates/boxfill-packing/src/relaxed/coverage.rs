//! Per-cell cover counts.

use crate::rectangle::{Cell, Rectangle};
use crate::solution::Packing;

/// How often each cell of `boxes` boxes is covered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    box_size: i32,
    boxes: usize,
    counts: Vec<u32>,
}

/// Cell statistics of a [`Coverage`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Cells covered exactly once.
    pub single: usize,
    /// Summed cover count of cells covered more than once.
    pub stacked: u64,
    /// Cells covered at least once.
    pub occupied: usize,
}

impl Coverage {
    pub fn new(box_size: i32, boxes: usize) -> Self {
        let side = box_size.max(0) as usize;
        Self {
            box_size,
            boxes,
            counts: vec![0; boxes * side * side],
        }
    }

    /// Counts every rectangle of `packing` in the first `boxes` boxes.
    pub fn of(packing: &Packing, box_size: i32, boxes: usize) -> Self {
        let mut coverage = Self::new(box_size, boxes);
        for rect in packing.rectangles() {
            coverage.add(rect);
        }
        coverage
    }

    pub fn box_size(&self) -> i32 {
        self.box_size
    }

    pub fn boxes(&self) -> usize {
        self.boxes
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let inside = cell.box_id < self.boxes
            && (0..self.box_size).contains(&cell.row)
            && (0..self.box_size).contains(&cell.col);
        if !inside {
            return None;
        }
        let side = self.box_size as usize;
        Some((cell.box_id * side + cell.row as usize) * side + cell.col as usize)
    }

    /// Covers the cells of `rect`. Cells outside the tracked boxes are ignored.
    pub fn add(&mut self, rect: &Rectangle) {
        for cell in rect.cells() {
            if let Some(i) = self.index(cell) {
                self.counts[i] += 1;
            }
        }
    }

    /// Uncovers the cells of `rect`.
    pub fn remove(&mut self, rect: &Rectangle) {
        for cell in rect.cells() {
            if let Some(i) = self.index(cell) {
                self.counts[i] = self.counts[i].saturating_sub(1);
            }
        }
    }

    pub fn count(&self, cell: Cell) -> u32 {
        self.index(cell).map_or(0, |i| self.counts[i])
    }

    pub fn tally(&self) -> Tally {
        self.counts.iter().fold(Tally::default(), |mut tally, &count| {
            match count {
                0 => {}
                1 => {
                    tally.single += 1;
                    tally.occupied += 1;
                }
                n => {
                    tally.stacked += u64::from(n);
                    tally.occupied += 1;
                }
            }
            tally
        })
    }
}

/// Summed-area tables over a [`Coverage`], one per box.
///
/// Answers "how much cover lies under this window" in constant time.
#[derive(Debug, Clone)]
pub struct WindowSums {
    box_size: i32,
    boxes: usize,
    sums: Vec<u64>,
}

impl WindowSums {
    pub fn new(coverage: &Coverage) -> Self {
        let side = coverage.box_size.max(0) as usize;
        let stride = side + 1;
        let mut sums = vec![0u64; coverage.boxes * stride * stride];
        for b in 0..coverage.boxes {
            let table = b * stride * stride;
            for row in 0..side {
                for col in 0..side {
                    let count = u64::from(coverage.counts[(b * side + row) * side + col]);
                    sums[table + (row + 1) * stride + col + 1] = count
                        + sums[table + row * stride + col + 1]
                        + sums[table + (row + 1) * stride + col]
                        - sums[table + row * stride + col];
                }
            }
        }
        Self {
            box_size: coverage.box_size,
            boxes: coverage.boxes,
            sums,
        }
    }

    /// Cover under the `width` × `height` window whose top-left is
    /// `(row, col)` in box `box_id`. Zero for windows that don't fit.
    pub fn window(&self, box_id: usize, row: i32, col: i32, width: i32, height: i32) -> u64 {
        let fits = box_id < self.boxes
            && row >= 0
            && col >= 0
            && width >= 0
            && height >= 0
            && row + height <= self.box_size
            && col + width <= self.box_size;
        if !fits {
            return 0;
        }
        let stride = self.box_size as usize + 1;
        let table = box_id * stride * stride;
        let (top, left) = (row as usize, col as usize);
        let (bottom, right) = (top + height as usize, left + width as usize);
        let at = |r: usize, c: usize| self.sums[table + r * stride + c];
        at(bottom, right) + at(top, left) - at(top, right) - at(bottom, left)
    }
}
