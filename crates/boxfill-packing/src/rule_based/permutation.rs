//! Permutation Solutions and their shelf realization.

use crate::rectangle::{Corner, Rectangle};
use crate::solution::Packing;

/// An unplaced piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: usize,
    pub width: i32,
    pub height: i32,
}

impl Piece {
    pub const fn new(id: usize, width: i32, height: i32) -> Self {
        Self { id, width, height }
    }

    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }
}

/// A placement order for pieces.
///
/// Positions are implied: [`realize`](Self::realize) fills shelves left to
/// right, starting a new shelf when a row is full and a new box when the
/// shelves reach the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationSolution {
    pieces: Vec<Piece>,
    box_size: i32,
}

/// Result of a shelf pass: the placed rectangles and where each box starts.
struct Shelved {
    rectangles: Vec<Rectangle>,
    box_starts: Vec<usize>,
}

impl PermutationSolution {
    pub fn new(pieces: Vec<Piece>, box_size: i32) -> Self {
        Self { pieces, box_size }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn box_size(&self) -> i32 {
        self.box_size
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    fn shelve(&self) -> Shelved {
        let size = self.box_size;
        let mut rectangles = Vec::with_capacity(self.pieces.len());
        let mut box_starts = if self.pieces.is_empty() { Vec::new() } else { vec![0] };
        let (mut box_id, mut x, mut y, mut shelf_height) = (0usize, 0, 0, 0);

        for (index, piece) in self.pieces.iter().enumerate() {
            if x + piece.width > size {
                y += shelf_height;
                x = 0;
                shelf_height = 0;
            }
            if y + piece.height > size {
                box_id += 1;
                box_starts.push(index);
                x = 0;
                y = 0;
                shelf_height = 0;
            }
            rectangles.push(Rectangle::new(
                piece.width,
                piece.height,
                Corner::new(y, x),
                box_id,
                piece.id,
            ));
            x += piece.width;
            shelf_height = shelf_height.max(piece.height);
        }

        Shelved {
            rectangles,
            box_starts,
        }
    }

    /// Places the pieces in order and returns the resulting packing.
    pub fn realize(&self) -> Packing {
        Packing::new(self.shelve().rectangles)
    }

    /// Index of the first piece of every box, in box order.
    pub fn box_starts(&self) -> Vec<usize> {
        self.shelve().box_starts
    }

    /// A copy with the pieces in `start..end` moved to the front.
    pub fn with_block_first(&self, start: usize, end: usize) -> Self {
        let mut pieces = Vec::with_capacity(self.pieces.len());
        pieces.extend_from_slice(&self.pieces[start..end]);
        pieces.extend_from_slice(&self.pieces[..start]);
        pieces.extend_from_slice(&self.pieces[end..]);
        Self::new(pieces, self.box_size)
    }

    /// A copy with the pieces at `i` and `j` exchanged.
    pub fn with_swapped(&self, i: usize, j: usize) -> Self {
        let mut pieces = self.pieces.clone();
        pieces.swap(i, j);
        Self::new(pieces, self.box_size)
    }
}
