//! Rectangle geometry.
//!
//! A [`Rectangle`] is an immutable placed piece. Its footprint is the set of
//! unit cells `(box, row, col)` it covers; its hull is the ring of cells
//! directly around the footprint, used to seed candidate positions.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// One unit cell of one box.
///
/// Rows grow downwards, columns grow to the right. Hull cells may lie
/// outside `[0, L)`, which is why coordinates are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub box_id: usize,
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(box_id: usize, row: i32, col: i32) -> Self {
        Self { box_id, row, col }
    }
}

/// A set of cells.
pub type CellSet = HashSet<Cell>;

/// Top-left corner of a rectangle inside its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Corner {
    pub row: i32,
    pub col: i32,
}

impl Corner {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Orientation of a piece relative to its original width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rotation {
    #[default]
    Upright,
    Rotated,
}

impl Rotation {
    /// Returns `(width, height)` of a `width × height` piece in this orientation.
    #[inline]
    pub fn dims(self, width: i32, height: i32) -> (i32, i32) {
        match self {
            Rotation::Upright => (width, height),
            Rotation::Rotated => (height, width),
        }
    }

    /// Orientations worth trying for a `width × height` piece.
    ///
    /// Squares only have one.
    pub fn options(width: i32, height: i32) -> &'static [Rotation] {
        if width == height {
            &[Rotation::Upright]
        } else {
            &[Rotation::Upright, Rotation::Rotated]
        }
    }
}

fn footprint_iter(width: i32, height: i32, box_id: usize, corner: Corner) -> impl Iterator<Item = Cell> {
    (corner.row..corner.row + height)
        .flat_map(move |row| (corner.col..corner.col + width).map(move |col| Cell::new(box_id, row, col)))
}

/// Cells covered by a `width × height` rectangle with top-left `corner`.
pub fn footprint(width: i32, height: i32, box_id: usize, corner: Corner) -> CellSet {
    footprint_iter(width, height, box_id, corner).collect()
}

/// The ring of cells one step outside the footprint, diagonals included.
pub fn hull(width: i32, height: i32, box_id: usize, corner: Corner) -> CellSet {
    let Corner { row, col } = corner;
    let mut cells = CellSet::with_capacity(2 * (width + height + 2) as usize);
    for r in row - 1..row + height + 1 {
        cells.insert(Cell::new(box_id, r, col - 1));
        cells.insert(Cell::new(box_id, r, col + width));
    }
    for c in col - 1..col + width + 1 {
        cells.insert(Cell::new(box_id, row - 1, c));
        cells.insert(Cell::new(box_id, row + height, c));
    }
    cells
}

/// An immutable placed rectangle.
///
/// Identity is the rectangle id: two rectangles with the same id are the
/// same piece, whatever their geometry. Moving a piece means building a new
/// `Rectangle` with the old id.
///
/// # Example
///
/// ```
/// use boxfill_packing::{Corner, Rectangle};
///
/// let rect = Rectangle::new(3, 2, Corner::new(1, 1), 0, 7);
/// assert_eq!(rect.footprint().len(), 6);
/// assert!(rect.fits_in(4));
/// assert!(!rect.fits_in(3));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    id: usize,
    width: i32,
    height: i32,
    corner: Corner,
    box_id: usize,
}

impl Rectangle {
    pub fn new(width: i32, height: i32, corner: Corner, box_id: usize, id: usize) -> Self {
        Self {
            id,
            width,
            height,
            corner,
            box_id,
        }
    }

    /// Rebuilds a rectangle from the cells it covers.
    ///
    /// The result spans the bounding box of `cells` in the box of the first
    /// cell. Returns `None` for an empty set.
    pub fn from_cells<'a>(cells: impl IntoIterator<Item = &'a Cell>, id: usize) -> Option<Self> {
        let mut iter = cells.into_iter();
        let first = *iter.next()?;
        let (mut min_row, mut max_row, mut min_col, mut max_col) =
            (first.row, first.row, first.col, first.col);
        for cell in iter {
            min_row = min_row.min(cell.row);
            max_row = max_row.max(cell.row);
            min_col = min_col.min(cell.col);
            max_col = max_col.max(cell.col);
        }
        Some(Self::new(
            max_col - min_col + 1,
            max_row - min_row + 1,
            Corner::new(min_row, min_col),
            first.box_id,
            id,
        ))
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn corner(&self) -> Corner {
        self.corner
    }

    #[inline]
    pub fn box_id(&self) -> usize {
        self.box_id
    }

    #[inline]
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// Iterates the covered cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        footprint_iter(self.width, self.height, self.box_id, self.corner)
    }

    /// The occupancy-cell set.
    pub fn footprint(&self) -> CellSet {
        footprint(self.width, self.height, self.box_id, self.corner)
    }

    /// The hull-cell set.
    pub fn hull(&self) -> CellSet {
        hull(self.width, self.height, self.box_id, self.corner)
    }

    /// The same piece placed at `corner` of `box_id`, in `rotation` relative
    /// to this rectangle's current width and height.
    pub fn placed(&self, box_id: usize, corner: Corner, rotation: Rotation) -> Self {
        let (width, height) = rotation.dims(self.width, self.height);
        Self::new(width, height, corner, box_id, self.id)
    }

    /// The same piece turned by 90° around its top-left corner.
    pub fn rotated(&self) -> Self {
        self.placed(self.box_id, self.corner, Rotation::Rotated)
    }

    /// The same piece, same position, in another box.
    pub fn with_box(&self, box_id: usize) -> Self {
        Self { box_id, ..*self }
    }

    /// Returns true if the footprint lies inside `[0, box_size)²`.
    pub fn fits_in(&self, box_size: i32) -> bool {
        self.corner.row >= 0
            && self.corner.col >= 0
            && self.corner.row + self.height <= box_size
            && self.corner.col + self.width <= box_size
    }

    /// Returns true if both rectangles cover exactly the same cells.
    pub fn same_placement(&self, other: &Rectangle) -> bool {
        self.box_id == other.box_id
            && self.corner == other.corner
            && self.width == other.width
            && self.height == other.height
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Rectangle {}

impl Hash for Rectangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Rectangle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rectangle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

#[cfg(test)]
mod tests;
