//! The packing Solution type.

use std::collections::BTreeMap;

use crate::rectangle::Rectangle;

/// An ordered collection of placed rectangles.
///
/// Order is search-history order. A partial packing simply holds fewer
/// rectangles than the instance asks for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Packing {
    rectangles: Vec<Rectangle>,
}

impl Packing {
    pub fn new(rectangles: Vec<Rectangle>) -> Self {
        Self { rectangles }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn into_rectangles(self) -> Vec<Rectangle> {
        self.rectangles
    }

    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    /// Highest box id plus one, or 0 for an empty packing.
    pub fn num_boxes(&self) -> usize {
        self.rectangles
            .iter()
            .map(|r| r.box_id() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Rectangle count per used box id, in box order.
    pub fn box_counts(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for rect in &self.rectangles {
            *counts.entry(rect.box_id()).or_insert(0) += 1;
        }
        counts
    }

    /// Occupied cells per used box id, in box order.
    pub fn box_areas(&self) -> BTreeMap<usize, i64> {
        let mut areas = BTreeMap::new();
        for rect in &self.rectangles {
            *areas.entry(rect.box_id()).or_insert(0) += rect.area();
        }
        areas
    }

    /// Total occupied cells.
    pub fn occupied_area(&self) -> usize {
        self.rectangles
            .iter()
            .map(|r| usize::try_from(r.area()).unwrap_or(0))
            .sum()
    }

    pub fn find(&self, id: usize) -> Option<&Rectangle> {
        self.rectangles.iter().find(|r| r.id() == id)
    }

    /// A copy with the rectangle at `index` swapped for `rect`.
    pub fn with_replaced(&self, index: usize, rect: Rectangle) -> Self {
        let mut rectangles = self.rectangles.clone();
        rectangles[index] = rect;
        Self { rectangles }
    }

    /// A copy with the rectangle sharing `rect`'s id swapped for `rect`.
    ///
    /// Returns `None` if no such rectangle exists.
    pub fn replacing(&self, rect: Rectangle) -> Option<Self> {
        let index = self.rectangles.iter().position(|r| r.id() == rect.id())?;
        Some(self.with_replaced(index, rect))
    }

    /// A copy with `rect` appended.
    pub fn with_pushed(&self, rect: Rectangle) -> Self {
        let mut rectangles = Vec::with_capacity(self.rectangles.len() + 1);
        rectangles.extend_from_slice(&self.rectangles);
        rectangles.push(rect);
        Self { rectangles }
    }

    /// Returns true if both packings place every rectangle identically.
    pub fn same_layout(&self, other: &Packing) -> bool {
        self.rectangles.len() == other.rectangles.len()
            && self
                .rectangles
                .iter()
                .zip(&other.rectangles)
                .all(|(a, b)| a.id() == b.id() && a.same_placement(b))
    }
}

impl From<Vec<Rectangle>> for Packing {
    fn from(rectangles: Vec<Rectangle>) -> Self {
        Self::new(rectangles)
    }
}

impl FromIterator<Rectangle> for Packing {
    fn from_iter<I: IntoIterator<Item = Rectangle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Renumbers used boxes to `0..k-1`, keeping their relative order.
///
/// Every rectangle is rebuilt with its remapped box id; positions and ids are
/// untouched. Compacting a compact packing is a no-op.
pub fn compact_boxes(packing: &Packing) -> Packing {
    let remap: BTreeMap<usize, usize> = packing
        .box_counts()
        .keys()
        .enumerate()
        .map(|(new, &old)| (old, new))
        .collect();

    packing
        .rectangles()
        .iter()
        .map(|rect| rect.with_box(remap.get(&rect.box_id()).copied().unwrap_or(rect.box_id())))
        .collect()
}
