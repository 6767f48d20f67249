use crate::solution::Packing;

use super::coverage::Coverage;

/// A packing whose rectangles may overlap.
///
/// Every rectangle still lies inside its box; only disjointness is relaxed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelaxedPacking {
    packing: Packing,
}

impl RelaxedPacking {
    pub fn new(packing: Packing) -> Self {
        Self { packing }
    }

    pub fn packing(&self) -> &Packing {
        &self.packing
    }

    pub fn into_packing(self) -> Packing {
        self.packing
    }

    pub fn len(&self) -> usize {
        self.packing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packing.is_empty()
    }

    /// Cover of every used box.
    pub fn coverage(&self, box_size: i32) -> Coverage {
        Coverage::of(&self.packing, box_size, self.packing.num_boxes())
    }

    /// Number of cells covered by more than one rectangle.
    pub fn overlap_cells(&self, box_size: i32) -> usize {
        let tally = self.coverage(box_size).tally();
        tally.occupied - tally.single
    }

    pub fn is_overlap_free(&self, box_size: i32) -> bool {
        self.overlap_cells(box_size) == 0
    }
}

impl From<Packing> for RelaxedPacking {
    fn from(packing: Packing) -> Self {
        Self::new(packing)
    }
}
