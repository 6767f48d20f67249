//! The geometric box-filling instance.

use std::collections::{BTreeSet, HashSet};

use rand::Rng;
use tracing::debug;

use boxfill_core::{ConstraintProblem, SearchError, SearchProblem, SearchRng};

use crate::neighborhood::GeometricNeighborhood;
use crate::objective::{BoxFillingObjective, FILL_EXPONENT};
use crate::occupancy::{blocked_cells, collides};
use crate::rectangle::{CellSet, Corner, Rectangle, Rotation};
use crate::solution::Packing;

/// A backtracking value: where and how a rectangle goes.
///
/// `rotation` is relative to the variable's original width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placement {
    pub box_id: usize,
    pub row: i32,
    pub col: i32,
    pub rotation: Rotation,
}

impl Placement {
    pub const fn new(box_id: usize, row: i32, col: i32, rotation: Rotation) -> Self {
        Self {
            box_id,
            row,
            col,
            rotation,
        }
    }

    /// `rect` moved to this placement.
    pub fn apply(&self, rect: &Rectangle) -> Rectangle {
        rect.placed(self.box_id, Corner::new(self.row, self.col), self.rotation)
    }
}

/// Box-filling problem parameters.
///
/// Serves local search through [`SearchProblem`] and backtracking through
/// [`ConstraintProblem`], where each generated rectangle is a variable and
/// each [`Placement`] a value.
///
/// # Example
///
/// ```
/// use boxfill_core::{rng_from_seed, SearchProblem};
/// use boxfill_packing::BoxFilling;
///
/// let instance = BoxFilling::new(10, 20, 4, 4).with_box_limit(50);
/// let mut rng = rng_from_seed(Some(42));
/// let packing = instance.generate_feasible_solution(&mut rng).unwrap();
/// assert_eq!(packing.len(), 20);
/// assert!(instance.is_feasible(&packing));
/// ```
#[derive(Debug, Clone)]
pub struct BoxFilling {
    box_size: i32,
    rectangle_count: usize,
    min_width: i32,
    max_width: i32,
    min_height: i32,
    max_height: i32,
    box_limit: usize,
    generation_attempts: usize,
    sample_boxes: usize,
}

impl BoxFilling {
    /// Creates an instance with minimum sides 1 and a box limit of 1000.
    pub fn new(box_size: i32, rectangle_count: usize, max_width: i32, max_height: i32) -> Self {
        Self {
            box_size,
            rectangle_count,
            min_width: 1,
            max_width,
            min_height: 1,
            max_height,
            box_limit: 1000,
            generation_attempts: 100,
            sample_boxes: 1,
        }
    }

    pub fn with_min_width(mut self, min_width: i32) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_min_height(mut self, min_height: i32) -> Self {
        self.min_height = min_height;
        self
    }

    pub fn with_box_limit(mut self, box_limit: usize) -> Self {
        self.box_limit = box_limit;
        self
    }

    pub fn with_generation_attempts(mut self, attempts: usize) -> Self {
        self.generation_attempts = attempts;
        self
    }

    pub fn with_sample_boxes(mut self, sample_boxes: usize) -> Self {
        self.sample_boxes = sample_boxes;
        self
    }

    pub fn box_size(&self) -> i32 {
        self.box_size
    }

    pub fn rectangle_count(&self) -> usize {
        self.rectangle_count
    }

    pub fn box_limit(&self) -> usize {
        self.box_limit
    }

    /// The score of all `rectangle_count` rectangles sharing one box.
    pub fn best_objective(rectangle_count: usize) -> f64 {
        (rectangle_count as f64).powf(FILL_EXPONENT)
    }

    fn check_bounds(&self) -> Result<(), SearchError> {
        if self.box_size <= 0 {
            return Err(SearchError::GenerationFailure(format!(
                "box size must be positive, got {}",
                self.box_size
            )));
        }
        if self.min_width < 1 || self.min_height < 1 {
            return Err(SearchError::GenerationFailure(
                "rectangle sides must be at least 1".to_string(),
            ));
        }
        if self.min_width > self.max_width || self.min_height > self.max_height {
            return Err(SearchError::GenerationFailure(
                "minimum side exceeds maximum side".to_string(),
            ));
        }
        if self.max_width > self.box_size || self.max_height > self.box_size {
            return Err(SearchError::GenerationFailure(
                "rectangles can't be bigger than the box size".to_string(),
            ));
        }
        Ok(())
    }

    /// Draws one rectangle's width and height.
    fn sample_sides(&self, rng: &mut SearchRng) -> (i32, i32) {
        let width = rng.random_range(self.min_width..=self.max_width);
        let height = rng.random_range(self.min_height..=self.max_height);
        (width, height)
    }

    /// Lays random rectangles side by side along the bottom of each box,
    /// opening a new box when the row is full. The box limit is not checked.
    fn shelf_layout(&self, rng: &mut SearchRng) -> Packing {
        let mut rectangles = Vec::with_capacity(self.rectangle_count);
        let mut next_col = 0;
        let mut box_id = 0;

        for id in 0..self.rectangle_count {
            let (width, height) = self.sample_sides(rng);
            if next_col + width > self.box_size {
                box_id += 1;
                next_col = 0;
            }
            let corner = Corner::new(self.box_size - height, next_col);
            rectangles.push(Rectangle::new(width, height, corner, box_id, id));
            next_col += width;
        }

        Packing::new(rectangles)
    }

    /// Draws `rectangle_count` random rectangles within the side bounds,
    /// laid out on shelves but not checked against the box limit.
    ///
    /// # Errors
    ///
    /// [`SearchError::GenerationFailure`] when the side bounds are invalid.
    pub fn sample_rectangles(&self, rng: &mut SearchRng) -> Result<Packing, SearchError> {
        self.check_bounds()?;
        Ok(self.shelf_layout(rng))
    }

    /// Generates the backtracking variable pool: the rectangles of a fresh
    /// random instance, unplaced.
    ///
    /// Whether they fit within the box limit is for the search to find out.
    ///
    /// # Errors
    ///
    /// Same as [`sample_rectangles`](Self::sample_rectangles).
    pub fn variables(&self, rng: &mut SearchRng) -> Result<BTreeSet<Rectangle>, SearchError> {
        Ok(self
            .sample_rectangles(rng)?
            .into_rectangles()
            .into_iter()
            .collect())
    }

    fn fits(&self, rect: &Rectangle) -> bool {
        rect.fits_in(self.box_size) && rect.box_id() < self.box_limit
    }
}

impl SearchProblem for BoxFilling {
    type Solution = Packing;
    type Neighborhood = GeometricNeighborhood;
    type Objective = BoxFillingObjective;

    fn generate_feasible_solution(&self, rng: &mut SearchRng) -> Result<Packing, SearchError> {
        for attempt in 1..=self.generation_attempts {
            let packing = self.sample_rectangles(rng)?;
            if self.is_feasible(&packing) {
                debug!(
                    event = "solution_generated",
                    attempt,
                    rectangles = packing.len(),
                    boxes = packing.num_boxes(),
                );
                return Ok(packing);
            }
            debug!(event = "generation_retry", attempt);
        }
        Err(SearchError::GenerationFailure(format!(
            "no feasible packing within {} boxes after {} attempts",
            self.box_limit, self.generation_attempts
        )))
    }

    fn is_feasible(&self, solution: &Packing) -> bool {
        let mut ids = HashSet::with_capacity(solution.len());
        let mut cells = CellSet::with_capacity(solution.occupied_area());
        solution.rectangles().iter().all(|rect| {
            self.fits(rect) && ids.insert(rect.id()) && rect.cells().all(|cell| cells.insert(cell))
        })
    }

    fn neighborhood(&self) -> GeometricNeighborhood {
        GeometricNeighborhood::new(self.box_size).with_sample_boxes(self.sample_boxes)
    }

    fn objective(&self) -> BoxFillingObjective {
        BoxFillingObjective::new()
    }
}

impl ConstraintProblem for BoxFilling {
    type Solution = Packing;
    type Variable = Rectangle;
    type Value = Placement;

    /// Largest area first, smallest id on ties.
    fn choose_variable<'a>(
        &self,
        unassigned: &'a BTreeSet<Rectangle>,
        _solution: &Packing,
    ) -> Option<&'a Rectangle> {
        // the set iterates by ascending id, so the first maximum wins ties
        unassigned
            .iter()
            .fold(None, |best: Option<&Rectangle>, rect| match best {
                Some(b) if b.area() >= rect.area() => Some(b),
                _ => Some(rect),
            })
    }

    /// Free hull cells of the placed rectangles in sorted order, each as is
    /// and then turned, followed by the top-left corner of a fresh box.
    fn values(
        &self,
        variable: &Rectangle,
        solution: &Packing,
        pruned: &HashSet<Placement>,
    ) -> Vec<Placement> {
        let blocked = blocked_cells(solution);
        let anchors: BTreeSet<_> = solution
            .rectangles()
            .iter()
            .flat_map(|rect| rect.hull())
            .filter(|cell| !blocked.contains(cell))
            .collect();

        let rotations = Rotation::options(variable.width(), variable.height());
        let mut values: Vec<Placement> = anchors
            .into_iter()
            .flat_map(|cell| {
                rotations
                    .iter()
                    .map(move |&rotation| Placement::new(cell.box_id, cell.row, cell.col, rotation))
            })
            .filter(|value| value.apply(variable).fits_in(self.box_size))
            .collect();
        values.push(Placement::new(solution.num_boxes(), 0, 0, Rotation::Upright));

        values.retain(|value| !pruned.contains(value));
        values
    }

    fn is_feasible_value(&self, value: &Placement, variable: &Rectangle, solution: &Packing) -> bool {
        let placed = value.apply(variable);
        self.fits(&placed) && !collides(&placed, &blocked_cells(solution))
    }

    fn assign_value(&self, value: &Placement, variable: &Rectangle, solution: &Packing) -> Packing {
        solution.with_pushed(value.apply(variable))
    }
}
