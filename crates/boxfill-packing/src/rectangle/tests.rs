//! Tests for rectangle geometry.

use super::*;

#[test]
fn test_footprint_cells() {
    let cells = footprint(2, 2, 0, Corner::new(1, 1));
    let expected: CellSet = [
        Cell::new(0, 1, 1),
        Cell::new(0, 1, 2),
        Cell::new(0, 2, 1),
        Cell::new(0, 2, 2),
    ]
    .into_iter()
    .collect();
    assert_eq!(cells, expected);

    let cells = footprint(2, 1, 0, Corner::new(2, 2));
    let expected: CellSet = [Cell::new(0, 2, 2), Cell::new(0, 2, 3)].into_iter().collect();
    assert_eq!(cells, expected);
}

#[test]
fn test_footprint_size_and_bounds() {
    for width in 1..5 {
        for height in 1..5 {
            let corner = Corner::new(2, 3);
            let cells = footprint(width, height, 4, corner);
            assert_eq!(cells.len(), (width * height) as usize);
            for cell in &cells {
                assert_eq!(cell.box_id, 4);
                assert!(cell.row >= corner.row && cell.row < corner.row + height);
                assert!(cell.col >= corner.col && cell.col < corner.col + width);
            }
        }
    }
}

#[test]
fn test_hull_surrounds_footprint() {
    let rect = Rectangle::new(3, 2, Corner::new(0, 0), 1, 0);
    let ring = rect.hull();

    // (w + 2) * (h + 2) - w * h
    assert_eq!(ring.len(), 5 * 4 - 6);
    assert!(ring.is_disjoint(&rect.footprint()));
    assert!(ring.contains(&Cell::new(1, -1, -1)));
    assert!(ring.contains(&Cell::new(1, 2, 3)));
    assert!(ring.contains(&Cell::new(1, 0, 3)));
    assert!(ring.iter().all(|c| c.box_id == 1));
}

#[test]
fn test_identity_is_by_id() {
    let a = Rectangle::new(2, 3, Corner::new(0, 0), 0, 5);
    let b = Rectangle::new(4, 1, Corner::new(3, 3), 2, 5);
    let c = Rectangle::new(2, 3, Corner::new(0, 0), 0, 6);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.same_placement(&c));
    assert!(!a.same_placement(&b));
}

#[test]
fn test_from_cells_matches_constructor() {
    let cells: CellSet = [
        Cell::new(0, 1, 1),
        Cell::new(0, 1, 2),
        Cell::new(0, 2, 1),
        Cell::new(0, 2, 2),
    ]
    .into_iter()
    .collect();

    let rebuilt = Rectangle::from_cells(&cells, 3).unwrap();
    let built = Rectangle::new(2, 2, Corner::new(1, 1), 0, 3);
    assert!(rebuilt.same_placement(&built));
    assert_eq!(rebuilt.id(), 3);

    assert!(Rectangle::from_cells(&CellSet::new(), 0).is_none());
}

#[test]
fn test_rotation() {
    let rect = Rectangle::new(3, 1, Corner::new(2, 0), 0, 0);
    let turned = rect.rotated();
    assert_eq!((turned.width(), turned.height()), (1, 3));
    assert_eq!(turned.corner(), rect.corner());
    assert_eq!(Rotation::options(2, 2), &[Rotation::Upright]);
    assert_eq!(Rotation::options(2, 3).len(), 2);
}

#[test]
fn test_fits_in() {
    assert!(Rectangle::new(2, 2, Corner::new(3, 3), 0, 0).fits_in(5));
    assert!(!Rectangle::new(2, 2, Corner::new(4, 3), 0, 0).fits_in(5));
    assert!(!Rectangle::new(2, 2, Corner::new(-1, 0), 0, 0).fits_in(5));
}
