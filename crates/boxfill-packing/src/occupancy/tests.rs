use super::*;
use crate::rectangle::Corner;

fn two_pieces() -> Packing {
    Packing::new(vec![
        Rectangle::new(2, 2, Corner::new(0, 0), 0, 0),
        Rectangle::new(1, 3, Corner::new(0, 2), 0, 1),
    ])
}

#[test]
fn test_blocked_cells_is_union() {
    let packing = two_pieces();
    let blocked = blocked_cells(&packing);
    assert_eq!(blocked.len(), 4 + 3);
    assert!(blocked.contains(&Cell::new(0, 1, 1)));
    assert!(blocked.contains(&Cell::new(0, 2, 2)));
    assert!(!blocked.contains(&Cell::new(0, 2, 1)));
}

#[test]
fn test_blocked_cells_except_skips_piece() {
    let packing = two_pieces();
    let blocked = blocked_cells_except(&packing, 0);
    assert_eq!(blocked.len(), 3);
    assert!(!blocked.contains(&Cell::new(0, 0, 0)));
}

#[test]
fn test_is_disjoint() {
    let packing = two_pieces();
    let blocked = blocked_cells(&packing);

    let free = Rectangle::new(2, 1, Corner::new(2, 0), 0, 9).footprint();
    assert!(is_disjoint(&free, &blocked));

    let clash = Rectangle::new(2, 1, Corner::new(1, 1), 0, 9).footprint();
    assert!(!is_disjoint(&clash, &blocked));

    // same coordinates, other box
    let elsewhere = Rectangle::new(2, 2, Corner::new(0, 0), 1, 9).footprint();
    assert!(is_disjoint(&elsewhere, &blocked));
}

#[test]
fn test_adjacent_cells_respects_bounds() {
    let corner: Vec<_> = adjacent_cells(Cell::new(0, 0, 0), 3).collect();
    assert_eq!(corner.len(), 2);

    let middle: Vec<_> = adjacent_cells(Cell::new(2, 1, 1), 3).collect();
    assert_eq!(middle.len(), 4);
    assert!(middle.iter().all(|c| c.box_id == 2));
    assert!(middle.contains(&Cell::new(2, 0, 1)));
    assert!(middle.contains(&Cell::new(2, 1, 2)));
}
