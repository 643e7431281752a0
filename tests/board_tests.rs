use sea_battle::{place, resolve_shot, BitBoard, Board, EngineError, Orientation, ShipKind, Side};

#[test]
fn test_cell_at_rejects_out_of_bounds() {
    let board = Board::new(Side::Human);
    assert_eq!(
        board.cell_at(10, 0).unwrap_err(),
        EngineError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(
        board.cell_at(3, 12).unwrap_err(),
        EngineError::OutOfBounds { row: 3, col: 12 }
    );
    assert!(board.cell_at(9, 9).is_ok());
}

#[test]
fn test_neighbors4_order_and_clipping() {
    let center: Vec<_> = Board::neighbors4(5, 5).collect();
    assert_eq!(center, vec![(4, 5), (6, 5), (5, 4), (5, 6)]);

    let corner: Vec<_> = Board::neighbors4(0, 0).collect();
    assert_eq!(corner, vec![(1, 0), (0, 1)]);

    let far_corner: Vec<_> = Board::neighbors4(9, 9).collect();
    assert_eq!(far_corner, vec![(8, 9), (9, 8)]);
}

#[test]
fn test_neighbors8_counts() {
    assert_eq!(Board::neighbors8(5, 5).count(), 8);
    assert_eq!(Board::neighbors8(0, 0).count(), 3);
    assert_eq!(Board::neighbors8(0, 5).count(), 5);
    assert_eq!(Board::neighbors8(9, 9).count(), 3);
    assert!(Board::neighbors8(4, 4).all(|c| c != (4, 4)));
}

#[test]
fn test_occupancy_survives_hits() {
    let mut board = Board::new(Side::Computer);
    place(&mut board, (2, 2), ShipKind::Cruiser, Orientation::Vertical).unwrap();
    assert!(board.is_occupied(3, 2));
    resolve_shot(&mut board, 3, 2).unwrap();
    assert!(board.is_occupied(3, 2));

    let cell = board.cell_at(3, 2).unwrap();
    assert_eq!(cell.ship, Some(ShipKind::Cruiser));
    assert!(cell.hit);
    assert!(!board.is_occupied(5, 2));
}

#[test]
fn test_reset_clears_ships_and_shots() {
    let mut board = Board::new(Side::Human);
    place(&mut board, (0, 0), ShipKind::Destroyer, Orientation::Horizontal).unwrap();
    resolve_shot(&mut board, 9, 9).unwrap();
    board.reset();
    assert!(board.ship_map().is_empty());
    assert!(board.shots().is_empty());
    assert!(board.placements().is_empty());
    assert_eq!(board.owner(), Side::Human);
}

#[test]
fn test_cells_iterates_row_major() {
    let board = Board::new(Side::Human);
    let cells: Vec<_> = board.cells().map(|c| (c.row, c.col)).collect();
    assert_eq!(cells.len(), 100);
    assert_eq!(cells[0], (0, 0));
    assert_eq!(cells[11], (1, 1));
    assert_eq!(cells[99], (9, 9));
}

#[test]
fn test_halo_clips_at_edges() {
    type Grid = BitBoard<u128, 10>;

    let corner = Grid::from_cells([(0, 0)]).unwrap().halo();
    assert_eq!(
        corner.iter_set_bits().collect::<Vec<_>>(),
        vec![(0, 0), (0, 1), (1, 0), (1, 1)]
    );

    let far = Grid::from_cells([(9, 9)]).unwrap().halo();
    assert_eq!(far.count_ones(), 4);
    assert!(far.contains(8, 8));

    // Growth off the right edge must not wrap into the next row.
    let right = Grid::from_cells([(3, 9)]).unwrap().halo();
    assert_eq!(right.count_ones(), 6);
    assert!(!right.contains(4, 0));
    assert!(!right.contains(3, 0));

    let middle = Grid::from_cells([(5, 5)]).unwrap().halo();
    assert_eq!(middle.count_ones(), 9);
}
