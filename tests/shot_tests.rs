use sea_battle::{
    auto_place_fleet, place, resolve_shot, ship_component, Board, EngineError, Orientation,
    ShipKind, ShotOutcome, Side,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn computer_board() -> Board {
    Board::new(Side::Computer)
}

#[test]
fn test_repeat_miss_is_rejected_without_change() {
    let mut board = computer_board();
    place(&mut board, (0, 0), ShipKind::Destroyer, Orientation::Horizontal).unwrap();

    let report = resolve_shot(&mut board, 5, 5).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(report.touched, vec![(5, 5)]);
    assert!(report.winner.is_none());

    let after_first = board.clone();
    assert_eq!(
        resolve_shot(&mut board, 5, 5).unwrap_err(),
        EngineError::AlreadyShot { row: 5, col: 5 }
    );
    assert_eq!(board, after_first);
}

#[test]
fn test_out_of_bounds_shot() {
    let mut board = computer_board();
    assert_eq!(
        resolve_shot(&mut board, 0, 10).unwrap_err(),
        EngineError::OutOfBounds { row: 0, col: 10 }
    );
    assert!(board.shots().is_empty());
}

#[test]
fn test_sink_reveals_ring() {
    let mut board = computer_board();
    place(&mut board, (2, 2), ShipKind::Destroyer, Orientation::Horizontal).unwrap();
    place(&mut board, (7, 7), ShipKind::Submarine, Orientation::Horizontal).unwrap();

    let first = resolve_shot(&mut board, 2, 2).unwrap();
    assert_eq!(first.outcome, ShotOutcome::Hit);
    assert_eq!(first.touched, vec![(2, 2)]);

    let second = resolve_shot(&mut board, 2, 3).unwrap();
    assert_eq!(second.outcome, ShotOutcome::Sunk(ShipKind::Destroyer));
    assert!(second.winner.is_none());
    // target plus the 10 cells surrounding a 2-cell run
    assert_eq!(second.touched.len(), 11);
    assert_eq!(second.touched[0], (2, 3));
    for r in 1..=3 {
        for c in 1..=4 {
            assert!(board.is_hit(r, c), "({}, {}) should be revealed", r, c);
        }
    }
    assert!(!board.is_hit(0, 2));
    assert!(!board.is_hit(2, 5));

    for &(r, c) in &second.touched[1..] {
        assert!(!board.is_occupied(r, c));
        assert_eq!(
            resolve_shot(&mut board, r, c).unwrap_err(),
            EngineError::AlreadyShot { row: r, col: c }
        );
    }
}

#[test]
fn test_ring_skips_cells_already_hit() {
    let mut board = computer_board();
    place(&mut board, (0, 0), ShipKind::Submarine, Orientation::Horizontal).unwrap();
    place(&mut board, (5, 5), ShipKind::Submarine, Orientation::Horizontal).unwrap();
    resolve_shot(&mut board, 1, 1).unwrap();

    let report = resolve_shot(&mut board, 0, 0).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Sunk(ShipKind::Submarine));
    assert_eq!(report.touched, vec![(0, 0), (0, 1), (1, 0)]);
}

#[test]
fn test_last_sink_ends_game() {
    let mut board = computer_board();
    place(&mut board, (4, 4), ShipKind::Submarine, Orientation::Horizontal).unwrap();
    let report = resolve_shot(&mut board, 4, 4).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Sunk(ShipKind::Submarine));
    assert_eq!(report.winner, Some(Side::Human));
    assert!(board.all_sunk());
}

#[test]
fn test_game_over_fires_once_on_last_ship_cell() {
    let mut board = Board::new(Side::Human);
    auto_place_fleet(&mut board, &mut SmallRng::seed_from_u64(99)).unwrap();
    let targets: Vec<_> = board.ship_map().iter_set_bits().collect();

    let mut game_overs = Vec::new();
    for (i, &(r, c)) in targets.iter().enumerate() {
        assert!(!board.all_sunk());
        let report = resolve_shot(&mut board, r, c).unwrap();
        assert!(report.outcome.is_hit());
        if report.winner.is_some() {
            game_overs.push(i);
        }
    }
    assert_eq!(game_overs, vec![targets.len() - 1]);
    assert!(board.all_sunk());
}

#[test]
fn test_ship_component_breadth_first() {
    let mut board = computer_board();
    place(&mut board, (3, 5), ShipKind::Cruiser, Orientation::Vertical).unwrap();
    place(&mut board, (0, 0), ShipKind::Destroyer, Orientation::Horizontal).unwrap();

    assert_eq!(ship_component(&board, (4, 5)), vec![(4, 5), (3, 5), (5, 5)]);
    assert_eq!(ship_component(&board, (0, 1)), vec![(0, 1), (0, 0)]);
    assert!(ship_component(&board, (9, 9)).is_empty());
}

#[test]
fn test_partial_hits_do_not_sink() {
    let mut board = computer_board();
    place(&mut board, (6, 1), ShipKind::Battleship, Orientation::Horizontal).unwrap();
    for c in [1, 3, 4] {
        assert_eq!(resolve_shot(&mut board, 6, c).unwrap().outcome, ShotOutcome::Hit);
    }
    assert_eq!(
        resolve_shot(&mut board, 6, 2).unwrap().outcome,
        ShotOutcome::Sunk(ShipKind::Battleship)
    );
}
