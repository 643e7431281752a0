use sea_battle::{place, render_board, resolve_shot, Board, Marker, Orientation, ShipKind, Side};

#[test]
fn test_empty_board_layout() {
    let text = render_board(&Board::new(Side::Human), true);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "    A B C D E F G H I J");
    assert_eq!(lines[1], " 1  . . . . . . . . . .");
    assert_eq!(lines[10], "10  . . . . . . . . . .");
}

#[test]
fn test_markers_follow_board_state() {
    let mut board = Board::new(Side::Computer);
    place(&mut board, (0, 0), ShipKind::Destroyer, Orientation::Horizontal).unwrap();
    resolve_shot(&mut board, 0, 0).unwrap();
    resolve_shot(&mut board, 5, 5).unwrap();

    let marker = |r, c, reveal| Marker::of(&board.cell_at(r, c).unwrap(), reveal);
    assert_eq!(marker(0, 0, false), Marker::Hit);
    assert_eq!(marker(0, 1, true), Marker::Ship);
    assert_eq!(marker(0, 1, false), Marker::Water);
    assert_eq!(marker(5, 5, false), Marker::Miss);
    assert_eq!(marker(9, 9, true), Marker::Water);

    let hidden = render_board(&board, false);
    assert_eq!(hidden.lines().nth(1), Some(" 1  X . . . . . . . . ."));
    let shown = render_board(&board, true);
    assert_eq!(shown.lines().nth(1), Some(" 1  X S . . . . . . . ."));
    assert_eq!(shown.lines().nth(6), Some(" 6  . . . . . o . . . ."));
}
