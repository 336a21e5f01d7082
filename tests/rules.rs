use checkers::{
    rules::{is_safe, is_valid_move},
    Board, Color, Point, Square,
};
use std::str::FromStr;

fn board(s: &str) -> Board {
    Board::from_str(s).unwrap()
}

#[test]
fn test_mandatory_capture() {
    let board = board(
        "\
........
........
........
..b.....
...w....
........
.......w
........
",
    );
    // Plain move of a piece that cannot capture.
    assert!(!is_valid_move(&board, Color::White, 27, 23, None));
    // Plain move of the piece that can.
    assert!(!is_valid_move(&board, Color::White, 17, 14, None));
    assert!(is_valid_move(&board, Color::White, 17, 8, None));
}

#[test]
fn test_basic_checks() {
    let board = Board::initial();
    assert!(is_valid_move(&board, Color::White, 21, 17, None));
    assert!(is_valid_move(&board, Color::Black, 8, 12, None));
    // Out of range, same square.
    assert!(!is_valid_move(&board, Color::White, 21, 32, None));
    assert!(!is_valid_move(&board, Color::White, 40, 17, None));
    assert!(!is_valid_move(&board, Color::White, 21, 21, None));
    // Wrong side.
    assert!(!is_valid_move(&board, Color::Black, 21, 17, None));
    assert!(!is_valid_move(&board, Color::White, 8, 12, None));
    // Occupied destination.
    assert!(!is_valid_move(&board, Color::White, 25, 21, None));
    // Empty start.
    assert!(!is_valid_move(&board, Color::White, 16, 12, None));
    // Not diagonal.
    assert!(!is_valid_move(&board, Color::White, 20, 12, None));
    // Too far.
    assert!(!is_valid_move(&board, Color::White, 25, 12, None));
    // Jump over nothing.
    assert!(!is_valid_move(&board, Color::White, 21, 14, None));
    assert!(!is_valid_move(&board, Color::White, 21, 12, None));
}

#[test]
fn test_pending_capture_locks_piece() {
    let board = board(
        "\
........
........
........
..b.....
...w....
....b...
.......w
........
",
    );
    let locked = Square::new(17);
    assert!(is_valid_move(&board, Color::White, 17, 8, locked));
    assert!(!is_valid_move(&board, Color::White, 27, 23, locked));
}

#[test]
fn test_direction() {
    let board = board(
        "\
........
........
........
........
...w.B..
........
........
........
",
    );
    // A white man may not step backwards, a king may go anywhere.
    assert!(!is_valid_move(&board, Color::White, 17, 21, None));
    assert!(is_valid_move(&board, Color::White, 17, 14, None));
    assert!(is_valid_move(&board, Color::Black, 18, 14, None));
    assert!(is_valid_move(&board, Color::Black, 18, 22, None));
    assert!(is_valid_move(&board, Color::Black, 18, 15, None));
}

#[test]
fn test_capture_over_own_piece() {
    let board = board(
        "\
........
........
........
..w.....
...w....
........
........
........
",
    );
    assert!(!is_valid_move(&board, Color::White, 17, 8, None));
}

#[test]
fn test_backward_capture() {
    let board = board(
        "\
........
........
........
..w.....
...b....
........
........
........
",
    );
    // Black men move down, so this is a backward jump for black.
    assert!(!is_valid_move(&board, Color::Black, 17, 8, None));
    // The white man captures forward.
    assert!(!is_valid_move(&board, Color::White, 13, 22, None));
}

#[test]
fn test_is_safe_lone_piece() {
    let board = board(
        "\
........
........
........
........
...w....
........
........
........
",
    );
    assert!(is_safe(&board, Point::new(3, 4)));
    // Empty squares, light squares and points off the board.
    assert!(is_safe(&board, Point::new(1, 0)));
    assert!(is_safe(&board, Point::new(0, 0)));
    assert!(is_safe(&board, Point::new(-3, 9)));
}

#[test]
fn test_is_safe_attacked() {
    let board = board(
        "\
........
........
........
..b.....
...w....
........
........
........
",
    );
    assert!(!is_safe(&board, Point::new(3, 4)));
    assert!(!is_safe(&board, Point::new(2, 3)));
}

#[test]
fn test_is_safe_direction() {
    // A black man below cannot jump upwards.
    let board = board(
        "\
........
........
........
........
...w....
....b...
........
........
",
    );
    assert!(is_safe(&board, Point::new(3, 4)));

    // A black king can.
    let board = Board::from_str(
        "\
........
........
........
........
...w....
....B...
........
........
",
    )
    .unwrap();
    assert!(!is_safe(&board, Point::new(3, 4)));
}

#[test]
fn test_is_safe_blocked_landing() {
    let board = board(
        "\
........
........
........
..b.....
...w....
....w...
........
........
",
    );
    assert!(is_safe(&board, Point::new(3, 4)));
}

#[test]
fn test_is_safe_edge() {
    // Nothing can land beyond a piece on the edge.
    let board = board(
        "\
........
........
........
........
.b......
w.......
........
........
",
    );
    assert!(is_safe(&board, Point::new(0, 5)));
}
