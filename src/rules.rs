use crate::{movegen, Board, Color, Point, Square, SquareState};

/// Whether the side `to_move` may play `start` -> `end` right now.
///
/// `pending_capture` is the square of a piece in the middle of a multi-capture;
/// while it is set, only that piece may move.
pub fn is_valid_move(
    board: &Board,
    to_move: Color,
    start: usize,
    end: usize,
    pending_capture: Option<Square>,
) -> bool {
    let (Some(start), Some(end)) = (Square::new(start), Square::new(end)) else {
        return false;
    };
    if start == end {
        return false;
    }
    if pending_capture.is_some_and(|locked| locked != start) {
        return false;
    }
    if board.square(end) != SquareState::Empty {
        return false;
    }
    let piece = board.square(start);
    if !piece.is_color(to_move) {
        return false;
    }
    let middle = Square::middle(start, end);
    if middle.is_some_and(|middle| !board.square(middle).is_color(to_move.opposite())) {
        return false;
    }
    if !is_valid_geometry(piece, start, end) {
        return false;
    }
    // A plain step is only allowed when no piece of the side can capture.
    middle.is_some() || !movegen::has_capture(board, to_move)
}

fn is_valid_geometry(piece: SquareState, start: Square, end: Square) -> bool {
    let (from, to) = (start.point(), end.point());
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    if dx.abs() != dy.abs() || !(1..=2).contains(&dx.abs()) {
        return false;
    }
    match piece.color() {
        Some(color) if !piece.is_king() => dy.signum() == color.forward(),
        Some(_) => true,
        None => false,
    }
}

/// No single enemy jump could take the piece at `point` next turn.
///
/// Empty squares and points off the playable squares are trivially safe.
pub fn is_safe(board: &Board, point: Point) -> bool {
    let Some(square) = Square::from_point(point) else {
        return true;
    };
    let Some(color) = board.square(square).color() else {
        return true;
    };
    for (dx, dy) in [(1, 1), (-1, 1), (1, -1), (-1, -1)] {
        let Some(attacker) = Square::from_point(point.offset(dx, dy)) else {
            continue;
        };
        let enemy = board.square(attacker);
        if !enemy.is_color(color.opposite()) {
            continue;
        }
        // The attacker travels from its square across `point`.
        if !enemy.is_king() && -dy != color.opposite().forward() {
            continue;
        }
        let Some(landing) = Square::from_point(point.offset(-dx, -dy)) else {
            continue;
        };
        if movegen::is_valid_skip(board, attacker, landing) {
            return false;
        }
    }
    true
}
