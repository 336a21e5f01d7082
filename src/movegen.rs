use crate::{Board, Color, GameState, Move, Point, Square, SquareState};

/// Diagonal targets `step` squares away that the occupant of `square` may
/// head for: forward only for a man, all four ways for a king. Targets may lie
/// off the board. An empty square has none.
pub fn candidate_steps(board: &Board, square: Square, step: i32) -> Vec<Point> {
    let state = board.square(square);
    let from = square.point();
    let mut points = Vec::with_capacity(4);
    if state.is_king() || state == SquareState::BlackMan {
        points.push(from.offset(step, step));
        points.push(from.offset(-step, step));
    }
    if state.is_king() || state == SquareState::WhiteMan {
        points.push(from.offset(step, -step));
        points.push(from.offset(-step, -step));
    }
    points
}

/// Plain one-step moves of the piece on `square` onto empty squares.
pub fn moves(board: &Board, square: Square) -> Vec<Square> {
    candidate_steps(board, square, 1)
        .into_iter()
        .filter_map(Square::from_point)
        .filter(|&to| board.square(to) == SquareState::Empty)
        .collect()
}

/// Single jumps available to the piece on `square`.
pub fn skips(board: &Board, square: Square) -> Vec<Square> {
    candidate_steps(board, square, 2)
        .into_iter()
        .filter_map(Square::from_point)
        .filter(|&to| is_valid_skip(board, square, to))
        .collect()
}

/// A jump lands on an empty square over an enemy piece.
///
/// Direction is not checked here; callers only pass targets the jumping piece
/// may head for.
pub fn is_valid_skip(board: &Board, start: Square, end: Square) -> bool {
    if board.square(end) != SquareState::Empty {
        return false;
    }
    let Some(color) = board.square(start).color() else {
        return false;
    };
    let Some(middle) = Square::middle(start, end) else {
        return false;
    };
    board.square(middle).color() == Some(color.opposite())
}

pub fn has_capture(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|square| !skips(board, square).is_empty())
}

/// Every move the side to move may play, honoring a pending capture chain and
/// mandatory capture. Ordered by start square, then by direction.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let board = state.board();
    if let Some(locked) = state.pending_capture() {
        return skips(&board, locked)
            .into_iter()
            .map(|end| Move::new(locked, end))
            .collect();
    }

    let color = state.to_move();
    let captures: Vec<Move> = board
        .pieces(color)
        .flat_map(|start| {
            skips(&board, start)
                .into_iter()
                .map(move |end| Move::new(start, end))
        })
        .collect();
    if !captures.is_empty() {
        return captures;
    }

    board
        .pieces(color)
        .flat_map(|start| {
            moves(&board, start)
                .into_iter()
                .map(move |end| Move::new(start, end))
        })
        .collect()
}
