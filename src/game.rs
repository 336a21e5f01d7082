use crate::{movegen, rules, Board, Color, ParseError, Point, Square, SquareState};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A game in progress: the board, the side to move and a pending capture chain.
///
/// Occupancy only changes through [`GameState::make_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    to_move: Color,
    pending_capture: Option<Square>,
}

impl GameState {
    /// White moves first.
    pub const FIRST_TO_MOVE: Color = Color::White;

    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            to_move: Self::FIRST_TO_MOVE,
            pending_capture: None,
        }
    }

    /// Arbitrary position, e.g. for analysis. No consistency checks.
    pub fn from_parts(board: Board, to_move: Color, pending_capture: Option<Square>) -> Self {
        Self {
            board,
            to_move,
            pending_capture,
        }
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// A copy of the board.
    pub fn board(&self) -> Board {
        self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn is_black_to_move(&self) -> bool {
        self.to_move == Color::Black
    }

    /// Black is player 1.
    pub fn is_p1_turn(&self) -> bool {
        self.is_black_to_move()
    }

    /// The piece that must keep capturing, if a chain is in progress.
    pub fn pending_capture(&self) -> Option<Square> {
        self.pending_capture
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.board.count(color)
    }

    /// Plays `start` -> `end` by square index. Returns `false` and leaves the
    /// state untouched if the move is not legal.
    pub fn make_move(&mut self, start: usize, end: usize) -> bool {
        if !rules::is_valid_move(&self.board, self.to_move, start, end, self.pending_capture) {
            return false;
        }
        let (Some(start), Some(end)) = (Square::new(start), Square::new(end)) else {
            return false;
        };

        let piece = self.board.square(start);
        let middle = Square::middle(start, end);
        self.board.set_square(end, piece);
        if let Some(middle) = middle {
            self.board.set_square(middle, SquareState::Empty);
        }
        self.board.set_square(start, SquareState::Empty);

        // Crowning ends the turn even if the new king could jump again.
        let promoted = !piece.is_king()
            && piece
                .color()
                .is_some_and(|color| end.row() == color.promotion_row());
        if promoted {
            self.board.set_square(end, piece.promoted());
        }

        let continues =
            middle.is_some() && !promoted && !movegen::skips(&self.board, end).is_empty();
        if continues {
            self.pending_capture = Some(end);
        } else {
            self.to_move = self.to_move.opposite();
            self.pending_capture = None;
        }
        true
    }

    /// Point-based variant of [`GameState::make_move`].
    pub fn make_move_points(&mut self, start: Point, end: Point) -> bool {
        match (Square::from_point(start), Square::from_point(end)) {
            (Some(start), Some(end)) => self.make_move(start.index(), end.index()),
            _ => false,
        }
    }

    /// A side without pieces has lost, as has a side to move without any move.
    pub fn is_game_over(&self) -> bool {
        if Color::all().any(|color| self.board.count(color) == 0) {
            return true;
        }
        !self.board.pieces(self.to_move).any(|square| {
            !movegen::moves(&self.board, square).is_empty()
                || !movegen::skips(&self.board, square).is_empty()
        })
    }

    /// The winning side once the game is over.
    pub fn winner(&self) -> Option<Color> {
        if !self.is_game_over() {
            return None;
        }
        Color::all()
            .find(|&color| self.board.count(color.opposite()) == 0)
            .or(Some(self.to_move.opposite()))
    }

    /// Best-effort decoder for the text produced by `Display`.
    ///
    /// Starts from the initial position. Missing or non-digit square characters
    /// keep their initial occupant, a missing turn character leaves white to
    /// move, and a missing or malformed tail clears the pending capture.
    pub fn restore(s: &str) -> Self {
        let mut state = Self::new();
        let chars: Vec<char> = s.chars().collect();
        for (index, c) in chars.iter().take(Square::COUNT).enumerate() {
            if let Some(code) = c.to_digit(10) {
                state.board.set_code(index, code as i32);
            }
        }
        if let Some(&turn) = chars.get(Square::COUNT) {
            state.to_move = if turn == '1' {
                Color::Black
            } else {
                Color::White
            };
        }
        if chars.len() > Square::COUNT + 1 {
            let tail: String = chars[Square::COUNT + 1..].iter().collect();
            state.pending_capture = tail.parse::<i64>().ok().and_then(Square::from_signed);
        }
        state
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// 32 occupant codes, `1` if black is to move else `0`, then the pending
/// capture square or `-1`.
impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for square in Square::all() {
            write!(f, "{}", self.board.square(square).code())?;
        }
        write!(f, "{}", u8::from(self.is_black_to_move()))?;
        match self.pending_capture {
            None => write!(f, "-1"),
            Some(square) => write!(f, "{square}"),
        }
    }
}

/// Strict decoder: rejects anything `Display` could not have produced.
impl FromStr for GameState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        if !s.is_ascii() || s.len() < Square::COUNT + 2 {
            return Err(ParseError);
        }
        let (squares, rest) = s.split_at(Square::COUNT);
        let (turn, tail) = rest.split_at(1);

        let mut board = Board::empty();
        for (square, c) in Square::all().zip(squares.chars()) {
            let code = c.to_digit(10).ok_or(ParseError)? as i32;
            let state = SquareState::from_code(code);
            if i32::from(state.code()) != code {
                return Err(ParseError);
            }
            board.set_square(square, state);
        }

        let to_move = match turn {
            "1" => Color::Black,
            "0" => Color::White,
            _ => return Err(ParseError),
        };

        let pending_capture = match tail {
            "-1" => None,
            _ => {
                let square: Square = tail.parse()?;
                if square.to_string() != tail {
                    return Err(ParseError);
                }
                Some(square)
            }
        };

        Ok(Self {
            board,
            to_move,
            pending_capture,
        })
    }
}
