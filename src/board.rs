use crate::{Color, ParseError, Point, Square, SquareState};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Occupancy of the 32 playable squares.
///
/// Each occupant is a 3-bit [`SquareState`] code spread over three 32-bit
/// planes: plane `i` holds bit `2 - i` of every square's code, so square `s`
/// lives in bit `s` of each plane. A `Board` is a plain value; copies never
/// alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    planes: [u32; SquareState::BITS as usize],
}

impl Board {
    pub const MEN_PER_SIDE: usize = 12;

    pub fn empty() -> Self {
        Self { planes: [0; 3] }
    }

    /// Standard opening: black men on squares 0..12, white men on 20..32.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    pub fn reset(&mut self) {
        *self = Self::empty();
        for i in 0..Self::MEN_PER_SIDE {
            self.set(i, SquareState::BlackMan);
            self.set(Square::COUNT - 1 - i, SquareState::WhiteMan);
        }
    }

    /// `None` for an index outside `0..32`.
    pub fn get(&self, index: usize) -> Option<SquareState> {
        Square::new(index).map(|square| self.square(square))
    }

    /// `None` for off-board points and light squares.
    pub fn get_xy(&self, x: i32, y: i32) -> Option<SquareState> {
        Square::from_point(Point::new(x, y)).map(|square| self.square(square))
    }

    pub fn square(&self, square: Square) -> SquareState {
        let bit = square.index();
        let code = self
            .planes
            .iter()
            .fold(0, |code, plane| (code << 1) | ((*plane >> bit) & 1));
        SquareState::from_code(code as i32)
    }

    /// Does nothing for an index outside `0..32`.
    pub fn set(&mut self, index: usize, state: SquareState) {
        if let Some(square) = Square::new(index) {
            self.set_square(square, state);
        }
    }

    /// Raw-code variant of [`Board::set`]; unknown codes store `Empty`.
    pub fn set_code(&mut self, index: usize, code: i32) {
        self.set(index, SquareState::from_code(code));
    }

    pub fn set_square(&mut self, square: Square, state: SquareState) {
        let bit = square.index();
        let code = u32::from(state.code());
        let last = self.planes.len() - 1;
        for (i, plane) in self.planes.iter_mut().enumerate() {
            if (code >> (last - i)) & 1 != 0 {
                *plane |= 1 << bit;
            } else {
                *plane &= !(1 << bit);
            }
        }
    }

    /// Points holding exactly `state`, in increasing square order.
    pub fn find(&self, state: SquareState) -> Vec<Point> {
        Square::all()
            .filter(|&square| self.square(square) == state)
            .map(Square::point)
            .collect()
    }

    /// Squares holding a man or king of `color`, in increasing square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&square| self.square(square).is_color(color))
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..Point::HEIGHT {
            for x in 0..Point::WIDTH {
                match self.get_xy(x, y) {
                    None => write!(f, ".")?,
                    Some(state) => write!(f, "{state}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() != Point::HEIGHT as usize {
            return Err(ParseError);
        }
        let mut board = Self::empty();
        for (y, line) in lines.iter().enumerate() {
            if line.len() != Point::WIDTH as usize {
                return Err(ParseError);
            }
            for (x, &symbol) in line.as_bytes().iter().enumerate() {
                let state = SquareState::from_symbol(symbol)?;
                match Square::from_point(Point::new(x as i32, y as i32)) {
                    Some(square) => board.set_square(square, state),
                    None if state == SquareState::Empty => {}
                    None => return Err(ParseError),
                }
            }
        }
        Ok(board)
    }
}
