use crate::{Color, ParseError};
use std::fmt::{self, Display, Formatter};

/// Occupant of a playable square, stored on the board as a 3-bit code.
///
/// Bit 2 marks a piece, bit 1 marks black, bit 0 marks a king. Black and white
/// codes of the same rank differ in bit 1 only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SquareState {
    Empty = 0b000,
    WhiteMan = 0b100,
    WhiteKing = 0b101,
    BlackMan = 0b110,
    BlackKing = 0b111,
}

impl SquareState {
    pub const BITS: u32 = 3;

    const PIECE_BIT: u8 = 0b100;
    const BLACK_BIT: u8 = 0b010;
    const KING_BIT: u8 = 0b001;

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Unrecognized and negative codes decode to `Empty`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0b100 => Self::WhiteMan,
            0b101 => Self::WhiteKing,
            0b110 => Self::BlackMan,
            0b111 => Self::BlackKing,
            _ => Self::Empty,
        }
    }

    pub fn man(color: Color) -> Self {
        match color {
            Color::Black => Self::BlackMan,
            Color::White => Self::WhiteMan,
        }
    }

    pub fn king(color: Color) -> Self {
        match color {
            Color::Black => Self::BlackKing,
            Color::White => Self::WhiteKing,
        }
    }

    pub fn is_piece(self) -> bool {
        self.code() & Self::PIECE_BIT != 0
    }

    pub fn is_black(self) -> bool {
        self.is_piece() && self.code() & Self::BLACK_BIT != 0
    }

    pub fn is_white(self) -> bool {
        self.is_piece() && self.code() & Self::BLACK_BIT == 0
    }

    pub fn is_king(self) -> bool {
        self.is_piece() && self.code() & Self::KING_BIT != 0
    }

    pub fn color(self) -> Option<Color> {
        if self.is_black() {
            Some(Color::Black)
        } else if self.is_white() {
            Some(Color::White)
        } else {
            None
        }
    }

    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Same piece after crowning. Kings and empty squares are unchanged.
    pub fn promoted(self) -> Self {
        match self {
            Self::BlackMan => Self::BlackKing,
            Self::WhiteMan => Self::WhiteKing,
            other => other,
        }
    }

    pub(crate) fn from_symbol(symbol: u8) -> Result<Self, ParseError> {
        match symbol {
            b'.' => Ok(Self::Empty),
            b'b' => Ok(Self::BlackMan),
            b'B' => Ok(Self::BlackKing),
            b'w' => Ok(Self::WhiteMan),
            b'W' => Ok(Self::WhiteKing),
            _ => Err(ParseError),
        }
    }
}

impl Display for SquareState {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Empty     => ".",
            Self::BlackMan  => "b",
            Self::BlackKing => "B",
            Self::WhiteMan  => "w",
            Self::WhiteKing => "W",
        };
        write!(f, "{symbol}")
    }
}
