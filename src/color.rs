use crate::ParseError;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const COUNT: usize = 2;

    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Black, Self::White].into_iter()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Row delta of a man's step: black men walk down the board, white men up.
    pub fn forward(self) -> i32 {
        match self {
            Self::Black => 1,
            Self::White => -1,
        }
    }

    /// The opponent's back rank, where a man of this color is crowned.
    pub fn promotion_row(self) -> i32 {
        match self {
            Self::Black => 7,
            Self::White => 0,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Black => "black",
            Self::White => "white",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "black" => Ok(Self::Black),
            "white" => Ok(Self::White),
            _ => Err(ParseError),
        }
    }
}
