use crate::{ParseError, Square};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A single step or a single jump from `start` to `end`.
///
/// A multi-capture is played as a sequence of jumps by the same piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub end: Square,
}

impl Move {
    pub fn new(start: Square, end: Square) -> Self {
        Self { start, end }
    }

    /// Square of the captured piece, if this is a jump.
    pub fn middle(self) -> Option<Square> {
        Square::middle(self.start, self.end)
    }

    pub fn is_capture(self) -> bool {
        self.middle().is_some()
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let (start, end) = s.split_once('-').ok_or(ParseError)?;
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

/// A candidate move with its heuristic score. Only lives during move selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedMove {
    pub mov: Move,
    pub weight: f64,
}

impl WeightedMove {
    pub const INVALID_WEIGHT: f64 = f64::NEG_INFINITY;

    pub fn is_valid(&self) -> bool {
        self.weight != Self::INVALID_WEIGHT
    }
}

impl Display for WeightedMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1})", self.mov, self.weight)
    }
}
