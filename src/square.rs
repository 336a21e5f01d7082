use crate::ParseError;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A coordinate on the 8x8 grid. May lie off the board or on a light square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const WIDTH: i32 = 8;
    pub const HEIGHT: i32 = 8;

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_on_board(self) -> bool {
        (0..Self::WIDTH).contains(&self.x) && (0..Self::HEIGHT).contains(&self.y)
    }

    /// Dark squares are the playable ones.
    pub fn is_playable(self) -> bool {
        self.is_on_board() && self.x % 2 != self.y % 2
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the 32 playable squares, numbered row by row from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 32;
    const PER_ROW: usize = 4;

    pub fn new(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Signed variant for indices that come from arithmetic or serialized text.
    pub fn from_signed(index: i64) -> Option<Self> {
        usize::try_from(index).ok().and_then(Self::new)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }

    pub fn index(self) -> usize {
        self.0.into()
    }

    pub fn from_point(point: Point) -> Option<Self> {
        if !point.is_playable() {
            return None;
        }
        Self::new(point.y as usize * Self::PER_ROW + point.x as usize / 2)
    }

    pub fn point(self) -> Point {
        let index = self.index() as i32;
        let y = index / Self::PER_ROW as i32;
        let x = 2 * (index % Self::PER_ROW as i32) + (y + 1) % 2;
        Point { x, y }
    }

    pub fn row(self) -> i32 {
        self.point().y
    }

    /// The square jumped over by a two-step diagonal from `from` to `to`.
    pub fn middle(from: Self, to: Self) -> Option<Self> {
        let (a, b) = (from.point(), to.point());
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        if dx.abs() != 2 || dy.abs() != 2 {
            return None;
        }
        Self::from_point(a.offset(dx / 2, dy / 2))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let index: usize = s.parse().map_err(|_| ParseError)?;
        Self::new(index).ok_or(ParseError)
    }
}
