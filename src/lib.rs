//! Rules engine and move heuristic for checkers on the 8x8 board.

mod board;
mod color;
mod error;
pub mod game;
mod mov;
pub mod movegen;
mod piece;
mod player;
pub mod rules;
pub mod selector;
mod square;

pub use board::Board;
pub use color::Color;
pub use error::ParseError;
pub use game::GameState;
pub use mov::{Move, WeightedMove};
pub use piece::SquareState;
pub use player::{PlayerKind, Players, TurnAction};
pub use selector::{choose_and_apply_automated_move, MoveSelector, Weights};
pub use square::{Point, Square};
