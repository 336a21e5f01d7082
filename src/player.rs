use crate::{Color, GameState, Move, MoveSelector};

/// Who supplies the moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// Moves arrive from outside, e.g. a person at a board.
    Interactive,
    /// Moves come from a [`MoveSelector`].
    Automated,
}

/// Result of giving a player its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnAction {
    /// Nothing was played; the caller must supply the move.
    AwaitingInput,
    Moved(Move),
    /// The game is over, no move was found.
    NoMove,
}

impl PlayerKind {
    pub fn update_game(self, state: &mut GameState, selector: &mut MoveSelector) -> TurnAction {
        match self {
            Self::Interactive => TurnAction::AwaitingInput,
            Self::Automated => {
                let Some(mov) = selector.choose(state) else {
                    return TurnAction::NoMove;
                };
                if state.make_move(mov.start.index(), mov.end.index()) {
                    log::trace!("played {mov}, {} to move", state.to_move());
                    TurnAction::Moved(mov)
                } else {
                    TurnAction::NoMove
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Players {
    pub black: PlayerKind,
    pub white: PlayerKind,
}

impl Players {
    pub fn new(black: PlayerKind, white: PlayerKind) -> Self {
        Self { black, white }
    }

    pub fn get(&self, color: Color) -> PlayerKind {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// The player whose turn it is.
    pub fn current(&self, state: &GameState) -> PlayerKind {
        self.get(state.to_move())
    }

    /// Lets the side to move act once. An automated side plays a single move;
    /// a capture chain takes one call per jump.
    pub fn advance(&self, state: &mut GameState, selector: &mut MoveSelector) -> TurnAction {
        if state.is_game_over() {
            return TurnAction::NoMove;
        }
        self.current(state).update_game(state, selector)
    }
}
