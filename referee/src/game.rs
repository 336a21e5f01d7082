use checkers::{Color, GameState, Move, MoveSelector, PlayerKind, Players, TurnAction};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Color),
    /// The ply limit was reached first.
    Draw,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(color) => write!(f, "{color} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FinishedGame {
    /// Every jump of a multi-capture is listed separately.
    pub moves: Vec<Move>,
    pub outcome: Outcome,
    pub final_state: GameState,
}

/// Plays one game between two automated players, `selectors` indexed by color.
pub fn run_game(game_id: &str, mut selectors: [MoveSelector; 2], max_plies: usize) -> FinishedGame {
    let players = Players::new(PlayerKind::Automated, PlayerKind::Automated);
    let mut state = GameState::new();
    let mut moves = Vec::new();

    let outcome = loop {
        if let Some(winner) = state.winner() {
            break Outcome::Win(winner);
        }
        if moves.len() >= max_plies {
            break Outcome::Draw;
        }
        let selector = &mut selectors[state.to_move().index()];
        match players.advance(&mut state, selector) {
            TurnAction::Moved(mov) => moves.push(mov),
            TurnAction::AwaitingInput | TurnAction::NoMove => {
                panic!("Game {game_id}: no move in {state}")
            }
        }
    };

    log::debug!("{game_id}: {outcome} after {} plies", moves.len());
    FinishedGame {
        moves,
        outcome,
        final_state: state,
    }
}
