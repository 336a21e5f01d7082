mod config;
mod game;
mod run_match;

pub use config::{Config, MatchConfig, PlayerConfig};
pub use game::{FinishedGame, Outcome, run_game};
pub use run_match::{MatchResult, run_match};
