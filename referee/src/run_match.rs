use crate::{Outcome, run_game};
use checkers::{Color, MoveSelector, Weights};
use rand::Rng;
use std::{
    array,
    fmt::{self, Display, Formatter},
    sync::{Arc, Mutex},
};
use threadpool::ThreadPool;

#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    pub num_games: usize,
    pub player0_wins: usize,
    pub player1_wins: usize,
    pub draws: usize,
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "games={} player0={} player1={} draws={}",
            self.num_games, self.player0_wins, self.player1_wins, self.draws
        )
    }
}

/// Plays `num_games` games, alternating which player has black.
pub fn run_match<RNG: Rng>(
    match_id: &str,
    num_games: usize,
    num_threads: usize,
    max_plies: usize,
    weights: [Weights; 2],
    rng: &mut RNG,
) -> MatchResult {
    let thread_pool = ThreadPool::new(num_threads.max(1));
    let match_result = Arc::new(Mutex::new(MatchResult::default()));
    for game_idx in 0..num_games {
        let black_player_idx = game_idx % 2;
        let seeds: [u64; Color::COUNT] = array::from_fn(|_| rng.random());
        let game_name = format!("{match_id}-{game_idx}");
        let match_result = match_result.clone();
        thread_pool.execute(move || {
            let selectors = array::from_fn(|color_idx| {
                MoveSelector::with_seed(weights[black_player_idx ^ color_idx], seeds[color_idx])
            });
            let finished_game = run_game(&game_name, selectors, max_plies);

            let mut match_result = match_result.lock().unwrap();
            match_result.num_games += 1;
            match finished_game.outcome {
                Outcome::Win(color) => {
                    if black_player_idx ^ color.index() == 0 {
                        match_result.player0_wins += 1;
                    } else {
                        match_result.player1_wins += 1;
                    }
                }
                Outcome::Draw => match_result.draws += 1,
            }
            log::info!(
                "{game_name} {outcome} plies={plies}",
                outcome = finished_game.outcome,
                plies = finished_game.moves.len(),
            );
        });
    }
    thread_pool.join();
    match_result.lock().unwrap().clone()
}
