use crate::{movegen, rules, Board, Color, GameState, Move, Square, WeightedMove};
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};
use serde::Deserialize;

/// Scoring constants of the move heuristic.
///
/// Missing fields in a config file keep their default values.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Weights {
    /// Starting score of a capture, and scale of a continuing chain.
    pub skip: f64,
    /// Scale of the opponent's reply chain once the turn has passed.
    pub skip_on_next: f64,
    pub safe_safe: f64,
    pub safe_unsafe: f64,
    pub unsafe_safe: f64,
    pub unsafe_unsafe: f64,
    /// Per piece of a side that cannot be taken next turn.
    pub safe_piece: f64,
    /// Per piece of a side that can be taken next turn.
    pub unsafe_piece: f64,
    /// Multiplier on penalties for exposing a king.
    pub king_factor: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            skip: 25.0,
            skip_on_next: 20.0,
            safe_safe: 5.0,
            safe_unsafe: -40.0,
            unsafe_safe: 40.0,
            unsafe_unsafe: -40.0,
            safe_piece: 3.0,
            unsafe_piece: -5.0,
            king_factor: 2.0,
        }
    }
}

/// Picks moves for an automated player.
///
/// Every legal move is scored on a private copy of the game, and one of the
/// best-scoring moves is drawn uniformly at random.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    weights: Weights,
    rng: StdRng,
}

impl MoveSelector {
    pub fn new(weights: Weights) -> Self {
        Self {
            weights,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(weights: Weights, seed: u64) -> Self {
        Self {
            weights,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Scores of all legal moves, in [`movegen::legal_moves`] order.
    pub fn score_moves(&self, state: &GameState) -> Vec<WeightedMove> {
        movegen::legal_moves(state)
            .into_iter()
            .map(|mov| WeightedMove {
                mov,
                weight: self.score_move(state, mov),
            })
            .collect()
    }

    /// Heuristic value of `mov` for the side to move. Illegal moves score
    /// [`WeightedMove::INVALID_WEIGHT`]. `state` is never modified.
    pub fn score_move(&self, state: &GameState, mov: Move) -> f64 {
        let w = &self.weights;
        let mut game = *state;
        let mover = game.to_move();
        let before = game.board();
        let safe_before = rules::is_safe(&before, mov.start.point());

        let mut weight = if mov.is_capture() && state.pending_capture().is_none() {
            w.skip
        } else {
            0.0
        };
        weight += self.safety_weight(&before, mover);

        if !game.make_move(mov.start.index(), mov.end.index()) {
            return WeightedMove::INVALID_WEIGHT;
        }
        let after = game.board();
        let is_king = after.square(mov.end).is_king();

        let mut safe_after = true;
        if game.to_move() != mover {
            safe_after = rules::is_safe(&after, mov.end.point());
            if safe_after {
                let depth = f64::from(reply_capture_depth(&game, mov.end));
                weight += w.skip_on_next * depth * depth;
            } else {
                weight += w.skip_on_next;
            }
        } else {
            let depth = f64::from(capture_chain_depth(&game, mov.end, mover));
            weight += w.skip * depth * depth;
        }

        weight += match (safe_before, safe_after) {
            (true, true) => w.safe_safe,
            (false, true) => w.unsafe_safe,
            (true, false) => w.safe_unsafe * if is_king { w.king_factor } else { 1.0 },
            (false, false) => w.unsafe_unsafe,
        };
        weight + self.safety_weight(&after, mover.opposite())
    }

    fn safety_weight(&self, board: &Board, color: Color) -> f64 {
        let w = &self.weights;
        board
            .pieces(color)
            .map(|square| {
                if rules::is_safe(board, square.point()) {
                    w.safe_piece
                } else if board.square(square).is_king() {
                    w.unsafe_piece * w.king_factor
                } else {
                    w.unsafe_piece
                }
            })
            .sum()
    }

    /// One of the best-scoring legal moves, or `None` if the game is over.
    pub fn choose(&mut self, state: &GameState) -> Option<Move> {
        if state.is_game_over() {
            return None;
        }
        let scored: Vec<WeightedMove> = self
            .score_moves(state)
            .into_iter()
            .filter(WeightedMove::is_valid)
            .collect();
        for candidate in &scored {
            log::trace!("candidate {candidate}");
        }
        let best = scored
            .iter()
            .map(|candidate| candidate.weight)
            .fold(f64::NEG_INFINITY, f64::max);
        let best_moves: Vec<Move> = scored
            .iter()
            .filter(|candidate| candidate.weight == best)
            .map(|candidate| candidate.mov)
            .collect();
        let choice = best_moves.choose(&mut self.rng).copied();
        if let Some(mov) = choice {
            log::debug!(
                "{color} plays {mov} score={best:.1} ties={ties}/{total}",
                color = state.to_move(),
                ties = best_moves.len(),
                total = scored.len(),
            );
        }
        choice
    }

    /// Chooses a move and plays it on `state`. Returns `false` if there was
    /// nothing to play.
    pub fn choose_and_apply(&mut self, state: &mut GameState) -> bool {
        let Some(mov) = self.choose(state) else {
            return false;
        };
        let played = state.make_move(mov.start.index(), mov.end.index());
        if played {
            log::trace!("played {mov}, {} to move", state.to_move());
        }
        played
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(Weights::default())
    }
}

/// Plays one automated move with the default weights.
pub fn choose_and_apply_automated_move(state: &mut GameState) -> bool {
    MoveSelector::default().choose_and_apply(state)
}

/// Length of the longest run of jumps `side` can make with the piece on
/// `from`, counting only while it stays `side`'s turn.
///
/// Each jump removes a piece, so the search is bounded by the piece count.
pub fn capture_chain_depth(state: &GameState, from: Square, side: Color) -> u32 {
    let mut deepest = 0;
    let mut stack = vec![(*state, from, 0)];
    while let Some((state, from, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        if state.to_move() != side {
            continue;
        }
        for to in movegen::skips(&state.board(), from) {
            let mut next = state;
            if next.make_move(from.index(), to.index()) {
                stack.push((next, to, depth + 1));
            }
        }
    }
    deepest
}

/// Length of the longest capture chain the side to move can open by jumping
/// the piece on `target`. Zero if `target` cannot be taken.
pub fn reply_capture_depth(state: &GameState, target: Square) -> u32 {
    let side = state.to_move();
    let board = state.board();
    board
        .pieces(side)
        .flat_map(|start| {
            movegen::skips(&board, start)
                .into_iter()
                .map(move |end| Move::new(start, end))
        })
        .filter(|mov| mov.middle() == Some(target))
        .filter_map(|mov| {
            let mut next = *state;
            next.make_move(mov.start.index(), mov.end.index())
                .then(|| 1 + capture_chain_depth(&next, mov.end, side))
        })
        .max()
        .unwrap_or(0)
}
