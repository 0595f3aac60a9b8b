//! Scores, terminal scoring and root move selection.
//!
//! Scores are always from the point of view of the player to move in the
//! state being scored, so a parent sees `-child` (negamax).

use crate::rules::{Game, GameState};

use super::stats::SearchStats;

/// Game-theoretic value in `[LOSE, WIN]`.
pub type Score = i8;

/// The player to move wins.
pub const WIN: Score = 1;
/// Neither side wins.
pub const DRAW: Score = 0;
/// The player to move loses.
pub const LOSE: Score = -1;

/// Move type of a game.
pub type MoveOf<G> = <<G as Game>::State as GameState>::Move;

/// Value of a finished game for the player to move in `state`.
///
/// Used by both minimax evaluators, so their leaves always agree.
#[must_use]
pub fn terminal_score<G: Game>(game: &G, state: &G::State) -> Score {
    match game.winner(state) {
        Some(winner) if winner == state.current_player() => WIN,
        Some(_) => LOSE,
        None => DRAW,
    }
}

/// Pick the best `(move, score)` pair.
///
/// Ties go to the earliest pair in enumeration order.
#[must_use]
pub fn select_best<M: Clone>(move_scores: &[(M, Score)]) -> Option<(M, Score)> {
    let mut best: Option<&(M, Score)> = None;
    for entry in move_scores {
        if best.map_or(true, |b| entry.1 > b.1) {
            best = Some(entry);
        }
    }
    best.cloned()
}

/// Outcome of a root search.
#[derive(Clone, Debug)]
pub struct SearchResult<M> {
    /// The chosen move.
    pub best_move: M,

    /// Value of the chosen move for the searching player.
    pub score: Score,

    /// Every root move with its value for the searching player, in
    /// enumeration order.
    pub move_scores: Vec<(M, Score)>,

    /// Statistics of the search that produced this result.
    pub stats: SearchStats,
}
