//! Recursive exhaustive minimax (negamax form).
//!
//! `value(s) = terminal_score(s)` at a finished state, otherwise
//! `max over moves m of -value(s after m)`. Every branch is searched to
//! its terminal leaf: no pruning, no memoization.

use std::time::Instant;

use tracing::debug;

use crate::core::{GameError, Result};
use crate::rules::{Game, GameState};

use super::config::SearchConfig;
use super::score::{select_best, terminal_score, MoveOf, Score, SearchResult, LOSE};
use super::stats::SearchStats;

/// Recursive minimax evaluator.
///
/// States are passed down explicitly; the game's current state is read
/// once at the root and never written.
#[derive(Clone, Debug, Default)]
pub struct RecursiveMinimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl RecursiveMinimax {
    /// Create an evaluator with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Statistics of the most recent call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Score every move from `state` and pick the best one.
    ///
    /// Fails with `GameError::GameOver` if `state` is already finished.
    pub fn search<G: Game>(&mut self, game: &G, state: &G::State) -> Result<SearchResult<MoveOf<G>>> {
        if game.is_over(state) {
            return Err(GameError::GameOver);
        }
        let start = Instant::now();
        self.stats.reset();
        self.visit(0)?;

        let mut move_scores = Vec::new();
        for mv in state.possible_moves() {
            let child = state.make_move(&mv)?;
            let score = -self.value(game, &child, 1)?;
            move_scores.push((mv, score));
        }
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let (best_move, score) = select_best(&move_scores).ok_or(GameError::GameOver)?;
        debug!(
            ?best_move,
            score,
            nodes = self.stats.nodes_visited,
            time_us = self.stats.time_us,
            nps = self.stats.nodes_per_second(),
            "recursive minimax finished"
        );

        Ok(SearchResult {
            best_move,
            score,
            move_scores,
            stats: self.stats.clone(),
        })
    }

    /// Exact value of `state` for its player to move.
    pub fn evaluate<G: Game>(&mut self, game: &G, state: &G::State) -> Result<Score> {
        let start = Instant::now();
        self.stats.reset();
        let score = self.value(game, state, 0);
        self.stats.time_us = start.elapsed().as_micros() as u64;
        score
    }

    fn value<G: Game>(&mut self, game: &G, state: &G::State, depth: u16) -> Result<Score> {
        self.visit(depth)?;
        if game.is_over(state) {
            self.stats.terminal_nodes += 1;
            return Ok(terminal_score(game, state));
        }

        let mut best: Option<Score> = None;
        for mv in state.possible_moves() {
            let child = state.make_move(&mv)?;
            let score = -self.value(game, &child, depth + 1)?;
            best = Some(best.map_or(score, |b| b.max(score)));
        }
        Ok(best.unwrap_or(LOSE))
    }

    /// Count a node visit, enforcing the node budget.
    fn visit(&mut self, depth: u16) -> Result<()> {
        self.stats.record_visit(depth);
        if self.config.exceeds_budget(self.stats.nodes_visited) {
            debug!(limit = self.config.max_nodes, "recursive minimax hit node budget");
            return Err(GameError::SearchLimit {
                limit: self.config.max_nodes,
            });
        }
        Ok(())
    }
}

/// Best move for the current state of `game`, searched recursively.
pub fn minimax_recursive<G: Game>(game: &G) -> Result<MoveOf<G>> {
    RecursiveMinimax::default()
        .search(game, game.current_state())
        .map(|result| result.best_move)
}
