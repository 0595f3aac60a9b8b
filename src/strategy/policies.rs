//! Non-exhaustive strategies.

use tracing::trace;

use crate::core::{GameError, GameRng, Result};
use crate::rules::{Game, GameState};
use crate::search::{rough_outcome, MoveOf, Score};

use super::Strategy;

/// Plays the move whose resulting state looks worst for the opponent.
///
/// Each candidate is scored as `-rough_outcome(child)`; the first move with
/// the highest score wins ties. Only two plies deep, so it misses longer
/// combinations that minimax would find.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoughOutcomeStrategy;

impl RoughOutcomeStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl<G: Game> Strategy<G> for RoughOutcomeStrategy {
    fn name(&self) -> &'static str {
        "rough-outcome"
    }

    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>> {
        let state = game.current_state();
        let mut best: Option<(MoveOf<G>, Score)> = None;

        for mv in state.possible_moves() {
            let child = state.make_move(&mv)?;
            let score = -rough_outcome(game, &child)?;
            trace!(?mv, score, "rough outcome");
            if best.as_ref().map_or(true, |&(_, b)| score > b) {
                best = Some((mv, score));
            }
        }

        best.map(|(mv, _)| mv).ok_or(GameError::GameOver)
    }
}

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a random player with its own seeded stream.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a random player drawing from an existing RNG.
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl<G: Game> Strategy<G> for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>> {
        let moves = game.current_state().possible_moves();
        self.rng.choose(&moves).cloned().ok_or(GameError::GameOver)
    }
}
