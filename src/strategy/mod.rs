//! Move-choosing strategies.
//!
//! A `Strategy` looks at a game's current state and returns the move it
//! wants to play. The exact evaluators implement it directly; the cheaper
//! players live in `policies`.
//!
//! - `RecursiveMinimax`, `IterativeMinimax`: perfect play
//! - `RoughOutcomeStrategy`: one-ply lookahead scored by `rough_outcome`
//! - `RandomStrategy`: uniform over legal moves, seeded

pub mod policies;

use crate::core::{GameError, Result};
use crate::rules::Game;
use crate::search::{IterativeMinimax, MoveOf, RecursiveMinimax, SearchConfig};

pub use policies::{RandomStrategy, RoughOutcomeStrategy};

/// Something that picks a move for the player to move in `game`.
pub trait Strategy<G: Game> {
    /// Short name used in logs and match records.
    fn name(&self) -> &'static str;

    /// Choose a move for the current state.
    ///
    /// Fails with `GameError::GameOver` if there is nothing to play.
    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>>;
}

impl<G: Game> Strategy<G> for RecursiveMinimax {
    fn name(&self) -> &'static str {
        "minimax-recursive"
    }

    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>> {
        self.search(game, game.current_state())
            .map(|result| result.best_move)
    }
}

impl<G: Game> Strategy<G> for IterativeMinimax {
    fn name(&self) -> &'static str {
        "minimax-iterative"
    }

    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>> {
        self.search(game, game.current_state())
            .map(|result| result.best_move)
    }
}

/// Names accepted by `by_name`.
pub const STRATEGY_NAMES: [&str; 4] = [
    "minimax-recursive",
    "minimax-iterative",
    "rough-outcome",
    "random",
];

/// Build a strategy from its `name()`.
///
/// `seed` only matters for `"random"`.
pub fn by_name<G: Game>(name: &str, seed: u64) -> Result<Box<dyn Strategy<G>>> {
    let strategy: Box<dyn Strategy<G>> = match name {
        "minimax-recursive" => Box::new(RecursiveMinimax::new(SearchConfig::default())),
        "minimax-iterative" => Box::new(IterativeMinimax::new(SearchConfig::default())),
        "rough-outcome" => Box::new(RoughOutcomeStrategy),
        "random" => Box::new(RandomStrategy::new(seed)),
        other => return Err(GameError::UnknownStrategy(other.to_string())),
    };
    Ok(strategy)
}
