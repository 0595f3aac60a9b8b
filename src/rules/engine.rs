//! Game and game-state traits consumed by the search engine.
//!
//! Games implement these to define their rules:
//! - What moves are legal
//! - How moves produce new states
//! - When the game is over and who won
//!
//! States are immutable snapshots: `make_move` returns a new state and
//! never touches the receiver, so a search can branch freely from any
//! ancestor.

use std::fmt::Debug;

use crate::core::{Player, Result};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Over with no winner.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// A snapshot of a two-player game at one point in time.
///
/// ## Implementation Notes
///
/// - `possible_moves`: Return empty once the game is over
/// - `make_move`: Must reject illegal moves and leave `self` unchanged
/// - Move order from `possible_moves` must be deterministic; evaluators
///   break ties by it
pub trait GameState: Clone {
    /// The move type (for Stonehenge, a cell label).
    type Move: Clone + PartialEq + Debug;

    /// All moves legal in this state, in enumeration order.
    fn possible_moves(&self) -> Vec<Self::Move>;

    /// Apply a move, producing a new independent state.
    fn make_move(&self, mv: &Self::Move) -> Result<Self>;

    /// The player whose turn it is.
    fn current_player(&self) -> Player;

    /// Whether it is p1's turn.
    fn is_p1_turn(&self) -> bool {
        self.current_player() == Player::One
    }
}

/// A game: the current state plus terminal and winner tests.
///
/// Evaluators take the state to examine as an explicit argument and never
/// write `current_state`; only the match driver advances it.
pub trait Game {
    /// The state type of this game.
    type State: GameState;

    /// The state the game is currently in.
    fn current_state(&self) -> &Self::State;

    /// Replace the current state.
    fn set_current_state(&mut self, state: Self::State);

    /// Check if the game is over at `state`.
    fn is_over(&self, state: &Self::State) -> bool;

    /// The winner at `state`, `None` if undecided or drawn.
    fn winner(&self, state: &Self::State) -> Option<Player>;

    /// Turn user text into a move.
    fn str_to_move(&self, text: &str) -> Result<<Self::State as GameState>::Move>;

    // === Convenience Methods ===

    /// Outcome at `state`: `Some(result)` if over, `None` if it continues.
    fn result(&self, state: &Self::State) -> Option<GameResult> {
        if !self.is_over(state) {
            return None;
        }
        Some(match self.winner(state) {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Draw,
        })
    }

    /// Whether `player` has won in the current state.
    fn is_winner(&self, player: Player) -> bool {
        let state = self.current_state();
        self.is_over(state) && self.winner(state) == Some(player)
    }
}
