//! # stonehenge
//!
//! The Stonehenge ley-line capture game with exhaustive game-tree search.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: Every move produces a new state. Boards share
//!    structure through `im-rs`, so branching the search tree is cheap.
//!
//! 2. **Explicit State Threading**: Evaluators take the state to search as
//!    an argument. A game's current state is never mutated by search.
//!
//! 3. **Game-Agnostic Search**: Minimax and the strategies only see the
//!    `Game` / `GameState` traits.
//!
//! ## Modules
//!
//! - `core`: Players, move labels, errors, RNG
//! - `board`: Cell and ley-line geometry, ownership and captures
//! - `rules`: `Game` and `GameState` traits
//! - `games`: Game implementations (Stonehenge)
//! - `search`: Recursive and iterative minimax, rough-outcome estimate
//! - `strategy`: Move-choosing players built on the search
//! - `play`: Match driver and game records

pub mod core;
pub mod board;
pub mod rules;
pub mod games;
pub mod search;
pub mod strategy;
pub mod play;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, Label, MoveRecord, Player, PlayerPair, Result};

pub use crate::board::{Board, CellId, Layout, Region, RegionId, RegionKind};

pub use crate::rules::{Game, GameResult, GameState};

pub use crate::games::stonehenge::{StonehengeBuilder, StonehengeGame, StonehengeState};

pub use crate::search::{
    minimax_iterative, minimax_recursive, rough_outcome,
    IterativeMinimax, RecursiveMinimax, SearchConfig, SearchResult, SearchStats,
    Score, DRAW, LOSE, WIN,
};

pub use crate::strategy::{RandomStrategy, RoughOutcomeStrategy, Strategy};

pub use crate::play::{play_match, GameRecord, MatchConfig};
