//! Game abstractions for search.
//!
//! Games implement `GameState` and `Game` to define:
//! - Legal moves for each state
//! - How moves produce new states
//! - Terminal and winner tests
//!
//! The search engine calls into these traits but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{Game, GameResult, GameState};
