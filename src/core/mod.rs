//! Core engine types: players, move labels, errors, RNG.
//!
//! These building blocks are shared by the board model, the search
//! engine and the strategies.

pub mod error;
pub mod label;
pub mod player;
pub mod rng;

pub use error::{GameError, MoveRejection, Result};
pub use label::{Label, MoveRecord};
pub use player::{Player, PlayerPair};
pub use rng::GameRng;
