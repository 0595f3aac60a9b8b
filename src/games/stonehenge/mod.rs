//! Stonehenge: claim cells, capture ley-lines.
//!
//! - Players alternate claiming one unclaimed cell (named by its letter)
//! - A ley-line goes to the first player owning at least half its cells,
//!   and never changes hands afterwards
//! - The first player to capture at least half of all ley-lines wins
//!
//! Side lengths 1-5 are supported.

mod game;
mod state;

pub use game::{StonehengeBuilder, StonehengeGame};
pub use state::StonehengeState;
