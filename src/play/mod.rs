//! Playing whole matches between strategies.
//!
//! `play_match` drives one game from its initial state to the end and
//! returns a `GameRecord` that can be stored and replayed.

pub mod driver;
pub mod record;

pub use driver::{play_match, MatchConfig};
pub use record::GameRecord;
