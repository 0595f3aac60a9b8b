//! Stonehenge board model.
//!
//! - `layout`: immutable geometry (cell arena, rows and both diagonal families)
//! - `region`: cell/region identifiers and ley-line definitions
//! - `board`: per-state ownership and capture tags

#[allow(clippy::module_inception)]
mod board;
pub mod layout;
pub mod region;

pub use board::Board;
pub use layout::{Layout, MAX_SIDE_LENGTH};
pub use region::{CellId, Region, RegionId, RegionKind};
