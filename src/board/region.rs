//! Cell and ley-line identifiers and definitions.
//!
//! Cells live in one arena; regions (ley-lines) hold indices into it, so
//! a claim made through one region is visible through the other two.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index of a cell in the board arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u8);

impl CellId {
    /// Create a new cell ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a region in the board's region list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub u8);

impl RegionId {
    /// Create a new region ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the list index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Region({})", self.0)
    }
}

/// The three directions a ley-line can run in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    /// Horizontal row.
    Row,
    /// Down-left diagonal.
    LeftDiagonal,
    /// Down-right diagonal.
    RightDiagonal,
}

impl RegionKind {
    /// All kinds, in the order regions are stored.
    pub const ALL: [RegionKind; 3] = [
        RegionKind::Row,
        RegionKind::LeftDiagonal,
        RegionKind::RightDiagonal,
    ];

    /// Position of this kind in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            RegionKind::Row => 0,
            RegionKind::LeftDiagonal => 1,
            RegionKind::RightDiagonal => 2,
        }
    }
}

/// A ley-line: an ordered set of cells captured as a unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Direction of this line.
    pub kind: RegionKind,

    /// Position among the lines of the same kind.
    pub ordinal: u8,

    /// Cells on this line. Lines hold at most N+1 cells.
    pub cells: SmallVec<[CellId; 6]>,
}

impl Region {
    /// Create a region from its cells.
    pub fn new(kind: RegionKind, ordinal: u8, cells: impl IntoIterator<Item = CellId>) -> Self {
        Self {
            kind,
            ordinal,
            cells: cells.into_iter().collect(),
        }
    }

    /// Number of cells on the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the line has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `owned` cells out of this line reach the capture threshold.
    ///
    /// The threshold is half the line; a line of odd length needs the
    /// larger half.
    #[inline]
    #[must_use]
    pub fn reaches_capture(&self, owned: usize) -> bool {
        2 * owned >= self.cells.len()
    }
}
