//! Mutable board contents: cell ownership and ley-line capture status.
//!
//! Ownership and capture tags live in `im` persistent vectors, so cloning a
//! board for a new state is O(1) and later writes never show through to
//! the board it was cloned from. The geometry is shared behind an `Arc`.

use std::sync::Arc;

use im::Vector;
use smallvec::SmallVec;

use super::layout::Layout;
use super::region::{CellId, RegionId, RegionKind};
use crate::core::{Label, Player};

/// Cell ownership and capture status over a shared layout.
#[derive(Clone, Debug)]
pub struct Board {
    layout: Arc<Layout>,

    /// Owner of each cell, `None` while unclaimed.
    owners: Vector<Option<Player>>,

    /// Capturer of each region, `None` while uncaptured. Never reset.
    captures: Vector<Option<Player>>,
}

impl Board {
    /// Create an empty board over a layout.
    #[must_use]
    pub fn new(layout: Arc<Layout>) -> Self {
        let owners = std::iter::repeat(None).take(layout.cell_count()).collect();
        let captures = std::iter::repeat(None).take(layout.region_count()).collect();
        Self {
            layout,
            owners,
            captures,
        }
    }

    /// The board geometry.
    #[must_use]
    pub fn layout(&self) -> &Arc<Layout> {
        &self.layout
    }

    /// Owner of a cell.
    #[inline]
    #[must_use]
    pub fn owner(&self, cell: CellId) -> Option<Player> {
        self.owners[cell.index()]
    }

    /// Owner of the cell carrying a label, `None` if unclaimed or unknown.
    #[must_use]
    pub fn owner_of(&self, label: Label) -> Option<Player> {
        self.layout.cell(label).and_then(|cell| self.owner(cell))
    }

    /// Capture status of a region.
    #[inline]
    #[must_use]
    pub fn capture(&self, region: RegionId) -> Option<Player> {
        self.captures[region.index()]
    }

    /// Capture status of every region of one kind, in ordinal order.
    pub fn captures_of(&self, kind: RegionKind) -> impl Iterator<Item = Option<Player>> + '_ {
        self.layout
            .regions_of(kind)
            .map(move |(id, _)| self.capture(id))
    }

    /// Unclaimed cells in row-major order.
    pub fn unclaimed(&self) -> impl Iterator<Item = CellId> + '_ {
        self.owners
            .iter()
            .enumerate()
            .filter(|(_, owner)| owner.is_none())
            .map(|(i, _)| CellId::new(i as u8))
    }

    /// Number of regions captured by a player.
    #[must_use]
    pub fn captured_count(&self, player: Player) -> usize {
        self.captures.iter().filter(|&&c| c == Some(player)).count()
    }

    /// Number of regions nobody has captured yet.
    #[must_use]
    pub fn uncaptured_count(&self) -> usize {
        self.captures.iter().filter(|c| c.is_none()).count()
    }

    /// Cells of a region owned by a player.
    #[must_use]
    pub fn owned_in(&self, region: RegionId, player: Player) -> usize {
        self.layout
            .region(region)
            .cells
            .iter()
            .filter(|&&cell| self.owner(cell) == Some(player))
            .count()
    }

    /// Claim a cell for a player and capture the lines it completes.
    ///
    /// Only the three lines through the cell are examined, and only those
    /// still uncaptured can change hands. Returns the newly captured lines.
    /// The caller is responsible for checking the cell was unclaimed.
    pub(crate) fn claim(&mut self, cell: CellId, player: Player) -> SmallVec<[RegionId; 3]> {
        self.owners.set(cell.index(), Some(player));

        let mut captured = SmallVec::new();
        for region in self.layout.regions_of_cell(cell) {
            if self.capture(region).is_some() {
                continue;
            }
            let owned = self.owned_in(region, player);
            if self.layout.region(region).reaches_capture(owned) {
                self.captures.set(region.index(), Some(player));
                captured.push(region);
            }
        }
        captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(side_length: usize) -> Board {
        Board::new(Arc::new(Layout::new(side_length).unwrap()))
    }

    fn cell(board: &Board, c: char) -> CellId {
        board.layout().cell(Label(c)).unwrap()
    }

    #[test]
    fn test_empty_board() {
        let b = board(2);
        assert_eq!(b.unclaimed().count(), 7);
        assert_eq!(b.uncaptured_count(), 9);
        assert_eq!(b.captured_count(Player::One), 0);
    }

    #[test]
    fn test_claim_captures_short_lines() {
        let mut b = board(2);
        let a = cell(&b, 'A');

        let captured = b.claim(a, Player::One);

        // AB and AC are pairs, ADG needs two of three.
        assert_eq!(captured.len(), 2);
        assert_eq!(b.owner(a), Some(Player::One));
        assert_eq!(b.captured_count(Player::One), 2);
        assert_eq!(b.uncaptured_count(), 7);
    }

    #[test]
    fn test_capture_is_first_come() {
        let mut b = board(2);
        b.claim(cell(&b, 'A'), Player::One);

        // B completes nothing new on AB for p2: the row is already p1's.
        let captured = b.claim(cell(&b, 'B'), Player::Two);
        let row0 = b.layout().regions_of_cell(cell(&b, 'B'))[0];

        assert_eq!(b.capture(row0), Some(Player::One));
        assert!(!captured.contains(&row0));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = board(1);
        let mut copy = original.clone();
        copy.claim(cell(&copy, 'C'), Player::Two);

        assert_eq!(original.unclaimed().count(), 3);
        assert_eq!(original.uncaptured_count(), 6);
        assert_eq!(copy.unclaimed().count(), 2);
    }

    #[test]
    fn test_owner_of_label() {
        let mut b = board(1);
        b.claim(cell(&b, 'B'), Player::Two);

        assert_eq!(b.owner_of(Label('B')), Some(Player::Two));
        assert_eq!(b.owner_of(Label('A')), None);
        assert_eq!(b.owner_of(Label('Z')), None);
    }

    #[test]
    fn test_captures_of_kind() {
        let mut b = board(1);
        b.claim(cell(&b, 'A'), Player::One);

        let rows: Vec<_> = b.captures_of(RegionKind::Row).collect();
        let left: Vec<_> = b.captures_of(RegionKind::LeftDiagonal).collect();
        let right: Vec<_> = b.captures_of(RegionKind::RightDiagonal).collect();

        assert_eq!(rows, vec![Some(Player::One), None]);
        assert_eq!(left, vec![Some(Player::One), None]);
        assert_eq!(right, vec![None, Some(Player::One)]);
    }
}
