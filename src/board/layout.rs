//! Board geometry: which cells exist and which ley-lines they sit on.
//!
//! A layout is immutable once built and shared by every state of a game.
//! For side length N it has N+1 rows (row i < N holds i+2 cells, the last
//! row holds N), N+1 down-left diagonals and N+1 down-right diagonals:
//!
//! ```text
//! N = 2        A B          rows:  AB  CDE  FG
//!             C D E         left:  AC  BDF  EG
//!              F G          right: BE  ADG  CF
//! ```
//!
//! Construction validates that every cell lies on exactly one line of each
//! kind and that no line references a cell outside the arena.

use rustc_hash::FxHashMap;

use super::region::{CellId, Region, RegionId, RegionKind};
use crate::core::{GameError, Label, Result};

/// Largest side length whose cells can still be labelled `A..=Z`.
pub const MAX_SIDE_LENGTH: usize = 5;

/// Immutable cell arena plus the three region views over it.
#[derive(Clone, Debug)]
pub struct Layout {
    side_length: usize,
    labels: Vec<Label>,
    regions: Vec<Region>,
    /// Row, left and right region of every cell, indexed by `RegionKind::index`.
    cell_regions: Vec<[RegionId; 3]>,
    label_index: FxHashMap<Label, CellId>,
}

impl Layout {
    /// Build the standard hexagram layout for a side length.
    pub fn new(side_length: usize) -> Result<Self> {
        if !(1..=MAX_SIDE_LENGTH).contains(&side_length) {
            return Err(GameError::UnsupportedSideLength(side_length));
        }
        let n = side_length;

        let mut next = 0u8;
        let rows: Vec<Vec<CellId>> = (0..=n)
            .map(|i| {
                let width = if i < n { i + 2 } else { n };
                (0..width)
                    .map(|_| {
                        let id = CellId::new(next);
                        next += 1;
                        id
                    })
                    .collect()
            })
            .collect();

        let mut left = vec![Vec::new(); n + 1];
        let mut right = vec![Vec::new(); n + 1];
        for i in 0..=n {
            for row in &rows[..n] {
                if i < row.len() {
                    left[i].push(row[i]);
                    right[i].push(row[row.len() - 1 - i]);
                }
            }
        }
        // The bottom row closes the diagonals from the other side.
        for (k, &cell) in rows[n].iter().enumerate() {
            left[k + 1].push(cell);
            right[n - k].push(cell);
        }

        Self::from_lines(rows, left, right)
    }

    /// Build a layout from explicit lines.
    ///
    /// Rows define the arena: together they must hold the cells
    /// `0..count` exactly once. Each diagonal family must cover the same
    /// cells exactly once as well.
    pub fn from_lines(
        rows: Vec<Vec<CellId>>,
        left: Vec<Vec<CellId>>,
        right: Vec<Vec<CellId>>,
    ) -> Result<Self> {
        if rows.is_empty() {
            return Err(GameError::MalformedBoard("board has no rows".into()));
        }
        let cell_count: usize = rows.iter().map(Vec::len).sum();
        let labels = (0..cell_count)
            .map(|i| {
                Label::from_index(i).ok_or_else(|| {
                    GameError::MalformedBoard(format!("{cell_count} cells cannot be labelled A..Z"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut regions = Vec::new();
        let mut slots: Vec<[Option<RegionId>; 3]> = vec![[None; 3]; cell_count];

        for (kind, lines) in RegionKind::ALL.into_iter().zip([rows, left, right]) {
            for (ordinal, cells) in lines.into_iter().enumerate() {
                if cells.is_empty() {
                    return Err(GameError::MalformedBoard(format!(
                        "{kind:?} {ordinal} has no cells"
                    )));
                }
                let id = RegionId::new(regions.len() as u8);
                for &cell in &cells {
                    let slot = slots
                        .get_mut(cell.index())
                        .map(|s| &mut s[kind.index()])
                        .ok_or_else(|| {
                            GameError::MalformedBoard(format!(
                                "{kind:?} {ordinal} references missing cell {}",
                                cell.0
                            ))
                        })?;
                    if slot.is_some() {
                        return Err(GameError::MalformedBoard(format!(
                            "cell {} lies on two lines of kind {kind:?}",
                            labels[cell.index()]
                        )));
                    }
                    *slot = Some(id);
                }
                regions.push(Region::new(kind, ordinal as u8, cells));
            }
        }

        let cell_regions = slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| match slot {
                [Some(r), Some(l), Some(d)] => Ok([r, l, d]),
                _ => Err(GameError::MalformedBoard(format!(
                    "cell {} is missing from a line family",
                    labels[i]
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        let label_index = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| (label, CellId::new(i as u8)))
            .collect();

        let side_length = regions
            .iter()
            .filter(|r| r.kind == RegionKind::Row)
            .count()
            - 1;

        Ok(Self {
            side_length,
            labels,
            regions,
            cell_regions,
            label_index,
        })
    }

    /// Side length (number of rows minus one).
    #[must_use]
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.labels.len()
    }

    /// All labels in row-major order.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of ley-lines across all three families.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Get a region by ID.
    #[inline]
    #[must_use]
    pub fn region(&self, id: RegionId) -> &Region {
        &self.regions[id.index()]
    }

    /// Iterate over (RegionId, &Region) pairs.
    pub fn regions(&self) -> impl Iterator<Item = (RegionId, &Region)> {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, r)| (RegionId::new(i as u8), r))
    }

    /// Regions of one kind, in ordinal order.
    pub fn regions_of(&self, kind: RegionKind) -> impl Iterator<Item = (RegionId, &Region)> {
        self.regions().filter(move |(_, r)| r.kind == kind)
    }

    /// The row, left and right region containing a cell.
    #[inline]
    #[must_use]
    pub fn regions_of_cell(&self, cell: CellId) -> [RegionId; 3] {
        self.cell_regions[cell.index()]
    }

    /// Label of a cell.
    #[inline]
    #[must_use]
    pub fn label(&self, cell: CellId) -> Label {
        self.labels[cell.index()]
    }

    /// Look up the cell carrying a label.
    #[must_use]
    pub fn cell(&self, label: Label) -> Option<CellId> {
        self.label_index.get(&label).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_labels(layout: &Layout, kind: RegionKind) -> Vec<String> {
        layout
            .regions_of(kind)
            .map(|(_, r)| r.cells.iter().map(|&c| layout.label(c).as_char()).collect())
            .collect()
    }

    #[test]
    fn test_side_one_geometry() {
        let layout = Layout::new(1).unwrap();

        assert_eq!(layout.cell_count(), 3);
        assert_eq!(layout.region_count(), 6);
        assert_eq!(line_labels(&layout, RegionKind::Row), vec!["AB", "C"]);
        assert_eq!(line_labels(&layout, RegionKind::LeftDiagonal), vec!["A", "BC"]);
        assert_eq!(line_labels(&layout, RegionKind::RightDiagonal), vec!["B", "AC"]);
    }

    #[test]
    fn test_side_two_geometry() {
        let layout = Layout::new(2).unwrap();

        assert_eq!(layout.cell_count(), 7);
        assert_eq!(line_labels(&layout, RegionKind::Row), vec!["AB", "CDE", "FG"]);
        assert_eq!(line_labels(&layout, RegionKind::LeftDiagonal), vec!["AC", "BDF", "EG"]);
        assert_eq!(line_labels(&layout, RegionKind::RightDiagonal), vec!["BE", "ADG", "CF"]);
    }

    #[test]
    fn test_side_three_geometry() {
        let layout = Layout::new(3).unwrap();

        assert_eq!(layout.cell_count(), 12);
        assert_eq!(line_labels(&layout, RegionKind::Row), vec!["AB", "CDE", "FGHI", "JKL"]);
        assert_eq!(
            line_labels(&layout, RegionKind::LeftDiagonal),
            vec!["ACF", "BDGJ", "EHK", "IL"]
        );
        assert_eq!(
            line_labels(&layout, RegionKind::RightDiagonal),
            vec!["BEI", "ADHL", "CGK", "FJ"]
        );
    }

    #[test]
    fn test_counts_for_all_sizes() {
        for n in 1..=MAX_SIDE_LENGTH {
            let layout = Layout::new(n).unwrap();
            assert_eq!(layout.side_length(), n);
            assert_eq!(layout.region_count(), 3 * (n + 1));
            assert_eq!(layout.cell_count(), n * (n + 3) / 2 + n);
            for kind in RegionKind::ALL {
                assert_eq!(layout.regions_of(kind).count(), n + 1);
            }
        }
    }

    #[test]
    fn test_every_cell_on_one_line_per_kind() {
        let layout = Layout::new(4).unwrap();
        for i in 0..layout.cell_count() {
            let cell = CellId::new(i as u8);
            let [row, left, right] = layout.regions_of_cell(cell);
            assert_eq!(layout.region(row).kind, RegionKind::Row);
            assert_eq!(layout.region(left).kind, RegionKind::LeftDiagonal);
            assert_eq!(layout.region(right).kind, RegionKind::RightDiagonal);
            for id in [row, left, right] {
                assert!(layout.region(id).cells.contains(&cell));
            }
        }
    }

    #[test]
    fn test_unsupported_side_length() {
        assert!(matches!(Layout::new(0), Err(GameError::UnsupportedSideLength(0))));
        assert!(matches!(Layout::new(6), Err(GameError::UnsupportedSideLength(6))));
    }

    #[test]
    fn test_label_lookup() {
        let layout = Layout::new(2).unwrap();
        assert_eq!(layout.cell(Label('A')), Some(CellId(0)));
        assert_eq!(layout.cell(Label('G')), Some(CellId(6)));
        assert_eq!(layout.cell(Label('H')), None);
        assert_eq!(layout.label(CellId(3)), Label('D'));
    }

    #[test]
    fn test_rejects_duplicate_cell() {
        let c = CellId::new;
        let err = Layout::from_lines(
            vec![vec![c(0), c(1)], vec![c(2)]],
            vec![vec![c(0)], vec![c(0), c(2)]],
            vec![vec![c(1)], vec![c(0), c(2)]],
        )
        .unwrap_err();
        assert!(matches!(err, GameError::MalformedBoard(_)));
    }

    #[test]
    fn test_rejects_dangling_cell() {
        let c = CellId::new;
        let err = Layout::from_lines(
            vec![vec![c(0), c(1)], vec![c(2)]],
            vec![vec![c(0)], vec![c(1), c(7)]],
            vec![vec![c(1)], vec![c(0), c(2)]],
        )
        .unwrap_err();
        assert!(matches!(err, GameError::MalformedBoard(_)));
    }

    #[test]
    fn test_rejects_uncovered_cell() {
        let c = CellId::new;
        let err = Layout::from_lines(
            vec![vec![c(0), c(1)], vec![c(2)]],
            vec![vec![c(0)], vec![c(1)]],
            vec![vec![c(1)], vec![c(0), c(2)]],
        )
        .unwrap_err();
        assert!(matches!(err, GameError::MalformedBoard(_)));
    }

    #[test]
    fn test_rejects_empty_line() {
        let c = CellId::new;
        let err = Layout::from_lines(
            vec![vec![c(0), c(1)], vec![c(2)]],
            vec![vec![c(0)], vec![c(1), c(2)], vec![]],
            vec![vec![c(1)], vec![c(0), c(2)]],
        )
        .unwrap_err();
        assert!(matches!(err, GameError::MalformedBoard(_)));
    }
}
