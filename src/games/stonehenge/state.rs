//! Stonehenge game state.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::debug;

use crate::board::{Board, Layout, RegionId};
use crate::core::{GameError, Label, MoveRejection, Player, PlayerPair, Result};
use crate::rules::GameState;

/// An immutable snapshot of a Stonehenge game.
///
/// Holds the board, the number of ley-lines each player has captured and
/// the player to move. Moves produce new snapshots; the board inside is a
/// persistent structure, so the copy is cheap and fully independent.
#[derive(Clone, Debug)]
pub struct StonehengeState {
    board: Board,
    scores: PlayerPair<u8>,
    to_move: Player,
}

impl StonehengeState {
    /// Fresh state on an empty board.
    #[must_use]
    pub fn new(layout: Arc<Layout>, to_move: Player) -> Self {
        Self {
            board: Board::new(layout),
            scores: PlayerPair::default(),
            to_move,
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the grid.
    #[must_use]
    pub fn side_length(&self) -> usize {
        self.board.layout().side_length()
    }

    /// Captured ley-lines per player.
    #[must_use]
    pub fn scores(&self) -> PlayerPair<u8> {
        self.scores
    }

    /// Captured ley-lines of one player.
    #[must_use]
    pub fn score(&self, player: Player) -> u8 {
        self.scores[player]
    }

    /// Whether `player` holds at least half of all ley-lines.
    ///
    /// With an odd line count half is fractional, so the integer score
    /// must strictly exceed it.
    #[must_use]
    pub fn has_winning_score(&self, player: Player) -> bool {
        2 * usize::from(self.scores[player]) >= self.board.layout().region_count()
    }

    /// The game ends as soon as either player reaches a winning score.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        Player::ALL.iter().any(|&p| self.has_winning_score(p))
    }

    /// Winner of a finished game.
    ///
    /// Only the mover can capture, and the turn passes after every move,
    /// so the winner is whoever is not on move.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.is_terminal().then(|| self.to_move.opponent())
    }

    /// Apply a move and report which ley-lines it captured.
    pub fn apply(&self, label: Label) -> Result<(Self, SmallVec<[RegionId; 3]>)> {
        let reject = |reason| {
            debug!(%label, %reason, "move rejected");
            GameError::InvalidMove {
                label: label.as_char(),
                reason,
            }
        };

        if self.is_terminal() {
            return Err(reject(MoveRejection::GameFinished));
        }
        let cell = self
            .board
            .layout()
            .cell(label)
            .ok_or_else(|| reject(MoveRejection::UnknownCell))?;
        if let Some(owner) = self.board.owner(cell) {
            return Err(reject(MoveRejection::AlreadyClaimed(owner)));
        }

        let mover = self.to_move;
        let mut next = self.clone();
        let captured = next.board.claim(cell, mover);
        next.scores[mover] += captured.len() as u8;
        next.to_move = mover.opponent();
        Ok((next, captured))
    }
}

impl GameState for StonehengeState {
    type Move = Label;

    fn possible_moves(&self) -> Vec<Label> {
        if self.is_terminal() {
            return Vec::new();
        }
        let layout = self.board.layout();
        self.board.unclaimed().map(|cell| layout.label(cell)).collect()
    }

    fn make_move(&self, mv: &Label) -> Result<Self> {
        self.apply(*mv).map(|(next, _)| next)
    }

    fn current_player(&self) -> Player {
        self.to_move
    }
}
