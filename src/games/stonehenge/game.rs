//! Stonehenge game and its builder.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::state::StonehengeState;
use crate::board::Layout;
use crate::core::{Label, Player, Result};
use crate::rules::{Game, GameState};

/// A Stonehenge game: the current state plus the game-level tests.
#[derive(Clone, Debug)]
pub struct StonehengeGame {
    first_player: Player,
    current_state: StonehengeState,
}

/// Builder for creating a StonehengeGame.
///
/// Serializable so match setups can be stored alongside search configs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StonehengeBuilder {
    side_length: usize,
    p1_starts: bool,
}

impl Default for StonehengeBuilder {
    fn default() -> Self {
        Self {
            side_length: 2,
            p1_starts: true,
        }
    }
}

impl StonehengeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Side length of the grid (1..=5).
    pub fn side_length(mut self, side_length: usize) -> Self {
        self.side_length = side_length;
        self
    }

    /// Whether p1 makes the first move.
    pub fn p1_starts(mut self, p1_starts: bool) -> Self {
        self.p1_starts = p1_starts;
        self
    }

    /// Lay out the board and build the game.
    pub fn build(self) -> Result<StonehengeGame> {
        let layout = Arc::new(Layout::new(self.side_length)?);
        let first_player = Player::from_p1_turn(self.p1_starts);
        Ok(StonehengeGame {
            first_player,
            current_state: StonehengeState::new(layout, first_player),
        })
    }
}

impl StonehengeGame {
    /// Shorthand for `StonehengeBuilder` with both options set.
    pub fn new(side_length: usize, p1_starts: bool) -> Result<Self> {
        StonehengeBuilder::new()
            .side_length(side_length)
            .p1_starts(p1_starts)
            .build()
    }

    /// The player who moved first.
    #[must_use]
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Side length of the grid.
    #[must_use]
    pub fn side_length(&self) -> usize {
        self.current_state.side_length()
    }

    /// A fresh state on this game's layout.
    #[must_use]
    pub fn initial_state(&self) -> StonehengeState {
        StonehengeState::new(
            Arc::clone(self.current_state.board().layout()),
            self.first_player,
        )
    }

    /// Validate and apply a move to the current state.
    pub fn play(&mut self, label: Label) -> Result<()> {
        let next = self.current_state.make_move(&label)?;
        self.current_state = next;
        Ok(())
    }
}

impl Game for StonehengeGame {
    type State = StonehengeState;

    fn current_state(&self) -> &StonehengeState {
        &self.current_state
    }

    fn set_current_state(&mut self, state: StonehengeState) {
        self.current_state = state;
    }

    fn is_over(&self, state: &StonehengeState) -> bool {
        state.is_terminal()
    }

    fn winner(&self, state: &StonehengeState) -> Option<Player> {
        state.winner()
    }

    fn str_to_move(&self, text: &str) -> Result<Label> {
        Label::parse_move(text)
    }
}
