//! Match driver: two strategies play one game to the end.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameError, MoveRecord, Result};
use crate::games::stonehenge::StonehengeGame;
use crate::rules::{Game, GameState};
use crate::strategy::Strategy;

use super::record::GameRecord;

/// Configuration for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Maximum moves before the match is abandoned.
    /// A Stonehenge game always ends before its cells run out, so this
    /// only trips on a broken strategy or game.
    pub max_moves: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_moves: 64 }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum moves per match.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }
}

/// Play `game` from its initial state until it is over.
///
/// `strategies[0]` moves for p1 and `strategies[1]` for p2, whoever
/// starts. Every chosen move is validated by the state before it is
/// applied; an illegal choice aborts the match with the rejection.
/// On return `game` holds the final state.
pub fn play_match(
    game: &mut StonehengeGame,
    mut strategies: [&mut dyn Strategy<StonehengeGame>; 2],
    config: &MatchConfig,
) -> Result<GameRecord> {
    let state = game.initial_state();
    game.set_current_state(state);
    let mut record = GameRecord::new(game.side_length(), game.first_player());

    while !game.is_over(game.current_state()) {
        let ply = record.len();
        if ply >= config.max_moves {
            return Err(GameError::MoveCapReached(config.max_moves));
        }

        let player = game.current_state().current_player();
        let strategy = &mut strategies[player.index()];
        let label = strategy.choose_move(game)?;

        let (next, captured) = game.current_state().apply(label)?;
        debug!(
            ply,
            %player,
            %label,
            captured = captured.len(),
            strategy = strategy.name(),
            "move played"
        );
        game.set_current_state(next);
        record.push(MoveRecord::new(player, label, ply as u32, captured.len() as u8));
    }

    let winner = game.winner(game.current_state());
    info!(
        moves = record.len(),
        winner = ?winner,
        p1 = strategies[0].name(),
        p2 = strategies[1].name(),
        "match finished"
    );
    record.set_winner(winner);
    Ok(record)
}
