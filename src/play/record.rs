//! Game records: the full move list of a finished match.
//!
//! A record holds enough to rebuild the game from scratch. It serializes
//! with serde; `to_bytes` / `from_bytes` use bincode for compact storage.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, MoveRecord, Player, Result};
use crate::games::stonehenge::StonehengeGame;
use crate::rules::{Game, GameState};

/// A complete match, move by move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Side length of the board.
    pub side_length: usize,

    /// Who moved first.
    pub first_player: Player,

    /// Every move in play order.
    pub moves: Vec<MoveRecord>,

    /// Winner, if the match reached a finished state.
    pub winner: Option<Player>,
}

impl GameRecord {
    /// Create an empty record for a game about to start.
    pub fn new(side_length: usize, first_player: Player) -> Self {
        Self {
            side_length,
            first_player,
            moves: Vec::new(),
            winner: None,
        }
    }

    /// Append a move.
    pub fn push(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Set the final outcome.
    pub fn set_winner(&mut self, winner: Option<Player>) {
        self.winner = winner;
    }

    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no move was played.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves made by one player.
    pub fn player_moves(&self, player: Player) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter().filter(move |m| m.player == player)
    }

    /// Total regions captured by one player over the match.
    pub fn captured_by(&self, player: Player) -> u32 {
        self.player_moves(player).map(|m| u32::from(m.captured)).sum()
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a record produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Rebuild the game by playing every recorded move.
    ///
    /// Fails if a move is illegal, was made out of turn, or if the
    /// recorded winner does not match the replayed one.
    pub fn replay(&self) -> Result<StonehengeGame> {
        let p1_starts = self.first_player == Player::One;
        let mut game = StonehengeGame::new(self.side_length, p1_starts)?;

        for (ply, record) in self.moves.iter().enumerate() {
            let mover = game.current_state().current_player();
            if record.player != mover {
                return Err(GameError::InconsistentRecord(format!(
                    "ply {ply}: {} moved but it was {mover}'s turn",
                    record.player
                )));
            }
            game.play(record.label)?;
        }

        let winner = game.winner(game.current_state());
        if winner != self.winner {
            return Err(GameError::InconsistentRecord(format!(
                "recorded winner {:?}, replay gives {:?}",
                self.winner, winner
            )));
        }
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Label;

    fn side_one_record() -> GameRecord {
        let mut record = GameRecord::new(1, Player::One);
        record.push(MoveRecord::new(Player::One, Label('C'), 0, 3));
        record.set_winner(Some(Player::One));
        record
    }

    #[test]
    fn test_record_accessors() {
        let record = side_one_record();

        assert_eq!(record.len(), 1);
        assert!(!record.is_empty());
        assert_eq!(record.player_moves(Player::Two).count(), 0);
        assert_eq!(record.captured_by(Player::One), 3);
    }

    #[test]
    fn test_bytes_round_trip() {
        let record = side_one_record();
        let bytes = record.to_bytes().unwrap();
        assert_eq!(GameRecord::from_bytes(&bytes).unwrap(), record);
    }

    #[test]
    fn test_garbage_bytes() {
        let err = GameRecord::from_bytes(&[0xff, 0x01]).unwrap_err();
        assert!(matches!(err, GameError::Codec(_)));
    }

    #[test]
    fn test_replay() {
        let game = side_one_record().replay().unwrap();
        assert!(game.is_over(game.current_state()));
        assert_eq!(game.current_state().score(Player::One), 3);
    }

    #[test]
    fn test_replay_out_of_turn() {
        let mut record = GameRecord::new(2, Player::One);
        record.push(MoveRecord::new(Player::Two, Label('A'), 0, 0));

        let err = record.replay().unwrap_err();
        assert!(matches!(err, GameError::InconsistentRecord(_)));
    }

    #[test]
    fn test_replay_wrong_winner() {
        let mut record = side_one_record();
        record.set_winner(Some(Player::Two));
        assert!(matches!(record.replay(), Err(GameError::InconsistentRecord(_))));
    }

    #[test]
    fn test_replay_illegal_move() {
        let mut record = GameRecord::new(2, Player::One);
        record.push(MoveRecord::new(Player::One, Label('Z'), 0, 0));
        assert!(matches!(record.replay(), Err(GameError::InvalidMove { .. })));
    }
}
