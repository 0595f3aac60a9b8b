//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Stonehenge is strictly two-player, so players are an enum rather than
//! an open-ended index. `Player::One` is "p1" and `Player::Two` is "p2".
//!
//! ## PlayerPair
//!
//! Fixed-size per-player storage indexed by `Player`, used for score pairs.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::GameError;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// The player named "p1".
    One,
    /// The player named "p2".
    Two,
}

impl Player {
    /// Both players, in order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The player who moves when `is_p1_turn` holds.
    #[must_use]
    pub const fn from_p1_turn(is_p1_turn: bool) -> Self {
        if is_p1_turn {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Short name used by the game interface ("p1" / "p2").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::One => "p1",
            Player::Two => "p2",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Player {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "p1" | "1" => Ok(Player::One),
            "p2" | "2" => Ok(Player::Two),
            other => Err(GameError::UnknownPlayer(other.to_string())),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use stonehenge::core::{Player, PlayerPair};
///
/// let mut scores: PlayerPair<u8> = PlayerPair::default();
/// scores[Player::Two] += 2;
/// assert_eq!(scores[Player::One], 0);
/// assert_eq!(scores[Player::Two], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from p1's and p2's values.
    pub const fn new(p1: T, p2: T) -> Self {
        Self { data: [p1, p2] }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_basics() {
        assert_eq!(Player::One.index(), 0);
        assert_eq!(Player::Two.index(), 1);
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(format!("{}", Player::One), "p1");
    }

    #[test]
    fn test_from_p1_turn() {
        assert_eq!(Player::from_p1_turn(true), Player::One);
        assert_eq!(Player::from_p1_turn(false), Player::Two);
    }

    #[test]
    fn test_player_parse() {
        assert_eq!("p1".parse::<Player>().unwrap(), Player::One);
        assert_eq!(" p2 ".parse::<Player>().unwrap(), Player::Two);
        assert!("p3".parse::<Player>().is_err());
    }

    #[test]
    fn test_player_pair_mutation() {
        let mut pair = PlayerPair::new(1u8, 2u8);
        pair[Player::One] += 10;

        assert_eq!(pair[Player::One], 11);
        assert_eq!(pair[Player::Two], 2);

        let collected: Vec<_> = pair.iter().collect();
        assert_eq!(collected, vec![(Player::One, &11), (Player::Two, &2)]);
    }

    #[test]
    fn test_player_pair_serialization() {
        let pair = PlayerPair::new(3u8, 4u8);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
