//! Move representation: a single cell label.
//!
//! A move in Stonehenge names the cell being claimed. Labels are capital
//! letters assigned row-major from `A` when the board is laid out.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::player::Player;

/// A cell label, which doubles as the move that claims the cell.
///
/// ```
/// use stonehenge::core::Label;
///
/// let label: Label = " c ".parse().unwrap();
/// assert_eq!(label, Label::new('C'));
/// assert_eq!(label.to_string(), "C");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Label(pub char);

impl Label {
    /// Create a label from a character.
    #[must_use]
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Label of the cell at a row-major arena index (`0 -> 'A'`).
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|&i| i < 26)
            .map(|i| Self(char::from(b'A' + i)))
    }

    /// Get the underlying character.
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Parse user text into a label.
    ///
    /// Surrounding whitespace is ignored and lowercase is accepted.
    /// Anything other than exactly one printable character is rejected.
    pub fn parse_move(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Ok(Self(c.to_ascii_uppercase())),
            _ => Err(GameError::UnparsableMove(text.to_string())),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Label {
    type Err = GameError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse_move(s)
    }
}

impl From<char> for Label {
    fn from(c: char) -> Self {
        Self(c)
    }
}

/// A played move with metadata for match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made the move.
    pub player: Player,

    /// The claimed cell.
    pub label: Label,

    /// Ply number (0-based).
    pub ply: u32,

    /// Regions the move captured.
    pub captured: u8,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, label: Label, ply: u32, captured: u8) -> Self {
        Self {
            player,
            label,
            ply,
            captured,
        }
    }
}
