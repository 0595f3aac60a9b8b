//! Error types for the game model and the search engine.
//!
//! Every failure here is a logic or precondition error: operations are
//! deterministic, so nothing is retried.

use thiserror::Error;

use super::player::Player;

/// Why a move label was rejected by the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    /// No cell carries this label.
    UnknownCell,
    /// The cell already belongs to a player.
    AlreadyClaimed(Player),
    /// The game has already been decided.
    GameFinished,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::UnknownCell => f.write_str("no such cell"),
            MoveRejection::AlreadyClaimed(owner) => write!(f, "cell already claimed by {owner}"),
            MoveRejection::GameFinished => f.write_str("game is over"),
        }
    }
}

/// Errors raised by the board, the game abstractions and the evaluators.
#[derive(Error, Debug)]
pub enum GameError {
    /// Move does not name a currently unclaimed cell.
    #[error("invalid move '{label}': {reason}")]
    InvalidMove { label: char, reason: MoveRejection },

    /// Move text could not be turned into a label.
    #[error("cannot parse move from {0:?}")]
    UnparsableMove(String),

    /// Player name other than "p1" / "p2".
    #[error("unknown player {0:?}")]
    UnknownPlayer(String),

    /// Search was asked for a move in a finished game.
    #[error("game is already over")]
    GameOver,

    /// Region/cell cross-references are inconsistent.
    #[error("malformed board: {0}")]
    MalformedBoard(String),

    /// Side length outside the labelled range.
    #[error("unsupported side length {0} (must be 1..=5)")]
    UnsupportedSideLength(usize),

    /// Search visited more nodes than its configured budget.
    #[error("search aborted after visiting {limit} nodes")]
    SearchLimit { limit: usize },

    /// Strategy name not known to `strategy::by_name`.
    #[error("unknown strategy {0:?}")]
    UnknownStrategy(String),

    /// A match ran past its move cap without finishing.
    #[error("match exceeded {0} moves")]
    MoveCapReached(usize),

    /// A stored game record disagrees with the moves it replays to.
    #[error("inconsistent game record: {0}")]
    InconsistentRecord(String),

    /// Game record encoding or decoding failed.
    #[error("game record codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Result type alias for game operations.
pub type Result<T> = std::result::Result<T, GameError>;
