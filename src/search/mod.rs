//! Exhaustive adversarial search.
//!
//! ## Overview
//!
//! Two interchangeable minimax evaluators over any `Game`:
//!
//! - **`RecursiveMinimax`**: direct negamax recursion
//! - **`IterativeMinimax`**: the same search driven by an explicit stack of
//!   `Expand`/`Aggregate` frames over an arena-allocated tree
//!
//! Both search every line to a terminal state and agree on every score and
//! on the chosen move. `rough_outcome` is a separate two-ply estimate used
//! by the cheaper rough-outcome strategy.
//!
//! ## Usage
//!
//! ```rust
//! use stonehenge::games::stonehenge::StonehengeGame;
//! use stonehenge::rules::Game;
//! use stonehenge::search::{IterativeMinimax, RecursiveMinimax, SearchConfig};
//!
//! let game = StonehengeGame::new(1, true).unwrap();
//!
//! let recursive = RecursiveMinimax::new(SearchConfig::default())
//!     .search(&game, game.current_state())
//!     .unwrap();
//! let iterative = IterativeMinimax::new(SearchConfig::default())
//!     .search(&game, game.current_state())
//!     .unwrap();
//!
//! assert_eq!(recursive.best_move, iterative.best_move);
//! assert_eq!(recursive.score, iterative.score);
//! ```

pub mod config;
pub mod heuristic;
pub mod iterative;
pub mod node;
pub mod recursive;
pub mod score;
pub mod stats;
pub mod tree;

pub use config::SearchConfig;
pub use heuristic::rough_outcome;
pub use iterative::{minimax_iterative, IterativeMinimax};
pub use node::{NodeId, SearchNode};
pub use recursive::{minimax_recursive, RecursiveMinimax};
pub use score::{select_best, terminal_score, MoveOf, Score, SearchResult, DRAW, LOSE, WIN};
pub use stats::SearchStats;
pub use tree::{GameTree, TreeStats};
