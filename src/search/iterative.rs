//! Iterative exhaustive minimax over an explicit tree.
//!
//! Recursion is replaced by a LIFO stack of tagged frames:
//!
//! 1. `Expand(n)`: a finished state is settled at once with the terminal
//!    score. Otherwise one child is allocated per legal move, then
//!    `Aggregate(n)` is pushed followed by `Expand(child)` for every child.
//! 2. `Aggregate(n)`: all children are settled by now (they sit above it
//!    on the stack), so `n` settles to `max(-child.score)`.
//!
//! The stack drains once the root's `Aggregate` frame has run. Results
//! match `RecursiveMinimax` exactly, including the tie-break.

use std::time::Instant;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{GameError, Result};
use crate::rules::{Game, GameState};

use super::config::SearchConfig;
use super::node::{NodeId, SearchNode};
use super::score::{select_best, terminal_score, MoveOf, Score, SearchResult, LOSE};
use super::stats::SearchStats;
use super::tree::GameTree;

/// A unit of pending work on the explicit stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Frame {
    /// First visit: settle a leaf or create children.
    Expand(NodeId),
    /// Second visit: fold the children's scores into the node.
    Aggregate(NodeId),
}

/// Iterative minimax evaluator.
#[derive(Clone, Debug, Default)]
pub struct IterativeMinimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl IterativeMinimax {
    /// Create an evaluator with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Statistics of the most recent call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Score every move from `state` and pick the best one.
    ///
    /// Fails with `GameError::GameOver` if `state` is already finished.
    pub fn search<G: Game>(&mut self, game: &G, state: &G::State) -> Result<SearchResult<MoveOf<G>>> {
        if game.is_over(state) {
            return Err(GameError::GameOver);
        }
        let tree = self.solve(game, state)?;

        let move_scores: Vec<_> = tree
            .children(tree.root())
            .filter_map(|child| Some((child.mv.clone()?, -child.score?)))
            .collect();

        let (best_move, score) = select_best(&move_scores).ok_or(GameError::GameOver)?;
        debug!(
            ?best_move,
            score,
            nodes = self.stats.nodes_visited,
            tree_nodes = tree.len(),
            branching = tree.stats().branching_factor(),
            time_us = self.stats.time_us,
            nps = self.stats.nodes_per_second(),
            "iterative minimax finished"
        );

        Ok(SearchResult {
            best_move,
            score,
            move_scores,
            stats: self.stats.clone(),
        })
    }

    /// Exact value of `state` for its player to move.
    pub fn evaluate<G: Game>(&mut self, game: &G, state: &G::State) -> Result<Score> {
        let tree = self.solve(game, state)?;
        Ok(tree.root_node().score.unwrap_or(LOSE))
    }

    /// Build and settle the full game tree below `state`.
    pub fn solve<G: Game>(&mut self, game: &G, state: &G::State) -> Result<GameTree<G::State>> {
        let start = Instant::now();
        self.stats.reset();

        let mut tree = GameTree::new(state.clone());
        let mut stack = vec![Frame::Expand(tree.root())];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Expand(id) => {
                    self.visit(tree.get(id).depth)?;
                    let node = tree.get(id);

                    if game.is_over(&node.state) {
                        let score = terminal_score(game, &node.state);
                        tree.get_mut(id).score = Some(score);
                        self.stats.terminal_nodes += 1;
                        continue;
                    }

                    let depth = node.depth + 1;
                    let expansions = node
                        .state
                        .possible_moves()
                        .into_iter()
                        .map(|mv| node.state.make_move(&mv).map(|child| (mv, child)))
                        .collect::<Result<Vec<_>>>()?;

                    let children: SmallVec<[NodeId; 8]> = expansions
                        .into_iter()
                        .map(|(mv, child)| tree.alloc(SearchNode::new(child, mv, id, depth)))
                        .collect();
                    trace!(node = %id, children = children.len(), "expanded");

                    stack.push(Frame::Aggregate(id));
                    stack.extend(children.iter().map(|&child| Frame::Expand(child)));
                    tree.get_mut(id).children = children;
                }
                Frame::Aggregate(id) => {
                    // Every child's Expand frame sat above this one, so all
                    // children are settled by the time it pops.
                    debug_assert!(tree.children(id).all(SearchNode::is_settled));
                    let score = tree
                        .children(id)
                        .filter_map(|child| child.score)
                        .map(|s| -s)
                        .max()
                        .unwrap_or(LOSE);
                    tree.get_mut(id).score = Some(score);
                }
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(tree)
    }

    /// Count a node visit, enforcing the node budget.
    fn visit(&mut self, depth: u16) -> Result<()> {
        self.stats.record_visit(depth);
        if self.config.exceeds_budget(self.stats.nodes_visited) {
            debug!(limit = self.config.max_nodes, "iterative minimax hit node budget");
            return Err(GameError::SearchLimit {
                limit: self.config.max_nodes,
            });
        }
        Ok(())
    }
}

/// Best move for the current state of `game`, searched iteratively.
pub fn minimax_iterative<G: Game>(game: &G) -> Result<MoveOf<G>> {
    IterativeMinimax::default()
        .search(game, game.current_state())
        .map(|result| result.best_move)
}
