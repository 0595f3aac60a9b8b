//! Search tree node structures.
//!
//! Nodes live in an arena and refer to each other by `NodeId` index, so
//! the tree has no owning pointers and no cycles to reason about.

use smallvec::SmallVec;

use crate::rules::GameState;

use super::score::Score;

/// Index into the GameTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node of the explicit minimax tree.
#[derive(Clone, Debug)]
pub struct SearchNode<S: GameState> {
    /// The game state at this node.
    pub state: S,

    /// Move that led here from the parent (`None` for the root).
    pub mv: Option<S::Move>,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// One child per legal move, in enumeration order.
    /// Empty until the node is expanded.
    pub children: SmallVec<[NodeId; 8]>,

    /// Settled negamax value, `None` until computed.
    pub score: Option<Score>,
}

impl<S: GameState> SearchNode<S> {
    /// Create a child node reached by `mv`.
    pub fn new(state: S, mv: S::Move, parent: NodeId, depth: u16) -> Self {
        Self {
            state,
            mv: Some(mv),
            parent,
            depth,
            children: SmallVec::new(),
            score: None,
        }
    }

    /// Create a root node.
    pub fn root(state: S) -> Self {
        Self {
            state,
            mv: None,
            parent: NodeId::NONE,
            depth: 0,
            children: SmallVec::new(),
            score: None,
        }
    }

    /// Check if the node has been given children.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if the node's score is settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.score.is_some()
    }
}
