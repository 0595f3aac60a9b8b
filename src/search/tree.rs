//! Arena-based game tree for the iterative evaluator.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references. The tree is
//! owned by one search call and dropped when it returns.

use crate::rules::GameState;

use super::node::{NodeId, SearchNode};

/// Arena-based minimax tree.
#[derive(Clone, Debug)]
pub struct GameTree<S: GameState> {
    /// All nodes in the tree.
    nodes: Vec<SearchNode<S>>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl<S: GameState> GameTree<S> {
    /// Create a new tree with a root node holding `state`.
    pub fn new(state: S) -> Self {
        Self {
            nodes: vec![SearchNode::root(state)],
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.raw() as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.raw() as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode<S>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode<S> {
        self.get(self.root)
    }

    /// Child nodes of a node, in move order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &SearchNode<S>> {
        self.get(id).children.iter().map(move |&c| self.get(c))
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            node_count: self.nodes.len(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            leaf_count: self.nodes.iter().filter(|n| !n.is_expanded()).count(),
            settled_count: self.nodes.iter().filter(|n| n.is_settled()).count(),
        }
    }
}

/// Statistics about a minimax tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Nodes without children.
    pub leaf_count: usize,

    /// Nodes with a settled score.
    pub settled_count: usize,
}

impl TreeStats {
    /// Average children per interior node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let interior = self.node_count - self.leaf_count;
        if interior == 0 {
            0.0
        } else {
            (self.node_count - 1) as f64 / interior as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Label;
    use crate::games::stonehenge::{StonehengeGame, StonehengeState};
    use crate::rules::Game;

    fn root_state() -> StonehengeState {
        StonehengeGame::new(2, true).unwrap().current_state().clone()
    }

    #[test]
    fn test_tree_new() {
        let tree = GameTree::new(root_state());

        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId::new(0));
        assert!(tree.root_node().parent.is_none());
    }

    #[test]
    fn test_tree_alloc_and_children() {
        let mut tree = GameTree::new(root_state());
        let root = tree.root();

        for c in ['A', 'B'] {
            let state = tree.get(root).state.make_move(&Label(c)).unwrap();
            let child = tree.alloc(SearchNode::new(state, Label(c), root, 1));
            tree.get_mut(root).children.push(child);
        }

        assert_eq!(tree.len(), 3);
        let moves: Vec<_> = tree.children(root).map(|n| n.mv).collect();
        assert_eq!(moves, vec![Some(Label('A')), Some(Label('B'))]);
    }

    #[test]
    fn test_tree_stats() {
        let mut tree = GameTree::new(root_state());
        let root = tree.root();
        let state = tree.get(root).state.make_move(&Label('A')).unwrap();
        let child = tree.alloc(SearchNode::new(state, Label('A'), root, 1));
        tree.get_mut(root).children.push(child);
        tree.get_mut(child).score = Some(0);

        let stats = tree.stats();

        assert_eq!(stats.node_count, 2);
        assert_eq!(stats.max_depth, 1);
        assert_eq!(stats.leaf_count, 1);
        assert_eq!(stats.settled_count, 1);
        assert_eq!(stats.branching_factor(), 1.0);
    }
}
