//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Search configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum nodes to visit (0 = unlimited).
    /// Checked before every node visit; exceeding it aborts the search.
    pub max_nodes: usize,
}

impl SearchConfig {
    /// Create a new config with a node budget.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Whether visiting node number `visited` would break the budget.
    #[inline]
    #[must_use]
    pub fn exceeds_budget(&self, visited: u64) -> bool {
        self.max_nodes > 0 && visited > self.max_nodes as u64
    }
}
