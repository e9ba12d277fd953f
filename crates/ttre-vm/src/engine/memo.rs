//! Memo table of failed branch points.

use std::collections::HashSet;

use ttre_core::NodeId;

/// Set of `(node, text position)` pairs whose exploration finished without
/// a match during one match call.
///
/// Pairs are recorded only after their whole subtree has failed, so a pair
/// still on the stack is never short-circuited.
#[derive(Debug, Default, Clone)]
pub struct MemoTable {
    failed: HashSet<(NodeId, usize)>,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. Returns `false` if the pair was already present.
    pub fn insert(&mut self, node: NodeId, pos: usize) -> bool {
        self.failed.insert((node, pos))
    }

    pub fn contains(&self, node: NodeId, pos: usize) -> bool {
        self.failed.contains(&(node, pos))
    }

    pub fn clear(&mut self) {
        self.failed.clear();
    }

    pub fn len(&self) -> usize {
        self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failed.is_empty()
    }
}
