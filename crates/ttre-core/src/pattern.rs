//! Compiled pattern: the immutable product of compilation.

use crate::graph::{Graph, GraphPrinter, Node, NodeId};

/// A compacted node graph together with the pattern text its payloads
/// point into.
///
/// Immutable once built. Matching keeps all of its bookkeeping (loop
/// markers, captures, memo) outside, so one `CompiledPattern` can serve any
/// number of concurrent matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    pattern: String,
    graph: Graph,
    entry: NodeId,
    group_count: u32,
}

impl CompiledPattern {
    pub fn new(pattern: impl Into<String>, graph: Graph, entry: NodeId, group_count: u32) -> Self {
        Self {
            pattern: pattern.into(),
            graph,
            entry,
            group_count,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn entry(&self) -> NodeId {
        self.entry
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.graph.node(id)
    }

    /// Number of user-defined capture groups.
    pub fn group_count(&self) -> u32 {
        self.group_count
    }

    /// Number of capture slots: user groups plus the whole match.
    pub fn capture_count(&self) -> usize {
        self.group_count as usize + 1
    }

    /// Pattern text a node's payload refers to.
    pub fn payload(&self, node: &Node) -> &str {
        self.pattern.get(node.payload.range()).unwrap_or_default()
    }

    pub fn printer(&self) -> GraphPrinter<'_> {
        self.graph.printer().source(&self.pattern)
    }

    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}
