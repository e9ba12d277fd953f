//! Reachability compaction.
//!
//! Combinators that copy a template (`plus`, `repeat`) leave the template
//! unreachable. Compaction drops such nodes and renumbers the rest in
//! depth-first discovery order, `next1` before `next2`, starting at 0.

use super::build::Graph;
use super::node::NodeId;

impl Graph {
    /// Keep only nodes reachable from `entry`. The entry becomes `N0`.
    pub fn compact(&mut self, entry: NodeId) {
        let mut remap: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        let mut order = Vec::new();
        let mut stack = vec![entry];

        while let Some(id) = stack.pop() {
            if remap[id as usize].is_some() {
                continue;
            }
            remap[id as usize] = Some(order.len() as NodeId);
            order.push(id);

            let node = self.node(id);
            stack.extend(node.next2);
            stack.extend(node.next1);
        }

        let renumber = |id: NodeId| remap[id as usize];
        self.nodes = order
            .iter()
            .map(|&id| {
                let mut node = self.nodes[id as usize].clone();
                node.next1 = node.next1.and_then(renumber);
                node.next2 = node.next2.and_then(renumber);
                node
            })
            .collect();
    }

    /// IDs reachable from `entry`, in ascending order.
    pub fn reachable(&self, entry: NodeId) -> Vec<NodeId> {
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![entry];
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id as usize], true) {
                continue;
            }
            stack.extend(self.node(id).successors());
        }
        (0..self.nodes.len() as NodeId)
            .filter(|&id| seen[id as usize])
            .collect()
    }
}
