//! Deep copy of sub-graphs.

use std::collections::HashMap;

use super::build::{Fragment, Graph};
use super::node::NodeId;

impl Graph {
    /// Clone every node reachable from `fragment.entry` and return the
    /// copy's entry and exit.
    ///
    /// Nodes are cloned once each through an identity map keyed on the
    /// original ID, so converging edges stay converging and loop back-edges
    /// close onto the copied `LoopEntry` instead of unrolling.
    pub fn deep_copy(&mut self, fragment: Fragment) -> Fragment {
        let mut clones: HashMap<NodeId, NodeId> = HashMap::new();
        let mut created = Vec::new();
        let mut stack = vec![fragment.entry];

        while let Some(id) = stack.pop() {
            if clones.contains_key(&id) {
                continue;
            }
            let node = self.node(id).clone();
            stack.extend(node.successors());
            let clone = self.add_node(node);
            clones.insert(id, clone);
            created.push(clone);
        }

        for id in created {
            let node = self.node_mut(id);
            node.next1 = node.next1.map(|n| clones[&n]);
            node.next2 = node.next2.map(|n| clones[&n]);
        }

        Fragment::new(clones[&fragment.entry], clones[&fragment.exit])
    }
}
