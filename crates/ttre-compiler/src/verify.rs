//! Debug-only structural verification of compiled graphs.
//!
//! Checks the shape guarantees the matcher relies on. Zero-cost in release
//! builds.

use ttre_core::{Graph, NodeId};

#[cfg(debug_assertions)]
pub(crate) fn verify(graph: &Graph, entry: NodeId) {
    use ttre_core::NodeKind;

    assert!(graph.get(entry).is_some(), "entry N{entry} out of range");

    let mut ends = 0;
    for (id, node) in graph.iter() {
        match node.kind {
            NodeKind::End => {
                ends += 1;
                assert!(
                    node.next1.is_none() && node.next2.is_none(),
                    "N{id}: End must not have successors"
                );
            }
            NodeKind::LoopEntry => {
                let paired = node.next2.map(|n| graph.node(n).kind);
                assert_eq!(
                    paired,
                    Some(NodeKind::LoopExit),
                    "N{id}: LoopEntry must pair with a LoopExit"
                );
            }
            NodeKind::Group | NodeKind::EndGroup => {
                assert!(node.group_index >= 1, "N{id}: group ordinal must be 1-based");
            }
            _ => {}
        }
        if node.kind != NodeKind::End {
            assert!(node.next1.is_some(), "N{id}: dangling {:?}", node.kind);
        }
    }
    assert_eq!(ends, 1, "graph must have exactly one End");
}

#[cfg(not(debug_assertions))]
pub(crate) fn verify(_graph: &Graph, _entry: NodeId) {}
