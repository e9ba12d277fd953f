//! Arena and construction combinators for pattern graphs.
//!
//! The graph uses index-based node references (`NodeId`) with nodes stored
//! in a `Vec`. Each node has at most two outgoing edges; the order of the
//! edges is the order the matcher tries them in.

use super::node::{Node, NodeId, NodeKind, Payload};

/// A graph fragment with single entry and exit points.
///
/// Every pattern construct compiles to a fragment. Combinators connect
/// fragments by attaching edges to their exits, which are always left
/// with a free edge slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub entry: NodeId,
    pub exit: NodeId,
}

impl Fragment {
    pub fn new(entry: NodeId, exit: NodeId) -> Self {
        Self { entry, exit }
    }

    /// Single-node fragment where entry equals exit.
    pub fn single(node: NodeId) -> Self {
        Self {
            entry: node,
            exit: node,
        }
    }
}

/// Node arena for a pattern under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub(super) nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returning its ID.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    pub fn add_epsilon(&mut self) -> NodeId {
        self.add_node(Node::epsilon())
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id as usize]
    }

    /// Node by ID, `None` if out of range.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as NodeId, n))
    }

    /// Add an edge from `from` to `to` in the first free slot.
    pub fn connect(&mut self, from: NodeId, to: NodeId) {
        let node = self.node_mut(from);
        if node.next1.is_none() {
            node.next1 = Some(to);
        } else {
            debug_assert!(node.next2.is_none(), "N{from} already has two successors");
            node.next2 = Some(to);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Atoms
    // ─────────────────────────────────────────────────────────────────────

    pub fn epsilon_fragment(&mut self) -> Fragment {
        Fragment::single(self.add_epsilon())
    }

    /// Single node with no payload (`^`, `$`, `End`).
    pub fn kind_fragment(&mut self, kind: NodeKind) -> Fragment {
        Fragment::single(self.add_node(Node::new(kind)))
    }

    /// Single node reading `payload` from the pattern (literal, class, escape).
    pub fn payload_fragment(&mut self, kind: NodeKind, payload: Payload) -> Fragment {
        Fragment::single(self.add_node(Node::with_payload(kind, payload)))
    }

    /// Capture group around `inner`: `Group(n) → inner → EndGroup(n)`.
    pub fn group(&mut self, inner: Fragment, group_index: u32) -> Fragment {
        let open = self.add_node(Node::group(NodeKind::Group, group_index));
        let close = self.add_node(Node::group(NodeKind::EndGroup, group_index));

        self.connect(open, inner.entry);
        self.connect(inner.exit, close);

        Fragment::new(open, close)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fragment Combinators
    // ─────────────────────────────────────────────────────────────────────

    /// Connect two fragments: left → right.
    pub fn concat(&mut self, left: Fragment, right: Fragment) -> Fragment {
        self.connect(left.exit, right.entry);
        Fragment::new(left.entry, right.exit)
    }

    /// Connect fragments in sequence: f1 → f2 → ... → fn
    pub fn sequence(&mut self, fragments: &[Fragment]) -> Fragment {
        match fragments {
            [] => self.epsilon_fragment(),
            [single] => *single,
            [first, .., last] => {
                for window in fragments.windows(2) {
                    self.connect(window[0].exit, window[1].entry);
                }
                Fragment::new(first.entry, last.exit)
            }
        }
    }

    /// Selection `left|right`, trying `left` first.
    ///
    /// ```text
    ///          ┌─→ left ──┐
    /// entry ───┤          ├─→ exit
    ///          └─→ right ─┘
    /// ```
    pub fn select(&mut self, left: Fragment, right: Fragment) -> Fragment {
        let entry = self.add_epsilon();
        let exit = self.add_epsilon();

        self.connect(entry, left.entry);
        self.connect(entry, right.entry);
        self.connect(left.exit, exit);
        self.connect(right.exit, exit);

        Fragment::new(entry, exit)
    }

    /// Zero or more: `body*` (greedy) or `body*?` (lazy).
    ///
    /// ```text
    ///                     ┌───────────────────────┐
    ///                     ↓                       │
    /// entry ─→ LoopEntry ─→ body ─→ LoopExit ─────┘
    ///   │          ┆                   │
    ///   │          └┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄→┘ (pairing edge)
    ///   └──────────────→ exit ←────────┘
    /// ```
    ///
    /// Greedy and lazy share the topology; only the edge order of `entry`
    /// and `LoopExit` differs.
    pub fn star(&mut self, body: Fragment, greedy: bool) -> Fragment {
        let entry = self.add_epsilon();
        let loop_entry = self.add_node(Node::new(NodeKind::LoopEntry));
        let loop_exit = self.add_node(Node::new(NodeKind::LoopExit));
        let exit = self.add_epsilon();

        self.connect(loop_entry, body.entry);
        self.connect(loop_entry, loop_exit);
        self.connect(body.exit, loop_exit);

        if greedy {
            self.connect(entry, loop_entry);
            self.connect(entry, exit);
            self.connect(loop_exit, loop_entry);
            self.connect(loop_exit, exit);
        } else {
            self.connect(entry, exit);
            self.connect(entry, loop_entry);
            self.connect(loop_exit, exit);
            self.connect(loop_exit, loop_entry);
        }

        Fragment::new(entry, exit)
    }

    /// One or more: an independent copy of `body` followed by `body*`.
    ///
    /// `body` must not be connected to anything yet.
    pub fn plus(&mut self, body: Fragment, greedy: bool) -> Fragment {
        let first = self.deep_copy(body);
        let rest = self.star(body, greedy);
        self.concat(first, rest)
    }

    /// Zero or one: `select(body, ε)` (greedy) or `select(ε, body)` (lazy).
    pub fn optional(&mut self, body: Fragment, greedy: bool) -> Fragment {
        let skip = self.epsilon_fragment();
        if greedy {
            self.select(body, skip)
        } else {
            self.select(skip, body)
        }
    }

    /// Bounded repetition `body{min}`, `body{min,}` and `body{min,max}`.
    ///
    /// The mandatory part is `min` copies in sequence. An open upper bound
    /// appends `body*`. A finite one appends a chain of `max - min` switch
    /// nodes, each offering one more copy or a jump to the shared final node:
    ///
    /// ```text
    /// mandatory ─→ S1 ─→ copy ─→ S2 ─→ copy ─→ final
    ///              │             │              ↑
    ///              └─────────────┴──────────────┘
    /// ```
    ///
    /// `body` itself is only wired in by the open-ended form; otherwise it
    /// is left unreachable and removed by [`Graph::compact`].
    pub fn repeat(&mut self, body: Fragment, min: u32, max: Option<u32>, greedy: bool) -> Fragment {
        let mut mandatory: Option<Fragment> = None;
        for _ in 0..min {
            let copy = self.deep_copy(body);
            mandatory = Some(match mandatory {
                Some(frag) => self.concat(frag, copy),
                None => copy,
            });
        }
        let frag = match mandatory {
            Some(frag) => frag,
            None => self.epsilon_fragment(),
        };

        let Some(max) = max else {
            let rest = self.star(body, greedy);
            return self.concat(frag, rest);
        };

        if max <= min {
            return frag;
        }

        let last = self.add_epsilon();
        let mut tail = frag.exit;
        for _ in min..max {
            let switch = self.add_epsilon();
            self.connect(tail, switch);

            let copy = self.deep_copy(body);
            if greedy {
                self.connect(switch, copy.entry);
                self.connect(switch, last);
            } else {
                self.connect(switch, last);
                self.connect(switch, copy.entry);
            }
            tail = copy.exit;
        }
        self.connect(tail, last);

        Fragment::new(frag.entry, last)
    }
}
