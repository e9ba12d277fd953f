//! Automaton nodes.

use std::ops::Range;

/// Index into `Graph::nodes`.
pub type NodeId = u32;

/// What a node does when the matcher reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Split or join point; consumes nothing.
    Epsilon,
    /// Single character (or `.`), payload is the character.
    Literal,
    /// Terminal node. Exactly one per compiled graph, no successors.
    End,
    /// Opens capture group `group_index`.
    Group,
    /// Closes capture group `group_index`.
    EndGroup,
    /// Bracket expression, payload is the text between `[` and `]`.
    Class,
    /// Backslash escape, payload is `\` plus the escaped character.
    Escape,
    /// `^`
    BeginLine,
    /// `$`
    EndLine,
    /// Loop head. `next1` enters the body, `next2` is the paired `LoopExit`.
    LoopEntry,
    /// Loop tail. One successor goes back to the `LoopEntry`, the other leaves.
    LoopExit,
}

/// Byte range into the pattern text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Payload {
    pub offset: usize,
    pub len: usize,
}

impl Payload {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A node in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub next1: Option<NodeId>,
    pub next2: Option<NodeId>,
    pub payload: Payload,
    /// Capture ordinal for `Group`/`EndGroup`; 0 elsewhere.
    pub group_index: u32,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            next1: None,
            next2: None,
            payload: Payload::default(),
            group_index: 0,
        }
    }

    pub fn epsilon() -> Self {
        Self::new(NodeKind::Epsilon)
    }

    pub fn with_payload(kind: NodeKind, payload: Payload) -> Self {
        Self {
            payload,
            ..Self::new(kind)
        }
    }

    pub fn group(kind: NodeKind, group_index: u32) -> Self {
        debug_assert!(matches!(kind, NodeKind::Group | NodeKind::EndGroup));
        Self {
            group_index,
            ..Self::new(kind)
        }
    }

    /// Outgoing edges in try order.
    pub fn successors(&self) -> impl Iterator<Item = NodeId> {
        self.next1.into_iter().chain(self.next2)
    }

    /// A node with two outgoing edges is a backtracking branch point.
    pub fn is_branch(&self) -> bool {
        self.next2.is_some()
    }
}
