//! Dump helpers for graph inspection and testing.

use std::fmt::{self, Write};

use super::build::Graph;
use super::node::{Node, NodeId, NodeKind};
use crate::Colors;

/// Printer for `Graph` with configurable output options.
///
/// Without a source, payload nodes print their byte range (`@3+2`);
/// with one, they print the pattern text they refer to.
pub struct GraphPrinter<'a> {
    graph: &'a Graph,
    source: Option<&'a str>,
    colors: Colors,
}

impl<'a> GraphPrinter<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            source: None,
            colors: Colors::OFF,
        }
    }

    /// Pattern text that payloads point into.
    pub fn source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn format_node(&self, w: &mut impl Write, node: &Node) -> fmt::Result {
        let c = &self.colors;
        match node.kind {
            NodeKind::Epsilon => write!(w, "ε"),
            NodeKind::End => write!(w, "{}End{}", c.blue, c.reset),
            NodeKind::BeginLine => write!(w, "{}^{}", c.blue, c.reset),
            NodeKind::EndLine => write!(w, "{}${}", c.blue, c.reset),
            NodeKind::LoopEntry => write!(w, "{}LoopEntry{}", c.blue, c.reset),
            NodeKind::LoopExit => write!(w, "{}LoopExit{}", c.blue, c.reset),
            NodeKind::Group => write!(w, "{}Group({}){}", c.blue, node.group_index, c.reset),
            NodeKind::EndGroup => {
                write!(w, "{}EndGroup({}){}", c.blue, node.group_index, c.reset)
            }
            NodeKind::Literal => {
                write!(w, "{}'", c.green)?;
                self.format_payload(w, node)?;
                write!(w, "'{}", c.reset)
            }
            NodeKind::Class => {
                write!(w, "{}[", c.green)?;
                self.format_payload(w, node)?;
                write!(w, "]{}", c.reset)
            }
            NodeKind::Escape => {
                write!(w, "{}", c.green)?;
                self.format_payload(w, node)?;
                write!(w, "{}", c.reset)
            }
        }
    }

    fn format_payload(&self, w: &mut impl Write, node: &Node) -> fmt::Result {
        let text = self.source.and_then(|s| s.get(node.payload.range()));
        match text {
            Some(text) => write!(w, "{text}"),
            None => write!(w, "@{}+{}", node.payload.offset, node.payload.len),
        }
    }

    fn format_successors(&self, w: &mut impl Write, node: &Node) -> fmt::Result {
        let c = &self.colors;
        let succs: Vec<_> = node.successors().map(|s| format!("N{s}")).collect();
        if succs.is_empty() {
            write!(w, " {}→ ∅{}", c.dim, c.reset)
        } else {
            write!(w, " {}→ {}{}", c.dim, succs.join(", "), c.reset)
        }
    }
}

impl fmt::Display for GraphPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.colors;
        for (id, node) in self.graph.iter() {
            write!(f, "{}N{}:{} ", c.dim, id, c.reset)?;
            self.format_node(f, node)?;
            self.format_successors(f, node)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Graph dump methods
// ─────────────────────────────────────────────────────────────────────────────

impl Graph {
    /// Create a printer for this graph.
    pub fn printer(&self) -> GraphPrinter<'_> {
        GraphPrinter::new(self)
    }

    /// Dump graph with payloads shown as byte ranges.
    pub fn dump(&self) -> String {
        self.printer().dump()
    }

    /// Dump graph resolving payloads against `source`.
    pub fn dump_with_source(&self, source: &str) -> String {
        self.printer().source(source).dump()
    }

    /// One-line description of a node, as used by execution traces.
    pub fn describe(&self, id: NodeId, source: &str) -> String {
        let mut out = String::new();
        let printer = self.printer().source(source);
        if printer.format_node(&mut out, self.node(id)).is_err() {
            out.clear();
        }
        out
    }
}
