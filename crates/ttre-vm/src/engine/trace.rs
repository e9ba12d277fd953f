//! Tracing infrastructure for debugging match execution.
//!
//! # Design: Zero-Cost Abstraction
//!
//! The VM is generic over `Tracer`. With `NoopTracer` every method is an
//! `#[inline(always)]` empty function and the calls vanish from the
//! compiled search loop. `PrintTracer` collects human-readable lines.

use ttre_core::{Colors, CompiledPattern, Node, NodeId};

/// Why the memo table was emptied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoClear {
    /// The search scan moved onto a `\n`.
    Newline,
    /// A backreference comparison failed.
    Backreference,
}

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Attempts, node visits and the final accept.
    #[default]
    Default,
    /// (-v): also failures, memo hits, memo clears and loop guards.
    Verbose,
    /// (-vv): also capture updates, and the upcoming text on every visit.
    VeryVerbose,
}

/// Tracer trait for VM execution instrumentation.
///
/// Each method is called at a specific point during execution:
/// - `trace_attempt` - before trying a start position
/// - `trace_node` - on entering a node, after the budget checks
/// - `trace_fail` - when a node's own test fails
/// - `trace_memo_hit` - when a branch point is known to fail
/// - `trace_memo_clear` - when the memo table is emptied
/// - `trace_loop_guard` - when an empty loop iteration is cut short
/// - `trace_capture_start/end` - when a group slot is written
/// - `trace_capture_rollback` - when a group slot is restored on failure
/// - `trace_accept` - when the search succeeds
pub trait Tracer {
    fn trace_attempt(&mut self, start: usize);

    fn trace_node(&mut self, id: NodeId, node: &Node, pos: usize);

    fn trace_fail(&mut self, id: NodeId, pos: usize);

    fn trace_memo_hit(&mut self, id: NodeId, pos: usize);

    fn trace_memo_clear(&mut self, reason: MemoClear);

    fn trace_loop_guard(&mut self, id: NodeId, pos: usize);

    fn trace_capture_start(&mut self, group: u32, pos: usize);

    fn trace_capture_end(&mut self, group: u32, pos: usize);

    fn trace_capture_rollback(&mut self, group: u32);

    fn trace_accept(&mut self, start: usize, end: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_attempt(&mut self, _start: usize) {}

    #[inline(always)]
    fn trace_node(&mut self, _id: NodeId, _node: &Node, _pos: usize) {}

    #[inline(always)]
    fn trace_fail(&mut self, _id: NodeId, _pos: usize) {}

    #[inline(always)]
    fn trace_memo_hit(&mut self, _id: NodeId, _pos: usize) {}

    #[inline(always)]
    fn trace_memo_clear(&mut self, _reason: MemoClear) {}

    #[inline(always)]
    fn trace_loop_guard(&mut self, _id: NodeId, _pos: usize) {}

    #[inline(always)]
    fn trace_capture_start(&mut self, _group: u32, _pos: usize) {}

    #[inline(always)]
    fn trace_capture_end(&mut self, _group: u32, _pos: usize) {}

    #[inline(always)]
    fn trace_capture_rollback(&mut self, _group: u32) {}

    #[inline(always)]
    fn trace_accept(&mut self, _start: usize, _end: usize) {}
}

/// Characters of upcoming text shown at `VeryVerbose`.
const EXCERPT_CHARS: usize = 12;

/// Tracer that renders an execution trace for display.
///
/// Lines are collected for [`PrintTracer::lines`] unless streaming is on, in
/// which case each line goes to stdout as soon as it is produced.
pub struct PrintTracer<'p> {
    program: &'p CompiledPattern,
    text: &'p str,
    verbosity: Verbosity,
    colors: Colors,
    streaming: bool,
    lines: Vec<String>,
    attempts: usize,
    /// Digits needed for the largest node id.
    id_width: usize,
}

impl<'p> PrintTracer<'p> {
    pub fn new(
        program: &'p CompiledPattern,
        text: &'p str,
        verbosity: Verbosity,
        colors: Colors,
    ) -> Self {
        let id_width = program.graph().len().max(1).to_string().len();
        Self {
            program,
            text,
            verbosity,
            colors,
            streaming: false,
            lines: Vec::new(),
            attempts: 0,
            id_width,
        }
    }

    /// Print lines as they are produced instead of collecting them.
    pub fn streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn emit(&mut self, line: String) {
        if self.streaming {
            println!("{line}");
        } else {
            self.lines.push(line);
        }
    }

    fn verbose(&self) -> bool {
        self.verbosity != Verbosity::Default
    }

    fn very_verbose(&self) -> bool {
        self.verbosity == Verbosity::VeryVerbose
    }

    fn node_label(&self, id: NodeId) -> String {
        let c = &self.colors;
        format!("{}N{:0w$}{}", c.dim, id, c.reset, w = self.id_width)
    }

    /// Upcoming text at `pos`, truncated, with newlines made visible.
    fn excerpt(&self, pos: usize) -> String {
        let rest = self.text.get(pos..).unwrap_or_default();
        let mut out: String = rest
            .chars()
            .take(EXCERPT_CHARS)
            .flat_map(char::escape_debug)
            .collect();
        if rest.chars().nth(EXCERPT_CHARS).is_some() {
            out.push('…');
        }
        out
    }

    /// Sub-line, indented under the node lines.
    fn push_subline(&mut self, symbol: &str, content: String) {
        let indent = 2 + 1 + self.id_width;
        self.emit(format!("{:indent$} {symbol} {content}", ""));
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_attempt(&mut self, start: usize) {
        if self.attempts > 0 {
            self.emit(String::new());
        }
        self.attempts += 1;
        let c = self.colors;
        self.emit(format!("{}attempt{} @{start}", c.blue, c.reset));
    }

    fn trace_node(&mut self, id: NodeId, _node: &Node, pos: usize) {
        let label = self.node_label(id);
        let desc = self.program.graph().describe(id, self.program.pattern());
        let mut line = format!("  {label} {desc} @{pos}");
        if self.very_verbose() {
            let c = self.colors;
            line.push_str(&format!(" {}{}{}", c.dim, self.excerpt(pos), c.reset));
        }
        self.emit(line);
    }

    fn trace_fail(&mut self, id: NodeId, pos: usize) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        let label = self.node_label(id);
        self.push_subline(&format!("{}✗{}", c.red, c.reset), format!("{label} @{pos}"));
    }

    fn trace_memo_hit(&mut self, id: NodeId, pos: usize) {
        if !self.verbose() {
            return;
        }
        let label = self.node_label(id);
        self.push_subline("⊘", format!("{label} @{pos} already failed"));
    }

    fn trace_memo_clear(&mut self, reason: MemoClear) {
        if !self.verbose() {
            return;
        }
        let reason = match reason {
            MemoClear::Newline => "newline",
            MemoClear::Backreference => "backreference mismatch",
        };
        self.push_subline("∅", format!("memo cleared ({reason})"));
    }

    fn trace_loop_guard(&mut self, id: NodeId, pos: usize) {
        if !self.verbose() {
            return;
        }
        let label = self.node_label(id);
        self.push_subline("↷", format!("{label} @{pos} empty iteration, leaving loop"));
    }

    fn trace_capture_start(&mut self, group: u32, pos: usize) {
        if self.very_verbose() {
            self.push_subline("(", format!("group {group} starts @{pos}"));
        }
    }

    fn trace_capture_end(&mut self, group: u32, pos: usize) {
        if self.very_verbose() {
            self.push_subline(")", format!("group {group} ends @{pos}"));
        }
    }

    fn trace_capture_rollback(&mut self, group: u32) {
        if self.very_verbose() {
            self.push_subline("↺", format!("group {group} rolled back"));
        }
    }

    fn trace_accept(&mut self, start: usize, end: usize) {
        let c = self.colors;
        self.emit(format!("{}accept{} {start}..{end}", c.green, c.reset));
    }
}
