//! Backtracking matcher over compiled pattern graphs.

use log::{debug, trace};
use ttre_core::{CompiledPattern, Node, NodeId, NodeKind};

use super::captures::{Captures, Span};
use super::error::RuntimeError;
use super::memo::MemoTable;
use super::options::MatchOptions;
use super::trace::{MemoClear, NoopTracer, Tracer};

/// Runtime budgets for one match call.
///
/// The step budget is refilled for every start position a search tries.
///
/// Both budgets count inclusively: a backtrack limit of `n` permits exactly
/// `n` node visits and a depth limit of `d` permits `d` nested visits. A
/// counter that only fails once it drops below zero allows one more of
/// each, so subtract one when carrying such limits over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum node visits per start position
    /// (default: 100,000 in debug builds, 100,000,000 in release builds).
    pub(crate) backtrack_limit: u64,
    /// Maximum recursion depth
    /// (default: 3,000 in debug builds, 10,000 in release builds).
    pub(crate) depth_limit: u32,
}

impl Default for Limits {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self {
                backtrack_limit: 100_000,
                depth_limit: 3_000,
            }
        } else {
            Self {
                backtrack_limit: 100_000_000,
                depth_limit: 10_000,
            }
        }
    }
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow `steps` node visits per start position; visit `steps + 1` fails.
    pub fn backtrack_limit(mut self, steps: u64) -> Self {
        self.backtrack_limit = steps;
        self
    }

    /// Allow `depth` nested node visits; the entry node is the first.
    pub fn depth_limit(mut self, depth: u32) -> Self {
        self.depth_limit = depth;
        self
    }

    pub fn get_backtrack_limit(&self) -> u64 {
        self.backtrack_limit
    }

    pub fn get_depth_limit(&self) -> u32 {
        self.depth_limit
    }
}

/// Capture slot while matching. Start and length are written by different
/// nodes, so either may be set without the other.
#[derive(Clone, Copy, Debug, Default)]
struct Slot {
    start: Option<usize>,
    len: Option<usize>,
}

/// Matcher state for a single call.
///
/// Consumed by `execute`; build a new VM for every match.
pub struct VM<'p, 't> {
    program: &'p CompiledPattern,
    text: &'t str,
    options: MatchOptions,
    limits: Limits,
    steps_left: u64,
    slots: Vec<Slot>,
    memo: Option<MemoTable>,
    /// Backreference evaluations so far. A failure is only memoized if no
    /// backreference was evaluated while exploring it.
    backrefs_seen: u64,
    /// Start position of the current iteration, indexed by `LoopExit` id.
    loop_marks: Vec<Option<usize>>,
}

/// Builder for VM instances.
pub struct VMBuilder<'p, 't> {
    program: &'p CompiledPattern,
    text: &'t str,
    options: MatchOptions,
    limits: Limits,
}

impl<'p, 't> VMBuilder<'p, 't> {
    pub fn new(program: &'p CompiledPattern, text: &'t str) -> Self {
        Self {
            program,
            text,
            options: MatchOptions::empty(),
            limits: Limits::default(),
        }
    }

    pub fn options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn backtrack_limit(mut self, steps: u64) -> Self {
        self.limits = self.limits.backtrack_limit(steps);
        self
    }

    pub fn depth_limit(mut self, depth: u32) -> Self {
        self.limits = self.limits.depth_limit(depth);
        self
    }

    pub fn build(self) -> VM<'p, 't> {
        let memo = (!self.options.contains(MatchOptions::NORMAL)).then(MemoTable::new);
        VM {
            program: self.program,
            text: self.text,
            options: self.options,
            limits: self.limits,
            steps_left: self.limits.backtrack_limit,
            slots: vec![Slot::default(); self.program.capture_count()],
            memo,
            backrefs_seen: 0,
            loop_marks: vec![None; self.program.graph().len()],
        }
    }
}

impl<'p, 't> VM<'p, 't> {
    pub fn builder(program: &'p CompiledPattern, text: &'t str) -> VMBuilder<'p, 't> {
        VMBuilder::new(program, text)
    }

    /// Match from byte offset `start`.
    ///
    /// Uses `NoopTracer`, which is optimized away at compile time.
    pub fn execute(self, start: usize) -> Result<Captures, RuntimeError> {
        self.execute_with(start, &mut NoopTracer)
    }

    /// Match from byte offset `start`, reporting progress to `tracer`.
    pub fn execute_with<T: Tracer>(
        mut self,
        start: usize,
        tracer: &mut T,
    ) -> Result<Captures, RuntimeError> {
        let len = self.text.len();
        if start > len {
            return Err(RuntimeError::BufferOverrun { offset: start, len });
        }
        if !self.text.is_char_boundary(start) {
            return Err(RuntimeError::NotCharBoundary(start));
        }

        trace!(
            "matching {:?} from {start} with {:?}",
            self.program.pattern(),
            self.options
        );
        let result = self.search(start, tracer);
        if let Err(err) = &result {
            debug!("match of {:?} aborted: {err}", self.program.pattern());
        }
        result
    }

    fn search<T: Tracer>(
        &mut self,
        start: usize,
        tracer: &mut T,
    ) -> Result<Captures, RuntimeError> {
        let entry = self.program.entry();
        let mut at = start;

        loop {
            self.steps_left = self.limits.backtrack_limit;
            tracer.trace_attempt(at);

            if let Some(end) = self.step(entry, at, self.limits.depth_limit, tracer)? {
                tracer.trace_accept(at, end);
                return Ok(self.captures(at, end));
            }

            if !self.options.contains(MatchOptions::SEARCH) || at >= self.text.len() {
                return Ok(Captures::no_match());
            }

            at += self.char_len_at(at);
            if self.text[at..].starts_with('\n') {
                self.clear_memo(MemoClear::Newline, tracer);
            }
        }
    }

    fn captures(&self, start: usize, end: usize) -> Captures {
        let mut spans: Vec<Option<Span>> = self
            .slots
            .iter()
            .map(|slot| match (slot.start, slot.len) {
                (Some(start), Some(len)) => Some(Span::new(start, len)),
                _ => None,
            })
            .collect();
        spans[0] = Some(Span::new(start, end - start));
        Captures::new(spans)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────

    /// Try to reach `End` from node `id` at text position `pos`.
    /// Returns the end position of the match.
    fn step<T: Tracer>(
        &mut self,
        id: NodeId,
        pos: usize,
        depth: u32,
        tracer: &mut T,
    ) -> Result<Option<usize>, RuntimeError> {
        if self.steps_left == 0 {
            return Err(RuntimeError::BacktrackLimit(self.limits.backtrack_limit));
        }
        self.steps_left -= 1;
        if depth == 0 {
            return Err(RuntimeError::RecursionDepth(self.limits.depth_limit));
        }

        let program = self.program;
        let node = program.node(id);
        tracer.trace_node(id, node, pos);

        match node.kind {
            NodeKind::End => {
                let search = self.options.contains(MatchOptions::SEARCH);
                return Ok((search || pos == self.text.len()).then_some(pos));
            }
            // Runs before the memo check: the guard decision depends on the
            // loop marker, which the memo key does not include.
            NodeKind::LoopExit if self.loop_marks[id as usize] == Some(pos) => {
                tracer.trace_loop_guard(id, pos);
                return match self.loop_exit_edge(node) {
                    Some(exit) => self.step(exit, pos, depth - 1, tracer),
                    None => Ok(None),
                };
            }
            _ => {}
        }

        let memoized = node.is_branch() && self.memo.is_some();
        if memoized && self.memo.as_ref().is_some_and(|memo| memo.contains(id, pos)) {
            tracer.trace_memo_hit(id, pos);
            return Ok(None);
        }

        let backrefs_before = self.backrefs_seen;
        let result = self.visit(id, node, pos, depth, tracer)?;
        if result.is_none() && memoized && self.backrefs_seen == backrefs_before {
            if let Some(memo) = self.memo.as_mut() {
                memo.insert(id, pos);
            }
        }
        Ok(result)
    }

    /// Apply the node's own test or effect, then continue along its edges.
    fn visit<T: Tracer>(
        &mut self,
        id: NodeId,
        node: &'p Node,
        pos: usize,
        depth: u32,
        tracer: &mut T,
    ) -> Result<Option<usize>, RuntimeError> {
        let program = self.program;
        let advanced = match node.kind {
            NodeKind::Group => return self.enter_group(node, pos, depth, tracer),
            NodeKind::EndGroup => return self.close_group(node, pos, depth, tracer),
            NodeKind::LoopEntry => return self.enter_loop(node, pos, depth, tracer),
            NodeKind::BeginLine => self.at_line_start(pos).then_some(pos),
            NodeKind::EndLine => (pos == self.text.len()).then_some(pos),
            NodeKind::Literal => self.literal(program.payload(node), pos),
            NodeKind::Class => self.class(program.payload(node), pos, tracer),
            NodeKind::Escape => {
                let escaped = program.pattern().get(node.payload.offset + 1..);
                self.escape(escaped.unwrap_or_default(), pos, tracer)
            }
            NodeKind::Epsilon | NodeKind::LoopExit | NodeKind::End => Some(pos),
        };

        match advanced {
            Some(next_pos) => self.follow(node, next_pos, depth, tracer),
            None => {
                tracer.trace_fail(id, pos);
                Ok(None)
            }
        }
    }

    /// Try `next1`, then `next2`, both at `pos`.
    fn follow<T: Tracer>(
        &mut self,
        node: &Node,
        pos: usize,
        depth: u32,
        tracer: &mut T,
    ) -> Result<Option<usize>, RuntimeError> {
        if let Some(next) = node.next1 {
            if let Some(end) = self.step(next, pos, depth - 1, tracer)? {
                return Ok(Some(end));
            }
        }
        match node.next2 {
            Some(next) => self.step(next, pos, depth - 1, tracer),
            None => Ok(None),
        }
    }

    fn enter_group<T: Tracer>(
        &mut self,
        node: &Node,
        pos: usize,
        depth: u32,
        tracer: &mut T,
    ) -> Result<Option<usize>, RuntimeError> {
        let group = node.group_index;
        let slot = group as usize;
        let saved = self.slots[slot].start;
        self.slots[slot].start = Some(pos);
        tracer.trace_capture_start(group, pos);

        let result = self.follow(node, pos, depth, tracer)?;
        if result.is_none() {
            self.slots[slot].start = saved;
            tracer.trace_capture_rollback(group);
        }
        Ok(result)
    }

    fn close_group<T: Tracer>(
        &mut self,
        node: &Node,
        pos: usize,
        depth: u32,
        tracer: &mut T,
    ) -> Result<Option<usize>, RuntimeError> {
        let group = node.group_index;
        let slot = group as usize;
        let saved = self.slots[slot].len;
        let start = self.slots[slot].start.unwrap_or(pos);
        self.slots[slot].len = Some(pos.saturating_sub(start));
        tracer.trace_capture_end(group, pos);

        let result = self.follow(node, pos, depth, tracer)?;
        if result.is_none() {
            self.slots[slot].len = saved;
            tracer.trace_capture_rollback(group);
        }
        Ok(result)
    }

    /// Mark the iteration start on the paired `LoopExit` and run the body.
    fn enter_loop<T: Tracer>(
        &mut self,
        node: &Node,
        pos: usize,
        depth: u32,
        tracer: &mut T,
    ) -> Result<Option<usize>, RuntimeError> {
        let (Some(body), Some(exit)) = (node.next1, node.next2) else {
            return Ok(None);
        };

        let saved = std::mem::replace(&mut self.loop_marks[exit as usize], Some(pos));
        let result = self.step(body, pos, depth - 1, tracer);
        self.loop_marks[exit as usize] = saved;
        result
    }

    /// The `LoopExit` successor that leaves the loop.
    fn loop_exit_edge(&self, node: &Node) -> Option<NodeId> {
        let back = |n: NodeId| self.program.node(n).kind == NodeKind::LoopEntry;
        match (node.next1, node.next2) {
            (Some(n1), n2) if back(n1) => n2,
            (n1, _) => n1,
        }
    }

    fn clear_memo<T: Tracer>(&mut self, reason: MemoClear, tracer: &mut T) {
        if let Some(memo) = self.memo.as_mut() {
            trace!("memo cleared ({reason:?}), {} entries dropped", memo.len());
            memo.clear();
            tracer.trace_memo_clear(reason);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Character tests
    // ─────────────────────────────────────────────────────────────────────

    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..).and_then(|rest| rest.chars().next())
    }

    fn char_len_at(&self, pos: usize) -> usize {
        self.char_at(pos).map_or(1, char::len_utf8)
    }

    fn char_before(&self, pos: usize) -> Option<char> {
        self.text.get(..pos).and_then(|head| head.chars().next_back())
    }

    /// Position after the character at `pos`, if `matches` accepts it.
    fn consume(&self, pos: usize, matches: impl FnOnce(char) -> bool) -> Option<usize> {
        let c = self.char_at(pos)?;
        matches(c).then(|| pos + c.len_utf8())
    }

    /// Exact comparison, falling back to ASCII case folding under `NOCASE`.
    fn same_char(&self, expected: char, actual: char) -> bool {
        expected == actual
            || (self.options.contains(MatchOptions::NOCASE)
                && expected.eq_ignore_ascii_case(&actual))
    }

    fn at_line_start(&self, pos: usize) -> bool {
        pos == 0
            || (!self.options.contains(MatchOptions::SINGLE) && self.char_before(pos) == Some('\n'))
    }

    fn at_word_boundary(&self, pos: usize) -> bool {
        let here = self.char_at(pos).is_some_and(is_word);
        let before = self.char_before(pos).is_some_and(is_word);
        here != before
    }

    fn literal(&self, payload: &str, pos: usize) -> Option<usize> {
        let expected = payload.chars().next()?;
        if expected == '.' {
            self.consume(pos, |c| c != '\n')
        } else {
            self.consume(pos, |c| self.same_char(expected, c))
        }
    }

    /// `lo-hi` range test; under `NOCASE` an ASCII letter also matches if
    /// its other case falls in the range.
    fn in_range(&self, lo: char, hi: char, c: char) -> bool {
        if (lo..=hi).contains(&c) {
            return true;
        }
        if !self.options.contains(MatchOptions::NOCASE) || !c.is_ascii_alphabetic() {
            return false;
        }
        let flipped = if c.is_ascii_lowercase() {
            c.to_ascii_uppercase()
        } else {
            c.to_ascii_lowercase()
        };
        (lo..=hi).contains(&flipped)
    }

    /// Bracket expression. `body` is the text between `[` and `]`.
    fn class<T: Tracer>(&mut self, body: &str, pos: usize, tracer: &mut T) -> Option<usize> {
        let c = self.char_at(pos)?;
        let (negated, mut rest) = match body.strip_prefix('^') {
            Some(rest) => (true, rest),
            None => (false, body),
        };

        let mut matched = false;
        while let Some(first) = rest.chars().next() {
            let after = &rest[first.len_utf8()..];

            if first == '\\' {
                if self.escape(after, pos, tracer).is_some() {
                    matched = true;
                    break;
                }
                rest = after
                    .chars()
                    .next()
                    .map_or("", |escaped| &after[escaped.len_utf8()..]);
                continue;
            }

            let mut ahead = after.chars();
            if let (Some('-'), Some(last)) = (ahead.next(), ahead.next()) {
                if last != '\\' {
                    if self.in_range(first, last, c) {
                        matched = true;
                        break;
                    }
                    rest = ahead.as_str();
                    continue;
                }
            }

            if self.same_char(first, c) {
                matched = true;
                break;
            }
            rest = after;
        }

        (matched != negated).then(|| pos + c.len_utf8())
    }

    /// `\X` at `pos`. `escaped` starts at `X` and runs to the end of the
    /// enclosing pattern text, so a backreference can read all its digits.
    fn escape<T: Tracer>(&mut self, escaped: &str, pos: usize, tracer: &mut T) -> Option<usize> {
        let esc = escaped.chars().next()?;
        match esc {
            't' => self.consume(pos, |c| c == '\t'),
            'n' => self.consume(pos, |c| c == '\n'),
            'r' => self.consume(pos, |c| c == '\r'),
            'd' => self.consume(pos, |c| c.is_ascii_digit()),
            'D' => self.consume(pos, |c| !c.is_ascii_digit()),
            's' => self.consume(pos, char::is_whitespace),
            'S' => self.consume(pos, |c| !c.is_whitespace()),
            'w' => self.consume(pos, is_word),
            'W' => self.consume(pos, |c| !is_word(c)),
            '.' => self.consume(pos, |c| c == '.'),
            'b' => self.at_word_boundary(pos).then_some(pos),
            'B' => (!self.at_word_boundary(pos)).then_some(pos),
            '0'..='9' => self.backreference(escaped, pos, tracer),
            other => self.consume(pos, |c| self.same_char(other, c)),
        }
    }

    /// `\N`: the text captured by group `N`, compared exactly.
    fn backreference<T: Tracer>(
        &mut self,
        digits: &str,
        pos: usize,
        tracer: &mut T,
    ) -> Option<usize> {
        self.backrefs_seen += 1;
        let count = digits.bytes().take_while(u8::is_ascii_digit).count();
        let group: usize = digits[..count].parse().unwrap_or(usize::MAX);
        if group == 0 || group >= self.slots.len() {
            return None;
        }

        let Slot {
            start: Some(start),
            len: Some(len),
        } = self.slots[group]
        else {
            return None;
        };
        if len == 0 {
            return Some(pos);
        }

        let text = self.text;
        let repeated = text
            .get(start..start + len)
            .is_some_and(|captured| text[pos..].starts_with(captured));
        if repeated {
            return Some(pos + len);
        }

        // Captured text changed under the recorded failures; start over.
        self.clear_memo(MemoClear::Backreference, tracer);
        None
    }
}

/// `\w` membership: alphanumeric or underscore.
fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
