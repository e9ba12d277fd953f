//! Compiled regular expression with its matching entry points.

use std::fmt;
use std::str::FromStr;

use log::trace;
use ttre_compiler::{CompileError, compile};
use ttre_core::CompiledPattern;
use ttre_vm::{Captures, Limits, MatchOptions, RuntimeError, Tracer, VM};

/// A compiled pattern plus the budgets used when matching it.
///
/// Matching never mutates the compiled graph, so a `Regex` can be shared
/// across threads and used for concurrent matches.
#[derive(Debug, Clone)]
pub struct Regex {
    compiled: CompiledPattern,
    limits: Limits,
}

impl Regex {
    /// Compile `pattern` with default limits.
    pub fn new(pattern: &str) -> Result<Self, CompileError> {
        Ok(Self {
            compiled: compile(pattern)?,
            limits: Limits::default(),
        })
    }

    /// Replace the step and depth budgets.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn pattern(&self) -> &str {
        self.compiled.pattern()
    }

    pub fn compiled(&self) -> &CompiledPattern {
        &self.compiled
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Slots in every successful `Captures`: the groups plus the whole match.
    pub fn capture_count(&self) -> usize {
        self.compiled.capture_count()
    }

    /// Match `text` from byte offset `start`.
    ///
    /// Without [`MatchOptions::SEARCH`] the match must begin at `start` and
    /// run to the end of the text.
    pub fn match_at(
        &self,
        text: &str,
        options: MatchOptions,
        start: usize,
    ) -> Result<Captures, RuntimeError> {
        self.vm(text, options).execute(start)
    }

    /// Like [`match_at`](Self::match_at), reporting every step to `tracer`.
    pub fn match_traced<T: Tracer>(
        &self,
        text: &str,
        options: MatchOptions,
        start: usize,
        tracer: &mut T,
    ) -> Result<Captures, RuntimeError> {
        self.vm(text, options).execute_with(start, tracer)
    }

    pub fn captures(&self, text: &str, options: MatchOptions) -> Result<Captures, RuntimeError> {
        self.match_at(text, options, 0)
    }

    /// Whether `text` contains a match.
    pub fn is_match(&self, text: &str) -> Result<bool, RuntimeError> {
        Ok(self.captures(text, MatchOptions::SEARCH)?.is_match())
    }

    /// Successive non-overlapping matches, left to right. `SEARCH` is
    /// always added to `options`.
    pub fn find_iter<'r, 't>(&'r self, text: &'t str, options: MatchOptions) -> Matches<'r, 't> {
        Matches {
            regex: self,
            text,
            options: options | MatchOptions::SEARCH,
            pos: 0,
            done: false,
        }
    }

    fn vm<'p, 't>(&'p self, text: &'t str, options: MatchOptions) -> VM<'p, 't> {
        VM::builder(&self.compiled, text)
            .options(options)
            .limits(self.limits)
            .build()
    }
}

impl FromStr for Regex {
    type Err = CompileError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::new(pattern)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// Iterator over the matches of a [`Regex`] in a text.
///
/// After a match ending at `e` the next scan starts at `e`; an empty match
/// moves the scan one character forward, and an empty match at the end of
/// the text is the last item. A runtime error is yielded once and ends the
/// iteration.
pub struct Matches<'r, 't> {
    regex: &'r Regex,
    text: &'t str,
    options: MatchOptions,
    pos: usize,
    done: bool,
}

impl Matches<'_, '_> {
    /// Where the next scan would start.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = Result<Captures, RuntimeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let caps = match self.regex.match_at(self.text, self.options, self.pos) {
            Ok(caps) => caps,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };
        let Some(span) = caps.span() else {
            self.done = true;
            return None;
        };

        if !span.is_empty() {
            self.pos = span.end();
        } else if let Some(c) = self.text[span.start..].chars().next() {
            self.pos = span.start + c.len_utf8();
        } else {
            self.done = true;
        }
        trace!("match {}..{}, next scan at {}", span.start, span.end(), self.pos);

        Some(Ok(caps))
    }
}
