//! Recursive-descent pattern parser.
//!
//! One method per nonterminal, each building its graph fragment directly:
//!
//! ```text
//! Expr       ::= Term ( '|' Term )*
//! Term       ::= ( Factor Quantifier? )*
//! Factor     ::= Char | Space | '(' Expr ')' | '(?:' Expr ')'
//!              | '[' ClassBody ']' | '\' Char | '^' | '$'
//! Quantifier ::= ( '*' | '+' | '?' | '{' n '}' | '{' n ',}' | '{' n ',' m '}' ) '?'?
//! ```
//!
//! Every alternative starts with an epsilon and every expression ends with
//! one, so fragments always have a free exit to attach to.

use ttre_core::{CompiledPattern, Fragment, Graph, NodeKind, Payload};

use crate::error::{CompileError, Result, SyntaxError, SyntaxErrorKind};
use crate::verify::verify;

/// Group nesting limit. Each level costs a handful of native stack frames.
pub const MAX_DEPTH: u32 = 256;

/// Largest count accepted inside `{...}`.
pub const MAX_REPETITION: u32 = 1000;

/// Upper bound on graph size; repetition of repetition grows multiplicatively.
pub const MAX_NODES: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quantifier {
    Star,
    Plus,
    Optional,
    Repeat { min: u32, max: Option<u32> },
}

pub(crate) struct Parser<'src> {
    source: &'src str,
    /// Byte offset of the next unread character.
    pos: usize,
    graph: Graph,
    group_count: u32,
    depth: u32,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            graph: Graph::new(),
            group_count: 0,
            depth: 0,
        }
    }

    pub(crate) fn parse(mut self) -> Result<CompiledPattern> {
        if self.source.is_empty() {
            return Err(CompileError::EmptyPattern);
        }

        let body = self.parse_expr()?;
        if self.pos < self.source.len() {
            return Err(self.error(SyntaxErrorKind::UnexpectedChar, self.pos));
        }

        let end = self.graph.kind_fragment(NodeKind::End);
        let root = self.graph.concat(body, end);
        self.graph.compact(root.entry);
        verify(&self.graph, 0);

        Ok(CompiledPattern::new(
            self.source,
            self.graph,
            0,
            self.group_count,
        ))
    }

    fn error(&self, kind: SyntaxErrorKind, offset: usize) -> CompileError {
        SyntaxError::new(kind, offset, self.source).into()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn parse_expr(&mut self) -> Result<Fragment> {
        let base = self.graph.epsilon_fragment();
        let mut expr = self.parse_term(base)?;

        while self.eat('|') {
            let base = self.graph.epsilon_fragment();
            let term = self.parse_term(base)?;
            expr = self.graph.select(expr, term);
        }

        let tail = self.graph.epsilon_fragment();
        Ok(self.graph.concat(expr, tail))
    }

    fn parse_term(&mut self, mut term: Fragment) -> Result<Fragment> {
        while let Some(factor) = self.parse_factor()? {
            let factor = self.parse_quantifier(factor)?;
            term = self.graph.concat(term, factor);
        }
        Ok(term)
    }

    /// `Ok(None)` when the next character cannot start a factor; the caller
    /// decides whether that ends a term or is an error.
    fn parse_factor(&mut self) -> Result<Option<Fragment>> {
        let start = self.pos;
        let Some(c) = self.peek() else {
            return Ok(None);
        };

        let frag = match c {
            ')' | '*' | '+' | '?' | '|' | '{' => return Ok(None),
            '(' => self.parse_group()?,
            '[' => self.parse_class()?,
            '\\' => self.parse_escape()?,
            '^' => {
                self.pos += 1;
                self.graph.kind_fragment(NodeKind::BeginLine)
            }
            '$' => {
                self.pos += 1;
                self.graph.kind_fragment(NodeKind::EndLine)
            }
            c if c.is_control() && !c.is_whitespace() => return Ok(None),
            c => {
                self.pos += c.len_utf8();
                self.graph
                    .payload_fragment(NodeKind::Literal, Payload::new(start, c.len_utf8()))
            }
        };
        Ok(Some(frag))
    }

    fn parse_group(&mut self) -> Result<Fragment> {
        let open = self.pos;
        if self.depth >= MAX_DEPTH {
            return Err(self.error(SyntaxErrorKind::NestingTooDeep, open));
        }

        let capturing = !self.source[open..].starts_with("(?:");
        let index = if capturing {
            self.pos += 1;
            self.group_count += 1;
            Some(self.group_count)
        } else {
            self.pos += 3;
            None
        };

        self.depth += 1;
        let inner = self.parse_expr()?;
        self.depth -= 1;

        if !self.eat(')') {
            let err = SyntaxError::new(SyntaxErrorKind::UnclosedGroup, self.pos, self.source);
            return Err(err.opened_at(open).into());
        }

        Ok(match index {
            Some(index) => self.graph.group(inner, index),
            None => inner,
        })
    }

    /// `[...]`. The payload is everything between the brackets, including a
    /// leading `^`. A `]` right after `[` or `[^` is a member, and `\`
    /// protects the character after it.
    fn parse_class(&mut self) -> Result<Fragment> {
        let open = self.pos;
        let bytes = self.source.as_bytes();

        let mut i = open + 1;
        if bytes.get(i) == Some(&b'^') {
            i += 1;
        }
        if bytes.get(i) == Some(&b']') {
            i += 1;
        }
        while i < bytes.len() && bytes[i] != b']' {
            if bytes[i] == b'\\' {
                i += 1;
            }
            i += 1;
        }
        if i >= bytes.len() {
            return Err(self.error(SyntaxErrorKind::UnterminatedClass, open));
        }

        self.pos = i + 1;
        let payload = Payload::new(open + 1, i - open - 1);
        Ok(self.graph.payload_fragment(NodeKind::Class, payload))
    }

    /// `\X`. What `X` means is decided at match time.
    fn parse_escape(&mut self) -> Result<Fragment> {
        let start = self.pos;
        self.pos += 1;
        let Some(c) = self.bump() else {
            return Err(self.error(SyntaxErrorKind::TrailingEscape, start));
        };
        let payload = Payload::new(start, 1 + c.len_utf8());
        Ok(self.graph.payload_fragment(NodeKind::Escape, payload))
    }

    fn parse_quantifier(&mut self, factor: Fragment) -> Result<Fragment> {
        let start = self.pos;
        let quantifier = match self.peek() {
            Some('*') => Quantifier::Star,
            Some('+') => Quantifier::Plus,
            Some('?') => Quantifier::Optional,
            Some('{') => self.parse_repetition()?,
            _ => return Ok(factor),
        };
        if !matches!(quantifier, Quantifier::Repeat { .. }) {
            self.pos += 1;
        }
        let greedy = !self.eat('?');

        self.check_growth(factor, quantifier, start)?;

        Ok(match quantifier {
            Quantifier::Star => self.graph.star(factor, greedy),
            Quantifier::Plus => self.graph.plus(factor, greedy),
            Quantifier::Optional => self.graph.optional(factor, greedy),
            Quantifier::Repeat { min, max } => self.graph.repeat(factor, min, max, greedy),
        })
    }

    fn parse_repetition(&mut self) -> Result<Quantifier> {
        let open = self.pos;
        self.pos += 1;

        let min = self.parse_count();
        let max = if self.eat(',') {
            if self.peek() == Some('}') {
                Some(None)
            } else {
                self.parse_count().map(Some)
            }
        } else {
            min.map(Some)
        };

        match (min, max) {
            (Some(min), Some(max)) if self.eat('}') && max.is_none_or(|max| max >= min) => {
                Ok(Quantifier::Repeat { min, max })
            }
            _ => Err(self.error(SyntaxErrorKind::InvalidRepetition, open)),
        }
    }

    fn parse_count(&mut self) -> Option<u32> {
        let rest = &self.source[self.pos..];
        let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let value: u32 = rest[..digits].parse().ok()?;
        self.pos += digits;
        (value <= MAX_REPETITION).then_some(value)
    }

    /// Reject quantifiers whose copies would push the graph past `MAX_NODES`.
    fn check_growth(&self, factor: Fragment, quantifier: Quantifier, offset: usize) -> Result<()> {
        let copies = match quantifier {
            Quantifier::Star | Quantifier::Optional => return Ok(()),
            Quantifier::Plus => 2,
            Quantifier::Repeat { min, max } => max.unwrap_or(min) as usize + 1,
        };
        let body = self.graph.reachable(factor.entry).len();
        if self.graph.len() + body * copies * 2 > MAX_NODES {
            return Err(self.error(SyntaxErrorKind::TooLarge, offset));
        }
        Ok(())
    }
}
