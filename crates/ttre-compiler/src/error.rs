//! Compile error types.

use std::fmt;

/// What went wrong while parsing a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// A character that cannot start or continue a term at this point:
    /// a stray `)`, a quantifier with nothing to repeat, a control character.
    #[error("unexpected character")]
    UnexpectedChar,

    #[error("unclosed group")]
    UnclosedGroup,

    #[error("unterminated character class")]
    UnterminatedClass,

    #[error("escape at end of pattern")]
    TrailingEscape,

    /// Malformed `{n}`, `{n,}` or `{n,m}`, `m < n`, or a count above the limit.
    #[error("invalid repetition")]
    InvalidRepetition,

    /// Groups nested beyond the parser's depth limit.
    #[error("groups nested too deeply")]
    NestingTooDeep,

    /// Quantifier copies would grow the graph past its size limit.
    #[error("pattern too large")]
    TooLarge,
}

/// A pattern that failed to parse, with the offset of the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// Byte offset into the pattern.
    pub offset: usize,
    /// Byte offset of the construct the error belongs to, when it started
    /// elsewhere (the `(` of an unclosed group).
    pub opened_at: Option<usize>,
    pattern: String,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, offset: usize, pattern: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            opened_at: None,
            pattern: pattern.into(),
        }
    }

    pub fn opened_at(mut self, offset: usize) -> Self {
        self.opened_at = Some(offset);
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Character column of the failure, for caret placement.
    pub fn column(&self) -> usize {
        let end = self.offset.min(self.pattern.len());
        self.pattern
            .get(..end)
            .map_or(end, |prefix| prefix.chars().count())
    }

    /// The pattern with a caret under the offending position:
    ///
    /// ```text
    /// syntax error: unclosed group
    /// (ab
    ///    ^
    /// ```
    pub fn pointer(&self) -> String {
        format!(
            "syntax error: {}\n{}\n{}^",
            self.kind,
            self.pattern,
            " ".repeat(self.column())
        )
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error at offset {}: {}", self.offset, self.kind)
    }
}

impl std::error::Error for SyntaxError {}

/// Errors that can occur during compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("pattern is empty")]
    EmptyPattern,

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl CompileError {
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::EmptyPattern => None,
        }
    }
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, CompileError>;
