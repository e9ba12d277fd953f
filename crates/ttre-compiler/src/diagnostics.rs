//! Builder-pattern printer for rendering compile errors.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::error::{CompileError, SyntaxErrorKind};

/// Renders a `CompileError` as an annotated snippet of the pattern.
pub struct ErrorPrinter<'e> {
    error: &'e CompileError,
    colored: bool,
}

impl<'e> ErrorPrinter<'e> {
    pub fn new(error: &'e CompileError) -> Self {
        Self {
            error,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.format(&mut out).is_err() {
            return self.error.to_string();
        }
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(err) = self.error.as_syntax() else {
            return write!(w, "error: {}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let source = err.pattern();
        let message = err.kind.to_string();
        let label = label(err.kind);

        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(err.offset, source))
                .label(label),
        );
        if let Some(open) = err.opened_at {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(adjust_range(open, source))
                    .label("group opened here"),
            );
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

fn label(kind: SyntaxErrorKind) -> &'static str {
    match kind {
        SyntaxErrorKind::UnexpectedChar => "cannot appear here",
        SyntaxErrorKind::UnclosedGroup => "expected `)`",
        SyntaxErrorKind::UnterminatedClass => "no matching `]`",
        SyntaxErrorKind::TrailingEscape => "nothing to escape",
        SyntaxErrorKind::InvalidRepetition => "expected `{n}`, `{n,}` or `{n,m}` with n <= m",
        SyntaxErrorKind::NestingTooDeep => "nesting limit reached",
        SyntaxErrorKind::TooLarge => "repetition expands beyond the size limit",
    }
}

/// Point spans are widened to the character under them so the caret shows.
fn adjust_range(offset: usize, source: &str) -> std::ops::Range<usize> {
    let start = offset.min(source.len());
    let width = source
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8);
    start..start + width
}

impl CompileError {
    pub fn printer(&self) -> ErrorPrinter<'_> {
        ErrorPrinter::new(self)
    }
}
