use crate::{CompileError, SyntaxErrorKind, compile};

fn syntax_error(pattern: &str) -> (SyntaxErrorKind, usize) {
    match compile(pattern) {
        Err(CompileError::Syntax(err)) => (err.kind, err.offset),
        other => panic!("{pattern:?}: expected syntax error, got {other:?}"),
    }
}

#[test]
fn empty_pattern() {
    assert_eq!(compile(""), Err(CompileError::EmptyPattern));
    assert_eq!(CompileError::EmptyPattern.to_string(), "pattern is empty");
}

#[test]
fn unclosed_group_points_past_content() {
    let Err(CompileError::Syntax(err)) = compile("(ab") else {
        panic!("expected syntax error");
    };

    assert_eq!(err.kind, SyntaxErrorKind::UnclosedGroup);
    assert_eq!(err.offset, 3);
    assert_eq!(err.opened_at, Some(0));
    assert_eq!(err.to_string(), "syntax error at offset 3: unclosed group");
}

#[test]
fn stray_close_paren() {
    assert_eq!(syntax_error("ab)"), (SyntaxErrorKind::UnexpectedChar, 2));
}

#[test]
fn quantifier_without_operand() {
    assert_eq!(syntax_error("*a"), (SyntaxErrorKind::UnexpectedChar, 0));
    assert_eq!(syntax_error("a|+"), (SyntaxErrorKind::UnexpectedChar, 2));
    assert_eq!(syntax_error("{2}"), (SyntaxErrorKind::UnexpectedChar, 0));
}

#[test]
fn stacked_quantifiers() {
    assert_eq!(syntax_error("a**"), (SyntaxErrorKind::UnexpectedChar, 2));
    assert_eq!(syntax_error("a*??"), (SyntaxErrorKind::UnexpectedChar, 3));
}

#[test]
fn unterminated_class() {
    assert_eq!(syntax_error("x[abc"), (SyntaxErrorKind::UnterminatedClass, 1));
    assert_eq!(syntax_error("[]"), (SyntaxErrorKind::UnterminatedClass, 0));
    assert_eq!(syntax_error(r"[a\]"), (SyntaxErrorKind::UnterminatedClass, 0));
}

#[test]
fn trailing_escape() {
    assert_eq!(syntax_error("ab\\"), (SyntaxErrorKind::TrailingEscape, 2));
}

#[test]
fn invalid_repetition() {
    for pattern in ["a{2,1}", "a{x}", "a{2", "a{,3}", "a{2,3", "a{1001}"] {
        assert_eq!(
            syntax_error(pattern),
            (SyntaxErrorKind::InvalidRepetition, 1),
            "{pattern}"
        );
    }
}

#[test]
fn lookaround_is_not_recognized() {
    assert_eq!(syntax_error("(?=a)"), (SyntaxErrorKind::UnclosedGroup, 1));
    assert_eq!(syntax_error("(?<n>a)"), (SyntaxErrorKind::UnclosedGroup, 1));
}

#[test]
fn control_character_is_rejected() {
    assert_eq!(syntax_error("a\u{1}b"), (SyntaxErrorKind::UnexpectedChar, 1));
}

#[test]
fn nesting_limit() {
    let pattern = format!("{}a{}", "(".repeat(300), ")".repeat(300));

    assert_eq!(syntax_error(&pattern), (SyntaxErrorKind::NestingTooDeep, 256));
}

#[test]
fn nested_repetition_too_large() {
    assert_eq!(
        syntax_error("((a{1000}){1000})"),
        (SyntaxErrorKind::TooLarge, 10)
    );
}

#[test]
fn pointer_marks_offset() {
    let Err(CompileError::Syntax(err)) = compile("(ab") else {
        panic!("expected syntax error");
    };

    insta::assert_snapshot!(err.pointer(), @r"
    syntax error: unclosed group
    (ab
       ^
    ");
}

#[test]
fn pointer_counts_characters() {
    let Err(CompileError::Syntax(err)) = compile("é)") else {
        panic!("expected syntax error");
    };

    assert_eq!(err.offset, 2);
    assert_eq!(err.column(), 1);
    assert_eq!(err.pointer(), "syntax error: unexpected character\né)\n ^");
}
