use indoc::indoc;

use crate::{CompileError, compile};

fn render(pattern: &str) -> String {
    match compile(pattern) {
        Err(err) => err.printer().render(),
        Ok(_) => panic!("{pattern:?} unexpectedly compiled"),
    }
}

#[test]
fn unclosed_group_shows_both_ends() {
    let out = render("(ab");

    assert!(out.starts_with("error: unclosed group"), "{out}");
    assert!(out.contains("(ab"), "{out}");
    assert!(out.contains("expected `)`"), "{out}");
    assert!(out.contains("group opened here"), "{out}");
}

#[test]
fn invalid_repetition_label() {
    let out = render("a{3,1}");

    assert!(out.starts_with("error: invalid repetition"), "{out}");
    assert!(out.contains("with n <= m"), "{out}");
}

#[test]
fn multibyte_offset_renders() {
    let out = render("é[");

    assert!(out.contains("unterminated character class"), "{out}");
}

#[test]
fn non_syntax_errors_render_plainly() {
    let out = CompileError::EmptyPattern.printer().render();

    assert_eq!(
        out,
        indoc! {"
            error: pattern is empty"}
    );
}

#[test]
fn colored_output_has_escapes() {
    let Err(err) = compile("ab)") else {
        panic!("expected error");
    };

    let out = err.printer().colored(true).render();

    assert!(out.contains("\x1b["), "{out}");
}
