//! Behavioural properties that hold for any pattern and text.

use indoc::indoc;

use crate::{Captures, MatchOptions, Regex, RuntimeError, Span};

/// Patterns paired with texts; every pattern is run against every text.
const PATTERNS: &[&str] = &[
    "a*",
    "a*?",
    "(a|b)*c",
    "(a|ab)(c|bcd)(d*)",
    "(a+)+b",
    "(ab|a)(bc|c)?",
    "x(a|b)*?y",
    "[^a-c]+",
    "\\w+\\s*",
    "^ab$",
    "(a)(b)?",
    "a{2,4}",
    "a{1,3}?b",
    "(?:ab){2,}",
    "\\bab\\b",
    "(a|b)\\1",
];

const TEXTS: &[&str] = &["", "a", "aaa", "ab", "abcd", "abab ab", "xababy", "aab\nab", "dd bb"];

fn run(pattern: &str, text: &str, options: MatchOptions) -> Result<Captures, RuntimeError> {
    Regex::new(pattern).unwrap().captures(text, options)
}

#[test]
fn memo_never_changes_results() {
    let option_sets = [
        MatchOptions::empty(),
        MatchOptions::SEARCH,
        MatchOptions::SEARCH | MatchOptions::NOCASE,
        MatchOptions::SEARCH | MatchOptions::SINGLE,
    ];

    for pattern in PATTERNS {
        for text in TEXTS {
            for options in option_sets {
                let memo = run(pattern, text, options).unwrap();
                let normal = run(pattern, text, options | MatchOptions::NORMAL).unwrap();
                assert_eq!(memo, normal, "{pattern} on {text:?} with {options:?}");
            }
        }
    }
}

#[test]
fn memo_agrees_on_nested_quantified_groups() {
    let patterns = [
        "((b*a?)+)+?",
        "(a|b?){0,2}b{0,2}",
        "(a*)+",
        "((a|b)*)*c",
        "(a?)*b",
        "((ab)*|a)*",
        "(a|b?)+",
        r"a?(ab|b)(?:x|\1)$",
        r"(a*)b*\1",
        r"(a|b?){0,2}b{0,2}(\1?)*",
    ];
    let texts = ["", "ab", "abba", "aab", "abab", "aabaa"];

    for pattern in patterns {
        for text in texts {
            for options in [MatchOptions::empty(), MatchOptions::SEARCH] {
                let memo = run(pattern, text, options).unwrap();
                let normal = run(pattern, text, options | MatchOptions::NORMAL).unwrap();
                assert_eq!(memo, normal, "{pattern} on {text:?} with {options:?}");
            }
        }
    }
}

#[test]
fn repeated_calls_agree() {
    let re = Regex::new("(a|b)+(c)?").unwrap();

    let first = re.captures("xxabac", MatchOptions::SEARCH).unwrap();
    for _ in 0..5 {
        assert_eq!(re.captures("xxabac", MatchOptions::SEARCH).unwrap(), first);
    }
}

#[test]
fn shared_regex_across_threads() {
    let re = Regex::new("(a|b)*c").unwrap();
    let expected = re.captures("abac", MatchOptions::empty()).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| re.captures("abac", MatchOptions::empty()).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn greedy_and_lazy_star() {
    let greedy = run("a*", "aaa", MatchOptions::empty()).unwrap();
    assert_eq!(greedy.span(), Some(Span::new(0, 3)));

    let lazy = run("a*?", "aaa", MatchOptions::SEARCH).unwrap();
    assert_eq!(lazy.span(), Some(Span::new(0, 0)));
}

#[test]
fn catastrophic_pattern_is_bounded() {
    let text = "a".repeat(30);

    let caps = run("(a*)*b", &text, MatchOptions::empty()).unwrap();
    assert!(!caps.is_match());

    match run("(a*)*b", &text, MatchOptions::NORMAL) {
        Ok(caps) => assert!(!caps.is_match()),
        Err(err) => assert!(matches!(err, RuntimeError::BacktrackLimit(_))),
    }
}

#[test]
fn optional_group_stays_unset() {
    let caps = run("(a)(b)?", "a", MatchOptions::empty()).unwrap();

    assert_eq!(caps.span(), Some(Span::new(0, 1)));
    assert_eq!(caps.text("a", 1), Some("a"));
    assert_eq!(caps.get(2), None);
}

#[test]
fn backreference() {
    let caps = run("(a|b)\\1", "aa", MatchOptions::empty()).unwrap();
    assert_eq!(caps.length(0), Some(2));

    assert!(!run("(a|b)\\1", "ab", MatchOptions::empty()).unwrap().is_match());
}

#[test]
fn class_negation() {
    assert!(run("[^a-c]", "d", MatchOptions::empty()).unwrap().is_match());
    assert!(!run("[^a-c]", "b", MatchOptions::empty()).unwrap().is_match());
}

#[test]
fn anchors_are_absolute() {
    assert!(run("^abc$", "abc", MatchOptions::empty()).unwrap().is_match());
    assert!(!run("^abc$", "abcd", MatchOptions::empty()).unwrap().is_match());
    assert!(!run("^abc$", "xabc", MatchOptions::SEARCH).unwrap().is_match());
}

#[test]
fn anchors_per_line() {
    let text = indoc! {"
        one
        two
    "};

    let caps = run("^two", text, MatchOptions::SEARCH).unwrap();
    assert_eq!(caps.span(), Some(Span::new(4, 3)));

    let single = MatchOptions::SEARCH | MatchOptions::SINGLE;
    assert!(!run("^two", text, single).unwrap().is_match());
}

#[test]
fn zero_width_iteration_terminates() {
    let caps = run("(a?)*", "b", MatchOptions::SEARCH).unwrap();

    assert_eq!(caps.span(), Some(Span::new(0, 0)));
}

#[test]
fn bounded_repetition_takes_at_most_max() {
    let caps = run("a{2,4}", "aaaaa", MatchOptions::SEARCH).unwrap();
    assert_eq!(caps.span(), Some(Span::new(0, 4)));

    assert!(!run("a{2,4}", "aaaaa", MatchOptions::empty()).unwrap().is_match());
    assert!(run("a{2,4}", "aaa", MatchOptions::empty()).unwrap().is_match());
    assert!(!run("a{2,4}", "a", MatchOptions::empty()).unwrap().is_match());
}
