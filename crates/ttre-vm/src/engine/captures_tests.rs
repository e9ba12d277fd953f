use super::{Captures, Span};

fn sample() -> Captures {
    Captures::new(vec![Some(Span::new(2, 3)), None, Some(Span::new(4, 0))])
}

#[test]
fn no_match_is_empty() {
    let caps = Captures::no_match();

    assert!(!caps.is_match());
    assert!(caps.is_empty());
    assert_eq!(caps.span(), None);
}

#[test]
fn accessors() {
    let caps = sample();

    assert!(caps.is_match());
    assert_eq!(caps.len(), 3);
    assert_eq!(caps.position(0), Some(2));
    assert_eq!(caps.length(0), Some(3));
    assert_eq!(caps.get(1), None);
    assert_eq!(caps.length(2), Some(0));
    assert_eq!(caps.get(9), None);
}

#[test]
fn captured_text() {
    let caps = sample();
    let text = "xyabcz";

    assert_eq!(caps.text(text, 0), Some("abc"));
    assert_eq!(caps.text(text, 1), None);
    assert_eq!(caps.text(text, 2), Some(""));
}

#[test]
fn span_helpers() {
    let span = Span::new(3, 2);

    assert_eq!(span.end(), 5);
    assert_eq!(span.range(), 3..5);
    assert!(!span.is_empty());
    assert!(Span::new(1, 0).is_empty());
}

#[test]
fn iterates_slots_in_order() {
    let caps = sample();

    let starts: Vec<_> = (&caps).into_iter().map(|s| s.map(|s| s.start)).collect();

    assert_eq!(starts, vec![Some(2), None, Some(4)]);
    assert_eq!(caps.iter().count(), 3);
}

#[test]
fn serializes_as_list() {
    let json = serde_json::to_string(&sample()).unwrap();

    insta::assert_snapshot!(json, @r#"[{"start":2,"len":3},null,{"start":4,"len":0}]"#);
}
