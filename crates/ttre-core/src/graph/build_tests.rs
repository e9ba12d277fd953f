//! Tests for Graph construction and fragment combinators.

use super::*;

fn literal(g: &mut Graph, offset: usize) -> Fragment {
    g.payload_fragment(NodeKind::Literal, Payload::new(offset, 1))
}

#[test]
fn epsilon_fragment() {
    let mut g = Graph::new();

    let frag = g.epsilon_fragment();

    assert_eq!(frag.entry, frag.exit);
    insta::assert_snapshot!(g.dump(), @r"
    N0: ε → ∅
    ");
}

#[test]
fn payload_without_source() {
    let mut g = Graph::new();

    g.payload_fragment(NodeKind::Class, Payload::new(1, 3));

    insta::assert_snapshot!(g.dump(), @r"
    N0: [@1+3] → ∅
    ");
}

#[test]
fn concat_two() {
    let mut g = Graph::new();
    let a = literal(&mut g, 0);
    let b = literal(&mut g, 1);

    let frag = g.concat(a, b);

    assert_eq!(frag, Fragment::new(a.entry, b.exit));
    insta::assert_snapshot!(g.dump_with_source("ab"), @r"
    N0: 'a' → N1
    N1: 'b' → ∅
    ");
}

#[test]
fn sequence_empty() {
    let mut g = Graph::new();

    let frag = g.sequence(&[]);

    assert_eq!(frag.entry, frag.exit);
    assert_eq!(g.len(), 1);
}

#[test]
fn sequence_three() {
    let mut g = Graph::new();
    let a = literal(&mut g, 0);
    let b = literal(&mut g, 1);
    let c = literal(&mut g, 2);

    let frag = g.sequence(&[a, b, c]);

    assert_eq!(frag, Fragment::new(a.entry, c.exit));
    insta::assert_snapshot!(g.dump_with_source("abc"), @r"
    N0: 'a' → N1
    N1: 'b' → N2
    N2: 'c' → ∅
    ");
}

#[test]
fn select_joins_on_shared_exit() {
    let mut g = Graph::new();
    let a = literal(&mut g, 0);
    let b = literal(&mut g, 2);

    let frag = g.select(a, b);

    assert_eq!(frag, Fragment::new(2, 3));
    insta::assert_snapshot!(g.dump_with_source("a|b"), @r"
    N0: 'a' → N3
    N1: 'b' → N3
    N2: ε → N0, N1
    N3: ε → ∅
    ");
}

#[test]
fn group_wraps_inner() {
    let mut g = Graph::new();
    let a = literal(&mut g, 1);

    let frag = g.group(a, 1);

    assert_eq!(frag, Fragment::new(1, 2));
    insta::assert_snapshot!(g.dump_with_source("(a)"), @r"
    N0: 'a' → N2
    N1: Group(1) → N0
    N2: EndGroup(1) → ∅
    ");
}

#[test]
fn star_greedy() {
    let mut g = Graph::new();
    let a = literal(&mut g, 0);

    let frag = g.star(a, true);

    assert_eq!(frag, Fragment::new(1, 4));
    insta::assert_snapshot!(g.dump_with_source("a*"), @r"
    N0: 'a' → N3
    N1: ε → N2, N4
    N2: LoopEntry → N0, N3
    N3: LoopExit → N2, N4
    N4: ε → ∅
    ");
}

#[test]
fn star_lazy() {
    let mut g = Graph::new();
    let a = literal(&mut g, 0);

    g.star(a, false);

    insta::assert_snapshot!(g.dump_with_source("a*?"), @r"
    N0: 'a' → N3
    N1: ε → N4, N2
    N2: LoopEntry → N0, N3
    N3: LoopExit → N4, N2
    N4: ε → ∅
    ");
}

#[test]
fn plus_copies_first_iteration() {
    let mut g = Graph::new();
    let a = literal(&mut g, 0);

    let frag = g.plus(a, true);

    assert_eq!(frag, Fragment::new(1, 5));
    insta::assert_snapshot!(g.dump_with_source("a+"), @r"
    N0: 'a' → N4
    N1: 'a' → N2
    N2: ε → N3, N5
    N3: LoopEntry → N0, N4
    N4: LoopExit → N3, N5
    N5: ε → ∅
    ");
}

#[test]
fn optional_greedy() {
    let mut g = Graph::new();
    let a = literal(&mut g, 0);

    g.optional(a, true);

    insta::assert_snapshot!(g.dump_with_source("a?"), @r"
    N0: 'a' → N3
    N1: ε → N3
    N2: ε → N0, N1
    N3: ε → ∅
    ");
}

#[test]
fn optional_lazy() {
    let mut g = Graph::new();
    let a = literal(&mut g, 0);

    g.optional(a, false);

    insta::assert_snapshot!(g.dump_with_source("a??"), @r"
    N0: 'a' → N3
    N1: ε → N3
    N2: ε → N1, N0
    N3: ε → ∅
    ");
}

#[test]
fn repeat_bounded_builds_switch_chain() {
    let mut g = Graph::new();
    let a = literal(&mut g, 0);

    let frag = g.repeat(a, 2, Some(3), true);

    assert_eq!(frag, Fragment::new(1, 3));
    insta::assert_snapshot!(g.dump_with_source("a{2,3}"), @r"
    N0: 'a' → ∅
    N1: 'a' → N2
    N2: 'a' → N4
    N3: ε → ∅
    N4: ε → N5, N3
    N5: 'a' → N3
    ");
}

#[test]
fn repeat_bounded_lazy_prefers_final() {
    let mut g = Graph::new();
    let a = literal(&mut g, 0);

    g.repeat(a, 0, Some(1), false);

    insta::assert_snapshot!(g.dump_with_source("a{0,1}?"), @r"
    N0: 'a' → ∅
    N1: ε → N3
    N2: ε → ∅
    N3: ε → N2, N4
    N4: 'a' → N2
    ");
}

#[test]
fn repeat_open_ended_appends_star() {
    let mut g = Graph::new();
    let a = literal(&mut g, 0);

    let frag = g.repeat(a, 1, None, true);

    assert_eq!(frag, Fragment::new(1, 5));
    insta::assert_snapshot!(g.dump_with_source("a{1,}"), @r"
    N0: 'a' → N4
    N1: 'a' → N2
    N2: ε → N3, N5
    N3: LoopEntry → N0, N4
    N4: LoopExit → N3, N5
    N5: ε → ∅
    ");
}

#[test]
fn repeat_exact_zero_is_epsilon() {
    let mut g = Graph::new();
    let a = literal(&mut g, 0);

    let frag = g.repeat(a, 0, Some(0), true);

    assert_eq!(frag.entry, frag.exit);
    assert_eq!(g.node(frag.entry).kind, NodeKind::Epsilon);
}
