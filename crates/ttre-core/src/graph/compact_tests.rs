use super::*;

#[test]
fn drops_unreachable_template() {
    let mut g = Graph::new();
    let a = g.payload_fragment(NodeKind::Literal, Payload::new(0, 1));
    let frag = g.repeat(a, 2, Some(3), true);

    g.compact(frag.entry);

    insta::assert_snapshot!(g.dump_with_source("a{2,3}"), @r"
    N0: 'a' → N1
    N1: 'a' → N2
    N2: ε → N3, N4
    N3: 'a' → N4
    N4: ε → ∅
    ");
}

#[test]
fn entry_becomes_first_node() {
    let mut g = Graph::new();
    let a = g.payload_fragment(NodeKind::Literal, Payload::new(0, 1));
    let b = g.payload_fragment(NodeKind::Literal, Payload::new(2, 1));
    let frag = g.select(a, b);

    g.compact(frag.entry);

    insta::assert_snapshot!(g.dump_with_source("a|b"), @r"
    N0: ε → N1, N3
    N1: 'a' → N2
    N2: ε → ∅
    N3: 'b' → N2
    ");
}

#[test]
fn keeps_cycles() {
    let mut g = Graph::new();
    let a = g.payload_fragment(NodeKind::Literal, Payload::new(0, 1));
    let frag = g.star(a, true);

    g.compact(frag.entry);

    insta::assert_snapshot!(g.dump_with_source("a*"), @r"
    N0: ε → N1, N4
    N1: LoopEntry → N2, N3
    N2: 'a' → N3
    N3: LoopExit → N1, N4
    N4: ε → ∅
    ");
}

#[test]
fn reachable_lists_live_nodes() {
    let mut g = Graph::new();
    let a = g.payload_fragment(NodeKind::Literal, Payload::new(0, 1));
    let frag = g.plus(a, true);

    assert_eq!(g.reachable(frag.entry), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(g.reachable(a.entry), vec![0, 3, 4, 5]);
}
