use strata::graphlib::{EdgeKey, Graph, GraphOptions};
use strata::rank::network_simplex::{
    self, calc_cut_value, enter_edge, exchange_edges, init_cut_values, init_low_lim_values,
    leave_edge, update_ranks,
};
use strata::rank::tree::{Tree, TreeEdgeLabel, TreeNodeLabel, is_tight_spanning_tree};
use strata::rank::{feasible_tree, util as rank_util};
use strata::{EdgeLabel, Error, GraphLabel, NodeLabel, util};

fn new_graph() -> Graph<NodeLabel, EdgeLabel, GraphLabel> {
    Graph::new(GraphOptions {
        multigraph: true,
        ..Default::default()
    })
}

fn new_tree() -> Tree {
    Graph::new(GraphOptions {
        directed: false,
        ..Default::default()
    })
}

fn gansner_graph() -> Graph<NodeLabel, EdgeLabel, GraphLabel> {
    let mut g: Graph<NodeLabel, EdgeLabel, GraphLabel> = Graph::new(GraphOptions::default());
    g.set_path(&["a", "b", "c", "d", "h"]);
    g.set_path(&["a", "e", "g", "h"]);
    g.set_path(&["a", "f", "g"]);
    g
}

fn gansner_tree() -> Tree {
    let mut t = new_tree();
    t.set_path(&["a", "b", "c", "d", "h", "g", "e"]);
    t.set_edge("g", "f");
    t
}

fn ranked(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>, ranks: &[(&str, i32)]) {
    for &(v, rank) in ranks {
        g.set_node(v, NodeLabel { rank: Some(rank) });
    }
}

fn ns(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) -> usize {
    let stats = network_simplex::network_simplex(g).unwrap();
    util::normalize_ranks(g);
    stats.pivots
}

fn rank_of(g: &Graph<NodeLabel, EdgeLabel, GraphLabel>, v: &str) -> i32 {
    g.node(v).unwrap().rank.unwrap()
}

fn weighted_span(g: &Graph<NodeLabel, EdgeLabel, GraphLabel>) -> f64 {
    g.edges()
        .map(|e| {
            let lbl = g.edge_by_key(e).unwrap();
            lbl.weight * f64::from(rank_of(g, &e.w) - rank_of(g, &e.v))
        })
        .sum()
}

fn ek(v: &str, w: &str) -> EdgeKey {
    EdgeKey::new(v, w, None::<String>)
}

fn edge(minlen: usize, weight: f64) -> EdgeLabel {
    EdgeLabel { minlen, weight }
}

#[test]
fn network_simplex_can_assign_a_rank_to_a_single_node() {
    let mut g = new_graph();
    g.set_node("a", NodeLabel::default());
    ns(&mut g);
    assert_eq!(rank_of(&g, "a"), 0);
}

#[test]
fn network_simplex_accepts_an_empty_graph() {
    let mut g = new_graph();
    assert_eq!(ns(&mut g), 0);
    assert_eq!(g.node_count(), 0);
}

#[test]
fn network_simplex_can_assign_a_rank_to_a_2_node_connected_graph() {
    let mut g = new_graph();
    g.set_edge("a", "b");
    ns(&mut g);
    assert_eq!(rank_of(&g, "a"), 0);
    assert_eq!(rank_of(&g, "b"), 1);
}

#[test]
fn network_simplex_keeps_a_chain_tight_without_pivoting() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c", "d"]);
    assert_eq!(ns(&mut g), 0);
    assert_eq!(rank_of(&g, "a"), 0);
    assert_eq!(rank_of(&g, "b"), 1);
    assert_eq!(rank_of(&g, "c"), 2);
    assert_eq!(rank_of(&g, "d"), 3);
    assert_eq!(weighted_span(&g), 3.0);
}

#[test]
fn network_simplex_ranks_a_very_long_chain() {
    let mut g = new_graph();
    let n = 100_000;
    for i in 1..n {
        g.set_edge(format!("v{}", i - 1), format!("v{i}"));
    }
    assert_eq!(ns(&mut g), 0);
    assert_eq!(rank_of(&g, "v0"), 0);
    assert_eq!(rank_of(&g, &format!("v{}", n - 1)), n - 1);
}

#[test]
fn network_simplex_can_assign_ranks_for_a_diamond() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "d"]);
    g.set_path(&["a", "c", "d"]);
    ns(&mut g);
    assert_eq!(rank_of(&g, "a"), 0);
    assert_eq!(rank_of(&g, "b"), 1);
    assert_eq!(rank_of(&g, "c"), 1);
    assert_eq!(rank_of(&g, "d"), 2);
    assert_eq!(weighted_span(&g), 4.0);
}

#[test]
fn network_simplex_uses_the_minlen_attribute_on_the_edge() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "d"]);
    g.set_edge("a", "c");
    g.set_edge_with_label("c", "d", edge(2, 1.0));
    ns(&mut g);
    assert_eq!(rank_of(&g, "a"), 0);
    assert_eq!(rank_of(&g, "b"), 2);
    assert_eq!(rank_of(&g, "c"), 1);
    assert_eq!(rank_of(&g, "d"), 3);
}

#[test]
fn network_simplex_can_rank_the_gansner_graph() {
    let mut g = gansner_graph();
    let pivots = ns(&mut g);
    assert!(pivots >= 1);
    assert_eq!(rank_of(&g, "a"), 0);
    assert_eq!(rank_of(&g, "b"), 1);
    assert_eq!(rank_of(&g, "c"), 2);
    assert_eq!(rank_of(&g, "d"), 3);
    assert_eq!(rank_of(&g, "h"), 4);
    assert_eq!(rank_of(&g, "e"), 1);
    assert_eq!(rank_of(&g, "f"), 1);
    assert_eq!(rank_of(&g, "g"), 2);
}

#[test]
fn network_simplex_can_handle_multi_edges() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c", "d"]);
    g.set_edge_with_label("a", "e", edge(1, 2.0));
    g.set_edge("e", "d");
    g.set_edge_named("b", "c", Some("multi"), Some(edge(2, 1.0)));
    ns(&mut g);
    assert_eq!(rank_of(&g, "a"), 0);
    assert_eq!(rank_of(&g, "b"), 1);
    assert_eq!(rank_of(&g, "c"), 3);
    assert_eq!(rank_of(&g, "d"), 4);
    assert_eq!(rank_of(&g, "e"), 1);
}

#[test]
fn network_simplex_shortens_a_heavy_edge_that_longest_path_stretches() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c", "d"]);
    g.set_edge_with_label("a", "e", edge(1, 10.0));
    g.set_edge("e", "d");

    let mut baseline = g.clone();
    rank_util::longest_path(&mut baseline);
    assert_eq!(weighted_span(&baseline), 24.0);

    ns(&mut g);
    assert_eq!(rank_of(&g, "e"), 1);
    assert_eq!(rank_of(&g, "d"), 3);
    assert_eq!(weighted_span(&g), 15.0);
}

#[test]
fn network_simplex_ranks_every_component_of_a_disconnected_graph() {
    let mut g = new_graph();
    g.set_edge("a", "b");
    g.set_path(&["c", "d", "e"]);
    g.set_edge("c", "e");
    g.set_node("f", NodeLabel::default());

    ns(&mut g);

    assert_eq!(g.node_count(), 6);
    assert!(g.nodes().all(|v| g.node(v).unwrap().rank.is_some()));
    assert_eq!(rank_of(&g, "b") - rank_of(&g, "a"), 1);
    assert_eq!(rank_of(&g, "d") - rank_of(&g, "c"), 1);
    assert_eq!(rank_of(&g, "e") - rank_of(&g, "d"), 1);
}

#[test]
fn network_simplex_leaves_the_callers_edges_untouched() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c"]);
    g.set_edge_named("a", "b", Some("x"), Some(edge(2, 3.0)));
    let before: Vec<(EdgeKey, EdgeLabel)> = g
        .edges()
        .map(|e| (e.clone(), g.edge_by_key(e).unwrap().clone()))
        .collect();

    ns(&mut g);

    let after: Vec<(EdgeKey, EdgeLabel)> = g
        .edges()
        .map(|e| (e.clone(), g.edge_by_key(e).unwrap().clone()))
        .collect();
    assert_eq!(before, after);
    assert_eq!(rank_of(&g, "b"), 2);
}

#[test]
fn network_simplex_is_stable_on_its_own_output() {
    let mut g = gansner_graph();
    ns(&mut g);
    let first: Vec<i32> = g.nodes().map(|v| rank_of(&g, v)).collect();

    ns(&mut g);
    let second: Vec<i32> = g.nodes().map(|v| rank_of(&g, v)).collect();
    assert_eq!(first, second);

    // A tight tree built over the optimal ranks has no negative cut value.
    let mut t = feasible_tree::feasible_tree(&mut g);
    let after_tree: Vec<i32> = g.nodes().map(|v| rank_of(&g, v)).collect();
    assert_eq!(first, after_tree);
    init_low_lim_values(&mut t, None);
    init_cut_values(&mut t, &g);
    assert_eq!(leave_edge(&t), None);
}

#[test]
fn leave_edge_returns_none_if_there_is_no_edge_with_a_negative_cutvalue() {
    let mut t = new_tree();
    t.set_edge_with_label("a", "b", TreeEdgeLabel { cutvalue: 1.0 });
    t.set_edge_with_label("b", "c", TreeEdgeLabel { cutvalue: 1.0 });
    assert_eq!(leave_edge(&t), None);
}

#[test]
fn leave_edge_returns_the_first_edge_with_a_negative_cutvalue() {
    let mut t = new_tree();
    t.set_edge_with_label("a", "b", TreeEdgeLabel { cutvalue: 1.0 });
    t.set_edge_with_label("b", "c", TreeEdgeLabel { cutvalue: -1.0 });
    t.set_edge_with_label("c", "d", TreeEdgeLabel { cutvalue: -3.0 });
    assert_eq!(leave_edge(&t), Some(ek("b", "c")));
}

#[test]
fn enter_edge_finds_an_edge_from_the_head_to_tail_component() {
    let mut g = new_graph();
    ranked(&mut g, &[("a", 0), ("b", 2), ("c", 3)]);
    g.set_path(&["a", "b", "c"]);
    g.set_edge("a", "c");

    let mut t = new_tree();
    t.set_path(&["b", "c", "a"]);
    init_low_lim_values(&mut t, Some("c"));

    let f = enter_edge(&t, &g, &ek("b", "c")).unwrap();
    assert_eq!(f, ek("a", "b"));
}

#[test]
fn enter_edge_works_when_the_root_of_the_tree_is_in_the_tail_component() {
    let mut g = new_graph();
    ranked(&mut g, &[("a", 0), ("b", 2), ("c", 3)]);
    g.set_path(&["a", "b", "c"]);
    g.set_edge("a", "c");

    let mut t = new_tree();
    t.set_path(&["b", "c", "a"]);
    init_low_lim_values(&mut t, Some("b"));

    let f = enter_edge(&t, &g, &ek("b", "c")).unwrap();
    assert_eq!(f, ek("a", "b"));
}

#[test]
fn enter_edge_finds_the_edge_with_the_least_slack() {
    let mut g = new_graph();
    ranked(&mut g, &[("a", 0), ("b", 1), ("c", 3), ("d", 4)]);
    g.set_edge("a", "d");
    g.set_path(&["a", "c", "d"]);
    g.set_edge("b", "c");

    let mut t = new_tree();
    t.set_path(&["c", "d", "a", "b"]);
    init_low_lim_values(&mut t, Some("a"));

    let f = enter_edge(&t, &g, &ek("c", "d")).unwrap();
    assert_eq!(f, ek("b", "c"));
}

#[test]
fn enter_edge_finds_an_appropriate_edge_for_the_gansner_graph() {
    for (root, leave) in [
        ("a", ek("g", "h")),
        ("e", ek("g", "h")),
        ("a", ek("h", "g")),
        ("e", ek("h", "g")),
    ] {
        let mut g = gansner_graph();
        let mut t = gansner_tree();
        rank_util::longest_path(&mut g);
        init_low_lim_values(&mut t, Some(root));

        let f = enter_edge(&t, &g, &leave).unwrap();
        assert_eq!(f.v, "a", "root {root}, leaving {leave}");
        assert!(f.w == "e" || f.w == "f", "root {root}, leaving {leave}");
    }
}

#[test]
fn enter_edge_reports_a_cut_with_no_replacement_edge() {
    let mut g = new_graph();
    ranked(&mut g, &[("a", 0), ("b", 1)]);
    g.set_edge("a", "b");

    let mut t = new_tree();
    t.set_edge("a", "b");
    init_low_lim_values(&mut t, Some("a"));

    assert_eq!(
        enter_edge(&t, &g, &ek("a", "b")),
        Err(Error::NoEnterEdge {
            v: "a".to_string(),
            w: "b".to_string(),
        })
    );
}

#[test]
fn init_low_lim_values_assigns_low_lim_and_parent_for_each_node_in_a_tree() {
    let mut t = new_tree();
    for v in ["a", "b", "c", "d", "e"] {
        t.set_node(v, TreeNodeLabel::default());
    }
    t.set_path(&["a", "b", "a", "c", "d", "c", "e"]);

    init_low_lim_values(&mut t, Some("a"));

    let mut lims: Vec<i32> = t.nodes().map(|v| t.node(v).unwrap().lim).collect();
    lims.sort();
    assert_eq!(lims, vec![1, 2, 3, 4, 5]);

    let a = t.node("a").unwrap();
    assert_eq!(a.low, 1);
    assert_eq!(a.lim, 5);
    assert_eq!(a.parent, None);

    let b = t.node("b").unwrap();
    let c = t.node("c").unwrap();
    let d = t.node("d").unwrap();
    let e = t.node("e").unwrap();

    assert_eq!(b.parent.as_deref(), Some("a"));
    assert!(b.lim < a.lim);

    assert_eq!(c.parent.as_deref(), Some("a"));
    assert!(c.lim < a.lim);
    assert_ne!(c.lim, b.lim);

    assert_eq!(d.parent.as_deref(), Some("c"));
    assert!(d.lim < c.lim);

    assert_eq!(e.parent.as_deref(), Some("c"));
    assert!(e.lim < c.lim);
    assert_ne!(e.lim, d.lim);
}

#[test]
fn exchange_edges_exchanges_edges_and_updates_cut_values_and_low_lim_numbers() {
    let mut g = gansner_graph();
    let mut t = gansner_tree();
    rank_util::longest_path(&mut g);
    init_low_lim_values(&mut t, None);

    exchange_edges(&mut t, &mut g, &ek("g", "h"), &ek("a", "e")).unwrap();

    assert_eq!(t.edge("a", "b", None).unwrap().cutvalue, 2.0);
    assert_eq!(t.edge("b", "c", None).unwrap().cutvalue, 2.0);
    assert_eq!(t.edge("c", "d", None).unwrap().cutvalue, 2.0);
    assert_eq!(t.edge("d", "h", None).unwrap().cutvalue, 2.0);
    assert_eq!(t.edge("a", "e", None).unwrap().cutvalue, 1.0);
    assert_eq!(t.edge("e", "g", None).unwrap().cutvalue, 1.0);
    assert_eq!(t.edge("g", "f", None).unwrap().cutvalue, 0.0);
    assert!(!t.has_edge("g", "h", None));

    let mut lims: Vec<i32> = t.nodes().map(|v| t.node(v).unwrap().lim).collect();
    lims.sort();
    assert_eq!(lims, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn exchange_edges_updates_ranks() {
    let mut g = gansner_graph();
    let mut t = gansner_tree();
    rank_util::longest_path(&mut g);
    init_low_lim_values(&mut t, None);

    exchange_edges(&mut t, &mut g, &ek("g", "h"), &ek("a", "e")).unwrap();
    assert!(is_tight_spanning_tree(&t, &g));
    util::normalize_ranks(&mut g);

    assert_eq!(rank_of(&g, "a"), 0);
    assert_eq!(rank_of(&g, "b"), 1);
    assert_eq!(rank_of(&g, "c"), 2);
    assert_eq!(rank_of(&g, "d"), 3);
    assert_eq!(rank_of(&g, "e"), 1);
    assert_eq!(rank_of(&g, "f"), 1);
    assert_eq!(rank_of(&g, "g"), 2);
    assert_eq!(rank_of(&g, "h"), 4);
}

#[test]
fn update_ranks_keeps_the_root_rank_and_follows_edge_direction() {
    let mut g = new_graph();
    ranked(&mut g, &[("r", 5), ("up", 0), ("down", 0)]);
    g.set_edge_with_label("up", "r", edge(2, 1.0));
    g.set_edge_with_label("r", "down", edge(3, 1.0));

    let mut t = new_tree();
    t.set_node("r", TreeNodeLabel::default());
    t.set_edge("r", "up");
    t.set_edge("r", "down");
    init_low_lim_values(&mut t, None);

    update_ranks(&t, &mut g).unwrap();
    assert_eq!(rank_of(&g, "r"), 5);
    assert_eq!(rank_of(&g, "up"), 3);
    assert_eq!(rank_of(&g, "down"), 8);
}

#[test]
fn update_ranks_reports_a_tree_edge_without_a_graph_edge() {
    let mut g = new_graph();
    ranked(&mut g, &[("a", 0), ("b", 0)]);

    let mut t = new_tree();
    t.set_edge("a", "b");
    init_low_lim_values(&mut t, Some("a"));

    assert_eq!(
        update_ranks(&t, &mut g),
        Err(Error::MissingGraphEdge {
            v: "b".to_string(),
            w: "a".to_string(),
        })
    );
}

#[test]
fn calc_cut_value_works_for_a_2_node_tree_with_c_to_p() {
    let mut g = new_graph();
    let mut t = new_tree();
    g.set_path(&["c", "p"]);
    t.set_path(&["p", "c"]);
    init_low_lim_values(&mut t, Some("p"));
    assert_eq!(calc_cut_value(&t, &g, "c"), 1.0);
}

#[test]
fn calc_cut_value_works_for_a_2_node_tree_with_c_from_p() {
    let mut g = new_graph();
    let mut t = new_tree();
    g.set_path(&["p", "c"]);
    t.set_path(&["p", "c"]);
    init_low_lim_values(&mut t, Some("p"));
    assert_eq!(calc_cut_value(&t, &g, "c"), 1.0);
}

#[test]
fn calc_cut_value_is_zero_for_the_root() {
    let mut g = new_graph();
    let mut t = new_tree();
    g.set_path(&["p", "c"]);
    t.set_path(&["p", "c"]);
    init_low_lim_values(&mut t, Some("p"));
    assert_eq!(calc_cut_value(&t, &g, "p"), 0.0);
}

#[test]
fn calc_cut_value_works_for_3_node_trees() {
    // (graph edges, expected cut value of c -- p) with gc -- c carrying cut value 3.
    let cases: [(&[(&str, &str)], f64); 4] = [
        (&[("gc", "c"), ("c", "p")], 3.0),
        (&[("p", "c"), ("gc", "c")], -1.0),
        (&[("c", "p"), ("c", "gc")], -1.0),
        (&[("p", "c"), ("c", "gc")], 3.0),
    ];
    for (edges, expected) in cases {
        let mut g = new_graph();
        for &(v, w) in edges {
            g.set_edge(v, w);
        }
        let mut t = new_tree();
        t.set_edge_with_label("gc", "c", TreeEdgeLabel { cutvalue: 3.0 });
        t.set_edge("p", "c");
        init_low_lim_values(&mut t, Some("p"));
        assert_eq!(calc_cut_value(&t, &g, "c"), expected, "edges {edges:?}");
    }
}

#[test]
fn calc_cut_value_works_for_4_node_tree_gc_to_c_to_p_to_o_with_o_to_c() {
    let mut g = new_graph();
    let mut t = new_tree();
    g.set_edge_with_label("o", "c", edge(1, 7.0));
    g.set_path(&["gc", "c", "p", "o"]);
    t.set_edge_with_label("gc", "c", TreeEdgeLabel { cutvalue: 3.0 });
    t.set_path(&["c", "p", "o"]);
    init_low_lim_values(&mut t, Some("p"));
    assert_eq!(calc_cut_value(&t, &g, "c"), -4.0);
}

#[test]
fn calc_cut_value_works_for_4_node_tree_gc_to_c_to_p_to_o_with_o_from_c() {
    let mut g = new_graph();
    let mut t = new_tree();
    g.set_edge_with_label("c", "o", edge(1, 7.0));
    g.set_path(&["gc", "c", "p", "o"]);
    t.set_edge_with_label("gc", "c", TreeEdgeLabel { cutvalue: 3.0 });
    t.set_path(&["c", "p", "o"]);
    init_low_lim_values(&mut t, Some("p"));
    assert_eq!(calc_cut_value(&t, &g, "c"), 10.0);
}

#[test]
fn calc_cut_value_works_for_4_node_tree_o_to_gc_to_c_to_p_with_o_to_c() {
    let mut g = new_graph();
    let mut t = new_tree();
    g.set_edge_with_label("o", "c", edge(1, 7.0));
    g.set_path(&["o", "gc", "c", "p"]);
    t.set_edge("o", "gc");
    t.set_edge_with_label("gc", "c", TreeEdgeLabel { cutvalue: 3.0 });
    t.set_edge("c", "p");
    init_low_lim_values(&mut t, Some("p"));
    assert_eq!(calc_cut_value(&t, &g, "c"), -4.0);
}

#[test]
fn calc_cut_value_works_for_4_node_tree_gc_to_c_from_p_to_o_with_o_to_c() {
    let mut g = new_graph();
    let mut t = new_tree();
    g.set_edge("gc", "c");
    g.set_edge("p", "c");
    g.set_edge("p", "o");
    g.set_edge_with_label("o", "c", edge(1, 7.0));
    t.set_edge("o", "gc");
    t.set_edge_with_label("gc", "c", TreeEdgeLabel { cutvalue: 3.0 });
    t.set_edge("c", "p");
    init_low_lim_values(&mut t, Some("p"));
    assert_eq!(calc_cut_value(&t, &g, "c"), 6.0);
}

#[test]
fn init_cut_values_works_for_gansner_graph() {
    let mut g = gansner_graph();
    let mut t = gansner_tree();
    rank_util::longest_path(&mut g);
    init_low_lim_values(&mut t, None);
    init_cut_values(&mut t, &g);
    assert_eq!(t.edge("a", "b", None).unwrap().cutvalue, 3.0);
    assert_eq!(t.edge("b", "c", None).unwrap().cutvalue, 3.0);
    assert_eq!(t.edge("c", "d", None).unwrap().cutvalue, 3.0);
    assert_eq!(t.edge("d", "h", None).unwrap().cutvalue, 3.0);
    assert_eq!(t.edge("g", "h", None).unwrap().cutvalue, -1.0);
    assert_eq!(t.edge("e", "g", None).unwrap().cutvalue, 0.0);
    assert_eq!(t.edge("f", "g", None).unwrap().cutvalue, 0.0);
}

#[test]
fn init_cut_values_works_for_updated_gansner_graph() {
    let mut g = gansner_graph();
    let mut t = gansner_tree();
    t.remove_edge("g", "h", None);
    t.set_edge("a", "e");
    rank_util::longest_path(&mut g);
    init_low_lim_values(&mut t, None);
    init_cut_values(&mut t, &g);
    assert_eq!(t.edge("a", "b", None).unwrap().cutvalue, 2.0);
    assert_eq!(t.edge("b", "c", None).unwrap().cutvalue, 2.0);
    assert_eq!(t.edge("c", "d", None).unwrap().cutvalue, 2.0);
    assert_eq!(t.edge("d", "h", None).unwrap().cutvalue, 2.0);
    assert_eq!(t.edge("a", "e", None).unwrap().cutvalue, 1.0);
    assert_eq!(t.edge("e", "g", None).unwrap().cutvalue, 1.0);
    assert_eq!(t.edge("f", "g", None).unwrap().cutvalue, 0.0);
}

#[test]
fn init_cut_values_follows_the_numbering_root() {
    let mut g = gansner_graph();
    let mut t = gansner_tree();
    rank_util::longest_path(&mut g);
    init_low_lim_values(&mut t, Some("h"));
    init_cut_values(&mut t, &g);
    // Cut values describe the partition, not the direction the tree is rooted in.
    assert_eq!(t.edge("g", "h", None).unwrap().cutvalue, -1.0);
    assert_eq!(t.edge("a", "b", None).unwrap().cutvalue, 3.0);
    assert_eq!(t.edge("e", "g", None).unwrap().cutvalue, 0.0);
}
