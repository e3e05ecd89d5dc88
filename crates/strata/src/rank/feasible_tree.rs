//! Feasible tree construction used by the network simplex ranker.

use super::tree::{Tree, TreeNodeLabel};
use super::util::slack;
use crate::graphlib::{Graph, GraphOptions};
use crate::{EdgeLabel, GraphLabel, NodeLabel};

/// Builds a spanning tree of tight edges, shifting ranks of `g` as needed.
///
/// `g` must already carry a feasible ranking (see [`super::util::longest_path`]). The tree grows
/// from the first node: all tight edges reachable from the current tree are absorbed, and when
/// that stalls the whole tree is moved by the smallest slack of any edge leaving it, which makes
/// that edge tight. Ranks stay feasible throughout.
///
/// When `g` is disconnected there is no edge to tighten, so a new tree is started at the first
/// node not yet covered and the result is a forest.
pub fn feasible_tree(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) -> Tree {
    let mut t: Tree = Graph::new(GraphOptions {
        directed: false,
        ..Default::default()
    });

    let Some(start) = g.nodes().next().map(str::to_string) else {
        return t;
    };
    let size = g.node_count();
    t.set_node(start, TreeNodeLabel::default());

    while tight_tree(&mut t, g) < size {
        match find_min_slack_edge(&t, g) {
            Some((slack, tail_in_tree)) => {
                let delta = if tail_in_tree { slack } else { -slack };
                shift_ranks(&t, g, delta);
            }
            None => {
                let Some(next_root) = g.nodes().find(|v| !t.has_node(v)).map(str::to_string)
                else {
                    break;
                };
                t.set_node(next_root, TreeNodeLabel::default());
            }
        }
    }

    t
}

/// Extends `t` with every node reachable over tight edges and returns the tree's node count.
fn tight_tree(t: &mut Tree, g: &Graph<NodeLabel, EdgeLabel, GraphLabel>) -> usize {
    let mut stack: Vec<String> = t.node_ids();
    stack.reverse();
    while let Some(v) = stack.pop() {
        for e in g.node_edges(&v) {
            let w = if e.v == v { &e.w } else { &e.v };
            if t.has_node(w) || slack(g, &e) != 0 {
                continue;
            }
            t.set_edge(v.clone(), w.clone());
            stack.push(w.clone());
        }
    }
    t.node_count()
}

/// The smallest-slack edge with exactly one endpoint in `t`, as `(slack, tail is in t)`.
fn find_min_slack_edge(
    t: &Tree,
    g: &Graph<NodeLabel, EdgeLabel, GraphLabel>,
) -> Option<(i32, bool)> {
    let mut best: Option<(i32, bool)> = None;
    for e in g.edges() {
        let in_v = t.has_node(&e.v);
        if in_v == t.has_node(&e.w) {
            continue;
        }
        let edge_slack = slack(g, e);
        if best.is_none_or(|(best_slack, _)| edge_slack < best_slack) {
            best = Some((edge_slack, in_v));
        }
    }
    best
}

fn shift_ranks(t: &Tree, g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>, delta: i32) {
    for v in t.nodes() {
        if let Some(label) = g.node_mut(v) {
            label.rank = Some(label.rank.unwrap_or(0) + delta);
        }
    }
}
