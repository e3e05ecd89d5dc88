//! Cut values of tree edges.
//!
//! Removing a tree edge splits the tree into a tail component (containing the edge's tail) and a
//! head component. The edge's cut value is the total weight of graph edges running from tail
//! to head minus the weight of those running back. A negative cut value means the ranking can
//! be improved by lengthening that edge and tightening another one.

use crate::graphlib::{Graph, alg};
use crate::rank::tree::Tree;
use crate::{EdgeLabel, GraphLabel, NodeLabel};

/// Relative bound below which a summed cut value counts as zero.
const ZERO_CUT_EPSILON: f64 = 1e-9;

/// Computes the cut value of every tree edge. `tree` must be numbered.
///
/// Nodes are visited children-first so every child edge is final before its parent edge reads
/// it. Values within `ZERO_CUT_EPSILON` times the total edge weight of `g` are stored as exactly
/// 0, so rounding noise from fractional weights never reads as a negative cut value.
pub fn init_cut_values(tree: &mut Tree, g: &Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    let Some(root) = tree
        .nodes()
        .find(|v| tree.node(v).is_some_and(|lbl| lbl.parent.is_none()))
        .map(str::to_string)
    else {
        return;
    };

    let total_weight: f64 = g
        .edges()
        .filter_map(|e| g.edge_by_key(e))
        .map(|lbl| lbl.weight.abs())
        .sum();
    let tolerance = total_weight * ZERO_CUT_EPSILON;

    let mut vs = alg::postorder(tree, &[root.as_str()]);
    let _ = vs.pop();
    for v in vs {
        assign_cut_value(tree, g, &v, tolerance);
    }
}

fn assign_cut_value(
    tree: &mut Tree,
    g: &Graph<NodeLabel, EdgeLabel, GraphLabel>,
    child: &str,
    tolerance: f64,
) {
    let Some(parent) = tree.node(child).and_then(|lbl| lbl.parent.clone()) else {
        return;
    };
    let mut cutvalue = calc_cut_value(tree, g, child);
    if cutvalue.abs() <= tolerance {
        cutvalue = 0.0;
    }
    if let Some(edge) = tree.edge_mut(child, &parent, None) {
        edge.cutvalue = cutvalue;
    }
}

/// Cut value of the tree edge between `child` and its parent.
///
/// Only the graph edges incident to `child` are inspected; the contribution of the rest of the
/// child's subtree is folded in through the already computed cut values of its own child edges.
/// Returns 0 for the root or when no graph edge backs the tree edge.
pub fn calc_cut_value(
    tree: &Tree,
    g: &Graph<NodeLabel, EdgeLabel, GraphLabel>,
    child: &str,
) -> f64 {
    let Some(parent) = tree.node(child).and_then(|lbl| lbl.parent.as_deref()) else {
        return 0.0;
    };

    let (child_is_tail, graph_edge) = match g.edge(child, parent, None) {
        Some(e) => (true, e),
        None => match g.edge(parent, child, None) {
            Some(e) => (false, e),
            None => return 0.0,
        },
    };

    let mut cut_value = graph_edge.weight;
    g.for_each_node_edge(child, |e, lbl| {
        let is_out_edge = e.v == child;
        let other = if is_out_edge { e.w.as_str() } else { e.v.as_str() };
        if other == parent {
            return;
        }

        let points_to_head = is_out_edge == child_is_tail;
        cut_value += if points_to_head { lbl.weight } else { -lbl.weight };

        if let Some(tree_edge) = tree.edge(child, other, None) {
            cut_value += if points_to_head {
                -tree_edge.cutvalue
            } else {
                tree_edge.cutvalue
            };
        }
    });

    cut_value
}
