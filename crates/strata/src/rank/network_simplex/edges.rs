//! Network simplex edge exchange: `leave_edge` / `enter_edge` / `exchange_edges`.

use super::numbering::within;
use crate::graphlib::{EdgeKey, Graph};
use crate::rank::tree::Tree;
use crate::rank::util::slack;
use crate::{EdgeLabel, Error, GraphLabel, NodeLabel, Result};

/// The first tree edge, in insertion order, with a negative cut value.
pub fn leave_edge(tree: &Tree) -> Option<EdgeKey> {
    tree.edges()
        .find(|e| tree.edge_by_key(e).is_some_and(|lbl| lbl.cutvalue < 0.0))
        .cloned()
}

/// Picks the graph edge that replaces `edge` in the tree.
///
/// Candidates cross the cut that removing `edge` creates, in the direction opposite to `edge`'s
/// graph orientation. Among them the first one with minimal slack wins, which keeps every
/// other tree edge tight after the ranks are shifted.
pub fn enter_edge(
    tree: &Tree,
    g: &Graph<NodeLabel, EdgeLabel, GraphLabel>,
    edge: &EdgeKey,
) -> Result<EdgeKey> {
    let (v, w) = if g.has_edge(&edge.v, &edge.w, None) {
        (edge.v.as_str(), edge.w.as_str())
    } else {
        (edge.w.as_str(), edge.v.as_str())
    };

    let no_enter_edge = || Error::NoEnterEdge {
        v: edge.v.clone(),
        w: edge.w.clone(),
    };
    let (Some(v_label), Some(w_label)) = (tree.node(v), tree.node(w)) else {
        return Err(no_enter_edge());
    };

    // Descendants of `tail_label` form the component that does not contain the root.
    let (tail_label, flip) = if v_label.lim > w_label.lim {
        (w_label, true)
    } else {
        (v_label, false)
    };

    let mut best: Option<(i32, &EdgeKey)> = None;
    for e in g.edges() {
        let (Some(e_v), Some(e_w)) = (tree.node(&e.v), tree.node(&e.w)) else {
            continue;
        };
        let v_desc = within(e_v.lim, tail_label);
        let w_desc = within(e_w.lim, tail_label);
        if flip != v_desc || flip == w_desc {
            continue;
        }

        let edge_slack = slack(g, e);
        if best.is_none_or(|(best_slack, _)| edge_slack < best_slack) {
            best = Some((edge_slack, e));
        }
    }

    best.map(|(_, e)| e.clone()).ok_or_else(no_enter_edge)
}

/// Replaces tree edge `leave` with graph edge `enter`, then renumbers the tree, recomputes every
/// cut value and moves ranks so the new tree is tight.
pub fn exchange_edges(
    tree: &mut Tree,
    g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>,
    leave: &EdgeKey,
    enter: &EdgeKey,
) -> Result<()> {
    tree.remove_edge(&leave.v, &leave.w, None);
    tree.set_edge(enter.v.clone(), enter.w.clone());
    super::init_low_lim_values(tree, None);
    super::init_cut_values(tree, g);
    super::update_ranks(tree, g)
}
