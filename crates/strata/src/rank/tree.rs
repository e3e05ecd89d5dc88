//! Spanning-tree labels used by the feasible tree and network simplex rankers.

use super::util::slack;
use crate::graphlib::{Graph, alg};
use crate::{EdgeLabel, GraphLabel, NodeLabel};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeNodeLabel {
    pub low: i32,
    pub lim: i32,
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeEdgeLabel {
    pub cutvalue: f64,
}

/// Undirected spanning tree over the nodes of a ranked graph.
pub type Tree = Graph<TreeNodeLabel, TreeEdgeLabel, ()>;

/// Returns true when `t` spans every node of `g` with exactly `|V| - 1` edges, is connected, and
/// each of its edges is backed by a tight graph edge.
pub fn is_tight_spanning_tree(t: &Tree, g: &Graph<NodeLabel, EdgeLabel, GraphLabel>) -> bool {
    let n = g.node_count();
    if t.node_count() != n || !g.nodes().all(|v| t.has_node(v)) {
        return false;
    }
    if n == 0 {
        return t.edge_count() == 0;
    }
    if t.edge_count() != n - 1 {
        return false;
    }
    let Some(root) = t.nodes().next() else {
        return false;
    };
    if alg::preorder(t, &[root]).len() != n {
        return false;
    }
    t.edges().all(|e| {
        g.out_edges(&e.v, Some(&e.w))
            .into_iter()
            .chain(g.out_edges(&e.w, Some(&e.v)))
            .next()
            .is_some_and(|key| slack(g, &key) == 0)
    })
}
