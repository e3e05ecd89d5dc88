//! Network simplex ranker.
//!
//! Starts from a feasible tight spanning tree and repeatedly swaps a tree edge with a negative
//! cut value for the minimum-slack non-tree edge crossing the same cut, until no cut value is
//! negative. The ranks of the final tree minimize the total weighted edge span.
//!
//! After every exchange the tree is renumbered, every cut value is recomputed and every rank is
//! reassigned from scratch.

use super::{feasible_tree, tree, util};
use crate::graphlib::{Graph, alg};
use crate::util::{IdGenerator, simplify, time};
use crate::{EdgeLabel, GraphLabel, NodeLabel, Result};

mod cut_values;
mod edges;
mod numbering;
mod ranks;

pub use cut_values::{calc_cut_value, init_cut_values};
pub use edges::{enter_edge, exchange_edges, leave_edge};
pub use numbering::{init_low_lim_values, is_descendant};
pub use ranks::update_ranks;

/// Summary of one [`network_simplex`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplexStats {
    /// Number of leave/enter exchanges performed.
    pub pivots: usize,
}

/// Assigns optimal ranks to every node of `g`.
///
/// Parallel edges are merged first (see [`simplify`]) and disconnected components are linked
/// through a temporary weight-0 root, so the caller's graph only ever sees its `rank` labels
/// change. Ranks are not normalized.
pub fn network_simplex(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) -> Result<SimplexStats> {
    tracing::debug!(
        nodes = g.node_count(),
        edges = g.edge_count(),
        "network simplex start"
    );

    let mut simplified = time("simplify", || simplify(g));
    let synthetic_root = connect_components(&mut simplified);

    time("longest_path", || util::longest_path(&mut simplified));
    let mut t = time("feasible_tree", || feasible_tree::feasible_tree(&mut simplified));
    init_low_lim_values(&mut t, None);
    init_cut_values(&mut t, &simplified);

    let pivots = time("pivot", || -> Result<usize> {
        let mut pivots = 0;
        while let Some(leave) = leave_edge(&t) {
            let enter = enter_edge(&t, &simplified, &leave)?;
            tracing::trace!(%leave, %enter, "exchange tree edge");
            exchange_edges(&mut t, &mut simplified, &leave, &enter)?;
            debug_assert!(
                tree::is_tight_spanning_tree(&t, &simplified),
                "tree is no longer a tight spanning tree after exchanging {leave} for {enter}"
            );
            pivots += 1;
        }
        Ok(pivots)
    })?;

    if let Some(root) = synthetic_root {
        simplified.remove_node(&root);
    }
    for v in simplified.nodes() {
        let rank = simplified.node(v).and_then(|n| n.rank);
        if let (Some(rank), Some(label)) = (rank, g.node_mut(v)) {
            label.rank = Some(rank);
        }
    }

    tracing::debug!(pivots, "network simplex done");
    Ok(SimplexStats { pivots })
}

/// Links every weakly connected component of `g` to a fresh root with a weight-0, minlen-1
/// edge, so a single spanning tree exists. Returns the root's id, or `None` when `g` is already
/// connected.
fn connect_components(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) -> Option<String> {
    let components = alg::components(g);
    if components.len() <= 1 {
        return None;
    }

    let mut ids = IdGenerator::new();
    let root = loop {
        let id = ids.next_id("_root");
        if !g.has_node(&id) {
            break id;
        }
    };
    g.set_node(root.clone(), NodeLabel::default());
    for component in &components {
        if let Some(first) = component.first() {
            g.set_edge_with_label(
                root.clone(),
                first.clone(),
                EdgeLabel {
                    minlen: 1,
                    weight: 0.0,
                },
            );
        }
    }
    tracing::trace!(
        root = %root,
        components = components.len(),
        "linked disconnected components"
    );
    Some(root)
}
