//! Ranking algorithms (network simplex, tight tree, longest path).
//!
//! Every ranker writes `NodeLabel::rank` for each node and keeps every edge at least `minlen`
//! ranks long. Only the network simplex ranker also minimizes the total weighted edge span.

use crate::graphlib::{Graph, alg};
use crate::{EdgeLabel, Error, GraphLabel, NodeLabel, Ranker, Result};

pub mod feasible_tree;
pub mod network_simplex;
pub mod tree;
pub mod util;

/// Ranks `g` in place with the algorithm named by `g.graph().ranker`.
pub fn rank(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) -> Result<()> {
    match g.graph().ranker {
        Ranker::NetworkSimplex => {
            network_simplex::network_simplex(g)?;
        }
        Ranker::TightTree => {
            util::longest_path(g);
            let _ = feasible_tree::feasible_tree(g);
        }
        Ranker::LongestPath => util::longest_path(g),
        Ranker::None => {}
    }
    Ok(())
}

/// Checks the preconditions every ranker relies on: the graph is acyclic, every `minlen` is at
/// least 1 and every `weight` is finite and non-negative.
///
/// The rankers never call this themselves.
pub fn validate(g: &Graph<NodeLabel, EdgeLabel, GraphLabel>) -> Result<()> {
    if let Some(cycle) = alg::find_cycles(g).into_iter().next() {
        return Err(Error::Cycle { nodes: cycle });
    }
    for e in g.edges() {
        let Some(lbl) = g.edge_by_key(e) else {
            continue;
        };
        if lbl.minlen == 0 {
            return Err(Error::InvalidMinlen {
                v: e.v.clone(),
                w: e.w.clone(),
            });
        }
        if !lbl.weight.is_finite() || lbl.weight < 0.0 {
            return Err(Error::InvalidWeight {
                v: e.v.clone(),
                w: e.w.clone(),
                weight: lbl.weight,
            });
        }
    }
    Ok(())
}
