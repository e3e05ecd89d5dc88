//! Adjacency cache used by [`Graph`](super::Graph).
//!
//! The rankers query incident edges of the same node many times per simplex iteration, and
//! scanning every edge for each query is O(E). The cache is rebuilt lazily after mutations.

use super::entries::EdgeEntry;

#[derive(Debug, Clone)]
pub(in crate::graph) struct AdjCache {
    pub(in crate::graph) generation: u64,
    /// Edge arena indices leaving each node (all incident edges for undirected graphs).
    pub(in crate::graph) out: Vec<Vec<usize>>,
    /// Edge arena indices entering each node (all incident edges for undirected graphs).
    pub(in crate::graph) in_: Vec<Vec<usize>>,
}

impl AdjCache {
    pub(in crate::graph) fn build<E>(
        generation: u64,
        node_count: usize,
        edges: &[EdgeEntry<E>],
        directed: bool,
    ) -> Self {
        let mut out: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let mut in_: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for (edge_ix, e) in edges.iter().enumerate() {
            out[e.v_ix].push(edge_ix);
            in_[e.w_ix].push(edge_ix);
            if !directed && e.v_ix != e.w_ix {
                out[e.w_ix].push(edge_ix);
                in_[e.v_ix].push(edge_ix);
            }
        }
        Self {
            generation,
            out,
            in_,
        }
    }
}
