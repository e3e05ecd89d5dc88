//! Rank helpers (longest-path, slack).

use crate::graphlib::{EdgeKey, Graph};
use crate::{EdgeLabel, GraphLabel, NodeLabel};
use rustc_hash::{FxHashMap, FxHashSet};

/// A node whose successors are still being ranked.
struct Pending {
    v: String,
    out: Vec<EdgeKey>,
    next_out: usize,
    rank: Option<i32>,
}

impl Pending {
    fn new(g: &Graph<NodeLabel, EdgeLabel, GraphLabel>, v: String) -> Self {
        let out = g.out_edges(&v, None);
        Self {
            v,
            out,
            next_out: 0,
            rank: None,
        }
    }

    fn lower_to(&mut self, candidate: i32) {
        self.rank = Some(self.rank.map_or(candidate, |rank| rank.min(candidate)));
    }
}

/// Assigns every node the latest rank it can take when ranks are counted down from the sinks:
/// sinks get 0 and every other node sits `minlen` above its lowest successor.
///
/// The result is feasible but typically stretches edges from sources. The input must be
/// acyclic; an edge closing a cycle is ignored. Traversal keeps its own stack, so path length
/// is not limited by the call stack.
pub fn longest_path(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    let mut ranked: FxHashMap<String, i32> = FxHashMap::default();
    let mut active: FxHashSet<String> = FxHashSet::default();

    let sources: Vec<String> = g.sources().into_iter().map(str::to_string).collect();
    for source in sources {
        if ranked.contains_key(&source) {
            continue;
        }
        active.insert(source.clone());
        let mut stack = vec![Pending::new(g, source)];

        while let Some(top) = stack.last_mut() {
            if let Some(e) = top.out.get(top.next_out) {
                if let Some(&w_rank) = ranked.get(&e.w) {
                    let minlen = g.edge_by_key(e).map_or(1, |lbl| lbl.minlen as i32);
                    top.lower_to(w_rank - minlen);
                    top.next_out += 1;
                } else if active.contains(&e.w) {
                    top.next_out += 1;
                } else {
                    let w = e.w.clone();
                    active.insert(w.clone());
                    stack.push(Pending::new(g, w));
                }
                continue;
            }

            let Some(done) = stack.pop() else {
                break;
            };
            let rank = done.rank.unwrap_or(0);
            if let Some(label) = g.node_mut(&done.v) {
                label.rank = Some(rank);
            }
            active.remove(&done.v);
            ranked.insert(done.v, rank);
        }
    }
}

/// How much longer the edge `e` is than its `minlen`. Missing ranks count as 0.
pub fn slack(g: &Graph<NodeLabel, EdgeLabel, GraphLabel>, e: &EdgeKey) -> i32 {
    let w_rank = g.node(&e.w).and_then(|n| n.rank).unwrap_or(0);
    let v_rank = g.node(&e.v).and_then(|n| n.rank).unwrap_or(0);
    let minlen = g.edge_by_key(e).map_or(1, |lbl| lbl.minlen as i32);
    w_rank - v_rank - minlen
}
