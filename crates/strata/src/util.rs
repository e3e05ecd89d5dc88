//! Shared helpers for the rankers: graph simplification, rank normalization, id generation and
//! opt-in phase timing.

use crate::graphlib::{Graph, GraphOptions};
use crate::{EdgeLabel, NodeLabel};
use rustc_hash::FxHashMap;
use std::time::Instant;

/// Collapses parallel edges into a single edge per ordered `(v, w)` pair.
///
/// The merged edge keeps the largest `minlen` and the summed `weight`. Edges appear in the order
/// their pair was first seen, so insertion-order tie-breaking downstream is stable.
pub fn simplify<N, G>(g: &Graph<N, EdgeLabel, G>) -> Graph<N, EdgeLabel, G>
where
    N: Default + Clone + 'static,
    G: Default + Clone,
{
    let mut simplified: Graph<N, EdgeLabel, G> = Graph::new(GraphOptions {
        multigraph: false,
        directed: g.is_directed(),
    });
    simplified.set_graph(g.graph().clone());

    for v in g.nodes() {
        if let Some(lbl) = g.node(v) {
            simplified.set_node(v, lbl.clone());
        }
    }

    let mut slot_by_pair: FxHashMap<(&str, &str), usize> = FxHashMap::default();
    let mut merged: Vec<(&str, &str, EdgeLabel)> = Vec::new();
    for e in g.edges() {
        let Some(lbl) = g.edge_by_key(e) else {
            continue;
        };
        let pair = (e.v.as_str(), e.w.as_str());
        match slot_by_pair.get(&pair) {
            Some(&slot) => {
                let entry = &mut merged[slot].2;
                entry.weight += lbl.weight;
                entry.minlen = entry.minlen.max(lbl.minlen);
            }
            None => {
                slot_by_pair.insert(pair, merged.len());
                merged.push((pair.0, pair.1, lbl.clone()));
            }
        }
    }

    for (v, w, lbl) in merged {
        simplified.set_edge_with_label(v, w, lbl);
    }

    simplified
}

/// Shifts ranks so the smallest assigned rank becomes 0. Unranked nodes are left alone.
pub fn normalize_ranks<E, G>(g: &mut Graph<NodeLabel, E, G>)
where
    E: Default + 'static,
    G: Default,
{
    let mut min_rank: Option<i32> = None;
    g.for_each_node(|_id, n| {
        if let Some(rank) = n.rank {
            min_rank = Some(min_rank.map_or(rank, |m| m.min(rank)));
        }
    });
    let Some(min_rank) = min_rank else {
        return;
    };
    g.for_each_node_mut(|_id, n| {
        if let Some(rank) = n.rank {
            n.rank = Some(rank - min_rank);
        }
    });
}

/// Source of fresh identifiers, scoped to whoever owns it.
///
/// Two generators never share state, so concurrent ranking runs cannot observe each other's ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next: usize,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `"{prefix}{n}"` where `n` increments on every call, starting at 1.
    pub fn next_id(&mut self, prefix: &str) -> String {
        self.next += 1;
        format!("{prefix}{}", self.next)
    }
}

fn timing_enabled() -> bool {
    static ENABLED: std::sync::OnceLock<bool> = std::sync::OnceLock::new();
    *ENABLED.get_or_init(|| match std::env::var("STRATA_RANK_TIMING").as_deref() {
        Ok("1") | Ok("true") => true,
        _ => false,
    })
}

/// Runs `f`, reporting its wall time as a `debug` event when `STRATA_RANK_TIMING` is set.
pub fn time<T>(name: &str, f: impl FnOnce() -> T) -> T {
    if !timing_enabled() {
        return f();
    }
    let start = Instant::now();
    let out = f();
    tracing::debug!(
        phase = name,
        elapsed_us = start.elapsed().as_micros() as u64,
        "rank phase finished"
    );
    out
}
