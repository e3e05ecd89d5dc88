//! The core [`Graph`] container.
//!
//! This module contains the arena-backed `Graph` plus a small set of traversal helpers
//! re-exported as `strata_graphlib::alg`.

mod adj_cache;
pub mod alg;
mod edge_key;
mod entries;
mod options;

use adj_cache::AdjCache;
use edge_key::EdgeKeyView;
use entries::{EdgeEntry, NodeEntry};
use rustc_hash::FxBuildHasher;
use std::cell::{Ref, RefCell};
use std::sync::Arc;

pub use edge_key::EdgeKey;
pub use options::GraphOptions;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

type LabelFactory<T> = Arc<dyn Fn() -> T + Send + Sync>;

pub struct Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    options: GraphOptions,

    graph_label: G,
    default_node_label: LabelFactory<N>,
    default_edge_label: LabelFactory<E>,

    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<EdgeKey, usize>,

    // Incident-edge queries dominate the ranking loops. The cache is rebuilt lazily after any
    // structural mutation and uses interior mutability to keep query APIs on `&self`.
    adj_gen: u64,
    adj_cache: RefCell<Option<AdjCache>>,
}

impl<N, E, G> Clone for Graph<N, E, G>
where
    N: Default + Clone + 'static,
    E: Default + Clone + 'static,
    G: Default + Clone,
{
    fn clone(&self) -> Self {
        Self {
            options: self.options,
            graph_label: self.graph_label.clone(),
            default_node_label: Arc::clone(&self.default_node_label),
            default_edge_label: Arc::clone(&self.default_edge_label),
            nodes: self.nodes.clone(),
            node_index: self.node_index.clone(),
            edges: self.edges.clone(),
            edge_index: self.edge_index.clone(),
            adj_gen: self.adj_gen,
            adj_cache: RefCell::new(None),
        }
    }
}

impl<N, E, G> Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            graph_label: G::default(),
            default_node_label: Arc::new(N::default),
            default_edge_label: Arc::new(E::default),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            adj_gen: 0,
            adj_cache: RefCell::new(None),
        }
    }

    fn invalidate_adj(&mut self) {
        self.adj_gen = self.adj_gen.wrapping_add(1);
        *self.adj_cache.get_mut() = None;
    }

    fn adj(&self) -> Ref<'_, AdjCache> {
        let generation = self.adj_gen;
        let stale = self
            .adj_cache
            .borrow()
            .as_ref()
            .is_none_or(|c| c.generation != generation);
        if stale {
            *self.adj_cache.borrow_mut() = Some(AdjCache::build(
                generation,
                self.nodes.len(),
                &self.edges,
                self.options.directed,
            ));
        }
        Ref::map(self.adj_cache.borrow(), |c| {
            c.as_ref()
                .expect("adjacency cache should be present after rebuild")
        })
    }

    fn edge_key_view<'a>(&self, v: &'a str, w: &'a str, name: Option<&'a str>) -> EdgeKeyView<'a> {
        let (v, w) = if self.options.directed || v <= w {
            (v, w)
        } else {
            (w, v)
        };
        let name = if self.options.multigraph { name } else { None };
        EdgeKeyView { v, w, name }
    }

    fn edge_index_of_view(&self, view: EdgeKeyView<'_>) -> Option<usize> {
        self.edge_index.get(&view).copied()
    }

    fn canonicalize_endpoints(&self, v: String, w: String) -> (String, String) {
        if self.options.directed || v <= w {
            (v, w)
        } else {
            (w, v)
        }
    }

    fn canonicalize_name(&self, name: Option<String>) -> Option<String> {
        if self.options.multigraph { name } else { None }
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn is_multigraph(&self) -> bool {
        self.options.multigraph
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    pub fn set_default_node_label<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn() -> N + Send + Sync + 'static,
    {
        self.default_node_label = Arc::new(f);
        self
    }

    pub fn set_default_edge_label<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn() -> E + Send + Sync + 'static,
    {
        self.default_edge_label = Arc::new(f);
        self
    }

    // ---- nodes ----

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            self.nodes[idx].label = label;
            return self;
        }
        self.invalidate_adj();
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.node_index.insert(id, idx);
        self
    }

    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return self;
        }
        let label = (self.default_node_label)();
        self.set_node(id, label)
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx].label)
    }

    /// Arena index of `id`. Indices are dense and stable until a node is removed.
    pub fn node_ix(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub fn node_id_by_ix(&self, ix: usize) -> Option<&str> {
        self.nodes.get(ix).map(|n| n.id.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    pub fn for_each_node<F>(&self, mut f: F)
    where
        F: FnMut(&str, &N),
    {
        for n in &self.nodes {
            f(&n.id, &n.label);
        }
    }

    pub fn for_each_node_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut N),
    {
        for n in &mut self.nodes {
            f(&n.id, &mut n.label);
        }
    }

    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(idx) = self.node_index.remove(id) else {
            return false;
        };

        self.invalidate_adj();
        self.nodes.remove(idx);
        for i in idx..self.nodes.len() {
            if let Some(v) = self.node_index.get_mut(self.nodes[i].id.as_str()) {
                *v = i;
            }
        }

        self.edges.retain(|e| e.v_ix != idx && e.w_ix != idx);
        self.edge_index.clear();
        for (i, e) in self.edges.iter_mut().enumerate() {
            if e.v_ix > idx {
                e.v_ix -= 1;
            }
            if e.w_ix > idx {
                e.w_ix -= 1;
            }
            self.edge_index.insert(e.key.clone(), i);
        }

        true
    }

    // ---- edges ----

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges.iter().map(|e| e.key.clone()).collect()
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, None)
    }

    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, Some(label))
    }

    /// Inserts or updates an edge. A `None` label keeps an existing label, or uses the default
    /// edge label for a new edge. Missing endpoints are created with the default node label.
    pub fn set_edge_named(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
        label: Option<E>,
    ) -> &mut Self {
        let (v, w) = self.canonicalize_endpoints(v.into(), w.into());
        self.ensure_node(v.clone());
        self.ensure_node(w.clone());

        let name = self.canonicalize_name(name.map(Into::into));
        let key = EdgeKey { v, w, name };

        if let Some(&idx) = self.edge_index.get(&key) {
            if let Some(label) = label {
                self.edges[idx].label = label;
            }
            return self;
        }

        self.invalidate_adj();
        let v_ix = self.node_index[key.v.as_str()];
        let w_ix = self.node_index[key.w.as_str()];
        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            key: key.clone(),
            v_ix,
            w_ix,
            label: label.unwrap_or_else(|| (self.default_edge_label)()),
        });
        self.edge_index.insert(key, idx);
        self
    }

    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }

    pub fn has_edge(&self, v: &str, w: &str, name: Option<&str>) -> bool {
        let view = self.edge_key_view(v, w, name);
        self.edge_index_of_view(view).is_some()
    }

    pub fn edge(&self, v: &str, w: &str, name: Option<&str>) -> Option<&E> {
        let view = self.edge_key_view(v, w, name);
        let idx = self.edge_index_of_view(view)?;
        Some(&self.edges[idx].label)
    }

    pub fn edge_mut(&mut self, v: &str, w: &str, name: Option<&str>) -> Option<&mut E> {
        let view = self.edge_key_view(v, w, name);
        let idx = self.edge_index_of_view(view)?;
        Some(&mut self.edges[idx].label)
    }

    pub fn edge_by_key(&self, key: &EdgeKey) -> Option<&E> {
        self.edge(&key.v, &key.w, key.name.as_deref())
    }

    fn remove_edge_at_index(&mut self, idx: usize) {
        self.invalidate_adj();
        let _ = self.edge_index.remove_entry(&self.edges[idx].key);
        self.edges.remove(idx);
        for i in idx..self.edges.len() {
            if let Some(v) = self.edge_index.get_mut(&self.edges[i].key) {
                *v = i;
            }
        }
    }

    pub fn remove_edge(&mut self, v: &str, w: &str, name: Option<&str>) -> bool {
        let view = self.edge_key_view(v, w, name);
        let Some(idx) = self.edge_index_of_view(view) else {
            return false;
        };
        self.remove_edge_at_index(idx);
        true
    }

    // ---- adjacency ----

    fn push_unique<'a>(out: &mut Vec<&'a str>, id: &'a str) {
        if !out.contains(&id) {
            out.push(id);
        }
    }

    pub fn successors(&self, v: &str) -> Vec<&str> {
        let Some(v_ix) = self.node_ix(v) else {
            return Vec::new();
        };
        let adj = self.adj();
        let mut out: Vec<&str> = Vec::with_capacity(adj.out[v_ix].len());
        for &edge_ix in &adj.out[v_ix] {
            let key = &self.edges[edge_ix].key;
            Self::push_unique(&mut out, key.other(v).unwrap_or(key.w.as_str()));
        }
        out
    }

    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        let Some(v_ix) = self.node_ix(v) else {
            return Vec::new();
        };
        let adj = self.adj();
        let mut out: Vec<&str> = Vec::with_capacity(adj.in_[v_ix].len());
        for &edge_ix in &adj.in_[v_ix] {
            let key = &self.edges[edge_ix].key;
            Self::push_unique(&mut out, key.other(v).unwrap_or(key.v.as_str()));
        }
        out
    }

    pub fn neighbors(&self, v: &str) -> Vec<&str> {
        let mut out = self.successors(v);
        for u in self.predecessors(v) {
            Self::push_unique(&mut out, u);
        }
        out
    }

    pub fn out_edges(&self, v: &str, w: Option<&str>) -> Vec<EdgeKey> {
        let mut out: Vec<EdgeKey> = Vec::new();
        self.for_each_out_edge(v, w, |key, _lbl| out.push(key.clone()));
        out
    }

    pub fn in_edges(&self, v: &str, u: Option<&str>) -> Vec<EdgeKey> {
        let mut out: Vec<EdgeKey> = Vec::new();
        self.for_each_in_edge(v, u, |key, _lbl| out.push(key.clone()));
        out
    }

    /// Calls `f` for every edge leaving `v` (optionally only those reaching `w`). For undirected
    /// graphs this visits every incident edge.
    pub fn for_each_out_edge<F>(&self, v: &str, w: Option<&str>, mut f: F)
    where
        F: FnMut(&EdgeKey, &E),
    {
        let Some(v_ix) = self.node_ix(v) else {
            return;
        };
        let adj = self.adj();
        for &edge_ix in &adj.out[v_ix] {
            let e = &self.edges[edge_ix];
            let head = if self.options.directed {
                Some(e.key.w.as_str())
            } else {
                e.key.other(v)
            };
            if w.is_none_or(|w| head == Some(w)) {
                f(&e.key, &e.label);
            }
        }
    }

    /// Calls `f` for every edge entering `v` (optionally only those leaving `u`). For undirected
    /// graphs this visits every incident edge.
    pub fn for_each_in_edge<F>(&self, v: &str, u: Option<&str>, mut f: F)
    where
        F: FnMut(&EdgeKey, &E),
    {
        let Some(v_ix) = self.node_ix(v) else {
            return;
        };
        let adj = self.adj();
        for &edge_ix in &adj.in_[v_ix] {
            let e = &self.edges[edge_ix];
            let tail = if self.options.directed {
                Some(e.key.v.as_str())
            } else {
                e.key.other(v)
            };
            if u.is_none_or(|u| tail == Some(u)) {
                f(&e.key, &e.label);
            }
        }
    }

    /// Calls `f` once for every edge incident to `v`, in edge insertion order.
    pub fn for_each_node_edge<F>(&self, v: &str, mut f: F)
    where
        F: FnMut(&EdgeKey, &E),
    {
        let Some(v_ix) = self.node_ix(v) else {
            return;
        };
        let adj = self.adj();
        let mut incident: Vec<usize> = adj.out[v_ix]
            .iter()
            .chain(adj.in_[v_ix].iter())
            .copied()
            .collect();
        incident.sort_unstable();
        incident.dedup();
        for edge_ix in incident {
            let e = &self.edges[edge_ix];
            f(&e.key, &e.label);
        }
    }

    pub fn node_edges(&self, v: &str) -> Vec<EdgeKey> {
        let mut out: Vec<EdgeKey> = Vec::new();
        self.for_each_node_edge(v, |key, _lbl| out.push(key.clone()));
        out
    }

    /// Nodes without incoming edges. Every node counts as a source in an undirected graph.
    pub fn sources(&self) -> Vec<&str> {
        if !self.options.directed {
            return self.nodes().collect();
        }
        let adj = self.adj();
        self.nodes
            .iter()
            .enumerate()
            .filter(|(ix, _)| adj.in_[*ix].is_empty())
            .map(|(_, n)| n.id.as_str())
            .collect()
    }

    /// Nodes without outgoing edges. Every node counts as a sink in an undirected graph.
    pub fn sinks(&self) -> Vec<&str> {
        if !self.options.directed {
            return self.nodes().collect();
        }
        let adj = self.adj();
        self.nodes
            .iter()
            .enumerate()
            .filter(|(ix, _)| adj.out[*ix].is_empty())
            .map(|(_, n)| n.id.as_str())
            .collect()
    }
}
