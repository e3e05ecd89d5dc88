//! Traversal helpers over [`Graph`].

use super::Graph;
use rustc_hash::FxHashSet as HashSet;
use std::collections::{BTreeMap, VecDeque};

/// Depth-first preorder from each root in turn, following successors. Nodes reachable from an
/// earlier root are not revisited.
pub fn preorder<N, E, G>(g: &Graph<N, E, G>, roots: &[&str]) -> Vec<String>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    let mut visited: HashSet<String> = HashSet::default();
    let mut out: Vec<String> = Vec::new();
    for &root in roots {
        if !g.has_node(root) || visited.contains(root) {
            continue;
        }
        let mut stack: Vec<String> = vec![root.to_string()];
        while let Some(v) = stack.pop() {
            if !visited.insert(v.clone()) {
                continue;
            }
            // Push in reverse so the first successor is expanded first.
            for w in g.successors(&v).into_iter().rev() {
                if !visited.contains(w) {
                    stack.push(w.to_string());
                }
            }
            out.push(v);
        }
    }
    out
}

/// Depth-first postorder from each root in turn, following successors.
pub fn postorder<N, E, G>(g: &Graph<N, E, G>, roots: &[&str]) -> Vec<String>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    let mut visited: HashSet<String> = HashSet::default();
    let mut out: Vec<String> = Vec::new();
    for &root in roots {
        if !g.has_node(root) || !visited.insert(root.to_string()) {
            continue;
        }
        // (node, successors, next successor index)
        let mut stack: Vec<(String, Vec<String>, usize)> = vec![(
            root.to_string(),
            g.successors(root).into_iter().map(str::to_string).collect(),
            0,
        )];
        while let Some((_, succ, next)) = stack.last_mut() {
            if let Some(w) = succ.get(*next).cloned() {
                *next += 1;
                if visited.insert(w.clone()) {
                    let ws = g.successors(&w).into_iter().map(str::to_string).collect();
                    stack.push((w, ws, 0));
                }
                continue;
            }
            if let Some((v, _, _)) = stack.pop() {
                out.push(v);
            }
        }
    }
    out
}

/// Weakly connected components, each listed in BFS order from its first node (by insertion).
pub fn components<N, E, G>(g: &Graph<N, E, G>) -> Vec<Vec<String>>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    let mut seen: HashSet<String> = HashSet::default();
    let mut out: Vec<Vec<String>> = Vec::new();

    for start in g.nodes() {
        if !seen.insert(start.to_string()) {
            continue;
        }
        let mut comp: Vec<String> = Vec::new();
        let mut q: VecDeque<String> = VecDeque::new();
        q.push_back(start.to_string());
        while let Some(v) = q.pop_front() {
            for n in g.neighbors(&v) {
                if seen.insert(n.to_string()) {
                    q.push_back(n.to_string());
                }
            }
            comp.push(v);
        }
        out.push(comp);
    }

    out
}

/// Strongly connected components that form cycles: SCCs with more than one node, plus nodes
/// with a self-loop. Members are listed in node insertion order.
pub fn find_cycles<N, E, G>(g: &Graph<N, E, G>) -> Vec<Vec<String>>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    struct Tarjan<'a, N, E, G>
    where
        N: Default + 'static,
        E: Default + 'static,
        G: Default,
    {
        g: &'a Graph<N, E, G>,
        index: usize,
        stack: Vec<usize>,
        on_stack: Vec<bool>,
        indices: Vec<Option<usize>>,
        lowlink: Vec<usize>,
        sccs: Vec<Vec<usize>>,
    }

    impl<N, E, G> Tarjan<'_, N, E, G>
    where
        N: Default + 'static,
        E: Default + 'static,
        G: Default,
    {
        fn strongconnect(&mut self, v_ix: usize) {
            self.indices[v_ix] = Some(self.index);
            self.lowlink[v_ix] = self.index;
            self.index += 1;
            self.stack.push(v_ix);
            self.on_stack[v_ix] = true;

            let Some(v) = self.g.node_id_by_ix(v_ix) else {
                return;
            };
            let succ: Vec<usize> = self
                .g
                .successors(v)
                .into_iter()
                .filter_map(|w| self.g.node_ix(w))
                .collect();
            for w_ix in succ {
                match self.indices[w_ix] {
                    None => {
                        self.strongconnect(w_ix);
                        self.lowlink[v_ix] = self.lowlink[v_ix].min(self.lowlink[w_ix]);
                    }
                    Some(w_index) if self.on_stack[w_ix] => {
                        self.lowlink[v_ix] = self.lowlink[v_ix].min(w_index);
                    }
                    Some(_) => {}
                }
            }

            if Some(self.lowlink[v_ix]) == self.indices[v_ix] {
                let mut scc: Vec<usize> = Vec::new();
                while let Some(w_ix) = self.stack.pop() {
                    self.on_stack[w_ix] = false;
                    scc.push(w_ix);
                    if w_ix == v_ix {
                        break;
                    }
                }
                self.sccs.push(scc);
            }
        }
    }

    let n = g.node_count();
    let mut tarjan = Tarjan {
        g,
        index: 0,
        stack: Vec::new(),
        on_stack: vec![false; n],
        indices: vec![None; n],
        lowlink: vec![0; n],
        sccs: Vec::new(),
    };
    for v_ix in 0..n {
        if tarjan.indices[v_ix].is_none() {
            tarjan.strongconnect(v_ix);
        }
    }

    let mut cycles: Vec<Vec<String>> = Vec::new();
    for mut scc in tarjan.sccs {
        let is_cycle = scc.len() > 1
            || g
                .node_id_by_ix(scc[0])
                .is_some_and(|v| g.is_directed() && !g.out_edges(v, Some(v)).is_empty());
        if !is_cycle {
            continue;
        }
        scc.sort_unstable();
        cycles.push(
            scc.into_iter()
                .filter_map(|ix| g.node_id_by_ix(ix).map(str::to_string))
                .collect(),
        );
    }

    let order: BTreeMap<&str, usize> = g.nodes().enumerate().map(|(i, v)| (v, i)).collect();
    cycles.sort_by_key(|c| c.first().and_then(|v| order.get(v.as_str()).copied()));
    cycles
}

pub fn is_acyclic<N, E, G>(g: &Graph<N, E, G>) -> bool
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    find_cycles(g).is_empty()
}
