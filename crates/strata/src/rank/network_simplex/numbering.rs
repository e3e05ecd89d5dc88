//! Post-order `(low, lim)` numbering of a spanning tree.

use crate::rank::tree::{Tree, TreeNodeLabel};
use rustc_hash::FxHashSet as HashSet;

#[derive(Debug)]
struct Frame {
    v: String,
    parent: Option<String>,
    low: i32,
    neighbors: Vec<String>,
    next_neighbor: usize,
}

fn neighbors_of(tree: &Tree, v: &str) -> Vec<String> {
    tree.neighbors(v).into_iter().map(str::to_string).collect()
}

/// Numbers the tree rooted at `root` (default: the tree's first node).
///
/// Every reachable node gets `lim`, its position in a post-order walk counting from 1, `low`, the
/// smallest `lim` in its subtree, and `parent`, its neighbor on the path to the root. The walk
/// is iterative so deep trees cannot exhaust the call stack.
pub fn init_low_lim_values(tree: &mut Tree, root: Option<&str>) {
    let Some(root) = root
        .map(str::to_string)
        .or_else(|| tree.nodes().next().map(str::to_string))
    else {
        return;
    };
    if !tree.has_node(&root) {
        return;
    }

    let mut visited: HashSet<String> = HashSet::default();
    let mut numbered: Vec<(String, TreeNodeLabel)> = Vec::with_capacity(tree.node_count());
    let mut next_lim: i32 = 1;

    visited.insert(root.clone());
    let mut stack: Vec<Frame> = vec![Frame {
        neighbors: neighbors_of(tree, &root),
        v: root,
        parent: None,
        low: next_lim,
        next_neighbor: 0,
    }];

    while let Some(top) = stack.last_mut() {
        if let Some(w) = top.neighbors.get(top.next_neighbor).cloned() {
            top.next_neighbor += 1;
            if !visited.insert(w.clone()) {
                continue;
            }
            let parent = top.v.clone();
            stack.push(Frame {
                neighbors: neighbors_of(tree, &w),
                v: w,
                parent: Some(parent),
                low: next_lim,
                next_neighbor: 0,
            });
            continue;
        }

        let Some(frame) = stack.pop() else {
            break;
        };
        numbered.push((
            frame.v,
            TreeNodeLabel {
                low: frame.low,
                lim: next_lim,
                parent: frame.parent,
            },
        ));
        next_lim += 1;
    }

    for (v, label) in numbered {
        if let Some(slot) = tree.node_mut(&v) {
            *slot = label;
        }
    }
}

/// Returns true when `u` lies in the subtree rooted at `v` (a node is its own descendant).
///
/// Relies on the numbering from [`init_low_lim_values`]; unknown nodes are never descendants.
pub fn is_descendant(tree: &Tree, u: &str, v: &str) -> bool {
    match (tree.node(u), tree.node(v)) {
        (Some(u_label), Some(v_label)) => within(u_label.lim, v_label),
        _ => false,
    }
}

pub(super) fn within(lim: i32, root: &TreeNodeLabel) -> bool {
    root.low <= lim && lim <= root.lim
}
