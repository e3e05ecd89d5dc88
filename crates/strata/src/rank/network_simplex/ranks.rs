use crate::graphlib::{Graph, alg};
use crate::rank::tree::Tree;
use crate::{EdgeLabel, Error, GraphLabel, NodeLabel, Result};

/// Recomputes ranks so every tree edge is tight, keeping the tree root's rank fixed.
///
/// Walks the tree parents-first and places each node exactly `minlen` away from its parent, on
/// the side the backing graph edge points to. `tree` must be numbered.
pub fn update_ranks(tree: &Tree, g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) -> Result<()> {
    let Some(root) = tree
        .nodes()
        .find(|v| tree.node(v).is_some_and(|lbl| lbl.parent.is_none()))
    else {
        return Ok(());
    };

    let vs = alg::preorder(tree, &[root]);
    for v in vs.iter().skip(1) {
        let Some(parent) = tree.node(v).and_then(|lbl| lbl.parent.as_deref()) else {
            continue;
        };

        let (minlen, parent_is_tail) = if let Some(e) = g.edge(v, parent, None) {
            (e.minlen as i32, false)
        } else if let Some(e) = g.edge(parent, v, None) {
            (e.minlen as i32, true)
        } else {
            return Err(Error::MissingGraphEdge {
                v: v.clone(),
                w: parent.to_string(),
            });
        };

        let parent_rank = g.node(parent).and_then(|n| n.rank).unwrap_or(0);
        let rank = if parent_is_tail {
            parent_rank + minlen
        } else {
            parent_rank - minlen
        };
        if let Some(node) = g.node_mut(v) {
            node.rank = Some(rank);
        }
    }
    Ok(())
}
