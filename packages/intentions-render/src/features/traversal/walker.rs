//! Preorder traversal with parent tracking
//!
//! Ids in the arena are assigned while lowering (children first), so the
//! visit order has to be recovered by walking from the root. Parents are
//! stored as an index array aligned with the arena.

use crate::errors::{IntentionsError, Result};
use crate::features::parsing::domain::{NodeData, NodeId, SyntaxTree};

/// Result of one full walk; read-only once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    order: Vec<NodeId>,
    parents: Vec<Option<NodeId>>,
}

impl Traversal {
    /// Every reachable node, each before any of its descendants
    pub fn nodes(&self) -> &[NodeId] {
        &self.order
    }

    /// Parent of `id`; `None` for the root and for unreachable ids
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Walk `tree` from its root in preorder
///
/// Children are visited in declaration order. A child's parent is recorded
/// the first time the child is seen and never overwritten; a node already
/// visited is not visited again.
///
/// # Errors
/// `Parse` when the tree has no root, the root id is outside the arena, or
/// the root is not a module. The line is the root's when it exists, else 0.
pub fn traverse(tree: &SyntaxTree) -> Result<Traversal> {
    let file = tree.file_path();
    let root = tree
        .root()
        .ok_or_else(|| IntentionsError::parse(file, 0, 0, "tree has no root"))?;

    let root_node = tree.get(root).ok_or_else(|| {
        IntentionsError::parse(
            file,
            0,
            0,
            format!("root {} outside arena of {} nodes", root, tree.len()),
        )
    })?;

    if !matches!(root_node.data, NodeData::Module { .. }) {
        return Err(IntentionsError::parse(
            file,
            root_node.line(),
            root_node.span.start_col,
            format!("root is a {} node, expected module", root_node.data.kind_name()),
        ));
    }

    let mut order = Vec::with_capacity(tree.len());
    let mut parents: Vec<Option<NodeId>> = vec![None; tree.len()];
    let mut visited = vec![false; tree.len()];

    let mut stack = vec![root];
    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        order.push(current);

        let children = tree[current].data.children();
        for &child in &children {
            if child == root || child >= tree.len() {
                continue;
            }
            if parents[child].is_none() {
                parents[child] = Some(current);
            }
        }
        // reversed so the first child is popped first
        for &child in children.iter().rev() {
            if child < tree.len() && !visited[child] {
                stack.push(child);
            }
        }
    }

    Ok(Traversal { order, parents })
}
