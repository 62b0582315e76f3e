//! Syntax tree arena
//!
//! Nodes are appended while the concrete tree is lowered and never change
//! afterwards. The root is set last.

use std::ops::Index;

use super::syntax_node::{NodeData, NodeId, SyntaxNode};

/// Arena of lowered syntax nodes for one file
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    file_path: String,
    nodes: Vec<SyntaxNode>,
    root: Option<NodeId>,
}

impl SyntaxTree {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Append a node, returning its id
    pub fn push(&mut self, node: SyntaxNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.nodes.get(id)
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Identifier when `id` is a bare name
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        match &self.get(id)?.data {
            NodeData::Name { id } => Some(id.as_str()),
            _ => None,
        }
    }

    /// Value and line when `id` is a string constant
    pub fn str_literal(&self, id: NodeId) -> Option<(&str, u32)> {
        let node = self.get(id)?;
        match &node.data {
            NodeData::Str { value } => Some((value.as_str(), node.line())),
            _ => None,
        }
    }
}

impl Index<NodeId> for SyntaxTree {
    type Output = SyntaxNode;

    fn index(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id]
    }
}
