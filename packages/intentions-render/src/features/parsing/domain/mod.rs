//! Parsing domain models

mod syntax_node;
mod syntax_tree;

pub use syntax_node::{NodeData, NodeId, SyntaxNode};
pub use syntax_tree::SyntaxTree;
