//! Abstract syntax node representation
//!
//! Nodes live in a [`SyntaxTree`](super::SyntaxTree) arena and refer to each
//! other by [`NodeId`]. Only the constructs the intentions pipeline inspects
//! get a dedicated variant; everything else is kept as [`NodeData::Other`]
//! so nested definitions are still reachable.

use crate::shared::models::Span;

/// Index of a node inside its arena
pub type NodeId = usize;

/// Node payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// File root; `body` holds top-level statements
    Module { body: Vec<NodeId> },

    ClassDef {
        name: String,
        bases: Vec<NodeId>,
        body: Vec<NodeId>,
        decorators: Vec<NodeId>,
    },

    FunctionDef {
        name: String,
        is_async: bool,
        params: Option<NodeId>,
        body: Vec<NodeId>,
        decorators: Vec<NodeId>,
        returns: Option<NodeId>,
    },

    /// `with` statement; each item is a [`NodeData::WithItem`]
    With {
        is_async: bool,
        items: Vec<NodeId>,
        body: Vec<NodeId>,
    },

    WithItem {
        context: NodeId,
        target: Option<NodeId>,
    },

    Call {
        func: NodeId,
        args: Vec<NodeId>,
        keywords: Vec<NodeId>,
    },

    /// Keyword argument; `arg` is `None` for `**mapping`
    Keyword { arg: Option<String>, value: NodeId },

    Name { id: String },

    Attribute { value: NodeId, attr: String },

    /// Decoded `str` constant
    Str { value: String },

    /// Any other construct, keyed by its grammar kind
    Other { kind: String, children: Vec<NodeId> },
}

impl NodeData {
    /// Direct children in declaration order
    ///
    /// Field order follows the abstract syntax: a class visits its bases,
    /// then its body, then its decorators.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            NodeData::Module { body } => body.clone(),
            NodeData::ClassDef {
                bases,
                body,
                decorators,
                ..
            } => bases
                .iter()
                .chain(body)
                .chain(decorators)
                .copied()
                .collect(),
            NodeData::FunctionDef {
                params,
                body,
                decorators,
                returns,
                ..
            } => params
                .iter()
                .chain(body)
                .chain(decorators)
                .chain(returns.iter())
                .copied()
                .collect(),
            NodeData::With { items, body, .. } => items.iter().chain(body).copied().collect(),
            NodeData::WithItem { context, target } => {
                std::iter::once(*context).chain(*target).collect()
            }
            NodeData::Call {
                func,
                args,
                keywords,
            } => std::iter::once(*func)
                .chain(args.iter().copied())
                .chain(keywords.iter().copied())
                .collect(),
            NodeData::Keyword { value, .. } => vec![*value],
            NodeData::Attribute { value, .. } => vec![*value],
            NodeData::Name { .. } | NodeData::Str { .. } => Vec::new(),
            NodeData::Other { children, .. } => children.clone(),
        }
    }

    /// Short kind label (for diagnostics)
    pub fn kind_name(&self) -> &str {
        match self {
            NodeData::Module { .. } => "module",
            NodeData::ClassDef { .. } => "class_def",
            NodeData::FunctionDef { .. } => "function_def",
            NodeData::With { .. } => "with",
            NodeData::WithItem { .. } => "with_item",
            NodeData::Call { .. } => "call",
            NodeData::Keyword { .. } => "keyword",
            NodeData::Name { .. } => "name",
            NodeData::Attribute { .. } => "attribute",
            NodeData::Str { .. } => "str",
            NodeData::Other { kind, .. } => kind,
        }
    }
}

/// Arena node: payload plus source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub data: NodeData,
    pub span: Span,
}

impl SyntaxNode {
    pub fn new(data: NodeData, span: Span) -> Self {
        Self { data, span }
    }

    /// 1-based line the node starts on
    pub fn line(&self) -> u32 {
        self.span.start_line
    }
}
