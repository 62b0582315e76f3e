//! Syntax Tree Walker
//!
//! One preorder pass over a [`SyntaxTree`](crate::features::parsing::SyntaxTree)
//! yielding the visit order and a child → parent lookup.

mod walker;

pub use walker::{traverse, Traversal};
