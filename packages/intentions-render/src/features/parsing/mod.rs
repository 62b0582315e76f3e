//! Parsing Feature
//!
//! Turns Python source into the [`SyntaxTree`] arena.
//!
//! ## Structure
//! - `domain/` - SyntaxTree, SyntaxNode, NodeData
//! - `ports/` - Parser trait
//! - `infrastructure/` - TreeSitterParser and the lowering of concrete trees

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{NodeData, NodeId, SyntaxNode, SyntaxTree};
pub use infrastructure::TreeSitterParser;
pub use ports::Parser;
