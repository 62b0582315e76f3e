//! Parsing infrastructure - tree-sitter lives here

pub mod tree_sitter;

pub use self::tree_sitter::TreeSitterParser;
