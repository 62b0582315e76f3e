//! Utility functions

pub mod naming;
pub mod tree_sitter;
