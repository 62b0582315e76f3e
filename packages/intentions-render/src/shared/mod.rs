//! Shared module - Common types and utilities
//!
//! Types used across features. Only `utils::tree_sitter` touches the grammar.

pub mod constants;
pub mod models;
pub mod utils;

pub use models::*;
