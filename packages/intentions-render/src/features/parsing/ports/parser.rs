//! Parser port (interface)
//!
//! Defines the contract for parsing source code.

use crate::errors::Result;
use crate::features::parsing::domain::SyntaxTree;

/// Parser trait - abstraction over parsing implementation
pub trait Parser {
    /// Parse source code into a SyntaxTree, rejecting invalid source
    fn parse(&self, source: &str, file_path: &str) -> Result<SyntaxTree>;
}
