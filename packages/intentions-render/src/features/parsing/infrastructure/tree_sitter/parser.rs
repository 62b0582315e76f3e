//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives.

use tree_sitter::{Node, Parser as TSParser};

use super::lowering::lower_module;
use crate::errors::{IntentionsError, Result};
use crate::features::parsing::domain::SyntaxTree;
use crate::features::parsing::ports::Parser;
use crate::shared::utils::tree_sitter::{extract_node_text, first_error_node, node_to_span};

/// Longest excerpt of offending source quoted in a parse error
const ERROR_EXCERPT_CHARS: usize = 40;

/// Tree-sitter based parser
pub struct TreeSitterParser {
    language: TreeSitterLanguage,
}

/// Supported tree-sitter languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeSitterLanguage {
    Python,
}

impl TreeSitterParser {
    /// Create a Python parser
    pub fn python() -> Self {
        Self {
            language: TreeSitterLanguage::Python,
        }
    }

    fn get_ts_language(&self) -> tree_sitter::Language {
        match self.language {
            TreeSitterLanguage::Python => tree_sitter_python::language(),
        }
    }

    /// Turn the first ERROR/MISSING node into a located parse error
    fn syntax_error(&self, node: &Node, source: &str, file_path: &str) -> IntentionsError {
        let span = node_to_span(node);
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            let excerpt: String = extract_node_text(node, source)
                .chars()
                .take(ERROR_EXCERPT_CHARS)
                .collect();
            format!("invalid syntax near {:?}", excerpt.trim())
        };
        IntentionsError::parse(file_path, span.start_line, span.start_col, message)
    }
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::python()
    }
}

impl Parser for TreeSitterParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<SyntaxTree> {
        let mut parser = TSParser::new();
        parser.set_language(&self.get_ts_language()).map_err(|e| {
            IntentionsError::parse(file_path, 0, 0, format!("Failed to set language: {}", e))
        })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| IntentionsError::parse(file_path, 0, 0, "Failed to parse source code"))?;

        let root = tree.root_node();
        if let Some(error_node) = first_error_node(&root) {
            return Err(self.syntax_error(&error_node, source, file_path));
        }

        Ok(lower_module(&root, source, file_path))
    }
}
