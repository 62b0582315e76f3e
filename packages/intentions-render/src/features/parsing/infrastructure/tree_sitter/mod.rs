//! Tree-sitter based parser implementation

mod lowering;
mod parser;

pub use lowering::lower_module;
pub use parser::{TreeSitterLanguage, TreeSitterParser};
