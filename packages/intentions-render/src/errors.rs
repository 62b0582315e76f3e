//! Error types for intentions-render
//!
//! Every failure aborts the whole run. Exclusions (no classification, no
//! markers) are not errors and never show up here.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for intentions-render operations
#[derive(Debug, Error)]
pub enum IntentionsError {
    /// Reading a source file or writing the report failed
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file is not valid Python, or its tree has no module root
    #[error("Parse error in {file}:{line}:{column}: {message}")]
    Parse {
        file: String,
        line: u32,
        column: u32,
        message: String,
    },

    /// A `describe` decorator does not carry exactly domain, component, layer
    #[error("Malformed classification in {file}:{line}: {message}")]
    ClassificationShape {
        file: String,
        line: u32,
        message: String,
    },

    /// Directory walk failed during test file discovery
    #[error("Discovery error: {0}")]
    Walk(String),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntentionsError {
    /// Create an IO error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IntentionsError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error
    pub fn parse(file: impl Into<String>, line: u32, column: u32, message: impl Into<String>) -> Self {
        IntentionsError::Parse {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a classification shape error
    pub fn classification_shape(
        file: impl Into<String>,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        IntentionsError::ClassificationShape {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// File the error points at, when it points at one
    pub fn file(&self) -> Option<&str> {
        match self {
            IntentionsError::Parse { file, .. } | IntentionsError::ClassificationShape { file, .. } => {
                Some(file)
            }
            _ => None,
        }
    }
}

/// Result type alias for intentions-render operations
pub type Result<T> = std::result::Result<T, IntentionsError>;
