/*
 * Intentions Render - static intentions extraction for Python test suites
 *
 * Feature-First Layout:
 * - shared/      : Constants, Span, tree-sitter and naming helpers
 * - features/    : Vertical slices (parsing → traversal → intentions → report)
 * - pipeline/    : Discovery, aggregation, top-level driver
 * - config/      : Render configuration (versioned YAML)
 *
 * Test modules are parsed, never imported or executed.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (parsing → traversal → intentions → report)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, RenderConfig};
pub use errors::{IntentionsError, Result};
pub use features::intentions::{Classification, IntentionKind, MarkerRecord, TestCaseRecord};
pub use features::report::{render_report, write_report, write_report_file, Report};
pub use pipeline::{
    build_report, collect_intentions, collect_source, create_intentions_json,
    discover_test_files,
};
