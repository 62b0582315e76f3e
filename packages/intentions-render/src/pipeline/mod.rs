//! Pipeline
//!
//! discovery (which files) → collector (what they declare) → render (where
//! the report goes).

pub mod collector;
pub mod discovery;
pub mod render;

pub use collector::{build_report, collect_source, normalize_path};
pub use discovery::discover_test_files;
pub use render::{collect_intentions, create_intentions_json};
