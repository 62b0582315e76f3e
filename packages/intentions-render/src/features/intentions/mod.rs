//! Intentions Feature
//!
//! Reads the intentions vocabulary out of a lowered syntax tree:
//! - `classification` - `@describe(domain=..., component=..., layer=...)`
//! - `markers` - `with when(...)`, `with case(...)`, `with expect(...)`
//! - `domain` - the records both produce

pub mod classification;
pub mod domain;
pub mod markers;

pub use classification::resolve_classification;
pub use domain::{Classification, EnclosingClass, IntentionKind, MarkerRecord, TestCaseRecord};
pub use markers::extract_markers;
