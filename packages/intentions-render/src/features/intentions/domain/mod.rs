//! Intentions domain models

mod models;

pub use models::{Classification, EnclosingClass, IntentionKind, MarkerRecord, TestCaseRecord};
