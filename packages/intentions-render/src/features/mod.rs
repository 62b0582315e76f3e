//! Feature modules
//!
//! parsing → traversal → intentions → report, in pipeline order.

pub mod intentions;
pub mod parsing;
pub mod report;
pub mod traversal;
