//! Report Feature
//!
//! The nested domain → component → layer → records aggregation and its JSON
//! sink.

mod model;
mod writer;

pub use model::{OrderedBuckets, Report};
pub use writer::{render_report, write_report, write_report_file};
