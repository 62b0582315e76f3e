//! Top-level driver

use std::path::Path;

use tracing::info;

use super::collector::build_report;
use super::discovery::discover_test_files;
use crate::config::RenderConfig;
use crate::errors::Result;
use crate::features::report::{write_report_file, Report};

/// Discover the test modules below `directory` and build their report
pub fn collect_intentions(directory: &Path, config: &RenderConfig) -> Result<Report> {
    config.validate()?;
    let files = discover_test_files(directory, config)?;
    info!("found {} test modules in {}", files.len(), directory.display());
    build_report(&files, config)
}

/// Build the report for `directory` and write it to `output`
///
/// Nothing is written unless the whole report was built.
pub fn create_intentions_json(
    directory: &Path,
    output: &Path,
    config: &RenderConfig,
) -> Result<Report> {
    let report = collect_intentions(directory, config)?;
    write_report_file(&report, output)?;
    info!("wrote {}", output.display());
    Ok(report)
}
