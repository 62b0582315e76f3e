//! Aggregator
//!
//! Parse → walk → for every test function: markers, enclosing class,
//! classification, record. The first error aborts the whole build; the
//! caller never sees a half-built report.

use std::path::{Component, Path};

use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::errors::{IntentionsError, Result};
use crate::features::intentions::{
    extract_markers, resolve_classification, EnclosingClass, TestCaseRecord,
};
use crate::features::parsing::{NodeData, NodeId, Parser, SyntaxTree, TreeSitterParser};
use crate::features::report::Report;
use crate::features::traversal::traverse;
use crate::shared::utils::naming::is_test_function;

/// Build a report from `files`, in the given order
pub fn build_report(files: &[impl AsRef<Path>], config: &RenderConfig) -> Result<Report> {
    let parser = TreeSitterParser::python();
    let mut report = Report::new();
    let mut records = 0;

    for path in files {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| IntentionsError::io(path, e))?;
        records += collect_source(&mut report, &parser, &source, &normalize_path(path), config)?;
    }

    info!(
        "collected {} test cases from {} files into {} domains",
        records,
        files.len(),
        report.domains().count()
    );
    Ok(report)
}

/// Add the qualifying test functions of one source file to `report`
///
/// `file_path` is recorded verbatim in every record. Returns the number of
/// records added.
pub fn collect_source(
    report: &mut Report,
    parser: &dyn Parser,
    source: &str,
    file_path: &str,
    config: &RenderConfig,
) -> Result<usize> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let tree = parser.parse(source, file_path)?;
    let traversal = traverse(&tree)?;

    let mut added = 0;
    for &id in traversal.nodes() {
        let NodeData::FunctionDef {
            name,
            is_async,
            body,
            decorators,
            ..
        } = &tree[id].data
        else {
            continue;
        };
        if !is_test_function(name, &config.test_prefix) {
            continue;
        }
        if *is_async {
            debug!("{}: {} is async, excluded", file_path, name);
            continue;
        }

        let markers = extract_markers(&tree, body);
        if markers.is_empty() {
            debug!("{}: {} has no markers, excluded", file_path, name);
            continue;
        }

        let (enclosing, annotations) = match traversal.parent(id) {
            Some(parent) => {
                enclosing_class(&tree, parent).unwrap_or((None, decorators.as_slice()))
            }
            None => (None, decorators.as_slice()),
        };

        let Some(classification) = resolve_classification(&tree, annotations)? else {
            debug!("{}: {} has no classification, excluded", file_path, name);
            continue;
        };

        report.insert(
            &classification,
            TestCaseRecord::new(
                file_path,
                enclosing,
                name.as_str(),
                tree[id].line(),
                markers,
                &config.test_prefix,
            ),
        );
        added += 1;
    }

    Ok(added)
}

/// Class info and class decorators when `parent` is a class definition
fn enclosing_class(
    tree: &SyntaxTree,
    parent: NodeId,
) -> Option<(Option<EnclosingClass>, &[NodeId])> {
    let node = tree.get(parent)?;
    match &node.data {
        NodeData::ClassDef {
            name, decorators, ..
        } => Some((
            Some(EnclosingClass {
                name: name.clone(),
                source_line: node.line(),
            }),
            decorators.as_slice(),
        )),
        _ => None,
    }
}

/// Path as recorded in the report: `.` components dropped, `/` separators
pub fn normalize_path(path: &Path) -> String {
    let mut segments: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::RootDir => segments.push(String::new()),
            other => segments.push(other.as_os_str().to_string_lossy().into_owned()),
        }
    }
    match segments.as_slice() {
        [root] if root.is_empty() => "/".to_string(),
        _ => segments.join("/"),
    }
}
