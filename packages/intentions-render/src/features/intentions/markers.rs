//! Marker Extractor
//!
//! Scans the top-level statements of a test body for `with` blocks whose
//! context expression is a call to `when`, `case` or `expect` with a string
//! literal as first positional argument. Anything else is skipped without
//! error, so unrelated context managers can sit next to markers.

use tracing::trace;

use super::domain::{IntentionKind, MarkerRecord};
use crate::features::parsing::domain::{NodeData, NodeId, SyntaxTree};

/// Markers of one function body, in source order
///
/// Only statements directly in `body` are inspected: markers nested in
/// other blocks or in inner definitions belong to nobody.
pub fn extract_markers(tree: &SyntaxTree, body: &[NodeId]) -> Vec<MarkerRecord> {
    let mut markers = Vec::new();

    for &statement in body {
        let Some(node) = tree.get(statement) else {
            continue;
        };
        let NodeData::With {
            is_async: false,
            items,
            ..
        } = &node.data
        else {
            continue;
        };

        for &item in items {
            if let Some(marker) = marker_from_item(tree, item) {
                markers.push(marker);
            }
        }
    }

    markers
}

fn marker_from_item(tree: &SyntaxTree, item: NodeId) -> Option<MarkerRecord> {
    let NodeData::WithItem { context, .. } = &tree.get(item)?.data else {
        return None;
    };
    let NodeData::Call { func, args, .. } = &tree.get(*context)?.data else {
        return None;
    };

    let name = tree.name_of(*func)?;
    let kind = IntentionKind::from_marker_name(name)?;

    match args.first().and_then(|&first| tree.str_literal(first)) {
        Some((description, line)) => Some(MarkerRecord::new(kind, line, description)),
        None => {
            trace!(
                "{}:{}: `{}` without a literal description, skipped",
                tree.file_path(),
                tree[item].line(),
                name
            );
            None
        }
    }
}
