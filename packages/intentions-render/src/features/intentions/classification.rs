//! Classification Resolver
//!
//! Finds the `@describe(domain=..., component=..., layer=...)` decorator of
//! a definition. Undecorated definitions simply have no classification; a
//! `describe` call of any other shape is a test-author defect and fails the
//! run.

use super::domain::Classification;
use crate::errors::{IntentionsError, Result};
use crate::features::parsing::domain::{NodeData, NodeId, SyntaxTree};
use crate::shared::constants::describe;

/// Classification declared by the first matching decorator
///
/// Decorators that are not a call to the bare name `describe` are ignored.
///
/// # Errors
/// `ClassificationShape` when the matching call has positional arguments,
/// does not have exactly the keywords `domain`, `component`, `layer` in
/// that order, or any of them is not a string literal.
pub fn resolve_classification(
    tree: &SyntaxTree,
    decorators: &[NodeId],
) -> Result<Option<Classification>> {
    for &decorator in decorators {
        let Some(node) = tree.get(decorator) else {
            continue;
        };
        let NodeData::Call {
            func,
            args,
            keywords,
        } = &node.data
        else {
            continue;
        };
        if tree.name_of(*func) != Some(describe::NAME) {
            continue;
        }

        let shape_error = |message: String| {
            IntentionsError::classification_shape(tree.file_path(), node.line(), message)
        };

        if !args.is_empty() {
            return Err(shape_error(format!(
                "`{}` takes keyword arguments only, found {} positional",
                describe::NAME,
                args.len()
            )));
        }
        if keywords.len() != describe::ARGUMENT_ORDER.len() {
            return Err(shape_error(format!(
                "`{}` needs exactly {} keyword arguments ({}), found {}",
                describe::NAME,
                describe::ARGUMENT_ORDER.len(),
                describe::ARGUMENT_ORDER.join(", "),
                keywords.len()
            )));
        }

        let mut values = Vec::with_capacity(keywords.len());
        for (position, (&expected, &keyword)) in
            describe::ARGUMENT_ORDER.iter().zip(keywords).enumerate()
        {
            let Some(NodeData::Keyword { arg, value }) = tree.get(keyword).map(|k| &k.data) else {
                return Err(shape_error(format!("argument {} is not a keyword", position + 1)));
            };

            let found = arg.as_deref().unwrap_or("**");
            if found != expected {
                return Err(shape_error(format!(
                    "argument {} must be `{}`, found `{}`",
                    position + 1,
                    expected,
                    found
                )));
            }

            match tree.str_literal(*value) {
                Some((text, _)) => values.push(text.to_string()),
                None => {
                    return Err(shape_error(format!(
                        "`{}` must be a string literal",
                        expected
                    )))
                }
            }
        }

        let [domain, component, layer]: [String; 3] = values
            .try_into()
            .map_err(|_| shape_error("incomplete classification".to_string()))?;
        return Ok(Some(Classification {
            domain,
            component,
            layer,
        }));
    }

    Ok(None)
}
