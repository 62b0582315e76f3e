//! Lowering of the tree-sitter concrete tree into the [`SyntaxTree`] arena
//!
//! - `block` nodes are flattened into the statement that owns them
//! - `decorated_definition` dissolves into its definition, which keeps the
//!   decorators as a field and the span of the `def`/`class` keyword line
//! - parentheses around a single expression are dropped
//! - string literals are decoded; byte strings and f-strings stay generic
//!
//! Lowering runs on an explicit work stack: children are pushed as
//! `Lower` tasks above an `Assemble` task for their parent, so arbitrarily
//! deep expressions never grow the call stack.

use tree_sitter::Node;

use crate::features::parsing::domain::{NodeData, NodeId, SyntaxNode, SyntaxTree};
use crate::shared::models::Span;
use crate::shared::utils::tree_sitter::{
    decode_string_literal, extract_node_text_owned, field_text, find_child_by_kind,
    has_async_keyword, named_children, node_to_span,
};

/// Lower a parsed `module` node into a fresh arena
pub fn lower_module(root: &Node, source: &str, file_path: &str) -> SyntaxTree {
    let lowerer = Lowerer { source };
    let mut tree = SyntaxTree::new(file_path);

    let mut tasks = vec![Task::Lower(*root)];
    let mut lowered: Vec<NodeId> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Lower(node) => match lowerer.plan(&node) {
                Step::Forward(inner) => tasks.push(Task::Lower(inner)),
                Step::Build {
                    shape,
                    span,
                    children,
                } => {
                    tasks.push(Task::Assemble(shape, span));
                    tasks.extend(children.into_iter().rev().map(Task::Lower));
                }
            },
            Task::Assemble(shape, span) => {
                let split = lowered.len().saturating_sub(shape.arity());
                let ids = lowered.split_off(split);
                let id = tree.push(SyntaxNode::new(shape.assemble(ids), span));
                lowered.push(id);
            }
        }
    }

    if let Some(&module) = lowered.last() {
        tree.set_root(module);
    }
    tree
}

/// Pending work of the lowering loop
enum Task<'tree> {
    /// Lower a node; its id ends up on top of the lowered stack
    Lower(Node<'tree>),
    /// Children are lowered; pop their ids and push the assembled node
    Assemble(Shape, Span),
}

/// What lowering one concrete node turns into
enum Step<'tree> {
    /// The node is transparent; lower `inner` in its place
    Forward(Node<'tree>),
    Build {
        shape: Shape,
        span: Span,
        children: Vec<Node<'tree>>,
    },
}

/// Node payload minus the child ids, plus how many ids each field takes
///
/// Children are lowered in field order: decorators, then the remaining
/// fields as they appear in [`NodeData`].
enum Shape {
    Leaf(NodeData),
    Module,
    Function {
        name: String,
        is_async: bool,
        decorators: usize,
        params: bool,
        body: usize,
        returns: bool,
    },
    Class {
        name: String,
        decorators: usize,
        bases: usize,
        body: usize,
    },
    With {
        is_async: bool,
        items: usize,
        body: usize,
    },
    WithItem {
        target: bool,
    },
    /// One flag per argument after the callee: keyword or positional
    Call {
        keyword_flags: Vec<bool>,
    },
    Keyword {
        arg: Option<String>,
    },
    Attribute {
        attr: String,
    },
    Other {
        kind: String,
        children: usize,
    },
}

impl Shape {
    /// Number of child ids consumed by [`Shape::assemble`]
    fn arity(&self) -> usize {
        match self {
            Shape::Leaf(_) => 0,
            Shape::Module => usize::MAX,
            Shape::Function {
                decorators,
                params,
                body,
                returns,
                ..
            } => decorators + usize::from(*params) + body + usize::from(*returns),
            Shape::Class {
                decorators,
                bases,
                body,
                ..
            } => decorators + bases + body,
            Shape::With { items, body, .. } => items + body,
            Shape::WithItem { target } => 1 + usize::from(*target),
            Shape::Call { keyword_flags } => 1 + keyword_flags.len(),
            Shape::Keyword { .. } | Shape::Attribute { .. } => 1,
            Shape::Other { children, .. } => *children,
        }
    }

    fn assemble(self, ids: Vec<NodeId>) -> NodeData {
        let mut ids = ids.into_iter();
        match self {
            Shape::Leaf(data) => data,
            Shape::Module => NodeData::Module { body: ids.collect() },
            Shape::Function {
                name,
                is_async,
                decorators,
                params,
                body,
                returns,
            } => {
                let decorators = take(&mut ids, decorators);
                let params = if params { ids.next() } else { None };
                let body = take(&mut ids, body);
                let returns = if returns { ids.next() } else { None };
                NodeData::FunctionDef {
                    name,
                    is_async,
                    params,
                    body,
                    decorators,
                    returns,
                }
            }
            Shape::Class {
                name,
                decorators,
                bases,
                body,
            } => NodeData::ClassDef {
                name,
                decorators: take(&mut ids, decorators),
                bases: take(&mut ids, bases),
                body: take(&mut ids, body),
            },
            Shape::With {
                is_async,
                items,
                body,
            } => NodeData::With {
                is_async,
                items: take(&mut ids, items),
                body: take(&mut ids, body),
            },
            Shape::WithItem { .. } => match ids.next() {
                Some(context) => NodeData::WithItem {
                    context,
                    target: ids.next(),
                },
                None => incomplete("with_item"),
            },
            Shape::Call { keyword_flags } => {
                let Some(func) = ids.next() else {
                    return incomplete("call");
                };
                let mut args = Vec::new();
                let mut keywords = Vec::new();
                for (id, is_keyword) in ids.zip(keyword_flags) {
                    if is_keyword {
                        keywords.push(id);
                    } else {
                        args.push(id);
                    }
                }
                NodeData::Call {
                    func,
                    args,
                    keywords,
                }
            }
            Shape::Keyword { arg } => match ids.next() {
                Some(value) => NodeData::Keyword { arg, value },
                None => incomplete("keyword_argument"),
            },
            Shape::Attribute { attr } => match ids.next() {
                Some(value) => NodeData::Attribute { value, attr },
                None => incomplete("attribute"),
            },
            Shape::Other { kind, .. } => NodeData::Other {
                kind,
                children: ids.collect(),
            },
        }
    }
}

fn take(ids: &mut std::vec::IntoIter<NodeId>, count: usize) -> Vec<NodeId> {
    ids.by_ref().take(count).collect()
}

fn incomplete(kind: &str) -> NodeData {
    NodeData::Other {
        kind: kind.to_string(),
        children: Vec::new(),
    }
}

/// Named children with `block` contents spliced in place
fn flattened<'tree>(node: &Node<'tree>) -> Vec<Node<'tree>> {
    let mut out = Vec::new();
    let mut pending: Vec<Node<'tree>> = named_children(node).into_iter().rev().collect();
    while let Some(child) = pending.pop() {
        if child.kind() == "block" {
            pending.extend(named_children(&child).into_iter().rev());
        } else {
            out.push(child);
        }
    }
    out
}

fn field_flattened<'tree>(node: &Node<'tree>, field: &str) -> Vec<Node<'tree>> {
    node.child_by_field_name(field)
        .map(|child| flattened(&child))
        .unwrap_or_default()
}

struct Lowerer<'src> {
    source: &'src str,
}

impl<'src> Lowerer<'src> {
    fn plan<'tree>(&self, node: &Node<'tree>) -> Step<'tree> {
        let span = node_to_span(node);
        match node.kind() {
            "module" => {
                let children = flattened(node);
                Step::Build {
                    shape: Shape::Module,
                    span,
                    children,
                }
            }
            "decorated_definition" => self.plan_decorated(node),
            "parenthesized_expression" => match named_children(node).as_slice() {
                [single] => Step::Forward(*single),
                _ => self.plan_other(node, node.kind()),
            },
            "function_definition" => self.plan_function(node, Vec::new(), span),
            "class_definition" => self.plan_class(node, Vec::new(), span),
            "with_statement" => self.plan_with(node, span),
            "with_item" => self.plan_with_item(node, span),
            "call" => self.plan_call(node, span),
            "keyword_argument" => match node.child_by_field_name("value") {
                Some(value) => Step::Build {
                    shape: Shape::Keyword {
                        arg: field_text(node, "name", self.source),
                    },
                    span,
                    children: vec![value],
                },
                None => self.plan_other(node, node.kind()),
            },
            "dictionary_splat" => match named_children(node).first() {
                Some(value) => Step::Build {
                    shape: Shape::Keyword { arg: None },
                    span,
                    children: vec![*value],
                },
                None => self.plan_other(node, node.kind()),
            },
            "attribute" => match (
                node.child_by_field_name("object"),
                field_text(node, "attribute", self.source),
            ) {
                (Some(object), Some(attr)) => Step::Build {
                    shape: Shape::Attribute { attr },
                    span,
                    children: vec![object],
                },
                _ => self.plan_other(node, node.kind()),
            },
            "identifier" => leaf(
                NodeData::Name {
                    id: extract_node_text_owned(node, self.source),
                },
                span,
            ),
            "string" | "concatenated_string" => match decode_string_literal(node, self.source) {
                Some(value) => leaf(NodeData::Str { value }, span),
                None => self.plan_other(node, node.kind()),
            },
            kind => self.plan_other(node, kind),
        }
    }

    fn plan_other<'tree>(&self, node: &Node<'tree>, kind: &str) -> Step<'tree> {
        let children = flattened(node);
        Step::Build {
            shape: Shape::Other {
                kind: kind.to_string(),
                children: children.len(),
            },
            span: node_to_span(node),
            children,
        }
    }

    fn plan_decorated<'tree>(&self, node: &Node<'tree>) -> Step<'tree> {
        let Some(definition) = node.child_by_field_name("definition") else {
            return self.plan_other(node, node.kind());
        };

        let decorators: Vec<Node<'tree>> = named_children(node)
            .iter()
            .filter(|child| child.kind() == "decorator")
            .filter_map(|decorator| named_children(decorator).into_iter().next())
            .collect();

        let span = node_to_span(&definition);
        match definition.kind() {
            "function_definition" => self.plan_function(&definition, decorators, span),
            "class_definition" => self.plan_class(&definition, decorators, span),
            kind => {
                let mut children = decorators;
                children.extend(flattened(&definition));
                Step::Build {
                    shape: Shape::Other {
                        kind: kind.to_string(),
                        children: children.len(),
                    },
                    span,
                    children,
                }
            }
        }
    }

    fn plan_function<'tree>(
        &self,
        node: &Node<'tree>,
        decorators: Vec<Node<'tree>>,
        span: Span,
    ) -> Step<'tree> {
        let params = node.child_by_field_name("parameters");
        let body = field_flattened(node, "body");
        let returns = node.child_by_field_name("return_type");

        let shape = Shape::Function {
            name: field_text(node, "name", self.source).unwrap_or_default(),
            is_async: has_async_keyword(node),
            decorators: decorators.len(),
            params: params.is_some(),
            body: body.len(),
            returns: returns.is_some(),
        };

        let mut children = decorators;
        children.extend(params);
        children.extend(body);
        children.extend(returns);
        Step::Build {
            shape,
            span,
            children,
        }
    }

    fn plan_class<'tree>(
        &self,
        node: &Node<'tree>,
        decorators: Vec<Node<'tree>>,
        span: Span,
    ) -> Step<'tree> {
        let bases = field_flattened(node, "superclasses");
        let body = field_flattened(node, "body");

        let shape = Shape::Class {
            name: field_text(node, "name", self.source).unwrap_or_default(),
            decorators: decorators.len(),
            bases: bases.len(),
            body: body.len(),
        };

        let mut children = decorators;
        children.extend(bases);
        children.extend(body);
        Step::Build {
            shape,
            span,
            children,
        }
    }

    fn plan_with<'tree>(&self, node: &Node<'tree>, span: Span) -> Step<'tree> {
        let items: Vec<Node<'tree>> = match find_child_by_kind(node, "with_clause") {
            Some(clause) => named_children(&clause)
                .into_iter()
                .filter(|item| item.kind() == "with_item")
                .collect(),
            None => Vec::new(),
        };
        let body = field_flattened(node, "body");

        let shape = Shape::With {
            is_async: has_async_keyword(node),
            items: items.len(),
            body: body.len(),
        };

        let mut children = items;
        children.extend(body);
        Step::Build {
            shape,
            span,
            children,
        }
    }

    fn plan_with_item<'tree>(&self, node: &Node<'tree>, span: Span) -> Step<'tree> {
        let Some(value) = node.child_by_field_name("value") else {
            return self.plan_other(node, node.kind());
        };

        // `with expr as target` parses as an as_pattern value
        let children = if value.kind() == "as_pattern" {
            let Some(context) = named_children(&value).into_iter().next() else {
                return self.plan_other(node, node.kind());
            };
            let mut children = vec![context];
            children.extend(value.child_by_field_name("alias"));
            children
        } else {
            vec![value]
        };

        Step::Build {
            shape: Shape::WithItem {
                target: children.len() == 2,
            },
            span,
            children,
        }
    }

    fn plan_call<'tree>(&self, node: &Node<'tree>, span: Span) -> Step<'tree> {
        let Some(function) = node.child_by_field_name("function") else {
            return self.plan_other(node, node.kind());
        };

        let mut children = vec![function];
        let mut keyword_flags = Vec::new();
        if let Some(arguments) = node.child_by_field_name("arguments") {
            if arguments.kind() == "argument_list" {
                for argument in named_children(&arguments) {
                    keyword_flags.push(matches!(
                        argument.kind(),
                        "keyword_argument" | "dictionary_splat"
                    ));
                    children.push(argument);
                }
            } else {
                // f(x for x in y)
                keyword_flags.push(false);
                children.push(arguments);
            }
        }

        Step::Build {
            shape: Shape::Call { keyword_flags },
            span,
            children,
        }
    }
}

fn leaf<'tree>(data: NodeData, span: Span) -> Step<'tree> {
    Step::Build {
        shape: Shape::Leaf(data),
        span,
        children: Vec::new(),
    }
}
