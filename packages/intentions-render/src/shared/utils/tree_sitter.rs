//! Tree-sitter Utility Functions
//!
//! Helpers shared by the Python adapter: child lookup, text and span
//! extraction, and decoding of Python string literals.

use crate::shared::models::Span;
use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
#[inline]
pub fn find_child_by_kind<'tree>(node: &Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Named, non-extra children in source order
pub fn named_children<'tree>(node: &Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}

/// Whether a `def`/`with` node carries the `async` keyword
pub fn has_async_keyword(node: &Node) -> bool {
    find_child_by_kind(node, "async").is_some()
}

/// Preorder search for the first ERROR or MISSING node
pub fn first_error_node<'tree>(root: &Node<'tree>) -> Option<Node<'tree>> {
    if !root.has_error() {
        return None;
    }

    let mut stack = vec![*root];
    while let Some(current) = stack.pop() {
        if current.is_error() || current.is_missing() {
            return Some(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                if child.has_error() {
                    stack.push(child);
                }
            }
        }
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node
#[inline]
pub fn extract_node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Extract text content from a node as owned String
#[inline]
pub fn extract_node_text_owned(node: &Node, source: &str) -> String {
    extract_node_text(node, source).to_string()
}

/// Text of a named field, e.g. the `name` of a definition
pub fn field_text(node: &Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|child| extract_node_text_owned(&child, source))
}

// ═══════════════════════════════════════════════════════════════════════════
// Span Conversion Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Convert tree-sitter node to Span (1-indexed lines)
#[inline]
pub fn node_to_span(node: &Node) -> Span {
    let start_pos = node.start_position();
    let end_pos = node.end_position();

    Span::new(
        start_pos.row as u32 + 1, // 1-indexed
        start_pos.column as u32,
        end_pos.row as u32 + 1, // 1-indexed
        end_pos.column as u32,
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// Python String Literals
// ═══════════════════════════════════════════════════════════════════════════

/// Runtime value of a `string` or `concatenated_string` node
///
/// Returns `None` for anything that is not a plain `str` constant: byte
/// strings, f-strings, or a concatenation containing either.
pub fn decode_string_literal(node: &Node, source: &str) -> Option<String> {
    match node.kind() {
        "string" => decode_single_string(node, source),
        "concatenated_string" => {
            let mut value = String::new();
            for part in named_children(node) {
                if part.kind() == "string" {
                    value.push_str(&decode_single_string(&part, source)?);
                }
            }
            Some(value)
        }
        _ => None,
    }
}

fn decode_single_string(node: &Node, source: &str) -> Option<String> {
    let start = find_child_by_kind(node, "string_start")?;
    let end = find_child_by_kind(node, "string_end")?;

    let prefix: String = extract_node_text(&start, source)
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if prefix.contains('b') || prefix.contains('f') {
        return None;
    }

    let body = source.get(start.end_byte()..end.start_byte())?;
    if prefix.contains('r') {
        Some(body.to_string())
    } else {
        Some(unescape_python(body))
    }
}

/// Resolve backslash escapes of a non-raw Python `str` literal body
///
/// `\N{...}` resolves Unicode character names, case-insensitively. Unknown
/// escapes and unknown names are kept verbatim.
pub fn unescape_python(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };

        match escaped {
            '\n' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{0b}'),
            '0'..='7' => {
                let mut digits = String::from(escaped);
                while digits.len() < 3 {
                    match chars.peek() {
                        Some(d @ '0'..='7') => {
                            digits.push(*d);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                match u32::from_str_radix(&digits, 8).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push('\\');
                        out.push_str(&digits);
                    }
                }
            }
            'x' => push_hex_escape(&mut out, &mut chars, 'x', 2),
            'u' => push_hex_escape(&mut out, &mut chars, 'u', 4),
            'U' => push_hex_escape(&mut out, &mut chars, 'U', 8),
            'N' if chars.peek() == Some(&'{') => push_named_escape(&mut out, &mut chars),
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}

fn push_named_escape(out: &mut String, chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    chars.next();
    let mut name = String::new();
    let mut closed = false;
    for c in chars.by_ref() {
        if c == '}' {
            closed = true;
            break;
        }
        name.push(c);
    }

    match unicode_names2::character(&name.to_ascii_uppercase()).filter(|_| closed) {
        Some(decoded) => out.push(decoded),
        None => {
            out.push_str("\\N{");
            out.push_str(&name);
            if closed {
                out.push('}');
            }
        }
    }
}

fn push_hex_escape(
    out: &mut String,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    marker: char,
    width: usize,
) {
    let mut digits = String::with_capacity(width);
    while digits.len() < width {
        match chars.peek() {
            Some(d) if d.is_ascii_hexdigit() => {
                digits.push(*d);
                chars.next();
            }
            _ => break,
        }
    }

    let decoded = if digits.len() == width {
        u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32)
    } else {
        None
    };

    match decoded {
        Some(c) => out.push(c),
        None => {
            out.push('\\');
            out.push(marker);
            out.push_str(&digits);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
