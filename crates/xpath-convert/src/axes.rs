//! Read-only navigation helpers over [`XdmNode`].
//!
//! These produce the node-sets an evaluator would hand to the conversion core
//! (`//x`, `/a/comment()`, `namespace::node()`).

use crate::consts::{XML_PREFIX, XML_URI};
use crate::model::{NodeKind, XdmNode};

/// Descendants of `node` in document order. Attributes and namespace nodes
/// are not descendants.
pub fn descendants<N: XdmNode>(node: &N) -> Vec<N> {
    let mut out = Vec::new();
    let mut stack: Vec<N> = node.children();
    stack.reverse();
    while let Some(n) = stack.pop() {
        stack.extend(n.children().into_iter().rev());
        out.push(n);
    }
    out
}

pub fn descendant_or_self<N: XdmNode>(node: &N) -> Vec<N> {
    let mut out = vec![node.clone()];
    out.extend(descendants(node));
    out
}

/// In-scope namespace nodes of an element, all owned by it.
///
/// An undeclaration (a binding to the empty URI) is not in scope and is
/// skipped, as is an `xml` binding that points anywhere but the XML
/// namespace. A prefix listed twice keeps its first node. Non-element nodes
/// have no namespace nodes.
pub fn namespace_axis<N: XdmNode>(node: &N) -> Vec<N> {
    if node.kind() != NodeKind::Element {
        return Vec::new();
    }
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for ns in node.namespaces() {
        let prefix = namespace_prefix(&ns);
        if seen.contains(&prefix) {
            continue;
        }
        let uri = ns.value().unwrap_or_default();
        if prefix == XML_PREFIX && uri != XML_URI {
            continue;
        }
        seen.push(prefix);
        if !uri.is_empty() {
            out.push(ns);
        }
    }
    out
}

/// Resolve `prefix` against the in-scope namespaces of `node` (or of its
/// parent element for non-element nodes). `xml` always resolves to the XML
/// namespace, declared or not.
pub fn lookup_namespace_uri<N: XdmNode>(node: &N, prefix: &str) -> Option<String> {
    if prefix == XML_PREFIX {
        return Some(XML_URI.to_string());
    }
    let element = if node.kind() == NodeKind::Element {
        Some(node.clone())
    } else {
        node.parent()
    }?;
    namespace_axis(&element)
        .into_iter()
        .find(|ns| namespace_prefix(ns) == prefix)
        .and_then(|ns| ns.value())
}

/// Prefix a namespace node binds: its local name, empty for the default
/// namespace.
pub fn namespace_prefix<N: XdmNode>(ns: &N) -> String {
    ns.name().map(|q| q.local).unwrap_or_default()
}
