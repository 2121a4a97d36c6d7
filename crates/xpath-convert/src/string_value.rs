//! String-values of nodes (XPath 1.0 data model, section 5).
//!
//! - document / element: concatenation of all descendant text nodes in
//!   document order. Comments, processing instructions, attributes and
//!   namespace nodes of descendants do not contribute.
//! - text, comment, processing-instruction, attribute, namespace: the node's
//!   own content as exposed by [`XdmNode::value`]. Comment delimiters and the
//!   PI target are never part of that content.

use crate::model::{NodeKind, XdmNode};

pub fn string_value<N: XdmNode>(node: &N) -> String {
    match node.kind() {
        NodeKind::Document | NodeKind::Element => descendant_text(node),
        NodeKind::Text
        | NodeKind::Comment
        | NodeKind::ProcessingInstruction
        | NodeKind::Attribute
        | NodeKind::Namespace => node.value().unwrap_or_default(),
    }
}

// Explicit stack so deep trees cannot overflow the call stack.
fn descendant_text<N: XdmNode>(node: &N) -> String {
    let mut out = String::new();
    let mut stack: Vec<N> = node.children();
    stack.reverse();
    while let Some(n) = stack.pop() {
        match n.kind() {
            NodeKind::Text => {
                if let Some(v) = n.value() {
                    out.push_str(&v);
                }
            }
            NodeKind::Element => {
                stack.extend(n.children().into_iter().rev());
            }
            _ => {}
        }
    }
    out
}
