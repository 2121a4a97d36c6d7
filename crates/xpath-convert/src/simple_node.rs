//! Simple in-memory tree implementing [`XdmNode`], used in tests, benchmarks
//! and quick prototypes.
//!
//! Focus:
//! - Ergonomic builder for quick test tree creation
//! - Immutable after `build()`: `Arc` sharing without locks
//! - Document nodes precompute a pre-order key per node, so comparisons
//!   inside a document are O(1); detached subtrees fall back to ancestry
//! - Every element carries the implicit `xml` namespace node
//! - Each element owns one namespace node per in-scope binding; inherited
//!   bindings are copied onto the element the first time they are asked for
//!
//! Example:
//! ```
//! use xpath_convert::simple_node::{elem, text, attr};
//! use xpath_convert::XdmNode;
//!
//! // <root id="r"><child>Hello</child><child world="yes"/></root>
//! let root = elem("root")
//!     .attr(attr("id", "r"))
//!     .child(elem("child").child(text("Hello")))
//!     .child(elem("child").attr(attr("world", "yes")))
//!     .build();
//!
//! assert_eq!(root.name().unwrap().local, "root");
//! assert_eq!(root.children().len(), 2);
//! assert_eq!(root.string_value(), "Hello");
//! ```
//!
//! Document order (namespaces < attributes < children):
//! ```
//! use xpath_convert::simple_node::{doc, elem, attr};
//! use xpath_convert::XdmNode;
//! let d = doc().child(elem("r").attr(attr("a", "1")).child(elem("c"))).build();
//! let r = d.children()[0].clone();
//! let attr_node = r.attributes()[0].clone();
//! let child_node = r.children()[0].clone();
//! assert_eq!(attr_node.compare_document_order(&child_node), core::cmp::Ordering::Less);
//! ```
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, OnceLock, Weak};

use crate::axes::{self, namespace_prefix};
use crate::consts::{XML_PREFIX, XML_URI, XMLNS_URI};
use crate::model::{NodeKind, QName, XdmNode};

pub(crate) struct Inner {
    kind: NodeKind,
    name: Option<QName>,
    value: Option<String>, // text / comment / PI data / attribute / namespace URI
    parent: OnceLock<Weak<Inner>>,
    order_key: OnceLock<u64>,
    document_id: OnceLock<u64>,
    attributes: Vec<SimpleNode>,
    declared: Vec<SimpleNode>,
    in_scope: OnceLock<Vec<SimpleNode>>,
    children: Vec<SimpleNode>,
}

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(0);

/// A simple Arc-backed node implementation.
#[derive(Clone)]
pub struct SimpleNode(pub(crate) Arc<Inner>);

impl PartialEq for SimpleNode {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for SimpleNode {}
impl std::hash::Hash for SimpleNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for SimpleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleNode")
            .field("kind", &self.0.kind)
            .field("name", &self.0.name.as_ref().map(|q| &q.local))
            .field("value", &self.0.value)
            .finish()
    }
}

fn local_name(name: &str) -> QName {
    match name.split_once(':') {
        Some((prefix, local)) => QName {
            prefix: Some(prefix.to_string()),
            local: local.to_string(),
            ns_uri: match prefix {
                XML_PREFIX => Some(XML_URI.to_string()),
                "xmlns" => Some(XMLNS_URI.to_string()),
                _ => None,
            },
        },
        None => QName::local(name),
    }
}

fn namespace_name(prefix: &str, uri: &str) -> QName {
    QName {
        prefix: (!prefix.is_empty()).then(|| prefix.to_string()),
        local: prefix.to_string(),
        ns_uri: Some(uri.to_string()),
    }
}

impl SimpleNode {
    fn leaf(kind: NodeKind, name: Option<QName>, value: &str) -> Self {
        Self::leaf_under(kind, name, value, OnceLock::new())
    }

    fn leaf_under(
        kind: NodeKind,
        name: Option<QName>,
        value: &str,
        parent: OnceLock<Weak<Inner>>,
    ) -> Self {
        SimpleNode(Arc::new(Inner {
            kind,
            name,
            value: Some(value.to_string()),
            parent,
            order_key: OnceLock::new(),
            document_id: OnceLock::new(),
            attributes: Vec::new(),
            declared: Vec::new(),
            in_scope: OnceLock::new(),
            children: Vec::new(),
        }))
    }

    pub fn document() -> SimpleNodeBuilder {
        SimpleNodeBuilder::new(NodeKind::Document, None)
    }
    pub fn element(name: &str) -> SimpleNodeBuilder {
        SimpleNodeBuilder::new(NodeKind::Element, Some(local_name(name)))
    }
    pub fn attribute(name: &str, value: &str) -> SimpleNode {
        SimpleNode::leaf(NodeKind::Attribute, Some(local_name(name)), value)
    }
    pub fn text(value: &str) -> SimpleNode {
        SimpleNode::leaf(NodeKind::Text, None, value)
    }
    pub fn comment(value: &str) -> SimpleNode {
        SimpleNode::leaf(NodeKind::Comment, None, value)
    }
    pub fn pi(target: &str, data: &str) -> SimpleNode {
        SimpleNode::leaf(NodeKind::ProcessingInstruction, Some(QName::local(target)), data)
    }
    /// Namespace node binding `prefix` (empty for the default namespace) to
    /// `uri`. An empty `uri` models an undeclaration.
    pub fn namespace(prefix: &str, uri: &str) -> SimpleNode {
        SimpleNode::leaf(NodeKind::Namespace, Some(namespace_name(prefix, uri)), uri)
    }

    // Namespace nodes in scope on this element: its own declarations
    // followed by copies of the parent's bindings it does not redeclare.
    fn in_scope_namespaces(&self) -> &[SimpleNode] {
        self.0.in_scope.get_or_init(|| {
            let mut out = self.0.declared.clone();
            if self.0.kind != NodeKind::Element {
                return out;
            }
            let inherited = self
                .parent()
                .filter(|p| p.kind() == NodeKind::Element)
                .map(|p| p.namespaces())
                .unwrap_or_default();
            for ns in inherited {
                let prefix = namespace_prefix(&ns);
                if out.iter().any(|own| namespace_prefix(own) == prefix) {
                    continue;
                }
                let uri = ns.value().unwrap_or_default();
                out.push(SimpleNode::leaf_under(
                    NodeKind::Namespace,
                    Some(namespace_name(&prefix, &uri)),
                    &uri,
                    OnceLock::from(Arc::downgrade(&self.0)),
                ));
            }
            out
        })
    }

    /// Resolve namespace prefix against the in-scope namespaces.
    pub fn lookup_namespace_uri(&self, prefix: &str) -> Option<String> {
        axes::lookup_namespace_uri(self, prefix)
    }
}

pub struct SimpleNodeBuilder {
    kind: NodeKind,
    name: Option<QName>,
    pending_children: Vec<SimpleNode>,
    pending_attrs: Vec<SimpleNode>,
    pending_ns: Vec<SimpleNode>,
}

impl SimpleNodeBuilder {
    fn new(kind: NodeKind, name: Option<QName>) -> Self {
        Self {
            kind,
            name,
            pending_children: Vec::new(),
            pending_attrs: Vec::new(),
            pending_ns: Vec::new(),
        }
    }

    pub fn child(mut self, child_builder: impl Into<SimpleNodeOrBuilder>) -> Self {
        self.pending_children.push(child_builder.into().into_node());
        self
    }
    pub fn children<I: IntoIterator<Item = SimpleNodeOrBuilder>>(mut self, it: I) -> Self {
        self.pending_children
            .extend(it.into_iter().map(SimpleNodeOrBuilder::into_node));
        self
    }
    pub fn attr(mut self, attr: SimpleNode) -> Self {
        debug_assert!(attr.kind() == NodeKind::Attribute);
        self.pending_attrs.push(attr);
        self
    }
    pub fn attrs<I: IntoIterator<Item = SimpleNode>>(mut self, attrs: I) -> Self {
        for a in attrs {
            self = self.attr(a);
        }
        self
    }
    pub fn namespace(mut self, ns: SimpleNode) -> Self {
        debug_assert!(ns.kind() == NodeKind::Namespace);
        self.pending_ns.push(ns);
        self
    }
    pub fn namespaces<I: IntoIterator<Item = SimpleNode>>(mut self, it: I) -> Self {
        for n in it {
            self = self.namespace(n);
        }
        self
    }

    pub fn build(self) -> SimpleNode {
        let mut namespaces = self.pending_ns;
        if self.kind == NodeKind::Element {
            // The xml prefix is bound on every element and cannot be rebound.
            namespaces.retain(|ns| {
                let is_xml = ns.name().is_some_and(|q| q.local == XML_PREFIX);
                if is_xml && ns.value().as_deref() != Some(XML_URI) {
                    tracing::warn!(uri = ?ns.value(), "ignoring attempt to rebind the xml prefix");
                    return false;
                }
                !is_xml
            });
            namespaces.insert(0, SimpleNode::namespace(XML_PREFIX, XML_URI));
        }
        let node = SimpleNode(Arc::new(Inner {
            kind: self.kind,
            name: self.name,
            value: None,
            parent: OnceLock::new(),
            order_key: OnceLock::new(),
            document_id: OnceLock::new(),
            attributes: self.pending_attrs,
            declared: namespaces,
            in_scope: OnceLock::new(),
            children: self.pending_children,
        }));
        let inner = &node.0;
        for n in inner.declared.iter().chain(&inner.attributes).chain(&inner.children) {
            if n.0.parent.set(Arc::downgrade(inner)).is_err() {
                tracing::warn!(node = ?n, "node already attached to a parent; keeping the first");
            }
        }
        if node.kind() == NodeKind::Document {
            assign_document_order(&node);
        }
        node
    }
}

// Pre-order walk: element, its namespace nodes, its attributes, then children.
// Parents are visited first, so inherited namespace copies exist before their
// descendants ask for them.
fn assign_document_order(root: &SimpleNode) {
    let document = NEXT_DOCUMENT_ID.fetch_add(1, AtomicOrdering::Relaxed);
    let mut next: u64 = 0;
    let mut assign = |n: &SimpleNode| {
        if n.0.order_key.set(next).is_err() || n.0.document_id.set(document).is_err() {
            tracing::warn!(node = ?n, "node already ordered within another document");
        }
        next += 1;
    };
    let mut stack = vec![root.clone()];
    while let Some(n) = stack.pop() {
        assign(&n);
        n.in_scope_namespaces().iter().for_each(&mut assign);
        n.0.attributes.iter().for_each(&mut assign);
        stack.extend(n.0.children.iter().rev().cloned());
    }
}

pub enum SimpleNodeOrBuilder {
    Built(SimpleNode),
    Builder(SimpleNodeBuilder),
}

impl SimpleNodeOrBuilder {
    fn into_node(self) -> SimpleNode {
        match self {
            SimpleNodeOrBuilder::Built(n) => n,
            SimpleNodeOrBuilder::Builder(b) => b.build(),
        }
    }
}

impl From<SimpleNode> for SimpleNodeOrBuilder {
    fn from(n: SimpleNode) -> Self {
        SimpleNodeOrBuilder::Built(n)
    }
}
impl From<SimpleNodeBuilder> for SimpleNodeOrBuilder {
    fn from(b: SimpleNodeBuilder) -> Self {
        SimpleNodeOrBuilder::Builder(b)
    }
}

// Convenience helper functions for concise test code
pub fn elem(name: &str) -> SimpleNodeBuilder {
    SimpleNode::element(name)
}
pub fn text(v: &str) -> SimpleNode {
    SimpleNode::text(v)
}
pub fn attr(name: &str, v: &str) -> SimpleNode {
    SimpleNode::attribute(name, v)
}
pub fn comment(v: &str) -> SimpleNode {
    SimpleNode::comment(v)
}
pub fn pi(target: &str, data: &str) -> SimpleNode {
    SimpleNode::pi(target, data)
}
pub fn ns(prefix: &str, uri: &str) -> SimpleNode {
    SimpleNode::namespace(prefix, uri)
}
pub fn doc() -> SimpleNodeBuilder {
    SimpleNode::document()
}

impl XdmNode for SimpleNode {
    fn kind(&self) -> NodeKind {
        self.0.kind
    }
    fn name(&self) -> Option<QName> {
        self.0.name.clone()
    }
    fn value(&self) -> Option<String> {
        self.0.value.clone()
    }
    fn parent(&self) -> Option<Self> {
        self.0.parent.get().and_then(Weak::upgrade).map(SimpleNode)
    }
    fn children(&self) -> Vec<Self> {
        self.0.children.clone()
    }
    fn attributes(&self) -> Vec<Self> {
        self.0.attributes.clone()
    }
    fn namespaces(&self) -> Vec<Self> {
        self.in_scope_namespaces().to_vec()
    }
    fn doc_order_key(&self) -> Option<u64> {
        self.0.order_key.get().copied()
    }
    fn document_id(&self) -> Option<u64> {
        self.0.document_id.get().copied()
    }
}
