//! The four XPath 1.0 data types and their conversions (sections 4.2 to 4.4).

use crate::model::XdmNode;
use crate::node_set::NodeSet;
use crate::number::{format_number, parse_number};

#[derive(Debug, Clone, PartialEq)]
pub enum Value<N> {
    NodeSet(NodeSet<N>),
    Boolean(bool),
    /// IEEE 754 double, including NaN, both infinities and negative zero.
    Number(f64),
    String(String),
}

impl<N: XdmNode> Value<N> {
    /// Converts the value per the `string()` rules:
    /// - node-set: string-value of the node first in document order, or
    ///   the empty string for an empty set
    /// - number: [`format_number`]
    /// - boolean: `true` / `false`
    /// - string: unchanged
    pub fn to_xpath_string(&self) -> String {
        match self {
            Value::NodeSet(nodes) => nodes
                .first_in_document_order()
                .map(N::string_value)
                .unwrap_or_default(),
            Value::Boolean(b) => {
                if *b {
                    "true".to_string()
                } else {
                    "false".to_string()
                }
            }
            Value::Number(n) => format_number(*n),
            Value::String(s) => s.clone(),
        }
    }

    pub fn to_boolean(&self) -> bool {
        match self {
            Value::NodeSet(nodes) => !nodes.is_empty(),
            Value::Boolean(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
        }
    }

    pub fn to_number(&self) -> f64 {
        match self {
            Value::NodeSet(_) | Value::String(_) => parse_number(&self.to_xpath_string()),
            Value::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::NodeSet(_) => "node-set",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }
}

impl<N> From<bool> for Value<N> {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl<N> From<f64> for Value<N> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl<N> From<String> for Value<N> {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<N> From<&str> for Value<N> {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<N> From<NodeSet<N>> for Value<N> {
    fn from(nodes: NodeSet<N>) -> Self {
        Value::NodeSet(nodes)
    }
}
