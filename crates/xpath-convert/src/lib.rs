//! Value-to-string conversion core of an XPath 1.0 evaluator.
//!
//! Turns any of the four XPath data types into its canonical string:
//! node-sets through the string-value of their first node in document order,
//! numbers through a fixed-point formatter that never uses exponents,
//! booleans and strings through their natural forms. The core is generic over
//! the [`XdmNode`] navigation trait and never mutates the tree.
//!
//! ```
//! use xpath_convert::simple_node::{doc, elem, text};
//! use xpath_convert::{DynamicContextBuilder, NodeSet, SimpleNode, Value, XdmNode, string_fn};
//!
//! let ctx = DynamicContextBuilder::<SimpleNode>::new().build();
//! assert_eq!(string_fn(&ctx, &[Value::Number(0.000_000_3)]).unwrap(), "0.0000003");
//!
//! let d = doc().child(elem("a").child(text("hi"))).build();
//! let nodes: NodeSet<SimpleNode> = d.children().into_iter().collect();
//! assert_eq!(string_fn(&ctx, &[Value::NodeSet(nodes)]).unwrap(), "hi");
//! ```

pub mod axes;
pub mod consts;
pub mod error;
pub mod functions;
pub mod model;
pub mod node_set;
pub mod number;
pub mod runtime;
pub mod simple_node;
pub mod string_value;
pub mod value;

pub use error::{Error, ErrorCode};
pub use functions::string_fn;
pub use model::{NodeKind, QName, XdmNode, try_compare_by_ancestry};
pub use node_set::{NodeSet, first_in_document_order};
pub use number::{format_number, parse_number};
pub use runtime::{DynamicContext, DynamicContextBuilder};
pub use simple_node::{SimpleNode, SimpleNodeBuilder};
pub use string_value::string_value;
pub use value::Value;
