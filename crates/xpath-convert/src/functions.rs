//! Function entry points of the conversion core.
//!
//! Only `string()` lives here. Arity is checked before any argument is
//! looked at, so a bad call never produces a partial result.

use crate::error::Error;
use crate::model::XdmNode;
use crate::runtime::DynamicContext;
use crate::value::Value;

pub const STRING_FN: &str = "string";

/// `string(object?) as string`
///
/// - no argument: string-value of the context node (empty string when the
///   context has no item)
/// - one argument: the argument converted per [`Value::to_xpath_string`]
/// - two or more: `err:XPST0017`, extra arguments are never dropped silently
pub fn string_fn<N: XdmNode>(ctx: &DynamicContext<N>, args: &[Value<N>]) -> Result<String, Error> {
    match args {
        [] => {
            tracing::trace!("string() on context item");
            Ok(Value::NodeSet(ctx.context_node_set()).to_xpath_string())
        }
        [arg] => {
            tracing::trace!(kind = arg.type_name(), "string() on argument");
            Ok(arg.to_xpath_string())
        }
        _ => {
            tracing::debug!(argc = args.len(), "string() rejected: too many arguments");
            Err(Error::wrong_arity(STRING_FN, args.len()))
        }
    }
}
