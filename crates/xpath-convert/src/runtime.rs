use crate::model::XdmNode;
use crate::node_set::NodeSet;

/// Evaluation state visible to function implementations.
#[derive(Debug, Clone)]
pub struct DynamicContext<N> {
    pub context_item: Option<N>,
}

impl<N> Default for DynamicContext<N> {
    fn default() -> Self {
        Self { context_item: None }
    }
}

impl<N: XdmNode> DynamicContext<N> {
    /// The context node as a node-set: a singleton, or empty when no context
    /// item is set.
    pub fn context_node_set(&self) -> NodeSet<N> {
        self.context_item
            .clone()
            .map(NodeSet::singleton)
            .unwrap_or_default()
    }
}

pub struct DynamicContextBuilder<N> {
    ctx: DynamicContext<N>,
}

impl<N> Default for DynamicContextBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> DynamicContextBuilder<N> {
    pub fn new() -> Self {
        Self {
            ctx: DynamicContext::default(),
        }
    }

    pub fn with_context_item(mut self, item: N) -> Self {
        self.ctx.context_item = Some(item);
        self
    }

    pub fn build(self) -> DynamicContext<N> {
        self.ctx
    }
}
