use crate::model::XdmNode;
use core::cmp::Ordering;
use smallvec::SmallVec;

/// The node that comes first in document order, found by a single
/// minimum scan. Iteration order of `nodes` carries no meaning.
///
/// # Panics
///
/// Panics if the nodes do not all belong to the same document.
pub fn first_in_document_order<'a, N, I>(nodes: I) -> Option<&'a N>
where
    N: XdmNode + 'a,
    I: IntoIterator<Item = &'a N>,
{
    nodes.into_iter().reduce(|best, n| {
        if n.compare_document_order(best) == Ordering::Less {
            n
        } else {
            best
        }
    })
}

/// Unordered set of nodes from one document.
///
/// Insertion keeps the first occurrence of a node and drops duplicates. The
/// iteration order is the insertion order, which callers must not mistake for
/// document order; use [`NodeSet::first_in_document_order`] or
/// [`NodeSet::into_document_order`] for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSet<N> {
    nodes: SmallVec<[N; 4]>,
}

impl<N> Default for NodeSet<N> {
    fn default() -> Self {
        Self {
            nodes: SmallVec::new(),
        }
    }
}

impl<N: XdmNode> NodeSet<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(node: N) -> Self {
        let mut nodes = SmallVec::new();
        nodes.push(node);
        Self { nodes }
    }

    /// Adds `node` unless the set already holds it. Returns whether it was added.
    pub fn insert(&mut self, node: N) -> bool {
        if self.nodes.contains(&node) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    pub fn first_in_document_order(&self) -> Option<&N> {
        first_in_document_order(&self.nodes)
    }

    pub fn into_document_order(self) -> Vec<N> {
        let mut v = self.nodes.into_vec();
        v.sort_by(N::compare_document_order);
        v
    }
}

impl<N: XdmNode> FromIterator<N> for NodeSet<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<N: XdmNode> Extend<N> for NodeSet<N> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for n in iter {
            self.insert(n);
        }
    }
}

impl<N: XdmNode> From<Vec<N>> for NodeSet<N> {
    fn from(nodes: Vec<N>) -> Self {
        nodes.into_iter().collect()
    }
}

impl<'a, N> IntoIterator for &'a NodeSet<N> {
    type Item = &'a N;
    type IntoIter = core::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<N> IntoIterator for NodeSet<N> {
    type Item = N;
    type IntoIter = smallvec::IntoIter<[N; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
