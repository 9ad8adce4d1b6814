//! Node creation strategies used by the builder.

use crate::domain::arena::GraphNode;

/// Creates the node for a key the first time the builder sees it.
///
/// The associated `Contents` type lets a factory turn the raw entry payload
/// into a richer per-node value. The builder assigns the key and wires
/// children and parents; only the contents of the returned node are kept.
pub trait NodeFactory<T> {
    type Contents;

    fn create(&self, key: &str, payload: T) -> GraphNode<Self::Contents>;
}

/// Stores the entry payload unchanged as node contents.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNodeFactory;

impl<T> NodeFactory<T> for DefaultNodeFactory {
    type Contents = T;

    fn create(&self, key: &str, payload: T) -> GraphNode<T> {
        GraphNode::new(key, payload)
    }
}

/// Any `Fn(&str, T) -> C` closure maps a payload to node contents.
impl<T, C, F> NodeFactory<T> for F
where
    F: Fn(&str, T) -> C,
{
    type Contents = C;

    fn create(&self, key: &str, payload: T) -> GraphNode<C> {
        GraphNode::new(key, self(key, payload))
    }
}
