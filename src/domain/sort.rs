//! Reordering of a node's direct children.

use std::cmp::Ordering;

use tracing::instrument;

use crate::domain::arena::{GraphArena, GraphNode, NodeId};
use crate::domain::error::{DomainError, DomainResult};

impl<C> GraphArena<C> {
    /// Reorders the direct children of `idx` in place with `compare`.
    ///
    /// Grandchildren, parent back-references and node identity are untouched.
    /// The sort is stable, so children the comparator treats as equal keep
    /// their relative order.
    #[instrument(level = "debug", skip(self, compare))]
    pub fn sort_children<F>(&mut self, idx: NodeId, mut compare: F) -> DomainResult<()>
    where
        F: FnMut(&GraphNode<C>, &GraphNode<C>) -> Ordering,
    {
        let mut children = match self.get_node_mut(idx) {
            Some(node) => std::mem::take(node.children_mut()),
            None => return Err(DomainError::UnknownNode(idx)),
        };
        self.order_ids(&mut children, &mut compare);
        if let Some(node) = self.get_node_mut(idx) {
            *node.children_mut() = children;
        }
        Ok(())
    }

    pub fn sort_children_by_key(&mut self, idx: NodeId) -> DomainResult<()> {
        self.sort_children(idx, |a, b| a.key().cmp(b.key()))
    }

    /// Applies `compare` to the children of every node in the arena.
    #[instrument(level = "debug", skip(self, compare))]
    pub fn sort_all_children<F>(&mut self, mut compare: F)
    where
        F: FnMut(&GraphNode<C>, &GraphNode<C>) -> Ordering,
    {
        let parents: Vec<(NodeId, Vec<NodeId>)> = self
            .nodes()
            .filter(|(_, node)| node.children().len() > 1)
            .map(|(idx, node)| (idx, node.children().to_vec()))
            .collect();

        for (idx, mut children) in parents {
            self.order_ids(&mut children, &mut compare);
            if let Some(node) = self.get_node_mut(idx) {
                *node.children_mut() = children;
            }
        }
    }

    fn order_ids<F>(&self, ids: &mut [NodeId], compare: &mut F)
    where
        F: FnMut(&GraphNode<C>, &GraphNode<C>) -> Ordering,
    {
        ids.sort_by(|&a, &b| match (self.get_node(a), self.get_node(b)) {
            (Some(a), Some(b)) => compare(a, b),
            _ => Ordering::Equal,
        });
    }
}

impl<C: Ord> GraphArena<C> {
    pub fn sort_children_by_contents(&mut self, idx: NodeId) -> DomainResult<()> {
        self.sort_children(idx, |a, b| a.contents().cmp(b.contents()))
    }
}
