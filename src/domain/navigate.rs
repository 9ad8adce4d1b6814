//! Path navigation and reachability search over a graph-structured stack.

use std::collections::HashSet;

use tracing::{instrument, trace};

use crate::domain::arena::{GraphArena, GraphNode, NodeId};
use crate::util::path::split_key_path;

impl<C> GraphArena<C> {
    /// Direct child of `idx` whose key is exactly `key`.
    pub fn child_by_key(&self, idx: NodeId, key: &str) -> Option<NodeId> {
        self.children(idx)
            .iter()
            .copied()
            .find(|&child| self.key(child) == Some(key))
    }

    /// Follows a `/`-separated chain of child keys starting at `start`.
    ///
    /// Each segment must name a direct child of the node reached so far. The
    /// walk never backtracks; the first missing segment yields `None`, as does
    /// a `start` that is not a live node.
    #[instrument(level = "debug", skip(self))]
    pub fn get_descendant(&self, start: NodeId, path: &str) -> Option<NodeId> {
        self.get_node(start)?;
        let mut current = start;
        for segment in split_key_path(path) {
            current = match self.child_by_key(current, segment) {
                Some(child) => child,
                None => {
                    trace!(segment, "no matching child");
                    return None;
                }
            };
        }
        Some(current)
    }

    /// Searches every node reachable below `start` for `key`.
    ///
    /// Shared nodes are visited once no matter how many paths lead to them.
    /// `start` itself is not a candidate.
    #[instrument(level = "debug", skip(self))]
    pub fn find_descendant(&self, start: NodeId, key: &str) -> Option<NodeId> {
        self.descendants(start)
            .find(|(_, node)| node.key() == key)
            .map(|(idx, _)| idx)
    }

    /// Depth-first walk over `start` and everything reachable from it.
    pub fn walk(&self, start: NodeId) -> Walk<'_, C> {
        Walk::new(self, start)
    }

    /// Like [`walk`](Self::walk) but without `start`.
    pub fn descendants(&self, start: NodeId) -> impl Iterator<Item = (NodeId, &GraphNode<C>)> {
        self.walk(start).filter(move |(idx, _)| *idx != start)
    }
}

/// Pre-order, left-to-right traversal that yields each distinct node once.
pub struct Walk<'a, C> {
    graph: &'a GraphArena<C>,
    stack: Vec<NodeId>,
    visited: HashSet<NodeId>,
}

impl<'a, C> Walk<'a, C> {
    fn new(graph: &'a GraphArena<C>, start: NodeId) -> Self {
        let mut stack = Vec::new();
        if graph.get_node(start).is_some() {
            stack.push(start);
        }
        Self {
            graph,
            stack,
            visited: HashSet::new(),
        }
    }

    /// Number of distinct nodes yielded so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

impl<'a, C> Iterator for Walk<'a, C> {
    type Item = (NodeId, &'a GraphNode<C>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if !self.visited.insert(current) {
                continue;
            }
            if let Some(node) = self.graph.get_node(current) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children().iter().rev() {
                    if !self.visited.contains(&child) {
                        self.stack.push(child);
                    }
                }
                return Some((current, node));
            }
        }
        None
    }
}
