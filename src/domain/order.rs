//! Incremental topological order over the arena.
//!
//! Every node carries a rank and every edge `parent -> child` satisfies
//! `rank(parent) < rank(child)`. A new edge that already respects the order is
//! accepted in O(1). Otherwise only the nodes ranked between the two endpoints
//! are searched and re-ranked (Pearce and Kelly's dynamic topological sort).

use std::collections::HashSet;

use tracing::trace;

use crate::domain::arena::{GraphArena, GraphNode, NodeId};

impl<C> GraphArena<C> {
    fn rank_of(&self, idx: NodeId) -> Option<usize> {
        self.get_node(idx).map(GraphNode::rank)
    }

    /// Re-ranks nodes so that the edge `parent -> child` fits the order.
    ///
    /// Returns false, leaving every rank untouched, when `parent` is `child`
    /// or already reachable from it, i.e. when the edge would close a cycle.
    pub(crate) fn make_room_for_edge(&mut self, parent: NodeId, child: NodeId) -> bool {
        let (Some(upper), Some(lower)) = (self.rank_of(parent), self.rank_of(child)) else {
            return false;
        };
        if upper < lower {
            return true;
        }
        if parent == child {
            return false;
        }

        // Nodes below `child` that rank no higher than `parent`.
        let mut forward = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![child];
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            if current == parent {
                trace!("edge would close a cycle");
                return false;
            }
            forward.push(current);
            for &next in self.children(current) {
                if !seen.contains(&next) && self.rank_of(next).is_some_and(|rank| rank <= upper) {
                    stack.push(next);
                }
            }
        }

        // Nodes above `parent` that rank no lower than `child`.
        let mut backward = Vec::new();
        seen.clear();
        stack.push(parent);
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            backward.push(current);
            for &prev in self.parents(current) {
                if !seen.contains(&prev) && self.rank_of(prev).is_some_and(|rank| rank >= lower) {
                    stack.push(prev);
                }
            }
        }

        backward.sort_by_key(|&idx| self.rank_of(idx));
        forward.sort_by_key(|&idx| self.rank_of(idx));
        let mut ranks: Vec<usize> = backward
            .iter()
            .chain(&forward)
            .filter_map(|&idx| self.rank_of(idx))
            .collect();
        ranks.sort_unstable();

        trace!(moved = ranks.len(), "re-ranked nodes");
        for (idx, rank) in backward.into_iter().chain(forward).zip(ranks) {
            if let Some(node) = self.get_node_mut(idx) {
                node.set_rank(rank);
            }
        }
        true
    }
}
