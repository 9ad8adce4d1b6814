use std::collections::{HashMap, HashSet};
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

/// Handle of a node inside its [`GraphArena`].
pub type NodeId = Index;

/// Node of the graph-structured stack.
///
/// A node is owned by the arena, never by a parent. `children` and `parents`
/// are non-owning indices into the same arena.
#[derive(Debug, Clone)]
pub struct GraphNode<C> {
    key: String,
    contents: C,
    children: Vec<NodeId>,
    parents: Vec<NodeId>,
    rank: usize,
}

impl<C> GraphNode<C> {
    pub fn new(key: impl Into<String>, contents: C) -> Self {
        Self {
            key: key.into(),
            contents,
            children: Vec::new(),
            parents: Vec::new(),
            rank: 0,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn contents(&self) -> &C {
        &self.contents
    }

    pub fn contents_mut(&mut self) -> &mut C {
        &mut self.contents
    }

    /// Replaces the contents, returning the previous value.
    pub fn set_contents(&mut self, contents: C) -> C {
        std::mem::replace(&mut self.contents, contents)
    }

    /// Direct children in edge-creation order (or the last applied sort order).
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Back-references to every parent, in edge-creation order.
    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    /// True when the node is reachable through more than one parent edge.
    pub fn is_shared(&self) -> bool {
        self.parents.len() > 1
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.children
    }

    /// Position in the arena's topological order: every parent ranks below
    /// each of its children.
    pub(crate) fn rank(&self) -> usize {
        self.rank
    }

    pub(crate) fn set_rank(&mut self, rank: usize) {
        self.rank = rank;
    }
}

impl<C: fmt::Display> fmt::Display for GraphNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.contents)
    }
}

/// Registry owning every node of one graph-structured stack.
///
/// Keys are unique: each key maps to exactly one node for the lifetime of the
/// arena. Edges are recorded once per (parent, child) pair.
#[derive(Debug)]
pub struct GraphArena<C> {
    arena: Arena<GraphNode<C>>,
    registry: HashMap<String, NodeId>,
    edges: HashSet<(NodeId, NodeId)>,
    roots: Vec<NodeId>,
    next_rank: usize,
}

impl<C> Default for GraphArena<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> GraphArena<C> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            registry: HashMap::new(),
            edges: HashSet::new(),
            roots: Vec::new(),
            next_rank: 0,
        }
    }

    /// Registers a freshly created node under `key`, whatever key the node
    /// was created with.
    ///
    /// The new node ranks above every existing node. Callers check `lookup`
    /// first: the registry keeps one node per key.
    pub(crate) fn insert_node(&mut self, key: String, mut node: GraphNode<C>) -> NodeId {
        node.key.clone_from(&key);
        node.children.clear();
        node.parents.clear();
        node.rank = self.next_rank;
        self.next_rank += 1;
        let idx = self.arena.insert(node);
        self.registry.insert(key, idx);
        idx
    }

    /// Adds the edge `parent -> child` unless it already exists or either
    /// side is not a live node.
    pub(crate) fn link(&mut self, parent: NodeId, child: NodeId) {
        if !self.arena.contains(parent) || !self.arena.contains(child) {
            return;
        }
        if !self.edges.insert((parent, child)) {
            return;
        }
        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.push(child);
        }
        if let Some(child_node) = self.arena.get_mut(child) {
            child_node.parents.push(parent);
        }
    }

    /// Appends `idx` to the root list once.
    pub(crate) fn add_root(&mut self, idx: NodeId) {
        if !self.roots.contains(&idx) {
            self.roots.push(idx);
        }
    }

    /// Roots in first-seen order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn lookup(&self, key: &str) -> Option<NodeId> {
        self.registry.get(key).copied()
    }

    pub fn get_node(&self, idx: NodeId) -> Option<&GraphNode<C>> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: NodeId) -> Option<&mut GraphNode<C>> {
        self.arena.get_mut(idx)
    }

    pub fn key(&self, idx: NodeId) -> Option<&str> {
        self.get_node(idx).map(GraphNode::key)
    }

    pub fn contents(&self, idx: NodeId) -> Option<&C> {
        self.get_node(idx).map(GraphNode::contents)
    }

    pub fn contents_mut(&mut self, idx: NodeId) -> Option<&mut C> {
        self.get_node_mut(idx).map(GraphNode::contents_mut)
    }

    /// Replaces the contents of `idx`, returning the previous value.
    ///
    /// The node is a single instance, so the change is visible through every
    /// parent path that reaches it.
    #[instrument(level = "trace", skip(self, contents))]
    pub fn set_contents(&mut self, idx: NodeId, contents: C) -> DomainResult<C> {
        self.get_node_mut(idx)
            .map(|node| node.set_contents(contents))
            .ok_or(DomainError::UnknownNode(idx))
    }

    pub fn children(&self, idx: NodeId) -> &[NodeId] {
        self.get_node(idx).map(GraphNode::children).unwrap_or(&[])
    }

    pub fn parents(&self, idx: NodeId) -> &[NodeId] {
        self.get_node(idx).map(GraphNode::parents).unwrap_or(&[])
    }

    pub fn contains_edge(&self, parent: NodeId, child: NodeId) -> bool {
        self.edges.contains(&(parent, child))
    }

    /// Number of distinct nodes (= distinct keys).
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Every node in the arena, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &GraphNode<C>)> {
        self.arena.iter()
    }

    /// Length of the longest chain starting at `idx`, counting `idx` itself.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self, idx: NodeId) -> usize {
        let mut memo: HashMap<NodeId, usize> = HashMap::new();
        // (node, children already pushed)
        let mut stack = vec![(idx, false)];

        while let Some((current, expanded)) = stack.pop() {
            if memo.contains_key(&current) {
                continue;
            }
            let Some(node) = self.get_node(current) else {
                memo.insert(current, 0);
                continue;
            };
            if expanded {
                let deepest = node
                    .children
                    .iter()
                    .filter_map(|child| memo.get(child).copied())
                    .max()
                    .unwrap_or(0);
                memo.insert(current, 1 + deepest);
            } else {
                stack.push((current, true));
                for &child in &node.children {
                    if !memo.contains_key(&child) {
                        stack.push((child, false));
                    }
                }
            }
        }

        memo.get(&idx).copied().unwrap_or(0)
    }

    /// Distinct nodes without children reachable from `idx`, in traversal order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self, idx: NodeId) -> Vec<NodeId> {
        self.walk(idx)
            .filter(|(_, node)| node.children.is_empty())
            .map(|(leaf, _)| leaf)
            .collect()
    }

    /// Every chain from `idx` down to a leaf.
    ///
    /// A shared node yields one branch per path leading to it, so the result
    /// grows with the number of paths, not the number of nodes.
    #[instrument(level = "debug", skip(self))]
    pub fn branches(&self, idx: NodeId) -> Vec<Vec<NodeId>> {
        let mut branches = Vec::new();
        if !self.arena.contains(idx) {
            return branches;
        }
        let mut stack = vec![vec![idx]];
        while let Some(branch) = stack.pop() {
            let Some(&last) = branch.last() else {
                continue;
            };
            let children = self.children(last);
            if children.is_empty() {
                branches.push(branch);
                continue;
            }
            for &child in children.iter().rev() {
                let mut next = branch.clone();
                next.push(child);
                stack.push(next);
            }
        }
        branches
    }
}
