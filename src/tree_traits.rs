//! Rendering of a graph-structured stack as printable trees.
//!
//! A shared node appears once under every parent that reaches it, so the
//! rendered tree is the unfolded view of the DAG.

use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{GraphArena, GraphNode, NodeId};

/// Label options for rendered nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelStyle {
    /// Append the node contents after the key.
    pub show_contents: bool,
    /// Mark nodes reachable through more than one parent.
    pub mark_shared: bool,
}

impl LabelStyle {
    pub fn label<C: Display>(&self, node: &GraphNode<C>) -> String {
        let mut label = node.key().to_string();
        if self.show_contents {
            label.push_str(&format!(" = {}", node.contents()));
        }
        if self.mark_shared && node.is_shared() {
            label.push_str(" (shared)");
        }
        label
    }
}

pub trait TreeDisplay {
    fn to_tree_string(&self, start: NodeId, style: LabelStyle) -> Tree<String>;
}

impl<C: Display> TreeDisplay for GraphArena<C> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, start: NodeId, style: LabelStyle) -> Tree<String> {
        let Some(root) = self.get_node(start) else {
            return Tree::new("Empty graph".to_string());
        };

        // (node, next child to visit, finished subtrees of its children)
        let mut stack: Vec<(&GraphNode<C>, usize, Vec<Tree<String>>)> =
            vec![(root, 0, Vec::new())];
        loop {
            let Some(top) = stack.last_mut() else {
                return Tree::new("Empty graph".to_string());
            };
            let node: &GraphNode<C> = top.0;
            if let Some(child) = node.children().get(top.1).copied() {
                top.1 += 1;
                if let Some(child_node) = self.get_node(child) {
                    stack.push((child_node, 0, Vec::new()));
                }
                continue;
            }

            let Some((node, _, leaves)) = stack.pop() else {
                return Tree::new("Empty graph".to_string());
            };
            let tree = Tree::new(style.label(node)).with_leaves(leaves);
            match stack.last_mut() {
                Some((_, _, siblings)) => siblings.push(tree),
                None => return tree,
            }
        }
    }
}
