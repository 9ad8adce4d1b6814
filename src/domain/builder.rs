//! Single-pass construction of a graph-structured stack from flat entries.

use tracing::{debug, instrument, trace};

use crate::domain::arena::GraphArena;
use crate::domain::entry::Entry;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::factory::{DefaultNodeFactory, NodeFactory};

/// Turns an ordered entry sequence into a [`GraphArena`].
///
/// Entries are processed strictly in input order. The first entry for a key
/// creates its node through the factory and registers it under the entry's
/// key, whatever key the factory set; later entries for the same key reuse
/// that node and only add an edge from their parent. Construction fails closed:
/// an error discards everything built so far.
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder<F = DefaultNodeFactory> {
    factory: F,
}

impl GraphBuilder<DefaultNodeFactory> {
    pub fn new() -> Self {
        Self::with_factory(DefaultNodeFactory)
    }
}

impl<F> GraphBuilder<F> {
    pub fn with_factory(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    #[instrument(level = "debug", skip(self, entries))]
    pub fn build<T, I>(&self, entries: I) -> DomainResult<GraphArena<F::Contents>>
    where
        F: NodeFactory<T>,
        I: IntoIterator<Item = Entry<T>>,
    {
        let mut graph = GraphArena::new();

        for (position, entry) in entries.into_iter().enumerate() {
            let Entry {
                key,
                payload,
                parent,
            } = entry;

            // The parent is resolved before the node is registered, so a
            // first-sight entry naming itself as parent is rejected.
            let parent_idx = match parent {
                Some(parent_key) => match graph.lookup(&parent_key) {
                    Some(idx) => Some((idx, parent_key)),
                    None => {
                        return Err(DomainError::MissingParent {
                            key,
                            parent: parent_key,
                            position,
                        })
                    }
                },
                None => None,
            };

            let (idx, reused) = match graph.lookup(&key) {
                Some(existing) => {
                    trace!(%key, "reusing node, payload ignored");
                    (existing, true)
                }
                None => {
                    let node = self.factory.create(&key, payload);
                    (graph.insert_node(key.clone(), node), false)
                }
            };

            // A fresh node ranks above its parent, so only a reused node can
            // close a cycle.
            match parent_idx {
                Some((parent_idx, parent_key)) => {
                    if graph.contains_edge(parent_idx, idx) {
                        debug!(%key, parent = %parent_key, "duplicate edge ignored");
                    } else if reused && !graph.make_room_for_edge(parent_idx, idx) {
                        return Err(DomainError::CycleDetected {
                            key,
                            parent: parent_key,
                        });
                    } else {
                        graph.link(parent_idx, idx);
                    }
                }
                None => graph.add_root(idx),
            }
        }

        debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            roots = graph.roots().len(),
            "graph built"
        );
        Ok(graph)
    }
}

/// Shorthand for `GraphBuilder::with_factory(factory).build(entries)`.
pub fn build<T, F, I>(entries: I, factory: F) -> DomainResult<GraphArena<F::Contents>>
where
    F: NodeFactory<T>,
    I: IntoIterator<Item = Entry<T>>,
{
    GraphBuilder::with_factory(factory).build(entries)
}
