//! Graph service
//!
//! Loads entry files, builds the graph-structured stack and answers the
//! key/path queries the CLI exposes.

use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{parse_entries, ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{GraphArena, GraphBuilder, NodeId};
use crate::infrastructure::traits::FileSystem;
use crate::util::path::{join_key_path, PATH_SEPARATOR};

/// Service for loading and querying graph-structured stacks.
pub struct GraphService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl GraphService {
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Read, parse and build the graph in `path`, then apply the configured
    /// child order.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<GraphArena<String>> {
        if !self.fs.is_file(path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "not a regular file"))
                .for_entry_file(path);
        }

        let content = self
            .fs
            .read_to_string(path)
            .for_entry_file(path)?;
        let entries = parse_entries(&content, path)?;
        debug!("load: {} entries from {}", entries.len(), path.display());

        let mut graph = GraphBuilder::new().build(entries)?;
        if let Some(compare) = self.settings.child_order.comparator::<String>() {
            graph.sort_all_children(compare);
        }
        Ok(graph)
    }

    /// Node registered under `key`.
    pub fn node(&self, graph: &GraphArena<String>, key: &str) -> ApplicationResult<NodeId> {
        graph
            .lookup(key)
            .ok_or_else(|| ApplicationError::UnknownKey(key.to_string()))
    }

    /// Resolve `path` below the node `from`, or, without `from`, treat the
    /// first path segment as a root key.
    ///
    /// `Ok(None)` is a normal "no such path" outcome; only an unknown `from`
    /// key is an error.
    #[instrument(level = "debug", skip(self, graph))]
    pub fn resolve(
        &self,
        graph: &GraphArena<String>,
        from: Option<&str>,
        path: &str,
    ) -> ApplicationResult<Option<NodeId>> {
        if let Some(start_key) = from {
            let start = self.node(graph, start_key)?;
            return Ok(graph.get_descendant(start, path));
        }

        let (root_key, rest) = match path.split_once(PATH_SEPARATOR) {
            Some((root_key, rest)) => (root_key, Some(rest)),
            None => (path, None),
        };
        let root = graph
            .roots()
            .iter()
            .copied()
            .find(|&root| graph.key(root) == Some(root_key));

        Ok(match (root, rest) {
            (Some(root), Some(rest)) => graph.get_descendant(root, rest),
            (root, None) => root,
            (None, Some(_)) => None,
        })
    }

    /// Search for `key` below `from`, or, without `from`, among the roots and
    /// everything below them in root order.
    #[instrument(level = "debug", skip(self, graph))]
    pub fn find(
        &self,
        graph: &GraphArena<String>,
        from: Option<&str>,
        key: &str,
    ) -> ApplicationResult<Option<NodeId>> {
        if let Some(start_key) = from {
            let start = self.node(graph, start_key)?;
            return Ok(graph.find_descendant(start, key));
        }

        Ok(graph.roots().iter().find_map(|&root| {
            if graph.key(root) == Some(key) {
                Some(root)
            } else {
                graph.find_descendant(root, key)
            }
        }))
    }

    /// Keys of every root-to-leaf chain, as navigable paths.
    pub fn branch_paths(&self, graph: &GraphArena<String>) -> Vec<String> {
        graph
            .roots()
            .iter()
            .flat_map(|&root| graph.branches(root))
            .map(|branch| join_key_path(branch.iter().filter_map(|&idx| graph.key(idx))))
            .collect()
    }
}
