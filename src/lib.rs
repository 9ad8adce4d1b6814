//! Graph-structured stack (GSS).
//!
//! Builds a DAG of keyed, payload-bearing nodes from a flat, ordered list of
//! `(key, payload, parent key)` entries. A key seen again under another parent
//! reuses the existing node, so one node can hang under many parents. The
//! arena owns every node; edges are plain indices.
//!
//! ```
//! use gss::domain::{Entry, GraphBuilder};
//!
//! let graph = GraphBuilder::new()
//!     .build(vec![
//!         Entry::root("1", "1"),
//!         Entry::child("2", "2", "1"),
//!         Entry::child("4", "4", "1"),
//!         Entry::child("2", "2", "4"),
//!         Entry::child("3", "3", "2"),
//!     ])
//!     .unwrap();
//!
//! let root = graph.roots()[0];
//! let via_root = graph.get_descendant(root, "2/3");
//! let via_four = graph.get_descendant(root, "4/2/3");
//! assert!(via_root.is_some());
//! assert_eq!(via_root, via_four);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;

pub use domain::{build, DomainError, Entry, GraphArena, GraphBuilder, GraphNode, NodeFactory, NodeId};
