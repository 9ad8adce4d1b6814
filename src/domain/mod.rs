//! Domain layer: the graph-structured stack
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entry;
pub mod error;
pub mod factory;
pub mod navigate;
mod order;
pub mod sort;

pub use arena::{GraphArena, GraphNode, NodeId};
pub use builder::{build, GraphBuilder};
pub use entry::Entry;
pub use error::{DomainError, DomainResult};
pub use factory::{DefaultNodeFactory, NodeFactory};
pub use navigate::Walk;
