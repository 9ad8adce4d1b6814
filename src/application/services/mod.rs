//! Application services

pub mod graph;

pub use graph::GraphService;
