//! WayGraph - named-vertex weighted graph container
//!
//! This crate stores vertices keyed by name and the weighted edges between
//! them, for game code that needs level connectivity or dependency
//! information. Traversal is left to the caller; [`graph::Graph::to_digraph`]
//! hands the structure to petgraph's algorithms.

pub mod graph;

pub use graph::{Edge, Graph, GraphError, GraphResult, Vertex, Weight};
