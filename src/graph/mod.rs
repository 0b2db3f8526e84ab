//! Graph module for named-vertex adjacency.
//!
//! This module provides the [`Graph`] container, which owns a list of
//! [`Vertex`] values and wires weighted edges between them by name.
//!
//! # Example
//!
//! ```rust
//! use waygraph::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_vertex("start");
//! graph.add_vertex("exit");
//! graph.add_undirected_edge("start", "exit", 10).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.edge_count(), 2);
//! ```

mod error;
mod vertex;
mod weighted_graph;

pub use error::{GraphError, GraphResult};
pub use vertex::{Edge, Vertex, Weight};
pub use weighted_graph::Graph;
