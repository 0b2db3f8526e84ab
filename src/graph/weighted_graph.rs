//! Weighted graph container with lookup by vertex name.
//!
//! Vertices live in a single arena in insertion order; edges point at
//! their targets by arena index.

use std::borrow::Borrow;
use std::fmt;

use log::{debug, trace, warn};
use petgraph::graph::{DiGraph, NodeIndex};

use super::error::{GraphError, GraphResult};
use super::vertex::{Vertex, Weight};

/// A graph of named vertices connected by weighted edges.
///
/// Vertex names are unique when vertices are created through
/// [`add_vertex`](Self::add_vertex). Edges are directed; an undirected
/// edge is stored as two independent directed edges.
///
/// # Example
///
/// ```rust
/// use waygraph::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_vertex("town");
/// graph.add_vertex("forest");
/// graph.add_vertex("cave");
///
/// graph.add_undirected_edge("town", "forest", 3).unwrap();
/// graph.add_directed_edge("forest", "cave", 8).unwrap();
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.vertices_to_names(), vec!["town", "forest", "cave"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Vertex<T>>> for Graph<T> {
    fn from(vertices: Vec<Vertex<T>>) -> Self {
        Self::new_with_vertices(vertices)
    }
}

impl<T> Graph<T> {
    /// Creates an empty graph.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waygraph::graph::Graph;
    ///
    /// let graph: Graph<String> = Graph::new();
    /// assert!(graph.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
        }
    }

    /// Creates a graph that takes ownership of `vertices` as given.
    ///
    /// The list is not de-duplicated. If two vertices share a name,
    /// lookups resolve to the first one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waygraph::graph::{Graph, Vertex};
    ///
    /// let graph = Graph::new_with_vertices(vec![Vertex::new(1), Vertex::new(2)]);
    /// assert_eq!(graph.vertex_count(), 2);
    /// assert!(graph.contains(&2));
    /// ```
    pub fn new_with_vertices(vertices: Vec<Vertex<T>>) -> Self {
        Self { vertices }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the total number of directed edges.
    ///
    /// An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum()
    }

    /// Checks if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex at `index`, the form edge targets are stored in.
    pub fn vertex(&self, index: usize) -> Option<&Vertex<T>> {
        self.vertices.get(index)
    }

    /// Iterates over all vertices in insertion order.
    pub fn vertices(&self) -> std::slice::Iter<'_, Vertex<T>> {
        self.vertices.iter()
    }

    /// Returns every vertex name in insertion order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waygraph::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_vertex("c");
    /// graph.add_vertex("a");
    /// graph.add_vertex("b");
    ///
    /// assert_eq!(graph.vertices_to_names(), vec!["c", "a", "b"]);
    /// ```
    pub fn vertices_to_names(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.vertices.iter().map(|v| v.name().clone()).collect()
    }

    /// Exports the graph as a petgraph [`DiGraph`].
    ///
    /// Node `i` of the result holds the name of vertex `i`, so arena
    /// indices and `NodeIndex` values agree. Edges keep their insertion
    /// order, parallel edges included. Edges whose target lies outside
    /// the graph, which only a seeded vertex list can contain, are skipped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waygraph::graph::Graph;
    /// use petgraph::algo::dijkstra;
    /// use petgraph::graph::NodeIndex;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_vertex("a");
    /// graph.add_vertex("b");
    /// graph.add_vertex("c");
    /// graph.add_directed_edge("a", "b", 2).unwrap();
    /// graph.add_directed_edge("b", "c", 3).unwrap();
    ///
    /// let digraph = graph.to_digraph();
    /// let costs = dijkstra(&digraph, NodeIndex::new(0), None, |e| *e.weight());
    /// assert_eq!(costs[&NodeIndex::new(2)], 5);
    /// ```
    pub fn to_digraph(&self) -> DiGraph<T, Weight>
    where
        T: Clone,
    {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edge_count());
        let nodes: Vec<NodeIndex> = self
            .vertices
            .iter()
            .map(|v| graph.add_node(v.name().clone()))
            .collect();

        for (source, vertex) in self.vertices.iter().enumerate() {
            for edge in vertex.edges() {
                let Some(&target) = nodes.get(edge.target) else {
                    warn!(
                        "skipping edge from #{} to missing vertex #{}",
                        source, edge.target
                    );
                    continue;
                };
                graph.add_edge(nodes[source], target, edge.weight);
            }
        }

        graph
    }
}

impl<T: PartialEq> Graph<T> {
    /// Adds a vertex named `name` unless one already exists.
    ///
    /// Adding an existing name is a no-op and leaves that vertex's edges
    /// untouched.
    ///
    /// # Returns
    ///
    /// The index of the new or existing vertex.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waygraph::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// let first = graph.add_vertex("hub");
    /// let second = graph.add_vertex("hub");
    ///
    /// assert_eq!(first, second);
    /// assert_eq!(graph.vertex_count(), 1);
    /// ```
    pub fn add_vertex(&mut self, name: T) -> usize {
        if let Some(index) = self.position(&name) {
            trace!("vertex #{} already present, skipping", index);
            return index;
        }

        self.vertices.push(Vertex::new(name));
        let index = self.vertices.len() - 1;
        debug!("added vertex #{}", index);
        index
    }

    /// Returns the index of the vertex named `name`.
    pub fn position<Q>(&self, name: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.vertices.iter().position(|v| Borrow::<Q>::borrow(v.name()) == name)
    }

    /// Checks if a vertex named `name` exists.
    pub fn contains<Q>(&self, name: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(name).is_some()
    }

    /// Looks up a vertex by name.
    ///
    /// # Returns
    ///
    /// `Some(&Vertex)` for the first vertex named `name`, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waygraph::graph::Graph;
    ///
    /// let mut graph: Graph<String> = Graph::new();
    /// graph.add_vertex("bridge".to_string());
    ///
    /// assert!(graph.find_vertex("bridge").is_some());
    /// assert!(graph.find_vertex("tower").is_none());
    /// ```
    pub fn find_vertex<Q>(&self, name: &Q) -> Option<&Vertex<T>>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.vertices.iter().find(|v| Borrow::<Q>::borrow(v.name()) == name)
    }

    /// Looks up a vertex by name, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] carrying `name` when no
    /// vertex matches.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waygraph::graph::{Graph, GraphError};
    ///
    /// let graph: Graph<&str> = Graph::new();
    /// let err = graph.get_vertex("x").unwrap_err();
    /// assert_eq!(err, GraphError::VertexNotFound { name: "x".to_string() });
    /// ```
    pub fn get_vertex<Q>(&self, name: &Q) -> GraphResult<&Vertex<T>>
    where
        T: Borrow<Q>,
        Q: PartialEq + fmt::Display + ?Sized,
    {
        self.find_vertex(name)
            .ok_or_else(|| GraphError::vertex_not_found(name))
    }

    fn resolve<Q>(&self, name: &Q) -> GraphResult<usize>
    where
        T: Borrow<Q>,
        Q: PartialEq + fmt::Display + ?Sized,
    {
        self.position(name)
            .ok_or_else(|| GraphError::vertex_not_found(name))
    }

    /// Adds an edge from `start` to `finish`.
    ///
    /// `start` is resolved before `finish`, so when both are missing the
    /// error names `start`. An existing edge between the same vertices is
    /// kept and a parallel edge is appended.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is absent.
    /// The graph is unchanged in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waygraph::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_vertex("a");
    /// graph.add_vertex("b");
    ///
    /// graph.add_directed_edge("a", "b", 5).unwrap();
    /// assert!(graph.add_directed_edge("a", "z", 1).is_err());
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    pub fn add_directed_edge<Q>(&mut self, start: &Q, finish: &Q, weight: Weight) -> GraphResult<()>
    where
        T: Borrow<Q>,
        Q: PartialEq + fmt::Display + ?Sized,
    {
        let start_index = self.resolve(start)?;
        let finish_index = self.resolve(finish)?;

        self.vertices[start_index].add_edge(finish_index, weight);
        debug!("added edge {} -> {} ({})", start, finish, weight);
        Ok(())
    }

    /// Adds an edge in both directions between `start` and `finish`.
    ///
    /// The two directed edges are independent of each other once added.
    /// The forward edge is added first; if the reverse insertion fails the
    /// forward edge stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is absent.
    pub fn add_undirected_edge<Q>(
        &mut self,
        start: &Q,
        finish: &Q,
        weight: Weight,
    ) -> GraphResult<()>
    where
        T: Borrow<Q>,
        Q: PartialEq + fmt::Display + ?Sized,
    {
        self.add_directed_edge(start, finish, weight)?;

        if let Err(err) = self.add_directed_edge(finish, start, weight) {
            warn!(
                "undirected edge {} <-> {} left one-sided: {}",
                start, finish, err
            );
            return Err(err);
        }

        Ok(())
    }

    /// Returns the outgoing edges of `name` resolved to target names.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `name` is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waygraph::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_vertex("a");
    /// graph.add_vertex("b");
    /// graph.add_directed_edge("a", "b", 4).unwrap();
    ///
    /// assert_eq!(graph.neighbors("a").unwrap(), vec![(&"b", 4)]);
    /// ```
    pub fn neighbors<Q>(&self, name: &Q) -> GraphResult<Vec<(&T, Weight)>>
    where
        T: Borrow<Q>,
        Q: PartialEq + fmt::Display + ?Sized,
    {
        let vertex = self.get_vertex(name)?;

        Ok(vertex
            .edges()
            .iter()
            .filter_map(|edge| self.vertex(edge.target).map(|v| (v.name(), edge.weight)))
            .collect())
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Vertex: {}", vertex)?;
        }
        Ok(())
    }
}
