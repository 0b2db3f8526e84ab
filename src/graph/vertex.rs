//! Vertex and edge types.
//!
//! A [`Vertex`] owns its outgoing edges. Each [`Edge`] refers to its
//! target by position in the owning graph's vertex list rather than by
//! reference, so the graph stays the only owner of every vertex.

use std::fmt;

/// Weight attached to an edge.
///
/// The container gives weights no meaning; negative values are allowed.
pub type Weight = i32;

/// An outgoing edge of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Index of the target vertex in the owning graph
    pub target: usize,
    /// Edge weight
    pub weight: Weight,
}

impl Edge {
    /// Creates a new edge to the vertex at `target`.
    pub fn new(target: usize, weight: Weight) -> Self {
        Self { target, weight }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({})", self.target, self.weight)
    }
}

/// A named node in the graph together with its outgoing edges.
///
/// Vertices are created standalone with [`Vertex::new`] or through
/// [`Graph::add_vertex`](crate::graph::Graph::add_vertex). Edges can only
/// be added through the graph, which resolves both endpoints first.
///
/// # Example
///
/// ```rust
/// use waygraph::graph::Vertex;
///
/// let vertex = Vertex::new("spawn");
/// assert_eq!(*vertex.name(), "spawn");
/// assert!(vertex.edges().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<T> {
    name: T,
    edges: Vec<Edge>,
}

impl<T> Vertex<T> {
    /// Creates a vertex with no edges.
    pub fn new(name: T) -> Self {
        Self {
            name,
            edges: Vec::new(),
        }
    }

    /// Appends an edge to the vertex at `target`.
    ///
    /// No check is made for an existing edge to the same target; repeated
    /// calls produce parallel edges.
    pub(crate) fn add_edge(&mut self, target: usize, weight: Weight) {
        self.edges.push(Edge::new(target, weight));
    }

    /// Returns the vertex name.
    pub fn name(&self) -> &T {
        &self.name
    }

    /// Returns the outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the vertex has at least one outgoing edge.
    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    /// Consumes the vertex and returns its name.
    pub fn into_name(self) -> T {
        self.name
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.edges.is_empty() {
            return Ok(());
        }

        let edges: Vec<String> = self.edges.iter().map(Edge::to_string).collect();
        write!(f, " -> {}", edges.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vertex_has_no_edges() {
        let vertex = Vertex::new("a");
        assert_eq!(*vertex.name(), "a");
        assert_eq!(vertex.degree(), 0);
        assert!(!vertex.has_edges());
    }

    #[test]
    fn test_add_edge_appends_in_order() {
        let mut vertex = Vertex::new("a");
        vertex.add_edge(2, 10);
        vertex.add_edge(1, -3);

        assert_eq!(vertex.edges(), &[Edge::new(2, 10), Edge::new(1, -3)]);
    }

    #[test]
    fn test_add_edge_keeps_parallel_edges() {
        let mut vertex = Vertex::new("a");
        vertex.add_edge(1, 1);
        vertex.add_edge(1, 1);

        assert_eq!(vertex.degree(), 2);
        assert!(vertex.edges().iter().all(|e| e.target == 1 && e.weight == 1));
    }

    #[test]
    fn test_display_without_edges() {
        assert_eq!(Vertex::new("hub").to_string(), "hub");
    }

    #[test]
    fn test_display_with_edges() {
        let mut vertex = Vertex::new("hub");
        vertex.add_edge(1, 5);
        vertex.add_edge(3, 2);

        assert_eq!(vertex.to_string(), "hub -> #1 (5), #3 (2)");
    }

    #[test]
    fn test_into_name() {
        let vertex = Vertex::new(String::from("gate"));
        assert_eq!(vertex.into_name(), "gate");
    }
}
