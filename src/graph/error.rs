//! Error types for graph operations.

use thiserror::Error;

/// Errors that can occur when resolving vertices by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// No vertex with the requested name exists in the graph.
    #[error("Vertex not found: {name}")]
    VertexNotFound {
        /// The name that was looked up
        name: String,
    },
}

impl GraphError {
    /// Creates a not-found error for the given name.
    pub fn vertex_not_found(name: impl ToString) -> Self {
        Self::VertexNotFound {
            name: name.to_string(),
        }
    }
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = GraphError::vertex_not_found("cellar");
        assert_eq!(err.to_string(), "Vertex not found: cellar");
    }

    #[test]
    fn test_not_found_carries_name() {
        let err = GraphError::vertex_not_found(42);
        assert_eq!(
            err,
            GraphError::VertexNotFound {
                name: "42".to_string()
            }
        );
    }
}
