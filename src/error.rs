use thiserror::Error;

/// Errors returned by graph construction and queries.
///
/// Every operation that takes a vertex id checks all of its ids up front, so a
/// [`GraphError::VertexNotFound`] never leaves a partially applied change
/// behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<K> {
    /// An operation referenced a vertex id that is not in the graph.
    #[error("vertex {0:?} not found in graph")]
    VertexNotFound(K),

    /// A topological sort was requested on a graph that is not a DAG.
    /// `sorted` holds the vertices Kahn's algorithm managed to order before
    /// running out of zero in-degree vertices.
    #[error("graph contains a cycle; {remaining} vertices could not be ordered")]
    Cycle { sorted: Vec<K>, remaining: usize },
}

pub type GraphResult<T, K> = Result<T, GraphError<K>>;
