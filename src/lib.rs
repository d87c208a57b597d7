//! An in-memory directed or undirected graph with classic traversal and
//! analysis algorithms: BFS, DFS, shortest paths, distance-bounded neighbor
//! search, bipartiteness, connected components, cycle detection and
//! topological sort.
//!
//! Build a [`Graph`] by adding vertices and then edges between them; every
//! algorithm is a read-only query over the result.
//!
//! ```
//! use graphwalk::Graph;
//!
//! let mut graph = Graph::directed();
//! for id in ["A", "B", "C", "D"] {
//!     graph.add_vertex(id);
//! }
//! graph.add_edge(&"A", &"B")?;
//! graph.add_edge(&"B", &"C")?;
//! graph.add_edge(&"A", &"D")?;
//!
//! assert_eq!(graph.find_shortest_path(&"A", &"C")?, Some(vec!["A", "B", "C"]));
//! assert!(!graph.contains_cycle());
//! # Ok::<(), graphwalk::GraphError<&str>>(())
//! ```

pub mod coloring;
pub mod components;
pub mod cycle;
pub mod directedness;
pub mod error;
pub mod graph;
pub mod path;
pub mod prelude;
pub mod search;
pub mod topo;
pub mod tracing_support;
pub mod vertex;
pub mod vertex_ref;

mod marks;
mod test_support;

pub use crate::coloring::Color;
pub use crate::directedness::Directedness;
pub use crate::error::{GraphError, GraphResult};
pub use crate::graph::{Graph, VertexId};
pub use crate::path::DfsPath;
pub use crate::search::{BfsIterator, DfsIterator};
pub use crate::vertex::{Vertex, VertexIndex};
pub use crate::vertex_ref::VertexRef;
