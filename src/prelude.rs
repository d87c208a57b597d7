pub use crate::{Color, DfsPath, Directedness, Graph, GraphError, GraphResult, VertexId, VertexRef};
