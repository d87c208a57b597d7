use std::collections::VecDeque;

use crate::{
    error::{GraphError, GraphResult},
    graph::{Graph, VertexId},
    tracing_support::{debug, info_span},
    vertex::VertexIndex,
};

impl<K: VertexId> Graph<K> {
    /// Orders all vertices so that for every edge `a -> b`, `a` comes before
    /// `b`, using Kahn's algorithm.
    ///
    /// Vertices with no remaining incoming edges are emitted first-in,
    /// first-out, seeded in insertion order, so the result is deterministic.
    /// If the graph has a cycle, fails with [`GraphError::Cycle`] carrying
    /// the vertices that could be ordered.  In an undirected graph every
    /// edge counts as a cycle.
    pub fn topological_sort(&self) -> GraphResult<Vec<K>, K> {
        let _span = info_span!("topological_sort").entered();

        let mut in_degree = vec![0usize; self.vertex_count()];
        for vertex in self.vertices() {
            for neighbor in self.neighbors_of(vertex.index()) {
                in_degree[neighbor.0] += 1;
            }
        }

        let mut ready: VecDeque<VertexIndex> = (0..self.vertex_count())
            .map(VertexIndex)
            .filter(|index| in_degree[index.0] == 0)
            .collect();
        let mut sorted = Vec::with_capacity(self.vertex_count());

        while let Some(current) = ready.pop_front() {
            sorted.push(self.id_at(current).clone());
            for neighbor in self.neighbors_of(current) {
                in_degree[neighbor.0] -= 1;
                if in_degree[neighbor.0] == 0 {
                    ready.push_back(neighbor);
                }
            }
        }

        let remaining = self.vertex_count() - sorted.len();
        if remaining > 0 {
            debug!(remaining, "vertices left with incoming edges");
            return Err(GraphError::Cycle { sorted, remaining });
        }
        Ok(sorted)
    }
}
