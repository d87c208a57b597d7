use std::collections::VecDeque;

use crate::{
    error::GraphResult,
    graph::{Graph, VertexId},
    marks::Marks,
    tracing_support::{debug, info_span},
    vertex::VertexIndex,
};

/// Breadth-first iterator over the ids reachable from a set of start
/// vertices.  Vertices are yielded in order of increasing distance, ties
/// broken by adjacency insertion order.
pub struct BfsIterator<'g, K> {
    graph: &'g Graph<K>,
    seen: Marks,
    queue: VecDeque<VertexIndex>,
}

impl<'g, K: VertexId> BfsIterator<'g, K> {
    pub(crate) fn new(graph: &'g Graph<K>, start: impl IntoIterator<Item = VertexIndex>) -> Self {
        let mut seen = Marks::new(graph.vertex_count());
        let queue = start.into_iter().filter(|&i| seen.insert(i)).collect();
        Self { graph, seen, queue }
    }
}

impl<'g, K: VertexId> Iterator for BfsIterator<'g, K> {
    type Item = &'g K;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        for neighbor in self.graph.neighbors_of(current) {
            if self.seen.insert(neighbor) {
                self.queue.push_back(neighbor);
            }
        }
        Some(self.graph.id_at(current))
    }
}

/// Depth-first iterator over the ids reachable from a set of start vertices.
///
/// Uses an explicit stack but yields vertices in the same preorder as the
/// recursive formulation: a vertex, then the whole subtree of its first
/// unvisited neighbor, then the next, and so on.
pub struct DfsIterator<'g, K> {
    graph: &'g Graph<K>,
    visited: Marks,
    stack: Vec<VertexIndex>,
}

impl<'g, K: VertexId> DfsIterator<'g, K> {
    pub(crate) fn new(graph: &'g Graph<K>, start: impl IntoIterator<Item = VertexIndex>) -> Self {
        let mut stack: Vec<_> = start.into_iter().collect();
        stack.reverse();
        Self {
            graph,
            visited: Marks::new(graph.vertex_count()),
            stack,
        }
    }
}

impl<'g, K: VertexId> Iterator for DfsIterator<'g, K> {
    type Item = &'g K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if self.visited.insert(current) {
                let successors = self.graph.neighbors_of(current);
                let pending = self.stack.len();
                self.stack.extend(successors.filter(|&n| !self.visited.contains(n)));
                self.stack[pending..].reverse();
                return Some(self.graph.id_at(current));
            }
        }
        None
    }
}

impl<K: VertexId> Graph<K> {
    /// Returns a breadth-first iterator starting at `start`.
    pub fn bfs(&self, start: &K) -> GraphResult<BfsIterator<'_, K>, K> {
        let index = self.require(start)?;
        Ok(BfsIterator::new(self, [index]))
    }

    /// Returns a breadth-first iterator that starts from several vertices at
    /// once.  Ids that appear more than once are visited once.
    pub fn bfs_multi<'a>(
        &self,
        start: impl IntoIterator<Item = &'a K>,
    ) -> GraphResult<BfsIterator<'_, K>, K>
    where
        K: 'a,
    {
        let indices = self.require_all(start)?;
        Ok(BfsIterator::new(self, indices))
    }

    /// Returns a depth-first iterator starting at `start`.
    pub fn dfs(&self, start: &K) -> GraphResult<DfsIterator<'_, K>, K> {
        let index = self.require(start)?;
        Ok(DfsIterator::new(self, [index]))
    }

    /// Returns a depth-first iterator that starts from several vertices in
    /// the given order.
    pub fn dfs_multi<'a>(
        &self,
        start: impl IntoIterator<Item = &'a K>,
    ) -> GraphResult<DfsIterator<'_, K>, K>
    where
        K: 'a,
    {
        let indices = self.require_all(start)?;
        Ok(DfsIterator::new(self, indices))
    }

    /// Visits every vertex reachable from `start` in breadth-first order and
    /// returns the ids in the order they were processed.
    pub fn bfs_traversal(&self, start: &K) -> GraphResult<Vec<K>, K> {
        let _span = info_span!("bfs_traversal", start = ?start).entered();
        let order: Vec<K> = self
            .bfs(start)?
            .inspect(|id| debug!(vertex = ?id, "processing vertex"))
            .cloned()
            .collect();
        Ok(order)
    }

    /// Visits every vertex reachable from `start` in depth-first order and
    /// returns the ids in the order they were visited.
    pub fn dfs_traversal(&self, start: &K) -> GraphResult<Vec<K>, K> {
        let _span = info_span!("dfs_traversal", start = ?start).entered();
        let order: Vec<K> = self
            .dfs(start)?
            .inspect(|id| debug!(vertex = ?id, "visiting vertex"))
            .cloned()
            .collect();
        Ok(order)
    }

    fn require_all<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a K>,
    ) -> GraphResult<Vec<VertexIndex>, K>
    where
        K: 'a,
    {
        ids.into_iter().map(|id| self.require(id)).collect()
    }
}
