//! Path queries: BFS shortest paths, vertices at a fixed distance, and DFS
//! path search.
//!
//! All three search from a single start vertex and record, for each vertex,
//! the neighbor it was first discovered from.  Discovery is never revised, so
//! a BFS records shortest paths while a DFS records whatever path it found
//! first.

use std::{collections::VecDeque, hash::Hash};

use derivative::Derivative;
use indexmap::{IndexMap, IndexSet};

use crate::{
    error::GraphResult,
    graph::{Graph, VertexId},
    tracing_support::{debug, info_span},
    vertex::VertexIndex,
};

/// Result of [`Graph::find_path_dfs_iter`].
#[derive(Clone, Debug, Derivative)]
#[derivative(PartialEq(bound = "K: Eq + Hash"), Eq(bound = "K: Eq + Hash"))]
pub enum DfsPath<K> {
    /// A path from the start to the target, both inclusive.
    Found(Vec<K>),
    /// The target is unreachable.  Holds the discovery path of every vertex
    /// that is reachable from the start, in discovery order.
    Unreachable(IndexMap<K, Vec<K>>),
}

impl<K> DfsPath<K> {
    pub fn is_found(&self) -> bool {
        matches!(self, DfsPath::Found(_))
    }

    pub fn path(&self) -> Option<&[K]> {
        match self {
            DfsPath::Found(path) => Some(path),
            DfsPath::Unreachable(_) => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<K>> {
        match self {
            DfsPath::Found(path) => Some(path),
            DfsPath::Unreachable(_) => None,
        }
    }
}

/// Discovery parents for one search.  `parents[i]` is the slot vertex `i`
/// was discovered from; the start vertex is its own parent.
struct Discovery {
    parents: Vec<Option<VertexIndex>>,
    order: Vec<VertexIndex>,
}

impl Discovery {
    fn new(len: usize, start: VertexIndex) -> Self {
        let mut parents = vec![None; len];
        parents[start.0] = Some(start);
        Self {
            parents,
            order: vec![start],
        }
    }

    /// Records `vertex` as discovered from `parent`.  Returns false if it
    /// was already discovered.
    fn discover(&mut self, vertex: VertexIndex, parent: VertexIndex) -> bool {
        if self.parents[vertex.0].is_some() {
            return false;
        }
        self.parents[vertex.0] = Some(parent);
        self.order.push(vertex);
        true
    }

    fn path_to<K: VertexId>(&self, graph: &Graph<K>, target: VertexIndex) -> Vec<K> {
        let mut path = vec![graph.id_at(target).clone()];
        let mut current = target;
        while let Some(parent) = self.parents[current.0] {
            if parent == current {
                break;
            }
            path.push(graph.id_at(parent).clone());
            current = parent;
        }
        path.reverse();
        path
    }
}

impl<K: VertexId> Graph<K> {
    /// Finds a shortest path (by edge count) from `start` to `target`, both
    /// inclusive.  Among equally short paths, the one through neighbors added
    /// earlier wins.  Returns `Ok(None)` if `target` is unreachable.
    pub fn find_shortest_path(&self, start: &K, target: &K) -> GraphResult<Option<Vec<K>>, K> {
        let start_index = self.require(start)?;
        let target_index = self.require(target)?;
        let _span = info_span!("find_shortest_path", start = ?start, target = ?target).entered();

        let mut discovery = Discovery::new(self.vertex_count(), start_index);
        let mut queue = VecDeque::from([start_index]);
        while let Some(current) = queue.pop_front() {
            if current == target_index {
                return Ok(Some(discovery.path_to(self, target_index)));
            }
            for neighbor in self.neighbors_of(current) {
                if discovery.discover(neighbor, current) {
                    queue.push_back(neighbor);
                }
            }
        }
        debug!("no path found");
        Ok(None)
    }

    /// Finds every vertex whose BFS distance from `start` is exactly
    /// `distance`, in the order BFS discovers them.  A distance of zero gives
    /// just `start`; a distance beyond the farthest reachable vertex gives an
    /// empty set.
    pub fn find_vertices_n_away(&self, start: &K, distance: usize) -> GraphResult<IndexSet<K>, K> {
        let start_index = self.require(start)?;
        let _span = info_span!("find_vertices_n_away", start = ?start, distance).entered();

        let mut distances: Vec<Option<usize>> = vec![None; self.vertex_count()];
        distances[start_index.0] = Some(0);
        let mut queue = VecDeque::from([(start_index, 0)]);
        let mut found = IndexSet::new();
        while let Some((current, current_distance)) = queue.pop_front() {
            if current_distance == distance {
                found.insert(self.id_at(current).clone());
                // Vertices at the requested distance are not expanded.
                continue;
            }
            for neighbor in self.neighbors_of(current) {
                if distances[neighbor.0].is_none() {
                    distances[neighbor.0] = Some(current_distance + 1);
                    queue.push_back((neighbor, current_distance + 1));
                }
            }
        }
        Ok(found)
    }

    /// Searches for a path from `start` to `target` with an iterative DFS.
    ///
    /// Each vertex keeps the path it was first discovered by, so the result
    /// is not necessarily the shortest path.  If `target` cannot be reached,
    /// the discovery path of every reachable vertex is returned instead.
    pub fn find_path_dfs_iter(&self, start: &K, target: &K) -> GraphResult<DfsPath<K>, K> {
        let start_index = self.require(start)?;
        let target_index = self.require(target)?;
        let _span = info_span!("find_path_dfs_iter", start = ?start, target = ?target).entered();

        if start_index == target_index {
            return Ok(DfsPath::Found(vec![start.clone()]));
        }

        let mut discovery = Discovery::new(self.vertex_count(), start_index);
        let mut stack = vec![start_index];
        while let Some(current) = stack.pop() {
            debug!(vertex = ?self.id_at(current), "expanding vertex");
            for neighbor in self.neighbors_of(current) {
                if discovery.discover(neighbor, current) {
                    if neighbor == target_index {
                        return Ok(DfsPath::Found(discovery.path_to(self, neighbor)));
                    }
                    stack.push(neighbor);
                }
            }
        }

        let reachable = discovery
            .order
            .iter()
            .map(|&index| (self.id_at(index).clone(), discovery.path_to(self, index)))
            .collect();
        Ok(DfsPath::Unreachable(reachable))
    }

    /// Returns true if `target` can be reached from `start`.
    pub fn is_reachable(&self, start: &K, target: &K) -> GraphResult<bool, K> {
        let target_index = self.require(target)?;
        Ok(self
            .bfs(start)?
            .any(|id| self.index_of(id) == Some(target_index)))
    }
}
