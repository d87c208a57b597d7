//! `Graph` owns every vertex of a directed or undirected graph and is the
//! entry point for construction and for all traversal algorithms.
//!
//! Vertices live in an insertion-ordered arena keyed by id.  A vertex's
//! position in that arena is its [`VertexIndex`], and adjacency sets hold
//! indices rather than references, so there are no ownership cycles and no
//! way for an edge to dangle.
//!
//! The algorithms themselves live in sibling modules and are implemented as
//! inherent methods on `Graph`:
//!
//! - [`crate::search`]: BFS and DFS traversal and iterators
//! - [`crate::path`]: shortest path, distance-`n` neighbors, DFS path search
//! - [`crate::components`]: connected components
//! - [`crate::coloring`]: bipartiteness
//! - [`crate::cycle`]: cycle detection
//! - [`crate::topo`]: topological sort
//!
//! Wherever an algorithm needs an arbitrary starting vertex, the vertex with
//! the lowest id is used so results are reproducible.

use std::{fmt, hash::Hash};

use indexmap::{IndexMap, IndexSet};

use crate::{
    directedness::Directedness,
    error::{GraphError, GraphResult},
    vertex::{Vertex, VertexIndex},
    vertex_ref::VertexRef,
};

/// A trait for types usable as vertex ids.
///
/// `Ord` is required so that algorithms which need an arbitrary starting
/// vertex can pick the smallest one deterministically.
pub trait VertexId: Eq + Hash + Ord + Clone + fmt::Debug {}

impl<T> VertexId for T where T: Eq + Hash + Ord + Clone + fmt::Debug {}

/// A directed or undirected graph whose vertices are identified by `K`.
#[derive(Clone, Debug)]
pub struct Graph<K> {
    vertices: IndexMap<K, Vertex<K>>,
    directedness: Directedness,
}

impl<K: VertexId> Graph<K> {
    /// Creates a new, empty graph.
    pub fn new(directedness: Directedness) -> Self {
        Self {
            vertices: IndexMap::new(),
            directedness,
        }
    }

    pub fn directed() -> Self {
        Self::new(Directedness::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Directedness::Undirected)
    }

    pub fn with_capacity(directedness: Directedness, vertices: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity(vertices),
            directedness,
        }
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    // Construction

    /// Adds a vertex with the given id and returns a view of it.
    ///
    /// If a vertex with this id already exists, its adjacency is discarded
    /// and it starts over with no neighbors.  It keeps its slot, so in a
    /// directed graph edges from other vertices that point at it remain
    /// valid.  In an undirected graph its edges are removed from both ends.
    pub fn add_vertex(&mut self, id: K) -> VertexRef<'_, K> {
        let index = match self.vertices.get_index_of(&id) {
            Some(i) => {
                let former = self.vertices[i].clear_neighbors();
                if !self.is_directed() {
                    for neighbor in former {
                        self.vertices[neighbor.0].remove_neighbor(VertexIndex(i));
                    }
                }
                i
            }
            None => {
                let (i, _) = self.vertices.insert_full(id.clone(), Vertex::new(id));
                i
            }
        };
        VertexRef::new(self, VertexIndex(index))
    }

    /// Adds an edge from `from` to `to`, and from `to` to `from` when the
    /// graph is undirected.  Adding an edge that already exists has no
    /// effect.
    pub fn add_edge(&mut self, from: &K, to: &K) -> GraphResult<(), K> {
        let from_index = self.require(from)?;
        let to_index = self.require(to)?;
        self.vertices[from_index.0].add_neighbor(to_index);
        if !self.is_directed() {
            self.vertices[to_index.0].add_neighbor(from_index);
        }
        Ok(())
    }

    // Lookup

    /// Gets the vertex with the given id, if it exists.
    pub fn get_vertex(&self, id: &K) -> Option<VertexRef<'_, K>> {
        self.index_of(id).map(|index| VertexRef::new(self, index))
    }

    pub fn contains_id(&self, id: &K) -> bool {
        self.vertices.contains_key(id)
    }

    /// Gets an iterator over all vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexRef<'_, K>> + '_ {
        (0..self.vertices.len()).map(move |i| VertexRef::new(self, VertexIndex(i)))
    }

    /// Gets all vertices in insertion order.
    pub fn get_vertices(&self) -> Vec<VertexRef<'_, K>> {
        self.vertices().collect()
    }

    /// Gets an iterator over all vertex ids in insertion order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = &K> + '_ {
        self.vertices.keys()
    }

    /// Gets the neighbors of the vertex with the given id, in the order their
    /// edges were added.
    pub fn get_neighbors(&self, id: &K) -> GraphResult<Vec<VertexRef<'_, K>>, K> {
        let index = self.require(id)?;
        Ok(VertexRef::new(self, index).neighbors().collect())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Gets the number of edges.  In an undirected graph each edge is counted
    /// once, including self-loops.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.vertices.values().map(Vertex::out_degree).sum();
        if self.is_directed() {
            entries
        } else {
            let self_loops = self
                .vertices
                .values()
                .enumerate()
                .filter(|(i, v)| v.has_neighbor(VertexIndex(*i)))
                .count();
            (entries + self_loops) / 2
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // Arena access used by the algorithm modules.

    pub(crate) fn index_of(&self, id: &K) -> Option<VertexIndex> {
        self.vertices.get_index_of(id).map(VertexIndex)
    }

    /// Resolves an id to its slot, or fails with `VertexNotFound`.
    pub(crate) fn require(&self, id: &K) -> GraphResult<VertexIndex, K> {
        self.index_of(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.clone()))
    }

    pub(crate) fn vertex_at(&self, index: VertexIndex) -> &Vertex<K> {
        &self.vertices[index.0]
    }

    pub(crate) fn id_at(&self, index: VertexIndex) -> &K {
        self.vertex_at(index).id()
    }

    pub(crate) fn neighbors_of(
        &self,
        index: VertexIndex,
    ) -> impl ExactSizeIterator<Item = VertexIndex> + '_ {
        self.vertex_at(index).neighbor_indices()
    }

    /// Slots sorted by id, used to pick starting vertices deterministically.
    pub(crate) fn indices_by_id(&self) -> Vec<VertexIndex> {
        let mut indices: Vec<_> = (0..self.vertices.len()).map(VertexIndex).collect();
        indices.sort_by(|a, b| self.id_at(*a).cmp(self.id_at(*b)));
        indices
    }

    /// The vertex with the lowest id, if the graph is not empty.
    pub(crate) fn lowest_index(&self) -> Option<VertexIndex> {
        (0..self.vertices.len())
            .map(VertexIndex)
            .min_by(|a, b| self.id_at(*a).cmp(self.id_at(*b)))
    }

    /// Adjacency with edge directions ignored: each slot's out-neighbors
    /// followed by any in-neighbors not already listed.  For undirected
    /// graphs this is just the stored adjacency.
    pub(crate) fn undirected_adjacency(&self) -> Vec<IndexSet<VertexIndex>> {
        let mut adjacency: Vec<IndexSet<VertexIndex>> = self
            .vertices
            .values()
            .map(|v| v.neighbor_indices().collect())
            .collect();
        if self.is_directed() {
            for (i, vertex) in self.vertices.values().enumerate() {
                for target in vertex.neighbor_indices() {
                    adjacency[target.0].insert(VertexIndex(i));
                }
            }
        }
        adjacency
    }
}

impl<K: VertexId> Default for Graph<K> {
    fn default() -> Self {
        Self::directed()
    }
}

impl<K: VertexId + fmt::Display> fmt::Display for Graph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph with vertices: [")?;
        for (i, vertex) in self.vertices().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", vertex)?;
        }
        write!(f, "]")
    }
}
