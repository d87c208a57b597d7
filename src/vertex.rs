use std::fmt;

use indexmap::IndexSet;

/// A vertex's slot in the arena of the graph that owns it.  Adjacency sets
/// store slots rather than references, so vertices never own each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexIndex(pub(crate) usize);

impl VertexIndex {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single vertex: its id and the slots of its neighbors in insertion order.
#[derive(Clone, Debug)]
pub struct Vertex<K> {
    id: K,
    neighbors: IndexSet<VertexIndex>,
}

impl<K> Vertex<K> {
    pub(crate) fn new(id: K) -> Self {
        Self {
            id,
            neighbors: IndexSet::new(),
        }
    }

    /// Gets the id of this vertex.
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Records `other` as a neighbor.  Adding a neighbor that is already
    /// present leaves its position unchanged.
    pub(crate) fn add_neighbor(&mut self, other: VertexIndex) {
        self.neighbors.insert(other);
    }

    /// Removes `other` from the neighbors, keeping the order of the rest.
    pub(crate) fn remove_neighbor(&mut self, other: VertexIndex) -> bool {
        self.neighbors.shift_remove(&other)
    }

    /// Removes every neighbor, returning the slots that were removed.
    pub(crate) fn clear_neighbors(&mut self) -> IndexSet<VertexIndex> {
        std::mem::take(&mut self.neighbors)
    }

    /// Slots of this vertex's neighbors, in the order they were added.
    pub fn neighbor_indices(&self) -> impl ExactSizeIterator<Item = VertexIndex> + '_ {
        self.neighbors.iter().copied()
    }

    /// The `n`th neighbor in insertion order.
    pub(crate) fn neighbor_at(&self, n: usize) -> Option<VertexIndex> {
        self.neighbors.get_index(n).copied()
    }

    pub fn has_neighbor(&self, other: VertexIndex) -> bool {
        self.neighbors.contains(&other)
    }

    pub fn out_degree(&self) -> usize {
        self.neighbors.len()
    }
}

impl<K: fmt::Display> fmt::Display for Vertex<K> {
    /// Only the vertex's own id is available here; use
    /// [`crate::VertexRef`] to display neighbor ids.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} neighbors)", self.id, self.neighbors.len())
    }
}
