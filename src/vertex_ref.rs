use std::fmt;

use derivative::Derivative;

use crate::{
    graph::{Graph, VertexId},
    vertex::{Vertex, VertexIndex},
};

/// A borrowed view of a vertex that can follow its adjacency back into the
/// graph that owns it.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = "K: fmt::Debug")
)]
pub struct VertexRef<'g, K> {
    #[derivative(Debug = "ignore")]
    graph: &'g Graph<K>,
    index: VertexIndex,
}

impl<'g, K: VertexId> VertexRef<'g, K> {
    pub(crate) fn new(graph: &'g Graph<K>, index: VertexIndex) -> Self {
        Self { graph, index }
    }

    pub fn graph(&self) -> &'g Graph<K> {
        self.graph
    }

    pub fn index(&self) -> VertexIndex {
        self.index
    }

    pub fn id(&self) -> &'g K {
        self.vertex().id()
    }

    pub fn vertex(&self) -> &'g Vertex<K> {
        self.graph.vertex_at(self.index)
    }

    /// Gets the neighbors of this vertex in the order their edges were added.
    pub fn neighbors(&self) -> impl ExactSizeIterator<Item = VertexRef<'g, K>> + use<'g, K> {
        let graph = self.graph;
        self.vertex()
            .neighbor_indices()
            .map(move |index| VertexRef::new(graph, index))
    }

    pub fn out_degree(&self) -> usize {
        self.vertex().out_degree()
    }
}

impl<K> PartialEq for VertexRef<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.index == other.index
    }
}

impl<K> Eq for VertexRef<'_, K> {}

impl<K: VertexId + fmt::Display> fmt::Display for VertexRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} adjacent to [", self.id())?;
        for (i, neighbor) in self.neighbors().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", neighbor.id())?;
        }
        write!(f, "]")
    }
}
