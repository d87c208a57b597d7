#![cfg(test)]

use std::collections::HashSet;
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::{Directedness, Graph};

/// A randomly generated graph of either directedness.  Vertex ids are the
/// integers `0..n`, inserted in ascending order.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph<u8>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = u8::arbitrary(g) % 16; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 40;
        let mut graph = Graph::new(Directedness::arbitrary(g));
        for id in 0..num_vertices {
            graph.add_vertex(id);
        }
        if num_vertices > 0 {
            for _ in 0..num_edges {
                let source = u8::arbitrary(g) % num_vertices;
                let target = u8::arbitrary(g) % num_vertices;
                graph.add_edge(&source, &target).unwrap();
            }
        }
        ArbGraph { graph }
    }
}

/// A randomly generated directed acyclic graph.  Edges always go from a
/// smaller id to a larger one, but vertices are inserted in shuffled order so
/// insertion order is not already a topological order.
#[derive(Debug, Clone)]
pub struct ArbDag {
    pub graph: Graph<u8>,
}

impl Arbitrary for ArbDag {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = u8::arbitrary(g) % 16;
        let num_edges = usize::arbitrary(g) % 40;
        let mut ids: Vec<u8> = (0..num_vertices).collect();
        ids.sort_by_cached_key(|_| u8::arbitrary(g));
        let mut graph = Graph::directed();
        for id in ids {
            graph.add_vertex(id);
        }
        if num_vertices > 1 {
            for _ in 0..num_edges {
                let a = u8::arbitrary(g) % num_vertices;
                let b = u8::arbitrary(g) % num_vertices;
                if a != b {
                    graph.add_edge(&a.min(b), &a.max(b)).unwrap();
                }
            }
        }
        ArbDag { graph }
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Builds a graph from vertex ids and edge pairs.
pub fn build<K: crate::VertexId>(
    directedness: Directedness,
    vertices: &[K],
    edges: &[(K, K)],
) -> Graph<K> {
    let mut graph = Graph::new(directedness);
    for id in vertices {
        graph.add_vertex(id.clone());
    }
    for (a, b) in edges {
        graph.add_edge(a, b).unwrap();
    }
    graph
}

/// `0 -> 1, 0 -> 2, 1 -> 3`
pub fn simple_graph() -> Graph<u8> {
    build(
        Directedness::Directed,
        &[0, 1, 2, 3],
        &[(0, 1), (0, 2), (1, 3)],
    )
}

/// `0 -> 1 -> 2 -> 0`
pub fn cyclic_graph() -> Graph<u8> {
    build(Directedness::Directed, &[0, 1, 2], &[(0, 1), (1, 2), (2, 0)])
}

/// A directed path `0 -> 1 -> ... -> n - 1`.
#[allow(dead_code)]
pub fn chain(n: u32) -> Graph<u32> {
    let mut graph = Graph::with_capacity(Directedness::Directed, n as usize);
    for id in 0..n {
        graph.add_vertex(id);
    }
    for id in 1..n {
        graph.add_edge(&(id - 1), &id).unwrap();
    }
    graph
}
