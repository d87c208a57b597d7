//! Bipartiteness via breadth-first 2-coloring.
//!
//! Edge directions are ignored: a directed graph is bipartite when its
//! underlying undirected graph is.  A self-loop makes a graph non-bipartite.

use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};

use crate::{
    error::GraphResult,
    graph::{Graph, VertexId},
    tracing_support::{debug, info_span},
    vertex::VertexIndex,
};

/// One side of a 2-coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    pub fn other(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }
}

impl<K: VertexId> Graph<K> {
    /// Returns true if every connected component of the graph can be
    /// 2-colored.  The empty graph is bipartite.
    pub fn is_bipartite(&self) -> bool {
        let _span = info_span!("is_bipartite").entered();
        self.color_all().is_some()
    }

    /// Returns true if the component containing `start` can be 2-colored.
    /// Other components are not examined.
    pub fn is_bipartite_from(&self, start: &K) -> GraphResult<bool, K> {
        let start_index = self.require(start)?;
        let _span = info_span!("is_bipartite_from", start = ?start).entered();
        let adjacency = self.undirected_adjacency();
        let mut colors = vec![None; self.vertex_count()];
        Ok(self.color_component(&adjacency, start_index, &mut colors))
    }

    /// Returns a 2-coloring of the whole graph in insertion order, or `None`
    /// if the graph is not bipartite.  Each component's lowest id is colored
    /// [`Color::Red`].
    pub fn two_coloring(&self) -> Option<IndexMap<K, Color>> {
        let _span = info_span!("two_coloring").entered();
        let colors = self.color_all()?;
        Some(
            self.ids()
                .cloned()
                .zip(colors.into_iter().flatten())
                .collect(),
        )
    }

    fn color_all(&self) -> Option<Vec<Option<Color>>> {
        let adjacency = self.undirected_adjacency();
        let mut colors = vec![None; self.vertex_count()];
        for start in self.indices_by_id() {
            if colors[start.0].is_none() && !self.color_component(&adjacency, start, &mut colors) {
                return None;
            }
        }
        Some(colors)
    }

    /// Colors the component of `start` breadth-first, alternating colors
    /// between layers.  Returns false at the first edge whose ends share a
    /// color.
    fn color_component(
        &self,
        adjacency: &[IndexSet<VertexIndex>],
        start: VertexIndex,
        colors: &mut [Option<Color>],
    ) -> bool {
        colors[start.0] = Some(Color::Red);
        let mut queue = VecDeque::from([(start, Color::Red)]);
        while let Some((current, color)) = queue.pop_front() {
            for &neighbor in &adjacency[current.0] {
                match colors[neighbor.0] {
                    None => {
                        colors[neighbor.0] = Some(color.other());
                        queue.push_back((neighbor, color.other()));
                    }
                    Some(neighbor_color) if neighbor_color == color => {
                        debug!(
                            from = ?self.id_at(current),
                            to = ?self.id_at(neighbor),
                            "edge joins two vertices of the same color"
                        );
                        return false;
                    }
                    Some(_) => {}
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{
        Directedness,
        error::GraphError,
        test_support::{ArbGraph, build},
    };

    #[test]
    fn test_path_is_bipartite() {
        let graph = build(
            Directedness::Undirected,
            &["A", "B", "C"],
            &[("A", "B"), ("B", "C")],
        );
        assert!(graph.is_bipartite());
        let coloring = graph.two_coloring().unwrap();
        assert_eq!(coloring[&"A"], Color::Red);
        assert_eq!(coloring[&"B"], Color::Blue);
        assert_eq!(coloring[&"C"], Color::Red);
    }

    #[test]
    fn test_triangle_is_not_bipartite() {
        let graph = build(
            Directedness::Undirected,
            &["A", "B", "C"],
            &[("A", "B"), ("B", "C"), ("A", "C")],
        );
        assert!(!graph.is_bipartite());
        assert!(graph.two_coloring().is_none());
    }

    #[test]
    fn test_even_cycle_is_bipartite() {
        let graph = build(
            Directedness::Undirected,
            &[0, 1, 2, 3],
            &[(0, 1), (1, 2), (2, 3), (3, 0)],
        );
        assert!(graph.is_bipartite());
    }

    #[test]
    fn test_self_loop_is_not_bipartite() {
        let graph = build(Directedness::Directed, &[0, 1], &[(0, 1), (1, 1)]);
        assert!(!graph.is_bipartite());
    }

    #[test]
    fn test_directed_triangle_ignores_direction() {
        let graph = build(
            Directedness::Directed,
            &[0, 1, 2],
            &[(0, 1), (1, 2), (2, 0)],
        );
        assert!(!graph.is_bipartite());
    }

    #[test]
    fn test_odd_cycle_in_second_component() {
        // 0 - 1, and a triangle 2 - 3 - 4
        let graph = build(
            Directedness::Undirected,
            &[0, 1, 2, 3, 4],
            &[(0, 1), (2, 3), (3, 4), (4, 2)],
        );
        assert!(!graph.is_bipartite());
        assert_eq!(graph.is_bipartite_from(&0), Ok(true));
        assert_eq!(graph.is_bipartite_from(&3), Ok(false));
    }

    #[test]
    fn test_bipartite_from_missing_vertex() {
        let graph: Graph<u8> = Graph::undirected();
        assert_eq!(
            graph.is_bipartite_from(&1),
            Err(GraphError::VertexNotFound(1))
        );
    }

    #[test]
    fn test_empty_graph_is_bipartite() {
        let graph: Graph<u8> = Graph::undirected();
        assert!(graph.is_bipartite());
        assert_eq!(graph.two_coloring(), Some(IndexMap::new()));
    }

    #[quickcheck]
    fn prop_coloring_is_proper(arb: ArbGraph) -> bool {
        let graph = arb.graph;
        match graph.two_coloring() {
            Some(coloring) => {
                coloring.len() == graph.vertex_count()
                    && graph.vertices().all(|v| {
                        v.neighbors()
                            .all(|n| coloring[v.id()] != coloring[n.id()])
                    })
            }
            None => !graph.is_bipartite(),
        }
    }

    #[quickcheck]
    fn prop_bipartite_iff_every_component_is(arb: ArbGraph) -> bool {
        let graph = arb.graph;
        let per_component = graph
            .get_connected_components()
            .iter()
            .all(|c| graph.is_bipartite_from(&c[0]).unwrap());
        graph.is_bipartite() == per_component
    }
}
