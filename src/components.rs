use std::collections::VecDeque;

use crate::{
    graph::{Graph, VertexId},
    marks::Marks,
    tracing_support::{debug, info_span},
    vertex::VertexIndex,
};

impl<K: VertexId> Graph<K> {
    /// Partitions the vertices into connected components.
    ///
    /// Each component is explored depth-first starting from the unassigned
    /// vertex with the lowest id, and lists its ids in visiting order.
    /// Components are returned in order of their starting vertex.  Edge
    /// directions are ignored, so in a directed graph these are the weakly
    /// connected components.
    pub fn get_connected_components(&self) -> Vec<Vec<K>> {
        let _span = info_span!("get_connected_components").entered();
        let adjacency = self.undirected_adjacency();
        let mut visited = Marks::new(self.vertex_count());
        let mut components = Vec::new();

        for start in self.indices_by_id() {
            if visited.contains(start) {
                continue;
            }
            let mut component = Vec::new();
            let mut stack = vec![start];
            while let Some(current) = stack.pop() {
                if !visited.insert(current) {
                    continue;
                }
                component.push(self.id_at(current).clone());
                let pending = stack.len();
                stack.extend(
                    adjacency[current.0]
                        .iter()
                        .copied()
                        .filter(|&n| !visited.contains(n)),
                );
                stack[pending..].reverse();
            }
            debug!(start = ?self.id_at(start), size = component.len(), "found component");
            components.push(component);
        }
        components
    }

    /// Partitions the vertices into connected components using breadth-first
    /// search.
    ///
    /// Same contract as [`Self::get_connected_components`], except that each
    /// component starts from the earliest-inserted unassigned vertex and
    /// lists its ids in BFS order.
    pub fn find_connected_components(&self) -> Vec<Vec<K>> {
        let _span = info_span!("find_connected_components").entered();
        let adjacency = self.undirected_adjacency();
        let mut seen = Marks::new(self.vertex_count());
        let mut components = Vec::new();

        for slot in 0..self.vertex_count() {
            let start = VertexIndex(slot);
            if !seen.insert(start) {
                continue;
            }
            let mut component = Vec::new();
            let mut queue = VecDeque::from([start]);
            while let Some(current) = queue.pop_front() {
                component.push(self.id_at(current).clone());
                for &neighbor in &adjacency[current.0] {
                    if seen.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }
            debug!(start = ?self.id_at(start), size = component.len(), "found component");
            components.push(component);
        }
        components
    }

    /// Returns true if the graph has at most one connected component.
    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        let adjacency = self.undirected_adjacency();
        let mut seen = Marks::new(self.vertex_count());
        let start = VertexIndex(0);
        seen.insert(start);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for &neighbor in &adjacency[current.0] {
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        seen.is_full()
    }

    /// Partitions the vertices into strongly connected components, where two
    /// vertices share a component if each is reachable from the other along
    /// edge directions.  For an undirected graph this is the same partition
    /// as [`Self::get_connected_components`].
    #[cfg(feature = "pathfinding")]
    pub fn strongly_connected_components(&self) -> Vec<Vec<K>> {
        let _span = info_span!("strongly_connected_components").entered();
        let ids: Vec<K> = self.ids().cloned().collect();
        pathfinding::prelude::strongly_connected_components(&ids, |id| {
            self.index_of(id)
                .into_iter()
                .flat_map(|index| self.neighbors_of(index))
                .map(|neighbor| self.id_at(neighbor).clone())
                .collect::<Vec<_>>()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{
        Directedness,
        test_support::{ArbGraph, build, has_duplicates},
    };

    fn two_islands() -> Graph<&'static str> {
        // A - B - C   D - E   F
        build(
            Directedness::Undirected,
            &["C", "E", "A", "F", "B", "D"],
            &[("A", "B"), ("B", "C"), ("D", "E")],
        )
    }

    #[test]
    fn test_get_connected_components() {
        let graph = two_islands();
        assert_eq!(
            graph.get_connected_components(),
            vec![vec!["A", "B", "C"], vec!["D", "E"], vec!["F"]]
        );
    }

    #[test]
    fn test_find_connected_components() {
        let graph = two_islands();
        assert_eq!(
            graph.find_connected_components(),
            vec![vec!["C", "B", "A"], vec!["E", "D"], vec!["F"]]
        );
    }

    #[test]
    fn test_components_ignore_direction() {
        // 1 -> 0 <- 2, 3 -> 4
        let graph = build(
            Directedness::Directed,
            &[0, 1, 2, 3, 4],
            &[(1, 0), (2, 0), (3, 4)],
        );
        assert_eq!(
            graph.get_connected_components(),
            vec![vec![0, 1, 2], vec![3, 4]]
        );
        assert_eq!(
            graph.find_connected_components(),
            vec![vec![0, 1, 2], vec![3, 4]]
        );
        assert!(!graph.is_connected());
    }

    #[test]
    fn test_components_of_empty_graph() {
        let graph: Graph<u8> = Graph::undirected();
        assert!(graph.get_connected_components().is_empty());
        assert!(graph.find_connected_components().is_empty());
        assert!(graph.is_connected());
    }

    #[test]
    fn test_is_connected() {
        let graph = build(Directedness::Directed, &[0, 1, 2], &[(2, 1), (1, 0)]);
        assert!(graph.is_connected());
    }

    #[cfg(feature = "pathfinding")]
    #[test]
    fn test_strongly_connected_components() {
        // 0 -> 1 -> 2 -> 0, 2 -> 3
        let graph = build(
            Directedness::Directed,
            &[0, 1, 2, 3],
            &[(0, 1), (1, 2), (2, 0), (2, 3)],
        );
        let mut components: Vec<Vec<_>> = graph
            .strongly_connected_components()
            .into_iter()
            .map(|mut c| {
                c.sort();
                c
            })
            .collect();
        components.sort();
        assert_eq!(components, vec![vec![0, 1, 2], vec![3]]);
    }

    fn is_partition(graph: &Graph<u8>, components: &[Vec<u8>]) -> bool {
        let all: Vec<u8> = components.iter().flatten().copied().collect();
        !has_duplicates(all.iter())
            && all.len() == graph.vertex_count()
            && components.iter().all(|c| !c.is_empty())
    }

    #[quickcheck]
    fn prop_components_partition_vertices(arb: ArbGraph) -> bool {
        let graph = arb.graph;
        let dfs = graph.get_connected_components();
        let bfs = graph.find_connected_components();
        let as_sets = |components: &[Vec<u8>]| -> HashSet<Vec<u8>> {
            components
                .iter()
                .map(|c| {
                    let mut c = c.clone();
                    c.sort();
                    c
                })
                .collect()
        };
        is_partition(&graph, &dfs)
            && is_partition(&graph, &bfs)
            && as_sets(&dfs) == as_sets(&bfs)
            && graph.is_connected() == (dfs.len() <= 1)
    }

    #[cfg(feature = "pathfinding")]
    #[quickcheck]
    fn prop_components_match_pathfinding(arb: ArbGraph) -> bool {
        let graph = arb.graph;
        if graph.is_directed() {
            return true;
        }
        let ids: Vec<u8> = graph.ids().copied().collect();
        let reference: HashSet<Vec<u8>> =
            pathfinding::prelude::connected_components(&ids, |id| {
                graph
                    .get_neighbors(id)
                    .unwrap()
                    .into_iter()
                    .map(|v| *v.id())
                    .collect::<Vec<_>>()
            })
            .into_iter()
            .map(|c| {
                let mut c: Vec<_> = c.into_iter().collect();
                c.sort();
                c
            })
            .collect();
        let ours: HashSet<Vec<u8>> = graph
            .get_connected_components()
            .into_iter()
            .map(|mut c| {
                c.sort();
                c
            })
            .collect();
        ours == reference
    }
}
