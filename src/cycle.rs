use crate::{
    graph::{Graph, VertexId},
    tracing_support::{debug, info_span},
    vertex::VertexIndex,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Unvisited,
    /// On the current DFS path.
    Active,
    Finished,
}

/// A DFS stack entry: the vertex, the vertex it was reached from, and how
/// many of its neighbors have been examined.
struct Frame {
    vertex: VertexIndex,
    parent: Option<VertexIndex>,
    cursor: usize,
}

impl<K: VertexId> Graph<K> {
    /// Returns true if a cycle is reachable from the vertex with the lowest
    /// id.  Parts of the graph not reachable from that vertex are not
    /// examined; see [`Self::contains_any_cycle`].
    ///
    /// In a directed graph a cycle is a directed cycle.  In an undirected
    /// graph, walking an edge back the way it was just traversed does not
    /// count, but a self-loop does.
    pub fn contains_cycle(&self) -> bool {
        let _span = info_span!("contains_cycle").entered();
        let Some(start) = self.lowest_index() else {
            return false;
        };
        let mut states = vec![State::Unvisited; self.vertex_count()];
        self.cycle_from(start, &mut states)
    }

    /// Returns true if the graph contains a cycle anywhere, restarting the
    /// search from every vertex not yet explored.
    pub fn contains_any_cycle(&self) -> bool {
        let _span = info_span!("contains_any_cycle").entered();
        let mut states = vec![State::Unvisited; self.vertex_count()];
        self.indices_by_id()
            .into_iter()
            .any(|start| states[start.0] == State::Unvisited && self.cycle_from(start, &mut states))
    }

    fn cycle_from(&self, start: VertexIndex, states: &mut [State]) -> bool {
        let directed = self.is_directed();
        states[start.0] = State::Active;
        let mut stack = vec![Frame {
            vertex: start,
            parent: None,
            cursor: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(neighbor) = self.vertex_at(frame.vertex).neighbor_at(frame.cursor) else {
                states[frame.vertex.0] = State::Finished;
                stack.pop();
                continue;
            };
            frame.cursor += 1;
            let (vertex, parent) = (frame.vertex, frame.parent);

            if !directed && Some(neighbor) == parent {
                continue;
            }
            match states[neighbor.0] {
                State::Unvisited => {
                    states[neighbor.0] = State::Active;
                    stack.push(Frame {
                        vertex: neighbor,
                        parent: Some(vertex),
                        cursor: 0,
                    });
                }
                State::Active => {
                    debug!(from = ?self.id_at(vertex), to = ?self.id_at(neighbor), "found cycle");
                    return true;
                }
                // Undirected adjacency is symmetric, so a finished neighbor
                // already saw this vertex and this edge closes a cycle.
                State::Finished if !directed => {
                    debug!(from = ?self.id_at(vertex), to = ?self.id_at(neighbor), "found cycle");
                    return true;
                }
                State::Finished => {}
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{
        Directedness,
        test_support::{ArbDag, ArbGraph, build, cyclic_graph, simple_graph},
    };

    #[test]
    fn test_directed_cycle() {
        assert!(cyclic_graph().contains_cycle());
        assert!(cyclic_graph().contains_any_cycle());
    }

    #[test]
    fn test_dag_has_no_cycle() {
        assert!(!simple_graph().contains_cycle());
        assert!(!simple_graph().contains_any_cycle());
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        // Two paths to the same vertex are not a directed cycle.
        let graph = build(
            Directedness::Directed,
            &[0, 1, 2, 3],
            &[(0, 1), (0, 2), (1, 3), (2, 3)],
        );
        assert!(!graph.contains_cycle());
    }

    #[test]
    fn test_self_loop() {
        let directed = build(Directedness::Directed, &["A"], &[("A", "A")]);
        assert!(directed.contains_cycle());
        let undirected = build(Directedness::Undirected, &["A"], &[("A", "A")]);
        assert!(undirected.contains_cycle());
    }

    #[test]
    fn test_undirected_tree_has_no_cycle() {
        let graph = build(
            Directedness::Undirected,
            &[0, 1, 2, 3],
            &[(0, 1), (0, 2), (2, 3)],
        );
        assert!(!graph.contains_cycle());
        assert!(!graph.contains_any_cycle());
    }

    #[test]
    fn test_undirected_cycle() {
        let graph = build(
            Directedness::Undirected,
            &[0, 1, 2, 3],
            &[(0, 1), (1, 2), (2, 3), (3, 1)],
        );
        assert!(graph.contains_cycle());
    }

    #[test]
    fn test_cycle_unreachable_from_start() {
        // 0 -> 1, and 2 -> 3 -> 2 not reachable from 0.
        let graph = build(
            Directedness::Directed,
            &[0, 1, 2, 3],
            &[(0, 1), (2, 3), (3, 2)],
        );
        assert!(!graph.contains_cycle());
        assert!(graph.contains_any_cycle());
    }

    #[test]
    fn test_empty_graph_has_no_cycle() {
        let graph: Graph<u8> = Graph::directed();
        assert!(!graph.contains_cycle());
        assert!(!graph.contains_any_cycle());
    }

    #[quickcheck]
    fn prop_dags_have_no_cycles(arb: ArbDag) -> bool {
        !arb.graph.contains_any_cycle()
    }

    #[quickcheck]
    fn prop_any_cycle_is_consistent_with_single_start(arb: ArbGraph) -> bool {
        let graph = arb.graph;
        !graph.contains_cycle() || graph.contains_any_cycle()
    }

    #[quickcheck]
    fn prop_directed_cycle_iff_topological_sort_fails(arb: ArbGraph) -> bool {
        let graph = arb.graph;
        !graph.is_directed() || graph.contains_any_cycle() == graph.topological_sort().is_err()
    }
}
