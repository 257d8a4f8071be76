use tracing::debug;

use crate::algorithms::{DenseIndex, dijkstra};
use crate::graphs::undirected::Undirected;

/// Largest finite shortest-path distance from every vertex, in the graph's
/// vertex iteration order.
///
/// Unreachable vertices are ignored, so on a disconnected graph each value
/// only covers the vertex's own component.
fn eccentricities<G>(graph: &G) -> Vec<(&G::Vertex, i64)>
where
    G: Undirected,
{
    let index = DenseIndex::new(graph);
    let index = &index;

    (0..index.len())
        .map(|source| {
            let search = dijkstra::settle(index.len(), source, None, move |u| {
                index.adjacent(graph, u).map(|(w, edge)| (w, edge.length()))
            });
            (index.vertex(source), search.farthest())
        })
        .collect()
}

/// Longest shortest-path distance between any two mutually reachable
/// vertices.
///
/// `-1` for an empty graph and `0` for a graph without edges. Disconnected
/// pairs are skipped rather than treated as infinitely far apart.
pub fn diameter<G>(graph: &G) -> i64
where
    G: Undirected,
{
    let diameter = eccentricities(graph)
        .into_iter()
        .map(|(_, eccentricity)| eccentricity)
        .max()
        .unwrap_or(-1);

    debug!(vertices = graph.vertex_count(), diameter, "computed diameter");
    diameter
}

/// A vertex whose eccentricity is minimal.
///
/// Ties go to the vertex that comes first in the graph's vertex iteration
/// order. `None` for an empty graph.
pub fn center<G>(graph: &G) -> Option<G::Vertex>
where
    G: Undirected,
{
    let mut best: Option<(&G::Vertex, i64)> = None;
    for (vertex, eccentricity) in eccentricities(graph) {
        if best.is_none_or(|(_, lowest)| eccentricity < lowest) {
            best = Some((vertex, eccentricity));
        }
    }

    best.map(|(vertex, _)| vertex.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::graphs::{
        edge::Edge, edges::InsertEdge, graph::Graph, list::ListGraph, matrix::MatrixGraph,
        vertex::Vertex, vertices::InsertVertex,
    };

    fn v(id: i64) -> Vertex {
        Vertex::new(id, format!("v{id}"))
    }

    fn build<G: Graph<Vertex = Vertex>>(vertices: i64, edges: &[(i64, i64, i64)]) -> G {
        let mut graph = G::default();
        for id in 0..vertices {
            graph.insert_vertex(v(id));
        }
        for &(a, b, length) in edges {
            graph.insert_edge(Edge::new(v(a), v(b), length).unwrap());
        }
        graph
    }

    #[test]
    fn empty_graph_has_no_center() {
        let graph = ListGraph::<Vertex>::new();
        assert_eq!(diameter(&graph), -1);
        assert_eq!(center(&graph), None);
    }

    #[test]
    fn isolated_vertices_have_zero_diameter() {
        let graph: MatrixGraph = build(3, &[]);
        assert_eq!(graph.diameter(), 0);
        assert_eq!(graph.center(), Some(v(0)), "ties go to the first vertex");
    }

    #[test]
    fn chain_has_its_middle_as_center() {
        // A - B (5), B - C (3)
        let edges = [(0, 1, 5), (1, 2, 3)];
        let list: ListGraph = build(3, &edges);
        let matrix: MatrixGraph = build(3, &edges);

        assert_eq!(list.diameter(), 8);
        assert_eq!(matrix.diameter(), 8);
        assert_eq!(list.center(), Some(v(1)));
        assert_eq!(matrix.center(), Some(v(1)));
    }

    #[test]
    fn disconnected_pairs_are_ignored() {
        let graph: ListGraph = build(4, &[(0, 1, 2), (2, 3, 9)]);
        assert_eq!(graph.diameter(), 9);
    }

    #[test]
    fn shortcut_shrinks_the_diameter() {
        let mut graph: ListGraph = build(4, &[(0, 1, 4), (1, 2, 4), (2, 3, 4)]);
        assert_eq!(graph.diameter(), 12);

        graph.insert_edge(Edge::new(v(0), v(3), 1).unwrap());
        assert_eq!(graph.diameter(), 5);
    }

    proptest! {
        #[test]
        fn prop_center_eccentricity_bounds(
            raw in proptest::collection::vec((0i64..7, 0i64..7, 0i64..15), 0..20)
        ) {
            let edges: Vec<_> = raw.into_iter().filter(|&(a, b, _)| a != b).collect();
            let list: ListGraph = build(7, &edges);
            let matrix: MatrixGraph = build(7, &edges);

            let diameter = list.diameter();
            prop_assert_eq!(diameter, matrix.diameter());

            let center = list.center().unwrap();
            let radius = eccentricities(&list)
                .into_iter()
                .find(|(vertex, _)| **vertex == center)
                .map(|(_, eccentricity)| eccentricity)
                .unwrap();

            prop_assert!(radius <= diameter);
            for (_, eccentricity) in eccentricities(&list) {
                prop_assert!(radius <= eccentricity);
            }
        }
    }
}
