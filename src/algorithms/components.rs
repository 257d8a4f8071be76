use bit_vec::BitVec;
use tracing::debug;

use crate::algorithms::DenseIndex;
use crate::graphs::{
    frontier::LayeredFrontier, graph::Graph, undirected::Undirected, visited::Visited,
};

/// Vertex sets of the connected components of `graph`.
///
/// Components are listed in the order their first vertex appears in the
/// graph's vertex iteration, and each component lists its vertices in
/// breadth-first order from that vertex.
pub fn connected_components<G>(graph: &G) -> Vec<Vec<G::Vertex>>
where
    G: Undirected,
{
    let index = DenseIndex::new(graph);
    let mut visited = BitVec::from_elem(index.len(), false);
    let mut components = Vec::new();

    for root in 0..index.len() {
        if !visited.visit(root) {
            continue;
        }

        let mut component = Vec::new();
        let mut frontier = LayeredFrontier::new([root]);
        while let Some(layer) = frontier.step(|current, next| {
            for &from in current {
                for (to, _) in index.adjacent(graph, from) {
                    if visited.visit(to) {
                        next.push(to);
                    }
                }
            }
        }) {
            component.extend(layer.into_iter().map(|i| index.vertex(i).clone()));
        }
        components.push(component);
    }

    debug!(
        vertices = index.len(),
        components = components.len(),
        "split graph into connected components"
    );
    components
}

/// New graph holding `vertices` and every edge of `graph` between two of them.
///
/// Vertices missing from `graph` are still added, without edges.
pub fn induced_subgraph<G>(graph: &G, vertices: &[G::Vertex]) -> G
where
    G: Graph,
{
    let mut subgraph = G::default();
    for vertex in vertices {
        subgraph.insert_vertex(vertex.clone());
    }

    for vertex in vertices {
        for edge in graph.incident_edges(vertex) {
            let inside = edge
                .opposite(vertex)
                .is_some_and(|other| subgraph.has_vertex(other));
            if inside && !subgraph.has_edge(edge) {
                subgraph.insert_edge(edge.clone());
            }
        }
    }
    subgraph
}
