use std::borrow::Cow;
use std::cmp::Reverse;

use tracing::debug;

use crate::algorithms::{
    DenseIndex,
    components::{connected_components, induced_subgraph},
    union_find::UnionFind,
};
use crate::graphs::{edge::Edge, graph::Graph, undirected::Undirected};

/// Edges of a minimum spanning forest, by Kruskal's algorithm.
///
/// Edges are considered in ascending length, with ties kept in the graph's
/// edge iteration order, and accepted when they join two different trees.
/// The result is in ascending length and spans every component.
pub fn minimum_spanning_forest<G>(graph: &G) -> Vec<&Edge<G::Vertex>>
where
    G: Undirected,
{
    let index = DenseIndex::new(graph);
    let mut edges: Vec<&Edge<G::Vertex>> = graph.edges().collect();
    edges.sort_by_key(|edge| edge.length());

    let mut trees = UnionFind::new(index.len());
    edges
        .into_iter()
        .filter(|edge| {
            match (index.position(edge.v1()), index.position(edge.v2())) {
                (Some(a), Some(b)) => trees.union(a, b),
                _ => false,
            }
        })
        .collect()
}

/// Splits `graph` into `k` clusters by cutting the `k - 1` longest edges of
/// a minimum spanning forest.
///
/// Every returned component is a fresh graph holding its vertices and the
/// forest edges between them; edges of `graph` that are not forest edges are
/// dropped. `k == 1` returns `graph` itself, borrowed. `k == 0`, `k` larger
/// than the vertex count, and an empty graph yield no components.
///
/// On a disconnected graph the forest already has one tree per component, so
/// the result holds `k - 1` plus the number of components entries.
pub fn minimum_spanning_components<G>(graph: &G, k: usize) -> Vec<Cow<'_, G>>
where
    G: Graph,
{
    let count = graph.vertex_count();
    if count == 0 || k == 0 || k > count {
        debug!(k, vertices = count, "no spanning partition for this k");
        return Vec::new();
    }
    if k == 1 {
        return vec![Cow::Borrowed(graph)];
    }

    let mut forest_edges = minimum_spanning_forest(graph);
    forest_edges.sort_by_key(|edge| Reverse(edge.length()));

    let mut forest = G::default();
    for vertex in graph.vertices() {
        forest.insert_vertex(vertex.clone());
    }
    for edge in forest_edges.into_iter().skip(k - 1) {
        forest.insert_edge(edge.clone());
    }

    let components: Vec<Cow<'_, G>> = connected_components(&forest)
        .into_iter()
        .map(|vertices| Cow::Owned(induced_subgraph(&forest, &vertices)))
        .collect();

    debug!(
        k,
        vertices = count,
        components = components.len(),
        "partitioned minimum spanning forest"
    );
    components
}
