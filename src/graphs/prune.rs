use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::graphs::{edge::Edge, graph::Graph, visited::Visited};

/// Removes a random number of edges from a connected graph without
/// disconnecting it.
///
/// A depth-first traversal from the first vertex splits the edges into tree
/// edges, which are kept, and the remaining cycle-closing edges, which become
/// candidates. Between zero and `candidates - 1` candidates are then picked
/// at random and removed.
///
/// The graph must be connected. Only the component of the first vertex is
/// traversed, so edges elsewhere are never removed. Returns the number of
/// edges removed.
pub fn prune_random_edges<G, R>(graph: &mut G, rng: &mut R) -> usize
where
    G: Graph,
    R: Rng,
{
    let mut candidates = cycle_edges(graph);
    if candidates.is_empty() {
        return 0;
    }

    let total = candidates.len();
    let iterations = rng.random_range(0..total);
    let mut removed = 0;
    for _ in 0..iterations {
        let pick = rng.random_range(0..candidates.len());
        let edge = candidates.swap_remove(pick);
        if graph.remove_edge(&edge) {
            removed += 1;
        }
    }

    debug!(candidates = total, removed, "pruned random edges");
    removed
}

/// Non-tree edges of a depth-first traversal from the first vertex.
fn cycle_edges<G: Graph>(graph: &G) -> Vec<Edge<G::Vertex>> {
    let Some(start) = graph.vertices().next() else {
        return Vec::new();
    };

    let mut visited: FxHashSet<&G::Vertex> = FxHashSet::default();
    let mut tree: FxHashSet<&Edge<G::Vertex>> = FxHashSet::default();
    let mut seen: FxHashSet<&Edge<G::Vertex>> = FxHashSet::default();
    let mut candidates = Vec::new();

    let mut stack = vec![(start, None)];
    while let Some((vertex, via)) = stack.pop() {
        if visited.visit(vertex) {
            if let Some(edge) = via {
                tree.insert(edge);
            }
            for edge in graph.incident_edges(vertex) {
                if let Some(next) = edge.opposite(vertex) {
                    stack.push((next, Some(edge)));
                }
            }
        } else if let Some(edge) = via {
            if !tree.contains(edge) && seen.insert(edge) {
                candidates.push(edge.clone());
            }
        }
    }

    candidates
}
