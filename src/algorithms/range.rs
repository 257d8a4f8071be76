use bit_vec::BitVec;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::algorithms::DenseIndex;
use crate::graphs::{
    edge::Edge, frontier::LayeredFrontier, undirected::Undirected, visited::Visited,
};

/// Breadth-first sweep over vertices `0..count` bounded by cumulative length.
///
/// Vertices are expanded in first-in first-out order. A neighbour is admitted
/// the first time it is seen over an edge that keeps the running length
/// within `range`, and its distance and discovering payload are fixed at that
/// moment. Nothing is relaxed afterwards, so a vertex first reached over a
/// long path keeps that distance even if a shorter path is found later, and
/// may then hide vertices that the shorter path would have brought into range.
///
/// Returns the admitted vertices in discovery order, the source excluded.
pub(crate) fn sweep<F, I, P>(
    count: usize,
    source: usize,
    range: i64,
    mut successors: F,
) -> Vec<(usize, P)>
where
    F: FnMut(usize) -> I,
    I: IntoIterator<Item = (usize, i64, P)>,
{
    let mut distance = vec![0i64; count];
    let mut reached = BitVec::from_elem(count, false);
    let mut found = Vec::new();

    reached.visit(source);
    let mut frontier = LayeredFrontier::new([source]);

    while frontier
        .step(|current, next| {
            for &from in current {
                for (to, length, via) in successors(from) {
                    let candidate = distance[from].saturating_add(length);
                    if candidate <= range && !reached.is_visited(&to) {
                        reached.visit(to);
                        distance[to] = candidate;
                        found.push((to, via));
                        next.push(to);
                    }
                }
            }
        })
        .is_some()
    {}

    debug!(
        source,
        range,
        found = found.len(),
        layers = frontier.depth(),
        "range sweep finished"
    );
    found
}

/// Vertices reachable from `vertex` within a cumulative length of `range`,
/// each mapped to the edge over which it was first reached.
///
/// The traversal is the first-in first-out sweep described on [`sweep`]:
/// it answers "reachable within range along the discovered paths", not
/// "shortest distance within range". Empty for `range <= 0` and for a
/// missing vertex; the start vertex itself is never included.
pub fn neighbors_within<G>(
    graph: &G,
    vertex: &G::Vertex,
    range: i64,
) -> FxHashMap<G::Vertex, Edge<G::Vertex>>
where
    G: Undirected,
{
    if range <= 0 {
        return FxHashMap::default();
    }
    let index = DenseIndex::new(graph);
    let Some(source) = index.position(vertex) else {
        return FxHashMap::default();
    };

    let index = &index;
    let found = sweep(index.len(), source, range, move |from| {
        index
            .adjacent(graph, from)
            .map(|(to, edge)| (to, edge.length(), edge))
    });

    found
        .into_iter()
        .map(|(to, edge)| (index.vertex(to).clone(), edge.clone()))
        .collect()
}
