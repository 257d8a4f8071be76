use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::algorithms::DenseIndex;
use crate::graphs::undirected::Undirected;

/// Result of a single-source search over dense indices.
///
/// A distance of `None` marks a vertex the search never reached.
#[derive(Debug)]
pub(crate) struct Distances {
    distance: Vec<Option<i64>>,
    previous: Vec<Option<usize>>,
    settled: usize,
}

impl Distances {
    /// Number of vertices whose distance was final when they left the queue.
    pub(crate) fn settled(&self) -> usize {
        self.settled
    }

    pub(crate) fn distance(&self, index: usize) -> Option<i64> {
        self.distance[index]
    }

    /// Largest finite distance, zero when only the source was reached.
    pub(crate) fn farthest(&self) -> i64 {
        self.distance.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Indices along the recorded path from the source to `sink`.
    pub(crate) fn path_to(&self, sink: usize) -> Option<Vec<usize>> {
        self.distance(sink)?;

        let mut path = Vec::new();
        let mut current = Some(sink);
        while let Some(index) = current {
            path.push(index);
            current = self.previous[index];
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm over vertices `0..count`.
///
/// `successors(u)` lists the neighbours of `u` with the length of the
/// joining edge. Lengths must be non-negative. The queue uses lazy deletion,
/// so stale entries are skipped when popped rather than updated in place.
///
/// With `sink` set, the search stops as soon as the sink is settled and only
/// its distance and path are final.
pub(crate) fn settle<F, I>(
    count: usize,
    source: usize,
    sink: Option<usize>,
    mut successors: F,
) -> Distances
where
    F: FnMut(usize) -> I,
    I: IntoIterator<Item = (usize, i64)>,
{
    let mut distance: Vec<Option<i64>> = vec![None; count];
    let mut previous = vec![None; count];
    let mut queue = BinaryHeap::new();
    let mut settled = 0;

    distance[source] = Some(0);
    queue.push(Reverse((0i64, source)));

    while let Some(Reverse((reached, current))) = queue.pop() {
        if distance[current].is_some_and(|best| reached > best) {
            continue;
        }
        settled += 1;
        if Some(current) == sink {
            break;
        }

        for (next, length) in successors(current) {
            let candidate = reached.saturating_add(length);
            if distance[next].is_none_or(|best| candidate < best) {
                distance[next] = Some(candidate);
                previous[next] = Some(current);
                queue.push(Reverse((candidate, next)));
            }
        }
    }

    Distances {
        distance,
        previous,
        settled,
    }
}

/// Minimum-length path from `source` to `sink`, both included.
///
/// Empty when either vertex is missing or the sink is unreachable, and
/// `[source]` when both are the same vertex.
pub fn shortest_path<G>(graph: &G, source: &G::Vertex, sink: &G::Vertex) -> Vec<G::Vertex>
where
    G: Undirected,
{
    let index = DenseIndex::new(graph);
    let (Some(from), Some(to)) = (index.position(source), index.position(sink)) else {
        return Vec::new();
    };

    let index = &index;
    let search = settle(index.len(), from, Some(to), move |u| {
        index.adjacent(graph, u).map(|(w, edge)| (w, edge.length()))
    });

    debug!(
        ?source,
        ?sink,
        settled = search.settled(),
        "shortest path search finished"
    );

    let Some(path) = search.path_to(to) else {
        return Vec::new();
    };
    path.into_iter().map(|i| index.vertex(i).clone()).collect()
}
