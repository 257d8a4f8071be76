use std::borrow::Cow;

use rustc_hash::FxHashMap;

use crate::algorithms::{dijkstra, eccentricity, range, spanning};
use crate::graphs::{
    edge::Edge, edges::EdgesMut, undirected::Undirected, vertices::VerticesMut,
};

/// Length reported for a vertex sequence that is not a walk in the graph.
pub const INVALID_PATH: i64 = -1;

/// Summary counts of a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub total_length: i64,
}

/// High level abstraction for a mutable, undirected, weighted graph.
///
/// Graph ties together vertex mutation, edge mutation and incidence queries,
/// and adds the algorithm operations on top of them. Every algorithm has a
/// default implementation written purely against the capability traits, so
/// a storage backend only has to provide structure. Backends may override
/// `shortest_path` and `neighbors_within` with versions that work on their
/// internal indices, as long as results stay indistinguishable.
///
/// `Default` creates an empty graph and `Clone` an independent copy; the
/// spanning partition uses both to materialise its components.
pub trait Graph: Undirected + VerticesMut + EdgesMut + Clone + Default {
    /// Size measure for the whole graph, vertices plus edges.
    fn size(&self) -> usize {
        self.vertex_count() + self.edge_count()
    }

    /// Returns true when the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn stats(&self) -> GraphStats {
        GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            total_length: self.total_edge_length(),
        }
    }

    /// Returns a minimum-length path from `source` to `sink`, both included.
    ///
    /// The path is empty when either vertex is missing or no path exists, and
    /// is `[source]` when `source == sink`. Ties between equally short paths
    /// are broken arbitrarily.
    fn shortest_path(&self, source: &Self::Vertex, sink: &Self::Vertex) -> Vec<Self::Vertex> {
        dijkstra::shortest_path(self, source, sink)
    }

    /// Sums the edge lengths between consecutive vertices of `path`.
    ///
    /// Sequences of fewer than two vertices have length zero. Returns
    /// [`INVALID_PATH`] when a consecutive pair is not joined by an edge.
    fn path_length(&self, path: &[Self::Vertex]) -> i64 {
        let mut total = 0i64;
        for step in path.windows(2) {
            match self.edge_between(&step[0], &step[1]) {
                Some(edge) => total = total.saturating_add(edge.length()),
                None => return INVALID_PATH,
            }
        }
        total
    }

    /// Vertices reachable from `vertex` within a cumulative length of `range`,
    /// each mapped to the last edge of the path that discovered it.
    ///
    /// See [`range::neighbors_within`] for the traversal order and its
    /// limits. Empty for `range <= 0` or a missing vertex.
    fn neighbors_within(
        &self,
        vertex: &Self::Vertex,
        range: i64,
    ) -> FxHashMap<Self::Vertex, Edge<Self::Vertex>> {
        range::neighbors_within(self, vertex, range)
    }

    /// Partitions the graph into `k` connected components of a minimum
    /// spanning forest.
    ///
    /// `k == 1` yields the graph itself, borrowed. Invalid `k` or an empty
    /// graph yield no components.
    fn minimum_spanning_components(&self, k: usize) -> Vec<Cow<'_, Self>> {
        spanning::minimum_spanning_components(self, k)
    }

    /// Longest shortest-path distance between two vertices, `-1` when empty.
    fn diameter(&self) -> i64 {
        eccentricity::diameter(self)
    }

    /// A vertex of minimum eccentricity, `None` when empty.
    fn center(&self) -> Option<Self::Vertex> {
        eccentricity::center(self)
    }
}
