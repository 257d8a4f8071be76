use rustc_hash::{FxHashMap, FxHashSet};

use crate::graphs::{edge::Edge, edges::ReadEdges, vertices::ReadVertices};

/// Length reported for a pair of vertices that no edge connects.
pub const NO_EDGE: i64 = -1;

/// Core abstraction for finite undirected weighted graphs.
///
/// Vertices are values, edges are unordered pairs of distinct vertices with
/// a non-negative length, and at most one edge joins any two vertices.
///
/// The trait focuses on incidence: which edges touch a vertex and which
/// edge joins two vertices. Path algorithms are written as generic helper
/// functions on top of this interface, see [`crate::algorithms`].
///
/// Iteration uses associated iterator types, so implementations can avoid
/// extra allocation and avoid dynamic dispatch.
pub trait Undirected: ReadVertices + ReadEdges {
    /// Iterator over the edges incident on one vertex.
    type Incident<'a>: Iterator<Item = &'a Edge<Self::Vertex>>
    where
        Self: 'a;

    /// Returns every edge incident on `vertex`.
    ///
    /// The iterator is empty when `vertex` is not part of the graph.
    fn incident_edges(&self, vertex: &Self::Vertex) -> Self::Incident<'_>;

    /// Returns the edge joining `a` and `b`, in either order.
    ///
    /// Returns `None` when no edge joins them or either vertex is missing.
    fn edge_between(&self, a: &Self::Vertex, b: &Self::Vertex) -> Option<&Edge<Self::Vertex>>;

    /// Returns true when an edge joins `a` and `b`.
    ///
    /// This checks for a single-step edge only,
    /// it does not perform a reachability query through longer paths.
    fn is_connected(&self, a: &Self::Vertex, b: &Self::Vertex) -> bool {
        self.edge_between(a, b).is_some()
    }

    /// Returns the length of the edge joining `a` and `b`, or [`NO_EDGE`].
    fn edge_length(&self, a: &Self::Vertex, b: &Self::Vertex) -> i64 {
        self.edge_between(a, b).map_or(NO_EDGE, Edge::length)
    }

    /// Returns the number of edges incident on `vertex`.
    fn degree(&self, vertex: &Self::Vertex) -> usize {
        self.incident_edges(vertex).count()
    }

    /// Returns an owned copy of the edges incident on `vertex`.
    fn incident_edge_set(&self, vertex: &Self::Vertex) -> FxHashSet<Edge<Self::Vertex>> {
        self.incident_edges(vertex).cloned().collect()
    }

    /// Maps every neighbour of `vertex` to the edge that joins them.
    ///
    /// Empty when `vertex` is missing or isolated.
    fn neighbors(&self, vertex: &Self::Vertex) -> FxHashMap<Self::Vertex, Edge<Self::Vertex>> {
        self.incident_edges(vertex)
            .filter_map(|edge| {
                edge.opposite(vertex)
                    .map(|neighbor| (neighbor.clone(), edge.clone()))
            })
            .collect()
    }
}
