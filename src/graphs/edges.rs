use rustc_hash::FxHashSet;

use crate::graphs::{edge::Edge, vertices::Vertices};

/// A graph that supports read-only access to its edges.
///
/// Edges are undirected and identified by their unordered endpoint pair, so
/// a graph holds at most one edge between any two vertices.
pub trait ReadEdges: Vertices {
    /// Iterator over all edges in the graph.
    ///
    /// The order of edges depends on the implementation, but is stable
    /// for a given graph instance unless the graph is mutated.
    type Edges<'a>: Iterator<Item = &'a Edge<Self::Vertex>>
    where
        Self: 'a;

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns true when an edge with the same endpoints as `edge` is present.
    ///
    /// The length of `edge` is not compared.
    fn has_edge(&self, edge: &Edge<Self::Vertex>) -> bool;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Sum of the lengths of all edges, zero for a graph without edges.
    ///
    /// Each length is at most [`MAX_LENGTH`](crate::graphs::edge::MAX_LENGTH),
    /// so the sum cannot overflow.
    fn total_edge_length(&self) -> i64 {
        self.edges().map(Edge::length).sum()
    }

    /// Returns an owned copy of the edge set.
    fn edge_set(&self) -> FxHashSet<Edge<Self::Vertex>> {
        self.edges().cloned().collect()
    }
}

/// A graph that supports insertion of edges.
pub trait InsertEdge: Vertices {
    /// Inserts `edge` symmetrically.
    ///
    /// Returns false, leaving the graph unchanged, when either endpoint is
    /// missing or when an edge between the same endpoints already exists.
    fn insert_edge(&mut self, edge: Edge<Self::Vertex>) -> bool;
}

/// A graph that supports removal of edges.
pub trait RemoveEdge: Vertices {
    /// Removes the edge with the same endpoints as `edge` from every
    /// structure that references it.
    ///
    /// Returns false when no such edge exists.
    fn remove_edge(&mut self, edge: &Edge<Self::Vertex>) -> bool;
}

/// Convenience alias for graphs that read, insert and remove edges.
///
/// Blanket implemented for every type with the three capabilities.
pub trait EdgesMut: ReadEdges + InsertEdge + RemoveEdge {}

impl<T> EdgesMut for T where T: ReadEdges + InsertEdge + RemoveEdge {}
