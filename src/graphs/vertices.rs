use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashSet;

pub trait Vertices {
    /// Type used to identify vertices.
    ///
    /// Vertices are compared and hashed by value; graphs keep their own
    /// clones of every vertex they are given.
    type Vertex: Clone + Eq + Hash + Debug;
}

/// Read-only access to the vertex set of a graph.
pub trait ReadVertices: Vertices {
    /// Iterator over all vertices in the graph.
    ///
    /// The order of vertices depends on the implementation, but is stable
    /// for a given graph instance unless the graph is mutated.
    type Vertices<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Returns an iterator over all vertices in the graph.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns true when `vertex` belongs to the graph.
    fn has_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Returns an owned copy of the vertex set.
    ///
    /// Mutating the returned set never affects the graph, and later graph
    /// mutations never affect the returned set.
    fn vertex_set(&self) -> FxHashSet<Self::Vertex> {
        self.vertices().cloned().collect()
    }
}

/// A graph that supports insertion of vertices.
pub trait InsertVertex: Vertices {
    /// Inserts `vertex` and allocates its bookkeeping.
    ///
    /// Returns false, leaving the graph unchanged, when an equal vertex is
    /// already present.
    fn insert_vertex(&mut self, vertex: Self::Vertex) -> bool;
}

/// A graph that supports removal of vertices.
pub trait RemoveVertex: Vertices {
    /// Removes `vertex` together with every edge incident on it.
    ///
    /// Incident edges are removed first, then the vertex and its
    /// bookkeeping. Returns false when the vertex is absent.
    fn remove_vertex(&mut self, vertex: &Self::Vertex) -> bool;
}

/// Convenience alias for graphs that read, insert and remove vertices.
pub trait VerticesMut: ReadVertices + InsertVertex + RemoveVertex {}

impl<T> VerticesMut for T where T: ReadVertices + InsertVertex + RemoveVertex {}
