//! Graph algorithms written against the capability traits.
//!
//! Each algorithm numbers the vertices densely once, through
//! [`DenseIndex`], and then works on plain `usize` indices with `Vec`
//! and `BitVec` bookkeeping. Backends that already number their vertices
//! call the index-level cores directly.

pub mod components;
pub mod dijkstra;
pub mod eccentricity;
pub mod range;
pub mod spanning;
pub mod union_find;

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::graphs::{edge::Edge, undirected::Undirected, vertices::ReadVertices};

/// Dense numbering `0..n` of the vertices of a graph.
///
/// Indices follow the graph's vertex iteration order.
pub(crate) struct DenseIndex<'g, V> {
    vertices: Vec<&'g V>,
    positions: FxHashMap<&'g V, usize>,
}

impl<'g, V> DenseIndex<'g, V>
where
    V: Eq + Hash,
{
    pub(crate) fn new<G>(graph: &'g G) -> Self
    where
        G: ReadVertices<Vertex = V>,
    {
        let vertices: Vec<&'g V> = graph.vertices().collect();
        let positions = vertices
            .iter()
            .enumerate()
            .map(|(index, &vertex)| (vertex, index))
            .collect();

        Self {
            vertices,
            positions,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn position(&self, vertex: &V) -> Option<usize> {
        self.positions.get(vertex).copied()
    }

    pub(crate) fn vertex(&self, index: usize) -> &'g V {
        self.vertices[index]
    }

    /// Neighbours of the vertex at `index`, with the joining edge.
    pub(crate) fn adjacent<G>(
        &self,
        graph: &'g G,
        index: usize,
    ) -> impl Iterator<Item = (usize, &'g Edge<V>)>
    where
        G: Undirected<Vertex = V>,
    {
        let from = self.vertices[index];
        graph.incident_edges(from).filter_map(move |edge| {
            let to = edge.opposite(from)?;
            Some((self.position(to)?, edge))
        })
    }
}
