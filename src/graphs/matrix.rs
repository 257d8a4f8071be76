use std::collections::hash_set;
use std::fmt::Debug;
use std::hash::Hash;
use std::slice;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::algorithms::{dijkstra, range};
use crate::graphs::{
    edge::Edge,
    edges::{InsertEdge, ReadEdges, RemoveEdge},
    graph::Graph,
    undirected::{NO_EDGE, Undirected},
    vertex::Vertex,
    vertices::{InsertVertex, ReadVertices, RemoveVertex, Vertices},
};

/// Side length of the matrix allocated by [`MatrixGraph::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Adjacency-matrix graph.
///
/// Vertices are numbered densely `0..n` in insertion order and the length of
/// the edge between `i` and `j` is stored at cell `(i, j)` and `(j, i)`, with
/// [`NO_EDGE`] marking absent edges. Adjacency and length queries cost
/// `O(1)`, incident queries scan one row.
///
/// Cells are laid out in concentric rings around cell `(0, 0)` rather than
/// row by row, so that growing the matrix from `c × c` to `2c × 2c` only
/// appends cells and never moves existing ones:
///
/// ```text
/// +----+----+----+----+
/// |  0 |  1 |  4 |  9 |
/// +----+----+----+----+
/// |  3 |  2 |  5 | 10 |
/// +----+----+----+----+
/// |  8 |  7 |  6 | 11 |
/// +----+----+----+----+
/// | 15 | 14 | 13 | 12 |
/// +----+----+----+----+
/// ```
///
/// Removing a vertex moves the last vertex into the freed index, so indices
/// stay dense but a vertex's index may change after any removal.
///
/// Every edge is also kept in a hashed set keyed by its endpoints, which
/// returns the stored edge value for a pair of vertices without scanning.
#[derive(Debug, Clone)]
pub struct MatrixGraph<V = Vertex> {
    /// Edge lengths in ring layout, `capacity * capacity` cells.
    weights: Vec<i64>,
    capacity: usize,
    /// Vertex at each dense index.
    order: Vec<V>,
    /// Dense index of each vertex, the inverse of `order`.
    positions: FxHashMap<V, usize>,
    edges: FxHashSet<Edge<V>>,
}

/// Position of cell `(from, to)` in the ring layout.
///
/// The ring for `radius = max(from, to)` starts at `radius^2`: first the
/// column `(0..=radius, radius)`, then the row `(radius, radius-1..=0)`.
#[inline]
fn cell(from: usize, to: usize) -> usize {
    let radius = from.max(to);
    let base = radius * radius;

    if to == radius {
        base + from
    } else {
        base + 2 * radius - to
    }
}

impl<V> Default for MatrixGraph<V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<V> MatrixGraph<V> {
    /// Creates an empty graph whose matrix initially holds `capacity`
    /// vertices. A capacity of zero selects [`DEFAULT_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };

        Self {
            weights: vec![NO_EDGE; capacity * capacity],
            capacity,
            order: Vec::new(),
            positions: FxHashMap::default(),
            edges: FxHashSet::default(),
        }
    }

    /// Number of vertices the matrix holds before it has to grow.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Vertex stored at dense index `index`.
    pub fn vertex_at(&self, index: usize) -> Option<&V> {
        self.order.get(index)
    }

    #[inline]
    fn weight(&self, from: usize, to: usize) -> i64 {
        self.weights[cell(from, to)]
    }

    /// Sets both `(from, to)` and `(to, from)`.
    #[inline]
    fn link(&mut self, from: usize, to: usize, length: i64) {
        self.weights[cell(from, to)] = length;
        self.weights[cell(to, from)] = length;
    }

    /// Neighbours of the vertex at index `from` with the joining length.
    fn row(&self, from: usize) -> impl Iterator<Item = (usize, i64)> + '_ {
        (0..self.order.len()).filter_map(move |to| {
            let length = self.weight(from, to);
            (length != NO_EDGE).then_some((to, length))
        })
    }

    /// Doubles the side length of the matrix.
    ///
    /// Ring layout makes this a plain append: every existing cell keeps its
    /// position and the new cells start out empty.
    fn grow(&mut self) {
        let capacity = self.capacity * 2;
        self.weights.resize(capacity * capacity, NO_EDGE);
        debug!(from = self.capacity, to = capacity, "grew adjacency matrix");
        self.capacity = capacity;
    }
}

impl<V> MatrixGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Dense index currently assigned to `vertex`.
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.positions.get(vertex).copied()
    }

    /// Stored edge between the vertices at indices `from` and `to`.
    fn edge_at(&self, from: usize, to: usize) -> Option<&Edge<V>> {
        if self.weight(from, to) == NO_EDGE {
            return None;
        }
        let probe = Edge::probe(self.order[from].clone(), self.order[to].clone());
        self.edges.get(&probe)
    }

    /// Rebuilds the vertex to index map from `order`.
    fn reindex(&mut self) {
        for (index, vertex) in self.order.iter().enumerate() {
            if let Some(position) = self.positions.get_mut(vertex) {
                *position = index;
            }
        }
        debug!(vertices = self.order.len(), "reindexed vertices");
    }

    /// Checks the matrix against the vertex order and the edge set.
    ///
    /// The matrix is symmetric with an empty diagonal, cells outside the
    /// occupied square are empty, both vertex maps are inverse to each other,
    /// and every occupied cell pair corresponds to a stored edge of the same
    /// length.
    pub fn is_consistent(&self) -> bool {
        let n = self.order.len();

        let indexed = self.positions.len() == n
            && self
                .order
                .iter()
                .enumerate()
                .all(|(index, vertex)| self.index_of(vertex) == Some(index));

        let mut occupied = 0;
        for i in 0..self.capacity {
            for j in 0..self.capacity {
                let length = self.weight(i, j);
                if length != self.weight(j, i) {
                    return false;
                }
                if length == NO_EDGE {
                    continue;
                }
                if i == j || i >= n || j >= n {
                    return false;
                }
                match self.edge_at(i, j) {
                    Some(edge) if edge.length() == length => occupied += 1,
                    _ => return false,
                }
            }
        }

        indexed
            && occupied == 2 * self.edges.len()
            && self.weights.len() == self.capacity * self.capacity
    }
}

impl<V> Vertices for MatrixGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Vertex = V;
}

impl<V> ReadVertices for MatrixGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Vertices<'a>
        = slice::Iter<'a, V>
    where
        Self: 'a;

    /// Vertices in index order.
    fn vertices(&self) -> Self::Vertices<'_> {
        self.order.iter()
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.order.len()
    }
}

impl<V> InsertVertex for MatrixGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn insert_vertex(&mut self, vertex: V) -> bool {
        if self.has_vertex(&vertex) {
            trace!(?vertex, "rejected duplicate vertex");
            return false;
        }
        if self.order.len() == self.capacity {
            self.grow();
        }

        // The row and column of a fresh index are already empty.
        self.positions.insert(vertex.clone(), self.order.len());
        self.order.push(vertex);
        true
    }
}

impl<V> RemoveVertex for MatrixGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(index) = self.index_of(vertex) else {
            return false;
        };

        let incident: Vec<Edge<V>> = self.incident_edges(vertex).cloned().collect();
        for edge in &incident {
            self.remove_edge(edge);
        }

        // Move the last vertex into the freed index, then clear the last
        // row and column.
        let last = self.order.len() - 1;
        if index != last {
            for other in 0..last {
                if other != index {
                    let length = self.weight(last, other);
                    self.link(index, other, length);
                }
            }
        }
        for other in 0..=last {
            self.link(last, other, NO_EDGE);
        }

        self.order.swap_remove(index);
        self.positions.remove(vertex);
        self.reindex();

        debug_assert!(self.is_consistent());
        true
    }
}

impl<V> ReadEdges for MatrixGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Edges<'a>
        = hash_set::Iter<'a, Edge<V>>
    where
        Self: 'a;

    fn edges(&self) -> Self::Edges<'_> {
        self.edges.iter()
    }

    fn has_edge(&self, edge: &Edge<V>) -> bool {
        self.is_connected(edge.v1(), edge.v2())
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V> InsertEdge for MatrixGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn insert_edge(&mut self, edge: Edge<V>) -> bool {
        let (Some(from), Some(to)) = (self.index_of(edge.v1()), self.index_of(edge.v2())) else {
            trace!(?edge, "rejected edge with a missing endpoint");
            return false;
        };
        if self.weight(from, to) != NO_EDGE {
            trace!(?edge, "rejected duplicate edge");
            return false;
        }

        self.link(from, to, edge.length());
        self.edges.insert(edge);
        true
    }
}

impl<V> RemoveEdge for MatrixGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn remove_edge(&mut self, edge: &Edge<V>) -> bool {
        let Some(stored) = self.edges.take(edge) else {
            return false;
        };

        if let (Some(from), Some(to)) = (self.index_of(stored.v1()), self.index_of(stored.v2())) {
            self.link(from, to, NO_EDGE);
        }
        true
    }
}

/// Edges incident on one vertex, found by scanning its matrix row.
pub struct MatrixIncident<'a, V> {
    graph: &'a MatrixGraph<V>,
    row: Option<usize>,
    column: usize,
}

impl<'a, V> Iterator for MatrixIncident<'a, V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Item = &'a Edge<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let row = self.row?;

        while self.column < graph.order.len() {
            let column = self.column;
            self.column += 1;

            if let Some(edge) = graph.edge_at(row, column) {
                return Some(edge);
            }
        }
        None
    }
}

impl<V> Undirected for MatrixGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Incident<'a>
        = MatrixIncident<'a, V>
    where
        Self: 'a;

    fn incident_edges(&self, vertex: &V) -> Self::Incident<'_> {
        MatrixIncident {
            graph: self,
            row: self.index_of(vertex),
            column: 0,
        }
    }

    fn edge_between(&self, a: &V, b: &V) -> Option<&Edge<V>> {
        let (from, to) = (self.index_of(a)?, self.index_of(b)?);
        self.edge_at(from, to)
    }

    fn is_connected(&self, a: &V, b: &V) -> bool {
        self.edge_length(a, b) != NO_EDGE
    }

    fn edge_length(&self, a: &V, b: &V) -> i64 {
        match (self.index_of(a), self.index_of(b)) {
            (Some(from), Some(to)) => self.weight(from, to),
            _ => NO_EDGE,
        }
    }

    fn degree(&self, vertex: &V) -> usize {
        self.index_of(vertex).map_or(0, |from| self.row(from).count())
    }
}

impl<V> Graph for MatrixGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn shortest_path(&self, source: &V, sink: &V) -> Vec<V> {
        let (Some(from), Some(to)) = (self.index_of(source), self.index_of(sink)) else {
            return Vec::new();
        };

        let graph = self;
        let search = dijkstra::settle(self.order.len(), from, Some(to), move |u| graph.row(u));

        search
            .path_to(to)
            .map(|path| path.into_iter().map(|i| self.order[i].clone()).collect())
            .unwrap_or_default()
    }

    fn neighbors_within(&self, vertex: &V, range: i64) -> FxHashMap<V, Edge<V>> {
        if range <= 0 {
            return FxHashMap::default();
        }
        let Some(source) = self.index_of(vertex) else {
            return FxHashMap::default();
        };

        let graph = self;
        let found = range::sweep(self.order.len(), source, range, move |from| {
            graph.row(from).map(move |(to, length)| (to, length, from))
        });

        found
            .into_iter()
            .filter_map(|(to, from)| {
                self.edge_at(from, to)
                    .map(|edge| (self.order[to].clone(), edge.clone()))
            })
            .collect()
    }
}
