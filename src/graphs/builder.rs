use crate::errors::EdgeError;
use crate::graphs::{edge::Edge, graph::Graph};

/// Fluent construction of a graph of backend `G`.
///
/// Rejected insertions (duplicates, edges with a missing endpoint) are
/// skipped the same way the graph's own insert methods skip them.
///
/// ```
/// use undigraph::{Graph, GraphBuilder, ListGraph, Vertex};
///
/// let (a, b, c) = (Vertex::new(1, "a"), Vertex::new(2, "b"), Vertex::new(3, "c"));
/// let graph: ListGraph = GraphBuilder::new()
///     .vertices([a.clone(), b.clone(), c.clone()])
///     .connect(&a, &b, 5)?
///     .connect(&b, &c, 3)?
///     .build();
///
/// assert_eq!(graph.diameter(), 8);
/// # Ok::<(), undigraph::EdgeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<G> {
    graph: G,
}

impl<G: Graph> GraphBuilder<G> {
    pub fn new() -> Self {
        Self {
            graph: G::default(),
        }
    }

    pub fn vertex(mut self, vertex: G::Vertex) -> Self {
        self.graph.insert_vertex(vertex);
        self
    }

    pub fn vertices<I>(mut self, vertices: I) -> Self
    where
        I: IntoIterator<Item = G::Vertex>,
    {
        for vertex in vertices {
            self.graph.insert_vertex(vertex);
        }
        self
    }

    pub fn edge(mut self, edge: Edge<G::Vertex>) -> Self {
        self.graph.insert_edge(edge);
        self
    }

    pub fn edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<G::Vertex>>,
    {
        for edge in edges {
            self.graph.insert_edge(edge);
        }
        self
    }

    /// Adds an edge of `length` between `a` and `b`.
    ///
    /// Fails when the edge itself is invalid; missing endpoints are not an
    /// error and leave the graph unchanged.
    pub fn connect(self, a: &G::Vertex, b: &G::Vertex, length: i64) -> Result<Self, EdgeError> {
        let edge = Edge::new(a.clone(), b.clone(), length)?;
        Ok(self.edge(edge))
    }

    pub fn build(self) -> G {
        self.graph
    }
}

impl<G: Graph> Default for GraphBuilder<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Graph> From<G> for GraphBuilder<G> {
    /// Continues building on top of an existing graph.
    fn from(graph: G) -> Self {
        Self { graph }
    }
}
