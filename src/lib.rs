//! Undirected, weighted graphs with interchangeable storage backends.
//!
//! Two backends implement the same capability traits: [`ListGraph`] keeps
//! an incident edge set per vertex, [`MatrixGraph`] a dense length matrix.
//! Shortest paths, range searches, diameter and center, and spanning
//! partitions are written once against the traits in [`algorithms`], and
//! are available on either backend through [`Graph`].

pub mod algorithms;
pub mod errors;
pub mod graphs;

pub use errors::EdgeError;
pub use graphs::{
    builder::GraphBuilder,
    edge::{Edge, MAX_LENGTH},
    edges::{EdgesMut, InsertEdge, ReadEdges, RemoveEdge},
    graph::{Graph, GraphStats, INVALID_PATH},
    list::ListGraph,
    matrix::{DEFAULT_CAPACITY, MatrixGraph},
    prune::prune_random_edges,
    undirected::{NO_EDGE, Undirected},
    vertex::Vertex,
    vertices::{InsertVertex, ReadVertices, RemoveVertex, Vertices, VerticesMut},
};
