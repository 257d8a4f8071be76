pub mod builder;
pub mod edge;
pub mod edges;
pub mod frontier;
pub mod graph;
pub mod list;
pub mod matrix;
pub mod prune;
pub mod undirected;
pub mod vertex;
pub mod vertices;
pub mod visited;
