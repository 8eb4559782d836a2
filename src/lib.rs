//! Weighted Graph - undirected weighted graphs with traversal and shortest paths
//!
//! Vertices are identified by caller-chosen keys and stored in an arena owned
//! by the graph. Edges are symmetric and may carry several weights per pair.
//! On top of the graph the crate provides a depth-first traversal, Dijkstra
//! single-source shortest paths with early termination at a target, and two
//! derived views: a dense adjacency matrix and a rough 2-D layout.
//!
//! All operations are single-threaded. Algorithms borrow the graph read-only
//! and never create vertices; unknown identities behave as isolated vertices
//! unless strict lookup is enabled.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    DepthFirstSearch, Dijkstra, NeighborOrder, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{EdgePolicy, Graph, MutableGraph, UndirectedGraph, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Vertex not found in graph: {0}")]
    VertexNotFound(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Edge weight is not a number")]
    InvalidWeight,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
