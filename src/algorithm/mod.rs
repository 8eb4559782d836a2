pub mod dfs;
pub mod dijkstra;
pub mod traits;

pub use dfs::{DepthFirstSearch, NeighborOrder};
pub use dijkstra::Dijkstra;
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
