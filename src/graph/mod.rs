pub mod generators;
pub mod layout;
pub mod traits;
pub mod undirected;
pub mod vertex;

pub use traits::{Graph, MutableGraph};
pub use undirected::{EdgePolicy, UndirectedGraph};
pub use vertex::{Vertex, VertexId};
