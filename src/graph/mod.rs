//! Graph representation and clustering module

pub mod edge_index;
pub mod network;

pub use edge_index::{EdgeIndex, IndexedEdge};
pub use network::{Network, Vertex, VertexId};
