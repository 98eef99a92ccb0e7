mod adjacency;
mod load;
mod model;
mod parse;
mod sample;

pub use adjacency::AdjacencyIndex;
pub use load::load_graph;
pub use model::{Edge, Graph, GraphError, NodeId};
pub use parse::parse_graph;
pub use sample::sample_graph;
