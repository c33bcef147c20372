pub mod builder;
pub mod directed;
pub mod generators;
pub mod locations;
pub mod traits;

pub use builder::{BuiltGraph, GraphBuilder};
pub use directed::DirectedGraph;
pub use locations::LocationIndex;
pub use traits::Graph;
