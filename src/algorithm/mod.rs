pub mod traits;
pub mod dijkstra;
pub mod path_carrying;

pub use traits::{path_cost, PathFinder, PathResult, SearchStats};
