use std::fmt::Debug;
use num_traits::Float;
use crate::graph::Graph;
use crate::Result;

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices whose distance became final
    pub finalized: usize,
    /// Edges examined out of finalized vertices
    pub relaxed: usize,
    /// Queue entries popped for an already finalized vertex
    pub stale: usize,
    /// Total queue pushes
    pub pushes: usize,
    /// Largest queue size reached
    pub peak_queue: usize,
}

/// Result of a single-source, single-target search
#[derive(Debug, Clone)]
pub struct PathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Total weight of the path, infinite when the target is unreachable
    pub cost: W,

    /// Vertices from source to target inclusive, empty when unreachable
    pub path: Vec<usize>,

    pub stats: SearchStats,
}

impl<W> PathResult<W>
where
    W: Float + Debug + Copy,
{
    /// The "no path" sentinel: infinite cost and an empty path
    pub fn unreachable(stats: SearchStats) -> Self {
        PathResult {
            cost: W::infinity(),
            path: Vec::new(),
            stats,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Trait for point-to-point shortest path searches
pub trait PathFinder<W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Finds a minimum-weight path from `source` to `target`
    ///
    /// An unreachable target is not an error; it yields [`PathResult::unreachable`].
    /// Errors are reserved for vertex ids the graph does not contain.
    fn find_path(&self, graph: &G, source: usize, target: usize) -> Result<PathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Sums the weights along `path`, or `None` if two consecutive vertices are not joined by an edge
///
/// Parallel edges count with their lightest weight. An empty path has no cost.
pub fn path_cost<W, G>(graph: &G, path: &[usize]) -> Option<W>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    if path.is_empty() {
        return None;
    }
    path.windows(2).try_fold(W::zero(), |total, pair| {
        graph.get_edge_weight(pair[0], pair[1]).map(|w| total + w)
    })
}
