use std::fmt::Debug;
use log::trace;
use num_traits::Float;

use crate::graph::Graph;
use crate::algorithm::{PathFinder, PathResult, SearchStats};
use crate::data_structures::FrontierQueue;
use crate::{Error, Result};

/// Dijkstra variant whose queue entries carry the full path walked so far
///
/// Needs no predecessor map at the price of one path copy per queue entry.
/// Entries are ordered by `(cost, vertex, path)`, so among equal-cost optimal
/// paths the lexicographically smallest vertex sequence wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathCarryingDijkstra;

impl PathCarryingDijkstra {
    pub fn new() -> Self {
        PathCarryingDijkstra
    }
}

impl<W, G> PathFinder<W, G> for PathCarryingDijkstra
where
    W: Float + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "PathCarryingDijkstra"
    }

    fn find_path(&self, graph: &G, source: usize, target: usize) -> Result<PathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::VertexNotFound(source));
        }
        if !graph.has_vertex(target) {
            return Err(Error::VertexNotFound(target));
        }

        let mut finalized = vec![false; graph.vertex_count()];
        let mut stats = SearchStats::default();
        let mut queue: FrontierQueue<(usize, Vec<usize>), W> = FrontierQueue::new();
        queue.push((source, Vec::new()), W::zero());

        while let Some(((node, mut path), cost)) = queue.pop() {
            if finalized[node] {
                stats.stale += 1;
                continue;
            }
            finalized[node] = true;
            stats.finalized += 1;
            path.push(node);

            if node == target {
                stats.pushes = queue.pushes();
                stats.peak_queue = queue.peak_len();
                trace!("path-carrying {} -> {} reached: {:?}", source, target, stats);
                return Ok(PathResult { cost, path, stats });
            }

            for (next, weight) in graph.outgoing_edges(node) {
                if !finalized[next] {
                    stats.relaxed += 1;
                    queue.push((next, path.clone()), cost + weight);
                }
            }
        }

        stats.pushes = queue.pushes();
        stats.peak_queue = queue.peak_len();
        trace!("path-carrying {} -> {} unreachable: {:?}", source, target, stats);
        Ok(PathResult::unreachable(stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;
    use ordered_float::OrderedFloat;

    #[test]
    fn test_equal_cost_tie_prefers_smaller_path() {
        // 0 -> 2 -> 3 and 0 -> 1 -> 3 both cost 2
        let graph = DirectedGraph::from_edges(
            4,
            vec![
                (0, 2, OrderedFloat(1.0)),
                (0, 1, OrderedFloat(1.0)),
                (2, 3, OrderedFloat(1.0)),
                (1, 3, OrderedFloat(1.0)),
            ],
        )
        .unwrap();

        let result = PathCarryingDijkstra::new().find_path(&graph, 0, 3).unwrap();
        assert_eq!(result.cost, OrderedFloat(2.0));
        assert_eq!(result.path, vec![0, 1, 3]);
    }

    #[test]
    fn test_every_relaxation_is_queued() {
        let graph = DirectedGraph::from_edges(
            3,
            vec![(0, 2, OrderedFloat(5.0)), (0, 1, OrderedFloat(1.0)), (1, 2, OrderedFloat(1.0))],
        )
        .unwrap();

        let result = PathCarryingDijkstra::new().find_path(&graph, 0, 2).unwrap();
        assert_eq!(result.path, vec![0, 1, 2]);
        // 0, then 2 via 0, 1 via 0, 2 via 1
        assert_eq!(result.stats.pushes, 4);
    }

    #[test]
    fn test_unreachable_and_trivial() {
        let graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(2);
        let finder = PathCarryingDijkstra::new();

        let result = finder.find_path(&graph, 0, 1).unwrap();
        assert!(result.cost.is_infinite());
        assert!(result.path.is_empty());

        let result = finder.find_path(&graph, 1, 1).unwrap();
        assert_eq!(result.cost, OrderedFloat(0.0));
        assert_eq!(result.path, vec![1]);
    }
}
