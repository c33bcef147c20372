use std::fmt::Debug;
use log::trace;
use num_traits::Float;

use crate::graph::Graph;
use crate::algorithm::{PathFinder, PathResult, SearchStats};
use crate::data_structures::FrontierQueue;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a predecessor map
///
/// Stops as soon as the target is finalized and rebuilds the path by walking
/// predecessors back to the source.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> PathFinder<W, G> for Dijkstra
where
    W: Float + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_path(&self, graph: &G, source: usize, target: usize) -> Result<PathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::VertexNotFound(source));
        }
        if !graph.has_vertex(target) {
            return Err(Error::VertexNotFound(target));
        }

        let n = graph.vertex_count();
        let mut finalized = vec![false; n];
        let mut best: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut stats = SearchStats::default();

        best[source] = Some(W::zero());
        let mut queue = FrontierQueue::new();
        queue.push(source, W::zero());

        while let Some((u, cost)) = queue.pop() {
            if finalized[u] {
                stats.stale += 1;
                continue;
            }
            finalized[u] = true;
            stats.finalized += 1;

            if u == target {
                stats.pushes = queue.pushes();
                stats.peak_queue = queue.peak_len();
                let path = reconstruct_path(&predecessors, source, target);
                trace!("{} {} -> {} reached: {:?}", PathFinder::<W, G>::name(self), source, target, stats);
                return Ok(PathResult { cost, path, stats });
            }

            for (v, weight) in graph.outgoing_edges(u) {
                if finalized[v] {
                    continue;
                }
                stats.relaxed += 1;

                let new_cost = cost + weight;
                let improves = match best[v] {
                    None => true,
                    Some(current) => new_cost < current,
                };
                if improves {
                    best[v] = Some(new_cost);
                    predecessors[v] = Some(u);
                    queue.push(v, new_cost);
                }
            }
        }

        stats.pushes = queue.pushes();
        stats.peak_queue = queue.peak_len();
        trace!("{} {} -> {} unreachable: {:?}", PathFinder::<W, G>::name(self), source, target, stats);
        Ok(PathResult::unreachable(stats))
    }
}

/// Walks predecessors from `target` back to `source`
fn reconstruct_path(predecessors: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match predecessors[current] {
            // Predecessor chains of finalized vertices are acyclic and end at the source
            Some(pred) if path.len() <= predecessors.len() => {
                path.push(pred);
                current = pred;
            }
            _ => return Vec::new(),
        }
    }
    path.reverse();
    path
}
