use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
///
/// Built in one go from an edge list and read-only afterwards.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Total number of edges, parallel edges included
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a graph with `vertices` isolated vertices
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Creates a graph over `vertices` vertices from `(from, to, weight)` triples
    ///
    /// Edges keep their order in each adjacency list. Parallel edges are kept.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_vertices(vertices);
        for (from, to, weight) in edges {
            graph.push_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Appends an edge. Only reachable while the graph is under construction.
    pub(crate) fn push_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        let n = self.outgoing_edges.len();
        if from >= n {
            return Err(Error::VertexNotFound(from));
        }
        if to >= n {
            return Err(Error::VertexNotFound(to));
        }
        if weight.is_nan() || weight < W::zero() {
            return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }

        self.outgoing_edges[from].push((to, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .iter()
            .flatten()
            .all(|(_, weight)| *weight >= W::zero())
    }

    /// Largest out-degree over all vertices
    pub fn max_out_degree(&self) -> usize {
        self.outgoing_edges.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Debug + Copy + Sync,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    fn w(x: f64) -> OrderedFloat<f64> {
        OrderedFloat(x)
    }

    #[test]
    fn test_from_edges_keeps_order_and_parallel_edges() {
        let graph = DirectedGraph::from_edges(3, vec![(0, 2, w(5.0)), (0, 1, w(1.0)), (0, 2, w(2.0))])
            .unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        let targets: Vec<usize> = graph.outgoing_edges(0).map(|(t, _)| t).collect();
        assert_eq!(targets, vec![2, 1, 2]);
        assert_eq!(graph.get_edge_weight(0, 2), Some(w(2.0)));
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert_eq!(graph.max_out_degree(), 3);
        assert!(graph.validate_non_negative());
    }

    #[test]
    fn test_rejects_unknown_vertex() {
        let err = DirectedGraph::from_edges(2, vec![(0, 5, w(1.0))]).unwrap_err();
        assert!(matches!(err, Error::VertexNotFound(5)));
    }

    #[test]
    fn test_rejects_negative_and_nan_weights() {
        let err = DirectedGraph::from_edges(2, vec![(0, 1, w(-1.0))]).unwrap_err();
        assert!(matches!(err, Error::NegativeWeight(x) if x == -1.0));

        let err = DirectedGraph::from_edges(2, vec![(0, 1, w(f64::NAN))]).unwrap_err();
        assert!(matches!(err, Error::NegativeWeight(_)));
    }

    #[test]
    fn test_isolated_vertex_has_no_edges() {
        let graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(4);
        assert!(graph.has_vertex(3));
        assert!(!graph.has_vertex(4));
        assert_eq!(graph.outgoing_edges(3).count(), 0);
        assert_eq!(graph.outgoing_edges(42).count(), 0);
    }
}
