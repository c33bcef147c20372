use std::fmt::Debug;
use num_traits::Float;

/// Trait representing a read-only weighted directed graph
///
/// Vertices are dense indices `0..vertex_count()`. Implementations never change
/// once built, so a graph can be shared across concurrent searches.
pub trait Graph<W>: Debug + Sync
where
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of an edge if it exists; the lightest one when there are parallel edges
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .fold(None, |best: Option<W>, w| match best {
                Some(b) if b <= w => Some(b),
                _ => Some(w),
            })
    }
}
