use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of search frontier entries
///
/// Entries pop in ascending `(priority, item)` order, so equal priorities are
/// broken by the item's own ordering and the pop sequence is deterministic.
/// Stale duplicates are not removed; callers skip them on pop.
#[derive(Debug)]
pub struct FrontierQueue<T, P>
where
    T: Ord + Debug,
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, T)>>,
    pushes: usize,
    peak_len: usize,
}

impl<T, P> FrontierQueue<T, P>
where
    T: Ord + Debug,
    P: Ord + Copy + Debug,
{
    pub fn new() -> Self {
        FrontierQueue {
            heap: BinaryHeap::new(),
            pushes: 0,
            peak_len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push(Reverse((priority, item)));
        self.pushes += 1;
        self.peak_len = self.peak_len.max(self.heap.len());
    }

    /// Removes the entry with the lowest priority
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }

    /// Total number of pushes since creation
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    /// Largest number of entries held at once
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }
}

impl<T, P> Default for FrontierQueue<T, P>
where
    T: Ord + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
