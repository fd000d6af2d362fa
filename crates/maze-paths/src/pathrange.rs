use std::collections::VecDeque;

use log::debug;
use maze_core::{Point, Range};

use crate::result::SearchResult;

/// Parent sentinel: the cell has no predecessor (it is the search start).
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Heap entry for A*
// ---------------------------------------------------------------------------

/// Reference into the node arrays, ordered for use in `BinaryHeap`.
///
/// Smallest `f` pops first; among equal `f`, smallest `h` (closest to the
/// goal), then earliest insertion. The tie-break is an implementation
/// detail, not part of any search's contract.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) seq: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for searches on a grid rectangle.
///
/// `PathRange` owns all per-search bookkeeping as flat arrays indexed by
/// `row * cols + col`: predecessor links, visited stamps and A* costs.
/// Nothing is written to the grid. Arrays are invalidated lazily by bumping
/// a generation counter, so repeated queries on the same range do not
/// reallocate.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) generation: u32,
    /// Predecessor index per cell, valid where `seen` matches the generation.
    pub(crate) parents: Vec<usize>,
    /// Generation stamp: BFS discovered, DFS finalised, A* has a cost.
    pub(crate) seen: Vec<u32>,
    /// Generation stamp: A* closed set.
    pub(crate) closed: Vec<u32>,
    /// A* cost from the start.
    pub(crate) g: Vec<i32>,
    // scratch
    pub(crate) queue: VecDeque<usize>,
    pub(crate) stack: Vec<(usize, usize)>,
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            generation: 0,
            parents: vec![NO_PARENT; len],
            seen: vec![0; len],
            closed: vec![0; len],
            g: vec![0; len],
            queue: VecDeque::new(),
            stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range.
    ///
    /// Caches are kept when the new range fits in the current capacity and
    /// reallocated otherwise.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        if new_len <= self.parents.len() {
            self.next_generation();
            return;
        }
        self.parents = vec![NO_PARENT; new_len];
        self.seen = vec![0; new_len];
        self.closed = vec![0; new_len];
        self.g = vec![0; new_len];
        self.generation = 0;
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Start a new search generation, invalidating every stamp.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.seen.fill(0);
            self.closed.fill(0);
            self.generation = 1;
        }
        self.generation
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index(p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point(idx)
    }

    /// Log and hand back a finished search.
    pub(crate) fn finish(
        &self,
        algorithm: &str,
        from: Point,
        to: Point,
        result: SearchResult,
    ) -> SearchResult {
        debug!(
            "{algorithm} {from} -> {to}: explored {}, path {}",
            result.explored(),
            result
                .path_len()
                .map_or_else(|| "none".to_string(), |n| n.to_string()),
        );
        result
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn set_range_smaller_preserves_capacity() {
        let mut pr = PathRange::new(Range::sized(20, 20));
        let cap = pr.parents.len();

        let small = Range::sized(5, 5);
        pr.set_range(small);
        assert_eq!(pr.range(), small);
        assert_eq!(pr.parents.len(), cap);
        assert!(pr.generation > 0);
    }

    #[test]
    fn set_range_larger_reallocates() {
        let mut pr = PathRange::new(Range::sized(5, 5));
        pr.set_range(Range::sized(20, 20));
        assert_eq!(pr.parents.len(), 400);
        assert_eq!(pr.seen.len(), 400);
        assert_eq!(pr.generation, 0);
    }

    #[test]
    fn generation_wrap_clears_stamps() {
        let mut pr = PathRange::new(Range::sized(2, 2));
        pr.generation = u32::MAX;
        pr.seen[0] = 1;
        pr.closed[3] = 1;
        assert_eq!(pr.next_generation(), 1);
        assert!(pr.seen.iter().all(|&s| s == 0));
        assert!(pr.closed.iter().all(|&s| s == 0));
    }

    #[test]
    fn heap_pops_lowest_f_then_lowest_h_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, f: 6, h: 2, seq: 0 });
        heap.push(NodeRef { idx: 1, f: 4, h: 3, seq: 1 });
        heap.push(NodeRef { idx: 2, f: 4, h: 1, seq: 2 });
        heap.push(NodeRef { idx: 3, f: 4, h: 1, seq: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![2, 3, 1, 0]);
    }
}
