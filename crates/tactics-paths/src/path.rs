use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tactics_core::Point;

/// A route from the search start to some frontier cell.
///
/// Paths are never mutated once built: [`extend`](Self::extend) copies the
/// parent's cells, so sibling paths sharing a prefix stay independent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Point>,
    cost: f64,
}

#[allow(clippy::len_without_is_empty)]
impl Path {
    /// A single-cell path standing on `start`.
    ///
    /// `estimate` is the heuristic distance from `start` to the target.
    pub fn start(start: Point, estimate: f64) -> Self {
        Self::with_cells(vec![start], estimate)
    }

    /// A new path made of this one followed by `next`.
    pub fn extend(&self, next: Point, estimate: f64) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len() + 1);
        cells.extend_from_slice(&self.cells);
        cells.push(next);
        Self::with_cells(cells, estimate)
    }

    // g is the number of cells, not the sum of their movement costs.
    fn with_cells(cells: Vec<Point>, estimate: f64) -> Self {
        let cost = cells.len() as f64 + estimate;
        Self { cells, cost }
    }

    /// The cells from start to [`last`](Self::last), inclusive.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    #[inline]
    pub fn into_cells(self) -> Vec<Point> {
        self.cells
    }

    /// The frontier end of the path.
    #[inline]
    pub fn last(&self) -> Point {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, start included. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Length plus the heuristic estimate to the target.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

// ---------------------------------------------------------------------------
// PathQueue
// ---------------------------------------------------------------------------

/// Heap entry ordered by cost, then by insertion order.
struct Queued {
    seq: u64,
    path: Path,
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we want the cheapest, oldest
        // entry on top.
        other
            .path
            .cost
            .total_cmp(&self.path.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

/// Min-cost frontier of [`Path`]s.
///
/// Extraction order is ascending cost; among equal costs the path pushed
/// first comes out first.
#[derive(Default)]
pub struct PathQueue {
    heap: BinaryHeap<Queued>,
    next_seq: u64,
}

impl PathQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: Path) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Queued { seq, path });
    }

    /// Remove the cheapest path, or `None` when the frontier is exhausted.
    pub fn pop(&mut self) -> Option<Path> {
        self.heap.pop().map(|q| q.path)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn path_cost_counts_cells_plus_estimate() {
        let start = Path::start(p(0, 0), 2.5);
        assert_eq!(start.len(), 1);
        assert_eq!(start.cost(), 3.5);
        let next = start.extend(p(1, 0), 1.5);
        assert_eq!(next.len(), 2);
        assert_eq!(next.cost(), 3.5);
        assert_eq!(next.last(), p(1, 0));
    }

    #[test]
    fn siblings_do_not_share_cells() {
        let root = Path::start(p(0, 0), 0.0).extend(p(1, 0), 0.0);
        let east = root.extend(p(2, 0), 0.0);
        let south = root.extend(p(1, 1), 0.0);
        assert_eq!(root.cells(), &[p(0, 0), p(1, 0)]);
        assert_eq!(east.cells(), &[p(0, 0), p(1, 0), p(2, 0)]);
        assert_eq!(south.into_cells(), vec![p(0, 0), p(1, 0), p(1, 1)]);
    }

    #[test]
    fn queue_pops_cheapest_first() {
        let mut q = PathQueue::new();
        q.push(Path::start(p(0, 0), 4.0));
        q.push(Path::start(p(1, 0), 1.0));
        q.push(Path::start(p(2, 0), 2.0));
        assert_eq!(q.len(), 3);
        let order: Vec<_> = std::iter::from_fn(|| q.pop()).map(|path| path.last()).collect();
        assert_eq!(order, vec![p(1, 0), p(2, 0), p(0, 0)]);
        assert!(q.is_empty());
        assert!(q.pop().is_none());
    }

    #[test]
    fn queue_ties_keep_insertion_order() {
        let mut q = PathQueue::new();
        for x in 0..5 {
            q.push(Path::start(p(x, 0), 1.0));
        }
        q.push(Path::start(p(9, 9), 0.5));
        assert_eq!(q.pop().map(|path| path.last()), Some(p(9, 9)));
        for x in 0..5 {
            assert_eq!(q.pop().map(|path| path.last()), Some(p(x, 0)));
        }
    }

    #[test]
    fn clear_empties_the_frontier() {
        let mut q = PathQueue::new();
        q.push(Path::start(p(0, 0), 0.0));
        q.clear();
        assert!(q.is_empty());
    }
}
