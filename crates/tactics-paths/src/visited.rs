use std::collections::HashMap;

use tactics_core::Point;

/// A position with the accumulated movement cost of reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: u32,
}

/// Best known cost per visited cell.
///
/// A cell is admitted again only when a strictly cheaper route to it shows
/// up; the stale record is then overwritten.
#[derive(Debug, Default)]
pub(crate) struct CostTracker {
    costs: HashMap<Point, u32>,
}

impl CostTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether reaching `p` at `cost` beats what has been recorded so far.
    #[inline]
    pub(crate) fn improves(&self, p: Point, cost: u32) -> bool {
        self.costs.get(&p).is_none_or(|&old| cost < old)
    }

    #[inline]
    pub(crate) fn record(&mut self, node: PathNode) {
        self.costs.insert(node.pos, node.cost);
    }

    /// All records, sorted by position.
    pub(crate) fn into_sorted(self) -> Vec<PathNode> {
        let mut nodes: Vec<PathNode> = self
            .costs
            .into_iter()
            .map(|(pos, cost)| PathNode { pos, cost })
            .collect();
        nodes.sort_unstable_by_key(|n| n.pos);
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readmits_only_on_strict_improvement() {
        let p = Point::new(1, 2);
        let mut tracker = CostTracker::new();
        assert!(tracker.improves(p, 5));
        tracker.record(PathNode { pos: p, cost: 5 });
        assert!(!tracker.improves(p, 5));
        assert!(!tracker.improves(p, 6));
        assert!(tracker.improves(p, 4));
        tracker.record(PathNode { pos: p, cost: 4 });
        assert_eq!(tracker.into_sorted(), vec![PathNode { pos: p, cost: 4 }]);
    }

    #[test]
    fn sorted_row_major() {
        let mut tracker = CostTracker::new();
        for (x, y, cost) in [(1, 1, 3), (0, 1, 2), (2, 0, 1)] {
            tracker.record(PathNode {
                pos: Point::new(x, y),
                cost,
            });
        }
        let pos: Vec<_> = tracker.into_sorted().iter().map(|n| n.pos).collect();
        assert_eq!(pos, vec![Point::new(2, 0), Point::new(0, 1), Point::new(1, 1)]);
    }
}
