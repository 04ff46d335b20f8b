//! Movement and attack ranges.
//!
//! A unit with a movement budget can *walk* to every cell whose cheapest
//! discovered route costs no more than the budget, and can *attack* every
//! cell adjacent to a walkable one. The search is a FIFO flood fill; costs
//! are sums of the movement cost of each entered cell, and a cell is
//! re-admitted whenever a strictly cheaper route to it turns up.

use std::collections::{BTreeSet, VecDeque};

use tactics_core::Point;

use crate::traits::Terrain;
use crate::visited::{CostTracker, PathNode};

/// The outcome of a range search.
///
/// Every walkable cell is also attackable. Attackable cells may be
/// inaccessible or out of budget; walkable ones never are, except for the
/// start cell which is always walkable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeArea {
    walkable: BTreeSet<Point>,
    attackable: BTreeSet<Point>,
    costs: Vec<PathNode>,
}

static EMPTY_AREA: RangeArea = RangeArea::new();

impl RangeArea {
    /// An area with nothing in it.
    pub const fn new() -> Self {
        Self {
            walkable: BTreeSet::new(),
            attackable: BTreeSet::new(),
            costs: Vec::new(),
        }
    }

    #[inline]
    pub fn walkable(&self) -> &BTreeSet<Point> {
        &self.walkable
    }

    #[inline]
    pub fn attackable(&self) -> &BTreeSet<Point> {
        &self.attackable
    }

    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.walkable.contains(&p)
    }

    #[inline]
    pub fn is_attackable(&self, p: Point) -> bool {
        self.attackable.contains(&p)
    }

    /// Cheapest discovered cost of walking to `p`, if walkable.
    pub fn cost_at(&self, p: Point) -> Option<u32> {
        self.costs
            .binary_search_by_key(&p, |n| n.pos)
            .ok()
            .map(|i| self.costs[i].cost)
    }

    /// Walkable cells with their costs, sorted by position.
    #[inline]
    pub fn costs(&self) -> &[PathNode] {
        &self.costs
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walkable.is_empty() && self.attackable.is_empty()
    }
}

/// Compute the walkable and attackable cells around `start`.
///
/// Entering `start` is free whatever its movement cost. The start is
/// recorded at cost 0 before the fill begins, so it is walkable and
/// attackable even with a zero budget and is never re-entered through a
/// round trip; the unit already stands there. Costs saturate at `u32::MAX`.
pub fn explore<T: Terrain + ?Sized>(terrain: &T, start: Point, budget: u32) -> RangeArea {
    let mut tracker = CostTracker::new();
    let mut walkable = BTreeSet::new();
    let mut attackable = BTreeSet::new();
    let mut queue = VecDeque::new();

    let seed = PathNode {
        pos: start,
        cost: 0,
    };
    tracker.record(seed);
    walkable.insert(start);
    attackable.insert(start);
    queue.push_back(seed);

    // Stale queue entries (superseded by a cheaper record) are still
    // expanded; they can only produce costs that lose to the fresh entry.
    while let Some(current) = queue.pop_front() {
        for n in terrain.neighbors(current.pos).into_iter().flatten() {
            let cost = current.cost.saturating_add(terrain.movement_cost(n));
            if terrain.is_accessible(n) && cost <= budget && tracker.improves(n, cost) {
                let node = PathNode { pos: n, cost };
                tracker.record(node);
                walkable.insert(n);
                queue.push_back(node);
            }
            attackable.insert(n);
        }
    }

    log::debug!(
        "range from {} with budget {}: {} walkable, {} attackable",
        start,
        budget,
        walkable.len(),
        attackable.len()
    );

    RangeArea {
        walkable,
        attackable,
        costs: tracker.into_sorted(),
    }
}

/// Whether a unit's range is currently on display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Populated { start: Point, area: RangeArea },
}

/// Range search with select/deselect behaviour.
///
/// Asking for the range of the cell that is already selected clears the
/// selection; asking for any other cell replaces it.
pub struct RangeExplorer<'a, T: Terrain + ?Sized> {
    terrain: &'a T,
    selection: Selection,
}

impl<'a, T: Terrain + ?Sized> RangeExplorer<'a, T> {
    pub fn new(terrain: &'a T) -> Self {
        Self {
            terrain,
            selection: Selection::Idle,
        }
    }

    /// Select `start` and compute its range, or deselect if `start` is
    /// already selected. Returns the resulting area (empty when idle).
    pub fn compute_range(&mut self, start: Point, budget: u32) -> &RangeArea {
        if self.selected() == Some(start) {
            log::debug!("deselected {}", start);
            self.selection = Selection::Idle;
        } else {
            let area = explore(self.terrain, start, budget);
            self.selection = Selection::Populated { start, area };
        }
        self.area()
    }

    /// Drop the current selection.
    pub fn clear(&mut self) {
        self.selection = Selection::Idle;
    }

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The currently selected start cell.
    pub fn selected(&self) -> Option<Point> {
        match self.selection {
            Selection::Idle => None,
            Selection::Populated { start, .. } => Some(start),
        }
    }

    /// The current area; empty when nothing is selected.
    pub fn area(&self) -> &RangeArea {
        match &self.selection {
            Selection::Idle => &EMPTY_AREA,
            Selection::Populated { area, .. } => area,
        }
    }

    #[inline]
    pub fn walkable(&self) -> &BTreeSet<Point> {
        self.area().walkable()
    }

    #[inline]
    pub fn attackable(&self) -> &BTreeSet<Point> {
        self.area().attackable()
    }

    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.area().is_walkable(p)
    }

    #[inline]
    pub fn is_attackable(&self, p: Point) -> bool {
        self.area().is_attackable(p)
    }

    #[inline]
    pub fn cost_at(&self, p: Point) -> Option<u32> {
        self.area().cost_at(p)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use tactics_core::Grid;

    #[test]
    fn area_round_trip() {
        let grid = Grid::new(4, 4);
        let area = explore(&grid, Point::new(1, 1), 2);
        let json = serde_json::to_string(&area).unwrap();
        let back: RangeArea = serde_json::from_str(&json).unwrap();
        assert_eq!(back, area);
    }
}
