//! A* shortest-path search between two cells.

use std::collections::HashSet;

use tactics_core::Point;

use crate::distance::euclidean;
use crate::path::{Path, PathQueue};
use crate::traits::Terrain;

/// Single-source, single-target A* search over a [`Terrain`].
///
/// Every step costs one cell regardless of the terrain's movement cost, and
/// the heuristic is the Euclidean distance to the target. A cell is closed
/// the moment a path first reaches it: later, cheaper routes to the same
/// cell are not reopened.
pub struct PathFinder<'a, T: Terrain + ?Sized> {
    terrain: &'a T,
}

impl<'a, T: Terrain + ?Sized> PathFinder<'a, T> {
    pub fn new(terrain: &'a T) -> Self {
        Self { terrain }
    }

    /// Cells from `start` to `target` inclusive, or `None` if the target
    /// cannot be reached.
    ///
    /// `start` is always admitted, even when it is not accessible.
    pub fn find_path(&self, start: Point, target: Point) -> Option<Vec<Point>> {
        self.find(start, target).map(Path::into_cells)
    }

    /// Like [`find_path`](Self::find_path) but returns the whole [`Path`],
    /// cost included.
    pub fn find(&self, start: Point, target: Point) -> Option<Path> {
        let estimate = |p: Point| euclidean(p, target);

        let mut frontier = PathQueue::new();
        let mut visited = HashSet::new();
        visited.insert(start);
        frontier.push(Path::start(start, estimate(start)));

        while let Some(path) = frontier.pop() {
            let last = path.last();
            if last == target {
                log::debug!("arrived at {} after {} cells", last, path.len());
                return Some(path);
            }
            log::trace!("searching {}", last);

            for n in self.terrain.neighbors(last).into_iter().flatten() {
                if !self.terrain.is_accessible(n) || !visited.insert(n) {
                    continue;
                }
                frontier.push(path.extend(n, estimate(n)));
            }
        }

        log::info!("no path from {} to {}", start, target);
        None
    }
}
