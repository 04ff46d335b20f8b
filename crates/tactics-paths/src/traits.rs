use tactics_core::{Grid, Point};

/// Read-only view of the battlefield consumed by the searches.
///
/// Searches never mutate the terrain; callers must not change it while a
/// search is running.
pub trait Terrain {
    /// Whether a unit may stand on `p`.
    fn is_accessible(&self, p: Point) -> bool;

    /// Cost paid when entering `p`.
    fn movement_cost(&self, p: Point) -> u32;

    /// Orthogonal neighbours of `p` in a fixed order. Cells that do not
    /// exist are reported as `None`.
    fn neighbors(&self, p: Point) -> [Option<Point>; 4];
}

impl Terrain for Grid {
    #[inline]
    fn is_accessible(&self, p: Point) -> bool {
        Grid::is_accessible(self, p)
    }

    #[inline]
    fn movement_cost(&self, p: Point) -> u32 {
        Grid::movement_cost(self, p).unwrap_or(u32::MAX)
    }

    #[inline]
    fn neighbors(&self, p: Point) -> [Option<Point>; 4] {
        Grid::neighbors(self, p)
    }
}

impl<T: Terrain + ?Sized> Terrain for &T {
    fn is_accessible(&self, p: Point) -> bool {
        (**self).is_accessible(p)
    }

    fn movement_cost(&self, p: Point) -> u32 {
        (**self).movement_cost(p)
    }

    fn neighbors(&self, p: Point) -> [Option<Point>; 4] {
        (**self).neighbors(p)
    }
}
