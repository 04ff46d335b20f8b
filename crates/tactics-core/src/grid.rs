//! The [`Grid`] type: a rectangular battlefield of [`Tile`]s.
//!
//! Tiles are stored row-major with the origin at (0, 0). Lookups outside the
//! bounds return `None` and writes outside the bounds are ignored, so callers
//! never have to pre-validate coordinates.

use crate::geom::{Point, Range};
use crate::legend::ParseError;
use crate::tile::Tile;

/// A 2D grid of [`Tile`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridData")
)]
pub struct Grid {
    tiles: Vec<Tile>,
    bounds: Range,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridData {
    tiles: Vec<Tile>,
    bounds: Range,
}

#[cfg(feature = "serde")]
impl TryFrom<GridData> for Grid {
    type Error = ParseError;

    fn try_from(data: GridData) -> Result<Self, ParseError> {
        Grid::from_parts(data.bounds, data.tiles)
    }
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with [`Tile::FLOOR`].
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Tile::FLOOR)
    }

    /// Create a new grid of the given dimensions, filled with `tile`.
    pub fn filled(width: i32, height: i32, tile: Tile) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            tiles: vec![tile; bounds.len()],
            bounds,
        }
    }

    /// Rebuild a grid from its bounds and row-major tiles.
    ///
    /// The bounds must start at the origin and hold exactly `tiles.len()`
    /// cells.
    pub fn from_parts(bounds: Range, tiles: Vec<Tile>) -> Result<Self, ParseError> {
        if bounds.min != Point::ZERO {
            return Err(ParseError::Origin { min: bounds.min });
        }
        if tiles.len() != bounds.len() {
            return Err(ParseError::TileCount {
                expected: bounds.len(),
                found: tiles.len(),
            });
        }
        Ok(Self { tiles, bounds })
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside this grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.bounds.width() as usize) + (p.x as usize))
    }

    /// Read the tile at `p`.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Direct lookup by coordinates.
    #[inline]
    pub fn node(&self, x: i32, y: i32) -> Option<Tile> {
        self.at(Point::new(x, y))
    }

    /// Replace the tile at `p`. No-op if `p` is outside bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.index(p) {
            self.tiles[i] = tile;
        }
    }

    /// Change the movement cost at `p`, keeping its accessibility.
    pub fn set_cost(&mut self, p: Point, cost: u32) {
        if let Some(i) = self.index(p) {
            self.tiles[i].cost = cost;
        }
    }

    /// Open or block the cell at `p`, keeping its movement cost.
    pub fn set_accessible(&mut self, p: Point, accessible: bool) {
        if let Some(i) = self.index(p) {
            self.tiles[i].accessible = accessible;
        }
    }

    /// Fill every cell with `tile`.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Whether the cell at `p` exists and can be entered.
    #[inline]
    pub fn is_accessible(&self, p: Point) -> bool {
        self.at(p).is_some_and(|t| t.accessible)
    }

    /// Movement cost of entering `p`, or `None` outside the grid.
    #[inline]
    pub fn movement_cost(&self, p: Point) -> Option<u32> {
        self.at(p).map(|t| t.cost)
    }

    /// The orthogonal neighbours of `p` in compass order (north, east,
    /// south, west). Entries falling outside the grid are `None`;
    /// inaccessible cells are still reported. `p` itself may lie anywhere.
    pub fn neighbors(&self, p: Point) -> [Option<Point>; 4] {
        Point::COMPASS.map(|d| p.checked_shift(d.x, d.y).filter(|&n| self.contains(n)))
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip_keeps_terrain() {
        let mut g = Grid::new(3, 2);
        g.set(Point::new(1, 0), Tile::WALL);
        g.set_cost(Point::new(2, 1), 4);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn mismatched_tile_count_is_rejected() {
        let json = r#"{"tiles":[{"accessible":true,"cost":1}],"bounds":{"min":{"x":0,"y":0},"max":{"x":2,"y":2}}}"#;
        let err = serde_json::from_str::<Grid>(json).unwrap_err();
        assert!(err.to_string().contains("expected 4 tiles, found 1"));
    }
}
