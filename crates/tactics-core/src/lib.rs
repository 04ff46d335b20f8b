//! **tactics-core** — grid geometry and terrain for tactics-style games.
//!
//! This crate provides the types the search algorithms in `tactics-paths`
//! operate on: integer coordinates, rectangles, per-cell terrain attributes
//! and a bounded [`Grid`] that can be built in code or parsed from ASCII art.

pub mod geom;
pub mod grid;
pub mod legend;
pub mod tile;

pub use geom::{Point, Range, RangeIter};
pub use grid::Grid;
pub use legend::{Legend, ParseError};
pub use tile::Tile;
