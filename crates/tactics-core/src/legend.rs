//! Building a [`Grid`] from ASCII art.
//!
//! Each character maps to a [`Tile`] through a [`Legend`]. The default legend
//! reads `.` as floor, `#` as wall and the digits `0`–`9` as accessible
//! ground with that movement cost:
//!
//! ```
//! use tactics_core::{Grid, Point};
//!
//! let grid = Grid::parse("..#\n.3.").unwrap();
//! assert!(!grid.is_accessible(Point::new(2, 0)));
//! assert_eq!(grid.movement_cost(Point::new(1, 1)), Some(3));
//! ```

use std::fmt;

use crate::geom::{Point, Range};
use crate::grid::Grid;
use crate::tile::Tile;

/// Character to [`Tile`] mapping used by [`Grid::parse_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    symbols: Vec<(char, Tile)>,
}

impl Default for Legend {
    fn default() -> Self {
        let mut symbols = vec![('.', Tile::FLOOR), ('#', Tile::WALL)];
        symbols.extend(('0'..='9').zip(0..).map(|(ch, cost)| (ch, Tile::floor(cost))));
        Self { symbols }
    }
}

impl Legend {
    /// A legend that knows no symbols.
    pub fn empty() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Map `ch` to `tile`, replacing any previous mapping (builder).
    pub fn with_symbol(mut self, ch: char, tile: Tile) -> Self {
        match self.symbols.iter_mut().find(|(c, _)| *c == ch) {
            Some(entry) => entry.1 = tile,
            None => self.symbols.push((ch, tile)),
        }
        self
    }

    /// The tile for `ch`, if mapped.
    pub fn tile(&self, ch: char) -> Option<Tile> {
        self.symbols
            .iter()
            .find_map(|&(c, t)| (c == ch).then_some(t))
    }
}

/// Errors that can occur when parsing an ASCII grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line's width differs from the first line's.
    InconsistentWidth { line: i32, expected: i32, found: i32 },
    /// A character has no entry in the legend.
    UnknownSymbol { ch: char, pos: Point },
    /// Grid bounds that do not start at (0, 0).
    Origin { min: Point },
    /// The number of tiles does not match the bounds.
    TileCount { expected: usize, found: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} is {found} cells wide, expected {expected}"
            ),
            Self::UnknownSymbol { ch, pos } => {
                write!(f, "grid: unknown symbol \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::Origin { min } => write!(f, "grid: bounds start at {min}, not at the origin"),
            Self::TileCount { expected, found } => {
                write!(f, "grid: expected {expected} tiles, found {found}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl Grid {
    /// Parse an ASCII grid with the default [`Legend`].
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        Self::parse_with(s, &Legend::default())
    }

    /// Parse an ASCII grid, one line per row.
    ///
    /// Leading and trailing blank lines are dropped; a line is blank when
    /// it holds only whitespace the legend does not map. Remaining lines are
    /// taken verbatim and must all have the same width.
    pub fn parse_with(s: &str, legend: &Legend) -> Result<Self, ParseError> {
        let is_blank = |line: &str| {
            line.chars()
                .all(|ch| ch.is_whitespace() && legend.tile(ch).is_none())
        };
        let mut lines: Vec<&str> = s.lines().skip_while(|l| is_blank(*l)).collect();
        while lines.last().is_some_and(|l| is_blank(*l)) {
            lines.pop();
        }

        let mut tiles = Vec::with_capacity(s.len());
        let mut width = 0;
        let mut height = 0;
        for (y, line) in lines.into_iter().enumerate() {
            let y = y as i32;
            let mut x = 0;
            for ch in line.chars() {
                let tile = legend.tile(ch).ok_or(ParseError::UnknownSymbol {
                    ch,
                    pos: Point::new(x, y),
                })?;
                tiles.push(tile);
                x += 1;
            }
            if y == 0 {
                width = x;
            } else if x != width {
                return Err(ParseError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found: x,
                });
            }
            height += 1;
        }
        Grid::from_parts(Range::new(0, 0, width, height), tiles)
    }
}
