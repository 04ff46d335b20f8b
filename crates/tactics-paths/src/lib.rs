//! Path and range search for tactics games on 2D grids.
//!
//! Two searches are provided, both pure functions of the terrain and the
//! request:
//!
//! - **A\*** shortest path between two cells ([`PathFinder`])
//! - **Movement range** flood fill splitting cells into walkable and
//!   attackable sets ([`RangeExplorer`], [`explore`])
//!
//! Both read the battlefield through the [`Terrain`] trait, which
//! [`tactics_core::Grid`] implements.
//!
//! ```
//! use tactics_core::{Grid, Point};
//! use tactics_paths::{PathFinder, explore};
//!
//! let grid = Grid::parse("...\n.#.\n...").unwrap();
//! let route = PathFinder::new(&grid).find_path(Point::new(0, 0), Point::new(2, 2));
//! assert_eq!(route.map(|r| r.len()), Some(5));
//!
//! let area = explore(&grid, Point::new(0, 0), 1);
//! assert!(area.is_walkable(Point::new(1, 0)));
//! assert!(area.is_attackable(Point::new(1, 1)));
//! ```

mod astar;
mod distance;
mod path;
mod range;
mod traits;
mod visited;

pub use astar::PathFinder;
pub use distance::{euclidean, manhattan};
pub use path::{Path, PathQueue};
pub use range::{RangeArea, RangeExplorer, Selection, explore};
pub use traits::Terrain;
pub use visited::PathNode;
