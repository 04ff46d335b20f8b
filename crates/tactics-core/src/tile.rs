//! The [`Tile`] type — terrain attributes of a single grid cell.

/// Terrain attributes of one cell.
///
/// `cost` is paid when a unit *enters* the cell; leaving it is free.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub accessible: bool,
    pub cost: u32,
}

impl Tile {
    /// Accessible ground with unit movement cost.
    pub const FLOOR: Self = Self {
        accessible: true,
        cost: 1,
    };

    /// An impassable cell.
    pub const WALL: Self = Self {
        accessible: false,
        cost: 1,
    };

    /// Accessible ground with the given movement cost.
    #[inline]
    pub const fn floor(cost: u32) -> Self {
        Self {
            accessible: true,
            cost,
        }
    }

    /// Set the movement cost (builder).
    #[inline]
    pub const fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Set the accessibility flag (builder).
    #[inline]
    pub const fn with_accessible(mut self, accessible: bool) -> Self {
        self.accessible = accessible;
        self
    }
}

impl Default for Tile {
    #[inline]
    fn default() -> Self {
        Self::FLOOR
    }
}
