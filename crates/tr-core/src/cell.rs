//! Integer cell coordinates and neighbour arithmetic.
//!
//! A `Cell` addresses one block of the host world.  It is `Copy + Hash` so
//! it can key visited-sets and world maps without ceremony.

use std::fmt;

use crate::Direction;

/// A world cell address.  `y` is the vertical axis.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The adjacent cell one step in `dir`.  `Direction::Here` returns `self`.
    #[inline]
    pub fn relative(self, dir: Direction) -> Cell {
        self.relative_n(dir, 1)
    }

    /// The cell `n` steps away in `dir`.
    pub fn relative_n(self, dir: Direction, n: i32) -> Cell {
        let (dx, dy, dz) = dir.offset();
        Cell {
            x: self.x + dx * n,
            y: self.y + dy * n,
            z: self.z + dz * n,
        }
    }

    #[inline]
    pub fn up(self) -> Cell {
        self.relative(Direction::Up)
    }

    #[inline]
    pub fn down(self) -> Cell {
        self.relative(Direction::Down)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
