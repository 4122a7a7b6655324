//! Cell materials and rail orientation.
//!
//! # Orientation model
//!
//! A rail faces one flat direction:
//!
//! - **straight** rails face a cardinal direction and run along its axis.
//!   Facing is canonicalised to `North` or `East` so the two spellings of
//!   the same physical rail compare equal.
//! - **corner** rails face an ordinal direction and join the two sides
//!   *opposite* its components: a `NorthWest` corner joins the south and east
//!   sides.
//! - **slope** rails face the cardinal direction in which they ascend.

use crate::Direction;

/// Coarse classification of what occupies a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Material {
    /// Empty space a search may fall through.
    #[default]
    Air,
    /// A rail piece; has a [`TrackOrientation`].
    Rail,
    /// A sign carrying four lines of text.
    Sign,
    /// Any other solid block.
    Solid,
    /// Outside loaded world data.
    Void,
}

impl Material {
    #[inline]
    pub fn is_rail(self) -> bool {
        matches!(self, Material::Rail)
    }
}

/// Physical orientation of a rail cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackOrientation {
    facing: Direction,
    slope:  bool,
}

impl TrackOrientation {
    /// Straight rail running north–south.
    pub const NORTH_SOUTH: TrackOrientation = TrackOrientation { facing: Direction::North, slope: false };

    /// Straight rail running east–west.
    pub const EAST_WEST: TrackOrientation = TrackOrientation { facing: Direction::East, slope: false };

    /// Straight rail along the axis of cardinal `dir`.
    pub fn straight(dir: Direction) -> Option<Self> {
        let facing = match dir {
            Direction::North | Direction::South => Direction::North,
            Direction::East | Direction::West => Direction::East,
            _ => return None,
        };
        Some(Self { facing, slope: false })
    }

    /// Corner rail facing ordinal `dir`.
    pub fn corner(dir: Direction) -> Option<Self> {
        dir.is_ordinal().then_some(Self { facing: dir, slope: false })
    }

    /// Slope ascending towards cardinal `dir`.
    pub fn slope(dir: Direction) -> Option<Self> {
        dir.is_cardinal().then_some(Self { facing: dir, slope: true })
    }

    #[inline]
    pub fn facing(self) -> Direction {
        self.facing
    }

    #[inline]
    pub fn is_slope(self) -> bool {
        self.slope
    }

    #[inline]
    pub fn is_corner(self) -> bool {
        self.facing.is_ordinal()
    }
}
