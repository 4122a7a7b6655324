//! Compass directions and the small algebra the router performs on them.
//!
//! # Axes
//!
//! Directions are expressed in the host world's axes:
//!
//! | Direction | dx | dy | dz |
//! |-----------|----|----|----|
//! | `North`   |  0 |  0 | -1 |
//! | `East`    | +1 |  0 |  0 |
//! | `South`   |  0 |  0 | +1 |
//! | `West`    | -1 |  0 |  0 |
//! | `Up`      |  0 | +1 |  0 |
//! | `Down`    |  0 | -1 |  0 |
//!
//! Ordinals combine the two adjacent cardinal offsets.  `Here` is the single
//! "no displacement" value.
//!
//! The host's axes are rotated 90° from the compass players read on signs:
//! the letter `N` written on a sign means the engine's `East`.  See
//! [`Direction::from_code`] and [`Direction::compass_name`].

use std::fmt;

/// A displacement between adjacent cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
    Up,
    Down,
    /// No movement.
    Here,
}

use Direction::*;

impl Direction {
    /// Cardinal directions in the order the junction scan visits them.
    pub const CARDINALS: [Direction; 4] = [North, East, West, South];

    /// Ordinal (diagonal) directions.
    pub const ORDINALS: [Direction; 4] = [NorthEast, SouthEast, NorthWest, SouthWest];

    /// The eight flat compass directions, cardinals first.
    pub const FLAT: [Direction; 8] = [
        North, South, East, West, NorthEast, NorthWest, SouthEast, SouthWest,
    ];

    #[inline]
    pub fn is_cardinal(self) -> bool {
        matches!(self, North | East | South | West)
    }

    #[inline]
    pub fn is_ordinal(self) -> bool {
        matches!(self, NorthEast | SouthEast | SouthWest | NorthWest)
    }

    /// `(dx, dy, dz)` cell offset for one step in this direction.
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            North     => (0, 0, -1),
            East      => (1, 0, 0),
            South     => (0, 0, 1),
            West      => (-1, 0, 0),
            NorthEast => (1, 0, -1),
            SouthEast => (1, 0, 1),
            SouthWest => (-1, 0, 1),
            NorthWest => (-1, 0, -1),
            Up        => (0, 1, 0),
            Down      => (0, -1, 0),
            Here      => (0, 0, 0),
        }
    }

    /// Reverse of a cardinal direction.  `None` for anything else.
    pub fn opposite(self) -> Option<Direction> {
        match self {
            North => Some(South),
            South => Some(North),
            East  => Some(West),
            West  => Some(East),
            _     => None,
        }
    }

    /// The ordinal direction bisecting two distinct, perpendicular cardinals
    /// (`North + East → NorthEast`).  `None` for equal, opposite, or
    /// non-cardinal inputs.
    pub fn combine(self, other: Direction) -> Option<Direction> {
        match (self, other) {
            (North, East) | (East, North) => Some(NorthEast),
            (North, West) | (West, North) => Some(NorthWest),
            (South, East) | (East, South) => Some(SouthEast),
            (South, West) | (West, South) => Some(SouthWest),
            _ => None,
        }
    }

    /// Turn 45° clockwise around the flat compass.
    pub fn rotate_cw(self) -> Option<Direction> {
        match self {
            North     => Some(NorthEast),
            NorthEast => Some(East),
            East      => Some(SouthEast),
            SouthEast => Some(South),
            South     => Some(SouthWest),
            SouthWest => Some(West),
            West      => Some(NorthWest),
            NorthWest => Some(North),
            Up | Down | Here => None,
        }
    }

    /// Turn 45° counter-clockwise around the flat compass.
    pub fn rotate_ccw(self) -> Option<Direction> {
        match self {
            North     => Some(NorthWest),
            NorthWest => Some(West),
            West      => Some(SouthWest),
            SouthWest => Some(South),
            South     => Some(SouthEast),
            SouthEast => Some(East),
            East      => Some(NorthEast),
            NorthEast => Some(North),
            Up | Down | Here => None,
        }
    }

    /// Map a sign direction code to a cardinal direction.
    ///
    /// Only the first character is significant and letters are
    /// case-insensitive.  Two tables are accepted:
    ///
    /// | Code | Engine direction |
    /// |------|------------------|
    /// | `N`  | `East`           |
    /// | `E`  | `South`          |
    /// | `S`  | `West`           |
    /// | `W`  | `North`          |
    /// | `0`  | `South`          |
    /// | `1`  | `West`           |
    /// | `2`  | `North`          |
    /// | `3`  | `East`           |
    pub fn from_code(code: &str) -> Option<Direction> {
        let c = code.chars().next()?;
        match c.to_ascii_uppercase() {
            'N' => Some(East),
            'E' => Some(South),
            'S' => Some(West),
            'W' => Some(North),
            '0' => Some(South),
            '1' => Some(West),
            '2' => Some(North),
            '3' => Some(East),
            _ => None,
        }
    }

    /// Whether a neighbouring rail whose orientation faces `self` joins a
    /// cell approached (or left) in direction `approach`: collinear,
    /// reversed, or a 45° bend.
    pub fn is_connected(self, approach: Direction) -> bool {
        self == approach
            || Some(self) == approach.opposite()
            || Some(self) == approach.rotate_cw()
            || Some(self) == approach.rotate_ccw()
    }

    /// Name as players read it on the compass (rotated 90° from the engine
    /// axes, matching [`from_code`][Self::from_code]).
    pub fn compass_name(self) -> &'static str {
        match self {
            East      => "North",
            South     => "East",
            West      => "South",
            North     => "West",
            NorthEast => "North-West",
            SouthEast => "North-East",
            SouthWest => "South-East",
            NorthWest => "South-West",
            Up        => "Up",
            Down      => "Down",
            Here      => "None",
        }
    }

    /// Engine-axis label, useful for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            North     => "north",
            East      => "east",
            South     => "south",
            West      => "west",
            NorthEast => "north_east",
            SouthEast => "south_east",
            SouthWest => "south_west",
            NorthWest => "north_west",
            Up        => "up",
            Down      => "down",
            Here      => "here",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
