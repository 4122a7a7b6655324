//! The demo track layout.
//!
//! ```text
//!          z
//!   -12    |
//!          |
//!   -10    |[s]            s = rule sign (farm:1, town:3)
//!    -9 ===B===            4-way junction
//!          |
//!    -4  [s]A====          3-way junction, open side west
//!          |               (mine:3, default:2)
//!     0    *   [d]         * = station, d = destination sign "Farm"
//! ```

use tr_core::{Cell, Direction};
use tr_world::{GridWorld, GridWorldBuilder};

pub const STATION:   Cell = Cell::new(0, 0, 0);
pub const FORK:      Cell = Cell::new(0, 0, -4);
pub const CROSSING:  Cell = Cell::new(0, 0, -9);
pub const DEST_SIGN: Cell = Cell::new(2, 0, 1);

pub fn build_layout() -> GridWorld {
    GridWorldBuilder::new()
        .ground(0)
        // Main line, station northward.
        .rail_line(STATION, Direction::North, 13)
        // Mine branch off the fork.
        .rail_line(FORK.relative(Direction::East), Direction::East, 5)
        .sign(FORK.relative(Direction::West), &["§1[junction]", "mine:3", "default:2"])
        // Crossing branches.
        .rail_line(CROSSING.relative(Direction::East), Direction::East, 5)
        .rail_line(CROSSING.relative(Direction::West), Direction::West, 5)
        .sign(CROSSING.relative(Direction::NorthEast), &["[junction]", "farm:1", "town:3"])
        .sign(DEST_SIGN, &["[destination]", "Farm"])
        .build()
}
