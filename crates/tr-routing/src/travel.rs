//! Where a vehicle is heading, and where the rail under it will send it.

use tr_core::{Cell, Direction, TrackOrientation};
use tr_world::WorldView;

/// Exit direction of a vehicle moving `traveling` over a rail with
/// `orientation`.
///
/// Corners turn a vehicle entering from one of their two open sides.  A
/// vehicle entering a corner from a closed side, or crossing a straight
/// rail, keeps its direction.
///
/// ```text
/// NorthEast: North → West,  East → South
/// NorthWest: North → East,  West → South
/// SouthEast: South → West,  East → North
/// SouthWest: South → East,  West → North
/// ```
pub fn check_turn(traveling: Direction, orientation: TrackOrientation) -> Direction {
    use Direction::*;
    match (orientation.facing(), traveling) {
        (NorthEast, North) => West,
        (NorthEast, East)  => South,
        (NorthWest, North) => East,
        (NorthWest, West)  => South,
        (SouthEast, South) => West,
        (SouthEast, East)  => North,
        (SouthWest, South) => East,
        (SouthWest, West)  => North,
        _ => traveling,
    }
}

/// Direction of a single-cell move from `from` to `to`.
///
/// Horizontal displacement wins over vertical, so a vehicle climbing a
/// slope northward is moving `North`.  `None` if the cell did not change.
pub fn traveling_direction(from: Cell, to: Cell) -> Option<Direction> {
    let dx = (to.x - from.x).signum();
    let dy = (to.y - from.y).signum();
    let dz = (to.z - from.z).signum();

    if (dx, dz) != (0, 0) {
        return Direction::FLAT
            .into_iter()
            .find(|d| d.offset() == (dx, 0, dz));
    }
    match dy {
        1 => Some(Direction::Up),
        -1 => Some(Direction::Down),
        _ => None,
    }
}

/// Predict the direction a vehicle at `to`, moving `traveling`, will leave
/// the cell in.
///
/// - `Up`: along the facing of the rail at `to` (a vehicle rising onto a
///   slope continues up it).
/// - `Down`: away from the facing of the rail at `to`; still `Down` if
///   there is no rail to land on.
/// - cardinal: [`check_turn`] on the rail at `to`, or straight on.
/// - anything else: no prediction.
pub fn next_direction<W: WorldView>(world: &W, to: Cell, traveling: Direction) -> Option<Direction> {
    let orientation = world.orientation_at(to);
    match traveling {
        Direction::Up => orientation.map(TrackOrientation::facing),
        Direction::Down => match orientation {
            Some(o) => o.facing().opposite(),
            None => Some(Direction::Down),
        },
        d if d.is_cardinal() => Some(orientation.map_or(d, |o| check_turn(d, o))),
        _ => None,
    }
}
