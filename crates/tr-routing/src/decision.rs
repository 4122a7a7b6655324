//! Pure routing decisions: which way a vehicle should leave a junction and
//! which rail orientation sends it there.
//!
//! Neither function reads or writes the world.  [`JunctionRouter`] feeds
//! them a classified junction and performs the write.
//!
//! [`JunctionRouter`]: crate::JunctionRouter

use tr_core::{normalize_label, Direction, TrackOrientation};
use tr_junction::RuleLine;

/// Pick the exit direction for a vehicle bound for `destination`.
///
/// Rules are scanned in document order; the first rule labelled with the
/// destination or `default` whose direction is not the reverse of `travel`
/// wins.  With no usable rule the vehicle keeps going straight.
pub fn resolve_direction(destination: &str, rules: &[RuleLine], travel: Direction) -> Direction {
    let destination = normalize_label(destination);
    let reverse = travel.opposite();
    rules
        .iter()
        .filter(|rule| rule.applies_to(&destination))
        .map(|rule| rule.direction)
        .find(|&dir| dir != Direction::Here && Some(dir) != reverse)
        .unwrap_or(travel)
}

/// Rail orientation that turns a vehicle moving `travel` toward `target`.
///
/// | Case                              | Result                            |
/// |-----------------------------------|-----------------------------------|
/// | `target` is the open side         | `None`                            |
/// | `target == travel`                | straight rail along `travel`      |
/// | `target` reverses `travel`        | `None`                            |
/// | otherwise                         | corner `travel + opposite(target)` |
///
/// `None` means the junction must be left as it is.
pub fn compute_new_orientation(
    travel:    Direction,
    open_side: Option<Direction>,
    target:    Direction,
) -> Option<TrackOrientation> {
    if open_side == Some(target) {
        return None;
    }
    if target == travel {
        return TrackOrientation::straight(travel);
    }
    if Some(target) == travel.opposite() {
        return None;
    }
    let corner = travel.combine(target.opposite()?)?;
    TrackOrientation::corner(corner)
}
