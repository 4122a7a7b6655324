//! Arrival handling: classify the rail a vehicle is about to enter and
//! rewrite it toward the vehicle's destination.

use log::{debug, warn};

use tr_core::{Cell, Direction, EntityId, RouterConfig, TrackOrientation};
use tr_junction::{Junction, JunctionModel};
use tr_world::World;

use crate::{
    compute_new_orientation, next_direction, resolve_direction, traveling_direction,
    DestinationStore, RoutingResult, Vehicle,
};

/// What a vehicle arrival did to the world.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RoutingOutcome {
    /// The vehicle is not about to enter a routed junction.
    NoJunction,
    /// The junction cannot send the vehicle toward `target` (off the open
    /// side, or back the way it came) and was left as it was.
    Refused { junction: Cell, target: Direction },
    /// The junction already pointed toward `target`.
    Unchanged { junction: Cell, target: Direction },
    /// The junction rail was rewritten.
    Switched {
        junction:    Cell,
        target:      Direction,
        orientation: TrackOrientation,
    },
}

impl RoutingOutcome {
    /// `true` if the world was written.
    pub fn is_switched(&self) -> bool {
        matches!(self, RoutingOutcome::Switched { .. })
    }
}

/// Turns vehicle movement into at most one junction write.
///
/// Holds no per-vehicle state: preferences live in the caller's
/// [`DestinationStore`] and every arrival re-reads the world.
#[derive(Clone, Debug)]
pub struct JunctionRouter {
    model: JunctionModel,
}

impl JunctionRouter {
    pub fn new(config: &RouterConfig) -> Self {
        Self { model: JunctionModel::new(config) }
    }

    /// Handle `vehicle` moving from `from` into `to`.
    ///
    /// Predicts the cell the vehicle enters next; if that cell is a routed
    /// junction it is set for the vehicle's destination.
    ///
    /// # Errors
    ///
    /// Propagates a failed world write as [`RoutingError::World`].
    ///
    /// [`RoutingError::World`]: crate::RoutingError::World
    pub fn on_vehicle_moved<W: World>(
        &self,
        world:   &mut W,
        store:   &DestinationStore,
        vehicle: &Vehicle,
        from:    Cell,
        to:      Cell,
    ) -> RoutingResult<RoutingOutcome> {
        let Some(traveling) = traveling_direction(from, to) else {
            return Ok(RoutingOutcome::NoJunction);
        };
        let Some(next) = next_direction(&*world, to, traveling) else {
            return Ok(RoutingOutcome::NoJunction);
        };
        let Some(junction) = self.model.classify(&*world, to.relative(next)) else {
            return Ok(RoutingOutcome::NoJunction);
        };
        self.update_junction(world, &junction, next, vehicle.destination(store))
    }

    /// Set `junction` for a vehicle entering it moving `traveling` and bound
    /// for `destination`.
    pub fn update_junction<W: World>(
        &self,
        world:       &mut W,
        junction:    &Junction,
        traveling:   Direction,
        destination: &str,
    ) -> RoutingResult<RoutingOutcome> {
        let cell = junction.cell();
        let target = resolve_direction(destination, junction.rules(), traveling);

        let Some(orientation) = compute_new_orientation(traveling, junction.open_side(), target)
        else {
            debug!("junction {cell}: cannot route {traveling} -> {target} for '{destination}', left as is");
            return Ok(RoutingOutcome::Refused { junction: cell, target });
        };

        if world.orientation_at(cell) == Some(orientation) {
            return Ok(RoutingOutcome::Unchanged { junction: cell, target });
        }

        if let Err(e) = world.set_orientation_at(cell, orientation) {
            warn!("junction {cell}: orientation write failed: {e}");
            return Err(e.into());
        }
        debug!(
            "junction {cell}: '{destination}' {traveling} -> {target}, rail now {}",
            orientation.facing()
        );
        Ok(RoutingOutcome::Switched { junction: cell, target, orientation })
    }

    /// A rider left a vehicle; their preference does not outlive the ride.
    pub fn on_rider_exit(&self, store: &mut DestinationStore, rider: EntityId) -> bool {
        let cleared = store.clear(rider);
        if cleared {
            debug!("{rider} left vehicle, destination cleared");
        }
        cleared
    }
}
