//! Vehicles and the destination label they route by.

use tr_core::text::{CHEST_LABEL, DEFAULT_LABEL, EMPTY_LABEL, ENGINE_LABEL};
use tr_core::EntityId;

use crate::DestinationStore;

/// What kind of vehicle is moving, resolved once by the host adapter.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleKind {
    /// Carrying a rider; the rider's preference decides.
    Ridden { rider: EntityId },
    /// Unridden storage vehicle.
    Storage,
    /// Unridden self-propelled vehicle.
    Powered,
    /// Any other unridden vehicle.
    Plain,
}

/// A vehicle on the track.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id:   EntityId,
    pub kind: VehicleKind,
}

impl Vehicle {
    pub fn new(id: EntityId, kind: VehicleKind) -> Self {
        Self { id, kind }
    }

    /// The label this vehicle is routed by.
    ///
    /// | Vehicle                           | Label                     |
    /// |-----------------------------------|---------------------------|
    /// | ridden                            | rider's preference, else `default` |
    /// | unridden, with a preference       | the vehicle's preference  |
    /// | unridden storage / powered / other | `chest` / `engine` / `empty` |
    pub fn destination<'a>(&self, store: &'a DestinationStore) -> &'a str {
        match self.kind {
            VehicleKind::Ridden { rider } => store.get(rider).unwrap_or(DEFAULT_LABEL),
            kind => store.get(self.id).unwrap_or(match kind {
                VehicleKind::Storage => CHEST_LABEL,
                VehicleKind::Powered => ENGINE_LABEL,
                _ => EMPTY_LABEL,
            }),
        }
    }
}
