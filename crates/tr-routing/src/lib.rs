//! `tr-routing`: sending vehicles toward their destinations.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`decision`] | `resolve_direction`, `compute_new_orientation` (pure)           |
//! | [`travel`]   | `traveling_direction`, `next_direction`, `check_turn`           |
//! | [`store`]    | `DestinationStore`, `destination_from_sign`                     |
//! | [`vehicle`]  | `Vehicle`, `VehicleKind` and their routing label                |
//! | [`engine`]   | `JunctionRouter`: arrival → classification → single write      |
//! | [`error`]    | `RoutingError`, `RoutingResult<T>`                              |
//!
//! # Arrival flow
//!
//! 1. The host reports a vehicle moving from one cell into the next.
//! 2. `traveling_direction` and `next_direction` predict the cell after that.
//! 3. `JunctionModel::classify` decides whether it is a routed junction.
//! 4. The vehicle's label picks a rule (`resolve_direction`), which picks an
//!    orientation (`compute_new_orientation`).
//! 5. The orientation is written once, unless it is already in place.

pub mod decision;
pub mod engine;
pub mod error;
pub mod store;
pub mod travel;
pub mod vehicle;


pub use decision::{compute_new_orientation, resolve_direction};
pub use engine::{JunctionRouter, RoutingOutcome};
pub use error::{RoutingError, RoutingResult};
pub use store::{destination_from_sign, DestinationStore};
pub use travel::{check_turn, next_direction, traveling_direction};
pub use vehicle::{Vehicle, VehicleKind};
