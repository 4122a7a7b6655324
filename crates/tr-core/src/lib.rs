//! `tr-core`: foundational types for the `track_router` framework.
//!
//! This crate is a dependency of every other `tr-*` crate.  It has no
//! `tr-*` dependencies and only `thiserror` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`direction`] | `Direction` and its algebra, sign direction codes       |
//! | [`cell`]      | `Cell` coordinates                                      |
//! | [`track`]     | `Material`, `TrackOrientation`                          |
//! | [`ids`]       | `EntityId`, `SearchId`                                  |
//! | [`time`]      | `Tick`                                                  |
//! | [`text`]      | formatting stripping, label normalisation, reserved labels |
//! | [`config`]    | `RouterConfig`                                          |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod text;
pub mod time;
pub mod track;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::RouterConfig;
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use ids::{EntityId, SearchId};
pub use text::{normalize_label, strip_formatting, DEFAULT_LABEL};
pub use time::Tick;
pub use track::{Material, TrackOrientation};
