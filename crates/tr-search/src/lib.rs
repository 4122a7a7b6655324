//! `tr-search`: finding the destinations reachable from a point on the track.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`search`]     | `RailSearch` state machine, `Slice`, `DirectionReport`       |
//! | [`wake_queue`] | `WakeQueue`: `BTreeMap<Tick, Vec<SearchId>>`                |
//! | [`runner`]     | `SearchRunner`: starts, resumes and abandons searches       |
//! | [`observer`]   | `SearchObserver` trait, `NoopObserver`, `MessageLog`         |
//!
//! # Cooperative scheduling
//!
//! A search walks at most `cells_per_slice` rail cells per slice, then
//! hands control back to the host.  The runner resumes it
//! `slice_delay_ticks` later.  Search state lives in the `RailSearch` value
//! between slices; nothing is kept on the stack.

pub mod observer;
pub mod runner;
pub mod search;
pub mod wake_queue;

#[cfg(test)]
mod tests;

pub use observer::{MessageLog, NoopObserver, SearchObserver};
pub use runner::SearchRunner;
pub use search::{DirectionReport, RailSearch, SearchStatus, Slice};
pub use wake_queue::WakeQueue;
