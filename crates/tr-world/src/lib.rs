//! `tr-world`: the router's view of the host world.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                     |
//! |-----------|--------------------------------------------------------------|
//! | [`world`] | `WorldView` (reads), `World` (the single write)              |
//! | [`grid`]  | `GridWorld` (sparse in-memory world), `GridWorldBuilder`     |
//! | [`error`] | `WorldError`, `WorldResult<T>`                               |
//!
//! Routing code is generic over `WorldView`/`World` so a host adapter can
//! wrap its own block storage.  `GridWorld` backs the tests and demos.

pub mod error;
pub mod grid;
pub mod world;

#[cfg(test)]
mod tests;

pub use error::{WorldError, WorldResult};
pub use grid::{Block, GridWorld, GridWorldBuilder, SignText};
pub use world::{World, WorldView};
