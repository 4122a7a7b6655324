//! World access traits.
//!
//! # Read/write split
//!
//! Classification and routing decisions only ever see a [`WorldView`].
//! The one mutation the router performs, rewriting a junction rail's
//! orientation, goes through [`World::set_orientation_at`] and is issued at
//! most once per vehicle arrival.
//!
//! All reads are assumed synchronous and O(1); nothing here blocks.

use tr_core::{Cell, Material, TrackOrientation};

use crate::WorldResult;

/// Read-only world queries.
pub trait WorldView {
    /// What occupies `cell`.  Cells outside loaded data are
    /// [`Material::Void`].
    fn material_at(&self, cell: Cell) -> Material;

    /// Orientation of the rail at `cell`, `None` if it is not a rail.
    fn orientation_at(&self, cell: Cell) -> Option<TrackOrientation>;

    /// The four text lines of the sign at `cell`, `None` if it is not a sign.
    fn sign_lines_at(&self, cell: Cell) -> Option<[String; 4]>;

    /// `true` if `cell` holds a rail.
    fn is_rail(&self, cell: Cell) -> bool {
        self.material_at(cell).is_rail()
    }
}

/// A world the router may write rail orientations to.
pub trait World: WorldView {
    /// Rewrite the orientation of the rail at `cell`.
    ///
    /// # Errors
    ///
    /// [`WorldError::NotTrack`][crate::WorldError::NotTrack] if `cell` holds
    /// no rail; [`WorldError::Unloaded`][crate::WorldError::Unloaded] if it is
    /// outside loaded data.
    fn set_orientation_at(&mut self, cell: Cell, orientation: TrackOrientation) -> WorldResult<()>;
}

impl<T: WorldView + ?Sized> WorldView for &T {
    fn material_at(&self, cell: Cell) -> Material {
        (**self).material_at(cell)
    }

    fn orientation_at(&self, cell: Cell) -> Option<TrackOrientation> {
        (**self).orientation_at(cell)
    }

    fn sign_lines_at(&self, cell: Cell) -> Option<[String; 4]> {
        (**self).sign_lines_at(cell)
    }
}

impl<T: WorldView + ?Sized> WorldView for &mut T {
    fn material_at(&self, cell: Cell) -> Material {
        (**self).material_at(cell)
    }

    fn orientation_at(&self, cell: Cell) -> Option<TrackOrientation> {
        (**self).orientation_at(cell)
    }

    fn sign_lines_at(&self, cell: Cell) -> Option<[String; 4]> {
        (**self).sign_lines_at(cell)
    }
}

impl<T: World + ?Sized> World for &mut T {
    fn set_orientation_at(&mut self, cell: Cell, orientation: TrackOrientation) -> WorldResult<()> {
        (**self).set_orientation_at(cell, orientation)
    }
}
